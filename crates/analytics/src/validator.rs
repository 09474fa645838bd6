use crate::error::{ValidationErrors, ValidationIssue};
use core_types::{Observation, ObservationPair, SelectionPolicy};

/// A series that passed validation: at least two observations, every price and
/// quantity a finite number greater than zero.
///
/// Only [`validate`] can build one, so holding an `ObservationSeries` is proof of
/// those invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationSeries<'a> {
    observations: &'a [Observation],
}

impl<'a> ObservationSeries<'a> {
    pub fn observations(&self) -> &'a [Observation] {
        self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false for a validated series.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Observation {
        self.observations[0]
    }

    pub fn last(&self) -> Observation {
        self.observations[self.observations.len() - 1]
    }

    /// Picks the start and end observations according to `policy`.
    pub fn select(&self, policy: SelectionPolicy) -> ObservationPair {
        match policy {
            SelectionPolicy::FirstAndLast => ObservationPair::new(self.first(), self.last()),
            SelectionPolicy::FirstTwo => ObservationPair::new(self.observations[0], self.observations[1]),
        }
    }
}

/// Validates a series of observations before any arithmetic runs.
///
/// All issues are collected rather than stopping at the first one, so a caller can
/// show the user everything that needs fixing at once.
pub fn validate(observations: &[Observation]) -> Result<ObservationSeries<'_>, ValidationErrors> {
    let mut issues = Vec::new();

    if observations.len() < 2 {
        issues.push(ValidationIssue::InsufficientData {
            found: observations.len(),
        });
    }

    for (index, observation) in observations.iter().enumerate() {
        if !is_positive_number(observation.price) {
            issues.push(ValidationIssue::NonPositivePrice {
                index,
                value: observation.price,
            });
        }
        if !is_positive_number(observation.quantity) {
            issues.push(ValidationIssue::NonPositiveQuantity {
                index,
                value: observation.quantity,
            });
        }
    }

    match ValidationErrors::from_issues(issues) {
        Some(errors) => Err(errors),
        None => Ok(ObservationSeries { observations }),
    }
}

/// NaN and infinities fail this check along with zero and negatives.
fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(price: f64, quantity: f64) -> Observation {
        Observation::new(price, quantity)
    }

    #[test]
    fn test_accepts_two_positive_observations() {
        let points = [obs(10.0, 100.0), obs(12.0, 80.0)];
        let series = validate(&points).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.observations(), &points);
    }

    #[test]
    fn test_rejects_fewer_than_two() {
        let err = validate(&[obs(10.0, 100.0)]).unwrap_err();
        assert_eq!(err.issues(), &[ValidationIssue::InsufficientData { found: 1 }]);
        assert_eq!(err.to_string(), "At least two data points are required for calculation");

        let err = validate(&[]).unwrap_err();
        assert_eq!(err.issues(), &[ValidationIssue::InsufficientData { found: 0 }]);
    }

    #[test]
    fn test_collects_every_issue_in_order() {
        let points = [obs(-5.0, 100.0), obs(10.0, 0.0), obs(f64::NAN, f64::INFINITY)];
        let err = validate(&points).unwrap_err();
        assert_eq!(err.issues().len(), 4);
        assert!(matches!(err.issues()[0], ValidationIssue::NonPositivePrice { index: 0, .. }));
        assert!(matches!(err.issues()[1], ValidationIssue::NonPositiveQuantity { index: 1, .. }));
        assert!(matches!(err.issues()[2], ValidationIssue::NonPositivePrice { index: 2, .. }));
        assert!(matches!(err.issues()[3], ValidationIssue::NonPositiveQuantity { index: 2, .. }));
        assert_eq!(
            err.to_string(),
            "Price must be positive (observation 1), Quantity must be positive (observation 2), \
             Price must be positive (observation 3), Quantity must be positive (observation 3)"
        );
    }

    #[test]
    fn test_short_and_non_positive_are_both_reported() {
        let err = validate(&[obs(0.0, 10.0)]).unwrap_err();
        assert_eq!(err.issues().len(), 2);
        assert!(matches!(err.issues()[0], ValidationIssue::InsufficientData { found: 1 }));
    }

    #[test]
    fn test_select_by_policy() {
        let points = [obs(10.0, 100.0), obs(11.0, 90.0), obs(12.0, 80.0)];
        let series = validate(&points).unwrap();

        let pair = series.select(SelectionPolicy::FirstAndLast);
        assert_eq!(pair.start, points[0]);
        assert_eq!(pair.end, points[2]);

        let pair = series.select(SelectionPolicy::FirstTwo);
        assert_eq!(pair.start, points[0]);
        assert_eq!(pair.end, points[1]);
    }
}
