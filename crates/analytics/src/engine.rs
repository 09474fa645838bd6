use crate::error::ElasticityError;
use crate::report::{ElasticityReport, ElasticityResult};
use crate::validator::validate;
use core_types::{Classification, Observation, ObservationPair, SelectionPolicy};

/// Calculates the price elasticity of demand with the default `FirstAndLast` policy.
///
/// This is the entry point for callers that do not need to choose a policy.
pub fn calculate_elasticity(observations: &[Observation]) -> ElasticityResult {
    ElasticityEngine::new().calculate(observations)
}

/// A stateless calculator for the midpoint (arc) price elasticity of demand.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElasticityEngine {
    policy: SelectionPolicy,
}

impl ElasticityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// The main entry point for calculating an elasticity.
    ///
    /// # Arguments
    ///
    /// * `observations` - The ordered series of (price, quantity) observations.
    ///
    /// # Returns
    ///
    /// Always a fully-formed `ElasticityResult`. Malformed input produces
    /// `ElasticityResult::Invalid` rather than an error.
    pub fn calculate(&self, observations: &[Observation]) -> ElasticityResult {
        let series = match validate(observations) {
            Ok(series) => series,
            Err(errors) => {
                tracing::warn!(
                    observations = observations.len(),
                    error = %errors,
                    "Rejected observation series."
                );
                return ElasticityResult::Invalid {
                    error: errors.into(),
                    observations_used: None,
                };
            }
        };

        let pair = series.select(self.policy);
        tracing::debug!(
            policy = ?self.policy,
            series_len = series.len(),
            start = ?pair.start,
            end = ?pair.end,
            "Selected observations for elasticity."
        );

        let result = midpoint_elasticity(pair);
        if let Some(error) = result.error() {
            tracing::warn!(%error, "Elasticity calculation resolved to invalid input.");
        }
        result
    }
}

/// Applies the midpoint formula to a pair of observations.
///
/// The zero-delta and zero-average branches are checked in a fixed order before
/// any generic division, so no 0/0 ever reaches the final ratio.
fn midpoint_elasticity(pair: ObservationPair) -> ElasticityResult {
    let ObservationPair { start, end } = pair;

    let delta_q = end.quantity - start.quantity;
    let delta_p = end.price - start.price;
    // Halve before adding so two large finite values cannot overflow to infinity.
    let avg_q = end.quantity / 2.0 + start.quantity / 2.0;
    let avg_p = end.price / 2.0 + start.price / 2.0;

    tracing::debug!(delta_q, delta_p, avg_q, avg_p, "Midpoint inputs.");

    if delta_p == 0.0 && delta_q == 0.0 {
        return ElasticityResult::Invalid {
            error: ElasticityError::NoChange,
            observations_used: Some(pair),
        };
    }

    if delta_p == 0.0 {
        // Positive by construction, not derived from a signed division.
        return ElasticityReport {
            elasticity: f64::INFINITY,
            classification: Classification::PerfectlyElastic,
            percentage_change_quantity: abs_fraction(delta_q, avg_q),
            percentage_change_price: 0.0,
            observations_used: pair,
        }
        .into();
    }

    if delta_q == 0.0 {
        return ElasticityReport {
            elasticity: 0.0,
            classification: Classification::PerfectlyInelastic,
            percentage_change_quantity: 0.0,
            percentage_change_price: abs_fraction(delta_p, avg_p),
            observations_used: pair,
        }
        .into();
    }

    if avg_q == 0.0 || avg_p == 0.0 {
        return ElasticityResult::Invalid {
            error: ElasticityError::DegenerateAverage,
            observations_used: Some(pair),
        };
    }

    let pct_q = delta_q / avg_q;
    let pct_p = delta_p / avg_p;
    let elasticity = pct_q / pct_p;
    let classification = Classification::from_magnitude(elasticity.abs());

    if classification == Classification::InvalidInput {
        // Validated input never lands here; NaN in the raw pair does.
        return ElasticityResult::Invalid {
            error: ElasticityError::Unclassifiable,
            observations_used: Some(pair),
        };
    }

    ElasticityReport {
        elasticity,
        classification,
        percentage_change_quantity: pct_q.abs(),
        percentage_change_price: pct_p.abs(),
        observations_used: pair,
    }
    .into()
}

/// `|delta / avg|`, or infinity when the average is zero.
fn abs_fraction(delta: f64, avg: f64) -> f64 {
    if avg != 0.0 {
        (delta / avg).abs()
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(price: f64, quantity: f64) -> Observation {
        Observation::new(price, quantity)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_elastic_demand() {
        let result = calculate_elasticity(&[obs(10.0, 100.0), obs(12.0, 80.0)]);
        let report = result.report().expect("valid result");

        assert_close(report.elasticity, (-20.0 / 90.0) / (2.0 / 11.0));
        assert_eq!(report.classification, Classification::Elastic);
        assert_close(report.percentage_change_quantity, 20.0 / 90.0);
        assert_close(report.percentage_change_price, 2.0 / 11.0);
    }

    #[test]
    fn test_inelastic_demand() {
        let result = calculate_elasticity(&[obs(10.0, 100.0), obs(20.0, 90.0)]);
        assert_eq!(result.classification(), Classification::Inelastic);
        assert!(result.elasticity() < 0.0);
    }

    #[test]
    fn test_unit_elastic_demand() {
        // Quantity and price move by the same midpoint fraction: 20/30 each way.
        let result = calculate_elasticity(&[obs(20.0, 40.0), obs(40.0, 20.0)]);
        assert_eq!(result.elasticity(), -1.0);
        assert_eq!(result.classification(), Classification::UnitElastic);
    }

    #[test]
    fn test_constant_price_is_perfectly_elastic() {
        let result = calculate_elasticity(&[obs(10.0, 100.0), obs(10.0, 80.0)]);
        let report = result.report().expect("valid result");
        assert_eq!(report.elasticity, f64::INFINITY);
        assert_eq!(report.classification, Classification::PerfectlyElastic);
        assert_eq!(report.percentage_change_price, 0.0);
        assert_close(report.percentage_change_quantity, 20.0 / 90.0);
    }

    #[test]
    fn test_constant_quantity_is_perfectly_inelastic() {
        let result = calculate_elasticity(&[obs(10.0, 100.0), obs(15.0, 100.0)]);
        let report = result.report().expect("valid result");
        assert_eq!(report.elasticity, 0.0);
        assert_eq!(report.classification, Classification::PerfectlyInelastic);
        assert_eq!(report.percentage_change_quantity, 0.0);
        assert_close(report.percentage_change_price, 5.0 / 12.5);
    }

    #[test]
    fn test_no_change_keeps_observations_used() {
        let points = [obs(10.0, 100.0), obs(10.0, 100.0)];
        let result = calculate_elasticity(&points);
        assert_eq!(result.error(), Some(&ElasticityError::NoChange));
        assert_eq!(
            result.observations_used(),
            Some(&ObservationPair::new(points[0], points[1]))
        );
    }

    #[test]
    fn test_validation_failure_omits_observations_used() {
        let result = calculate_elasticity(&[obs(-5.0, 100.0), obs(10.0, 80.0)]);
        assert_eq!(result.classification(), Classification::InvalidInput);
        assert!(result.elasticity().is_nan());
        assert!(result.observations_used().is_none());
        assert!(matches!(result.error(), Some(ElasticityError::Validation(_))));
    }

    #[test]
    fn test_degenerate_average_is_guarded() {
        // Unreachable through validated input; exercised on the raw arithmetic.
        let pair = ObservationPair::new(obs(-10.0, 100.0), obs(10.0, 120.0));
        let result = midpoint_elasticity(pair);
        assert_eq!(result.error(), Some(&ElasticityError::DegenerateAverage));
        assert_eq!(result.observations_used(), Some(&pair));
    }

    #[test]
    fn test_large_finite_values_do_not_overflow_the_average() {
        let result = calculate_elasticity(&[obs(1.7e308, 1.7e308), obs(1.79e308, 1.79e308)]);
        assert!(result.is_valid());
        assert_eq!(result.elasticity(), 1.0);
        assert_eq!(result.classification(), Classification::UnitElastic);

        let result = calculate_elasticity(&[obs(10.0, 1.7e308), obs(12.0, 1.79e308)]);
        let report = result.report().expect("valid result");
        assert_eq!(report.classification, Classification::Inelastic);
        assert_close(report.percentage_change_quantity, 0.09 / 1.745);
    }

    #[test]
    fn test_unclassifiable_elasticity_is_invalid() {
        let pair = ObservationPair::new(obs(f64::NAN, 100.0), obs(10.0, 120.0));
        let result = midpoint_elasticity(pair);
        assert!(!result.is_valid());
        assert_eq!(result.error(), Some(&ElasticityError::Unclassifiable));
        assert!(result.observations_used().is_some());
    }

    #[test]
    fn test_zero_average_in_constant_branches_yields_infinite_change() {
        let result = midpoint_elasticity(ObservationPair::new(obs(10.0, -5.0), obs(10.0, 5.0)));
        assert_eq!(result.percentage_change_quantity(), Some(f64::INFINITY));
        assert_eq!(result.classification(), Classification::PerfectlyElastic);
    }

    #[test]
    fn test_first_two_policy_ignores_later_points() {
        let points = [obs(10.0, 100.0), obs(12.0, 80.0), obs(50.0, 1.0)];
        let engine = ElasticityEngine::with_policy(SelectionPolicy::FirstTwo);
        assert_eq!(engine.policy(), SelectionPolicy::FirstTwo);
        assert_eq!(
            engine.calculate(&points),
            calculate_elasticity(&points[..2])
        );
    }
}
