use serde::{Deserialize, Serialize};
use std::fmt;

/// The magnitude regime of a price elasticity of demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Elastic,
    Inelastic,
    #[serde(rename = "Unit Elastic")]
    UnitElastic,
    #[serde(rename = "Perfectly Inelastic")]
    PerfectlyInelastic,
    #[serde(rename = "Perfectly Elastic")]
    PerfectlyElastic,
    #[serde(rename = "Invalid Input")]
    InvalidInput,
}

impl Classification {
    /// Every classification, in the order they are presented to users.
    pub const ALL: [Classification; 6] = [
        Classification::Elastic,
        Classification::Inelastic,
        Classification::UnitElastic,
        Classification::PerfectlyInelastic,
        Classification::PerfectlyElastic,
        Classification::InvalidInput,
    ];

    /// Classifies the absolute value of an elasticity.
    ///
    /// The checks run in a fixed order: `> 1`, strictly between 0 and 1, exactly 1,
    /// exactly 0, infinite. Anything that falls through (NaN, or a negative number
    /// passed by mistake) is `InvalidInput`.
    ///
    /// An infinite magnitude is caught by `> 1` and classifies as `Elastic`; the
    /// infinite arm is kept so the table reads the same as the published one.
    pub fn from_magnitude(abs_elasticity: f64) -> Self {
        if abs_elasticity > 1.0 {
            Classification::Elastic
        } else if abs_elasticity < 1.0 && abs_elasticity > 0.0 {
            Classification::Inelastic
        } else if abs_elasticity == 1.0 {
            Classification::UnitElastic
        } else if abs_elasticity == 0.0 {
            Classification::PerfectlyInelastic
        } else if abs_elasticity.is_infinite() {
            Classification::PerfectlyElastic
        } else {
            Classification::InvalidInput
        }
    }

    /// The human-readable label, e.g. "Unit Elastic".
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Elastic => "Elastic",
            Classification::Inelastic => "Inelastic",
            Classification::UnitElastic => "Unit Elastic",
            Classification::PerfectlyInelastic => "Perfectly Inelastic",
            Classification::PerfectlyElastic => "Perfectly Elastic",
            Classification::InvalidInput => "Invalid Input",
        }
    }

    /// What the regime means for pricing decisions.
    pub fn description(&self) -> &'static str {
        match self {
            Classification::Elastic => {
                "Demand shows significant sensitivity to price changes. Consider strategic price decreases to potentially boost revenue."
            }
            Classification::Inelastic => {
                "Demand demonstrates low sensitivity to price changes. Price increases might enhance total revenue with minimal impact on quantity sold."
            }
            Classification::UnitElastic => {
                "Quantity demanded changes proportionally to price changes. Revenue is likely optimized at the current pricing."
            }
            Classification::PerfectlyInelastic => {
                "Quantity demanded remains constant irrespective of price adjustments (theoretical, e.g., life-saving medication)."
            }
            Classification::PerfectlyElastic => {
                "Consumers demand unlimited quantity at a specific price, but none above it (theoretical market condition)."
            }
            Classification::InvalidInput => {
                "Calculation requires valid inputs. Ensure prices/quantities are positive and represent a change between the first and last points."
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which two observations of a series feed the midpoint formula.
///
/// Points outside the selected pair are accepted but ignored by the calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The first and the last observation of the series.
    #[default]
    FirstAndLast,
    /// The first two observations of the series.
    FirstTwo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_magnitude_boundaries() {
        assert_eq!(Classification::from_magnitude(1.2222), Classification::Elastic);
        assert_eq!(Classification::from_magnitude(0.5), Classification::Inelastic);
        assert_eq!(Classification::from_magnitude(1.0), Classification::UnitElastic);
        assert_eq!(Classification::from_magnitude(0.0), Classification::PerfectlyInelastic);
        assert_eq!(Classification::from_magnitude(f64::NAN), Classification::InvalidInput);
        assert_eq!(Classification::from_magnitude(-0.5), Classification::InvalidInput);
    }

    #[test]
    fn test_infinite_magnitude_is_caught_by_the_greater_than_one_check() {
        // `> 1` is evaluated first, so an infinite magnitude never reaches the infinite arm.
        assert_eq!(Classification::from_magnitude(f64::INFINITY), Classification::Elastic);
    }

    #[test]
    fn test_labels_and_serde_agree() {
        for classification in Classification::ALL {
            let json = serde_json::to_string(&classification).unwrap();
            assert_eq!(json, format!("\"{}\"", classification.label()));
            let back: Classification = serde_json::from_str(&json).unwrap();
            assert_eq!(back, classification);
        }
    }

    #[test]
    fn test_selection_policy_defaults_to_first_and_last() {
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::FirstAndLast);
        let policy: SelectionPolicy = serde_json::from_str("\"first_two\"").unwrap();
        assert_eq!(policy, SelectionPolicy::FirstTwo);
    }
}
