use crate::error::ElasticityError;
use core_types::{Classification, ObservationPair};
use serde::{Serialize, Serializer};

/// The figures produced by a successful calculation.
///
/// `elasticity` may be `+Infinity` (price did not change) but is never NaN.
/// Percentage changes are absolute fractions measured against the midpoint,
/// so `0.2` means a 20% change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticityReport {
    pub elasticity: f64,
    pub classification: Classification,
    pub percentage_change_quantity: f64,
    pub percentage_change_price: f64,
    pub observations_used: ObservationPair,
}

/// The outcome of one elasticity calculation.
///
/// Created fresh by every call and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ElasticityResult {
    Valid(ElasticityReport),
    /// `observations_used` is `None` only when the input failed validation.
    Invalid {
        error: ElasticityError,
        observations_used: Option<ObservationPair>,
    },
}

impl ElasticityResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ElasticityResult::Valid(_))
    }

    pub fn report(&self) -> Option<&ElasticityReport> {
        match self {
            ElasticityResult::Valid(report) => Some(report),
            ElasticityResult::Invalid { .. } => None,
        }
    }

    /// NaN for an invalid result, never zero.
    pub fn elasticity(&self) -> f64 {
        match self {
            ElasticityResult::Valid(report) => report.elasticity,
            ElasticityResult::Invalid { .. } => f64::NAN,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            ElasticityResult::Valid(report) => report.classification,
            ElasticityResult::Invalid { .. } => Classification::InvalidInput,
        }
    }

    pub fn percentage_change_quantity(&self) -> Option<f64> {
        self.report().map(|r| r.percentage_change_quantity)
    }

    pub fn percentage_change_price(&self) -> Option<f64> {
        self.report().map(|r| r.percentage_change_price)
    }

    pub fn error(&self) -> Option<&ElasticityError> {
        match self {
            ElasticityResult::Valid(_) => None,
            ElasticityResult::Invalid { error, .. } => Some(error),
        }
    }

    pub fn observations_used(&self) -> Option<&ObservationPair> {
        match self {
            ElasticityResult::Valid(report) => Some(&report.observations_used),
            ElasticityResult::Invalid {
                observations_used, ..
            } => observations_used.as_ref(),
        }
    }
}

impl From<ElasticityReport> for ElasticityResult {
    fn from(report: ElasticityReport) -> Self {
        ElasticityResult::Valid(report)
    }
}

/// The flat record shape callers render from. Absent fields are omitted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlatResult<'a> {
    #[serde(serialize_with = "serialize_number")]
    elasticity: f64,
    classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_optional_number")]
    percentage_change_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_optional_number")]
    percentage_change_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    observations_used: Option<&'a ObservationPair>,
}

impl Serialize for ElasticityResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatResult {
            elasticity: self.elasticity(),
            classification: self.classification(),
            percentage_change_quantity: self.percentage_change_quantity(),
            percentage_change_price: self.percentage_change_price(),
            error: self.error().map(ToString::to_string),
            observations_used: self.observations_used(),
        }
        .serialize(serializer)
    }
}

// JSON has no NaN or infinity, so those travel as strings to keep the sign of infinity.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

fn serialize_optional_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}
