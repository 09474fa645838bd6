use std::fmt;
use thiserror::Error;

/// Why a calculation resolved to `Classification::InvalidInput`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElasticityError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Price and quantity haven't changed between the selected data points.")]
    NoChange,

    #[error("Average price or quantity (for the selected data points) cannot be zero.")]
    DegenerateAverage,

    #[error("Elasticity could not be classified for the selected data points.")]
    Unclassifiable,
}

impl ElasticityError {
    /// The validation issues, if this error came from the validator.
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            ElasticityError::Validation(errors) => Some(errors.issues()),
            _ => None,
        }
    }
}

/// A single problem found by the validator. Indices are zero-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("At least two data points are required for calculation")]
    InsufficientData { found: usize },

    #[error("Price must be positive (observation {})", .index + 1)]
    NonPositivePrice { index: usize, value: f64 },

    #[error("Quantity must be positive (observation {})", .index + 1)]
    NonPositiveQuantity { index: usize, value: f64 },
}

/// Every issue the validator found, in input order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub(crate) fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self(issues))
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
