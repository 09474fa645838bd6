use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single (price, quantity) data point.
///
/// Construction does not enforce positivity; the analytics validator does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub price: f64,
    pub quantity: f64,
}

impl Observation {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }
}

impl FromStr for Observation {
    type Err = CoreError;

    /// Parses `"price:quantity"` (or `"price,quantity"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidInput("observation".to_string(), format!("'{}' {}", s, reason));

        let (price, quantity) = s
            .split_once(':')
            .or_else(|| s.split_once(','))
            .ok_or_else(|| invalid("is not in the form PRICE:QUANTITY"))?;

        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("has a price that is not a number"))?;
        let quantity = quantity
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("has a quantity that is not a number"))?;

        Ok(Self { price, quantity })
    }
}

/// The start and end observations that actually fed a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationPair {
    pub start: Observation,
    pub end: Observation,
}

impl ObservationPair {
    pub fn new(start: Observation, end: Observation) -> Self {
        Self { start, end }
    }
}
