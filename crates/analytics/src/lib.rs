//! # Elasticity Analytics Engine
//!
//! This crate computes the Price Elasticity of Demand (PED) of a series of
//! price/quantity observations and classifies the result.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   configuration or output formats. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ElasticityEngine` takes a slice of observations
//!   and produces an `ElasticityResult`. Every failure is a value inside that result;
//!   the engine never returns `Err` and never panics on bad numbers.
//!
//! ## Public API
//!
//! - `calculate_elasticity`: The single entry point most callers need.
//! - `ElasticityEngine`: The calculator, configurable with a `SelectionPolicy`.
//! - `validate` / `ObservationSeries`: The input validator and the series it vouches for.
//! - `ElasticityResult` / `ElasticityReport`: The tagged result of a calculation.
//! - `ElasticityError`: Why a calculation resolved to `InvalidInput`.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod validator;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{ElasticityEngine, calculate_elasticity};
pub use error::{ElasticityError, ValidationErrors, ValidationIssue};
pub use report::{ElasticityReport, ElasticityResult};
pub use validator::{ObservationSeries, validate};

pub use core_types::{Classification, Observation, ObservationPair, SelectionPolicy};
