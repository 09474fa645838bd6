//! # Elasticity Core Types
//!
//! Layer 0 of the workspace: the plain data shared by the calculator and its callers.
//! Nothing in here performs validation or arithmetic beyond what a type needs to
//! describe itself.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Classification, SelectionPolicy};
pub use error::CoreError;
pub use structs::{Observation, ObservationPair};
