//! Core support types shared across the crate.
//!
//! This module holds the error types used at the analysis boundary and
//! re-exports them for convenience.

pub mod errors;

pub use errors::{AnalysisError, AnalysisResult};
