//! Error handling for the analysis boundary.

mod types;

pub use types::{AnalysisError, AnalysisResult};
