//! Azure Document Intelligence integration.
//!
//! [`AzureClient`] drives the asynchronous analyze operation (submit, then
//! poll the operation URL until done); [`result`] models the slice of the
//! response payload the extraction pipeline reads.

pub mod client;
pub mod result;

pub use client::{AzureClient, PendingAnalysis};
pub use result::{
    AnalyzeOutcome, AnalyzeResult, AnalyzedTable, OperationState, OperationStatus, ServiceError,
    TableCell,
};
