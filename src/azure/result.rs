//! Wire model for the Document Intelligence layout analysis payload.
//!
//! Only the slice the extraction pipeline consumes is typed: the full
//! recognized text and the per-table cell lists. The untouched
//! `analyzeResult` JSON travels alongside in [`AnalyzeOutcome`] so API
//! responses can pass it through unchanged.

use serde::Deserialize;

/// Recognition result of a completed layout analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Full recognized document text as a single string.
    #[serde(default)]
    pub content: String,
    /// Detected tables in document order.
    #[serde(default)]
    pub tables: Vec<AnalyzedTable>,
}

/// A recognized table, reported as an ordered list of sparse cells.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedTable {
    /// Cells in service order. Row and column coverage may be sparse.
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// One recognized table cell with zero-based grid coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub row_index: usize,
    pub column_index: usize,
    /// Raw cell text; may contain newlines and whitespace runs.
    #[serde(default)]
    pub content: String,
}

/// A completed analysis: the typed view plus the raw service payload.
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    /// Typed view of the fields the extraction pipeline reads.
    pub result: AnalyzeResult,
    /// Untouched `analyzeResult` value, passed through in API responses.
    pub raw: serde_json::Value,
}

/// Long-running operation envelope returned by the polling URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub status: OperationState,
    /// Present once the operation has succeeded.
    #[serde(default)]
    pub analyze_result: Option<serde_json::Value>,
    /// Present once the operation has failed.
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// Lifecycle states of a layout analysis operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationState {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    /// Any status string this client does not recognize. Treated as still
    /// pending so newly introduced intermediate states keep polling.
    #[serde(other)]
    Unknown,
}

impl OperationState {
    /// Wire-style label, for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationState::NotStarted => "notStarted",
            OperationState::Running => "running",
            OperationState::Succeeded => "succeeded",
            OperationState::Failed => "failed",
            OperationState::Unknown => "unknown",
        }
    }
}

/// Failure detail reported by the service for a failed operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}
