//! Response envelopes and upload plumbing shared by the server and CLI.

use std::path::Path;
use std::time::Duration;

use bizfile_ocr::{AnalysisResult, AzureClient, CompanyRecord};
use serde::Serialize;

use crate::config::AzureConfig;

/// Welcome response for the index route
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Success envelope for a processed upload
#[derive(Serialize)]
pub struct UploadResponse {
    pub status: u16,
    pub message: String,
    pub payload: UploadPayload,
    /// Raw analysis payload, passed through untouched.
    pub data: serde_json::Value,
}

/// Payload wrapper inside the success envelope
#[derive(Serialize)]
pub struct UploadPayload {
    pub data: ExtractedDocument,
}

/// The assembled record plus the stored upload's path
#[derive(Serialize)]
pub struct ExtractedDocument {
    #[serde(flatten)]
    pub record: CompanyRecord,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl UploadResponse {
    /// Builds the success envelope around an assembled record.
    pub fn success(record: CompanyRecord, file_path: String, raw: serde_json::Value) -> Self {
        Self {
            status: 200,
            message: "BizFile uploaded successfully.".to_string(),
            payload: UploadPayload {
                data: ExtractedDocument { record, file_path },
            },
            data: raw,
        }
    }
}

/// Client-error body for rejected uploads
#[derive(Serialize)]
pub struct UploadRejected {
    pub message: String,
}

impl UploadRejected {
    /// The request carried no `pdf` field.
    pub fn no_file() -> Self {
        Self {
            message: "No file uploaded.".to_string(),
        }
    }

    /// The multipart body could not be read.
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Malformed upload: {detail}"),
        }
    }
}

/// Server-error body for failed processing
#[derive(Serialize)]
pub struct UploadFailed {
    pub status: u16,
    pub message: String,
    pub error: String,
}

impl UploadFailed {
    /// Builds the failure envelope from any processing error.
    pub fn from_error(error: impl std::fmt::Display) -> Self {
        Self {
            status: 500,
            message: "OCR failed".to_string(),
            error: error.to_string(),
        }
    }
}

/// Builds the analysis client described by the configuration.
pub fn build_client(config: &AzureConfig) -> AnalysisResult<AzureClient> {
    Ok(AzureClient::new(&config.endpoint, &config.key)?
        .with_model_id(&config.model_id)
        .with_poll_interval(Duration::from_secs(config.poll_interval_secs))
        .with_poll_timeout(Duration::from_secs(config.poll_timeout_secs)))
}

/// Stores uploaded bytes under a unique name, returning the stored path.
pub async fn store_upload(dir: &Path, document: &[u8]) -> std::io::Result<String> {
    let path = dir.join(uuid::Uuid::new_v4().to_string());
    tokio::fs::write(&path, document).await?;
    Ok(path.display().to_string())
}
