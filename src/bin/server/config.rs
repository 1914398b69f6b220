//! Configuration types for the extraction server and CLI.

use std::path::PathBuf;

/// Configuration for the document analysis service
#[derive(Clone)]
pub struct AzureConfig {
    pub endpoint: String,
    pub key: String,
    pub model_id: String,
    pub poll_interval_secs: u64,
    pub poll_timeout_secs: u64,
}

/// Configuration for the HTTP server
#[derive(Clone)]
pub struct ServerConfig {
    pub azure: AzureConfig,
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub retain_uploads: bool,
}
