//! BizFile Extraction Server and CLI
//!
//! A binary for turning ACRA BizFile PDFs into structured company records
//! via the Azure Document Intelligence layout API, either one-shot on the
//! command line or as an HTTP upload service.
//!
//! # Usage
//!
//! ## CLI Mode
//! ```bash
//! bizfile-server extract --file bizfile.pdf --endpoint https://myresource.cognitiveservices.azure.com --key <key>
//! bizfile-server extract --url "https://example.com/bizfile.pdf" --output json
//! ```
//!
//! ## Server Mode
//! ```bash
//! bizfile-server serve --endpoint https://myresource.cognitiveservices.azure.com --key <key> --port 8080
//! ```

mod api;
mod cli;
mod config;
mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "bizfile-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BizFile record extraction via CLI or HTTP server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a single document via CLI
    Extract {
        /// URL of the document to process
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// Local file path of the document to process
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Document Intelligence endpoint
        #[arg(long, env = "AZURE_ENDPOINT")]
        endpoint: String,

        /// Document Intelligence access key
        #[arg(long, env = "AZURE_KEY")]
        key: String,

        /// Layout model to request
        #[arg(long = "model-id", env = "BIZFILE_MODEL_ID", default_value = "prebuilt-layout")]
        model_id: String,

        /// Seconds between completion polls
        #[arg(long = "poll-interval", env = "BIZFILE_POLL_INTERVAL", default_value = "2")]
        poll_interval_secs: u64,

        /// Overall bound on waiting for completion, in seconds
        #[arg(long = "poll-timeout", env = "BIZFILE_POLL_TIMEOUT", default_value = "120")]
        poll_timeout_secs: u64,

        /// Output format (json, text, pretty)
        #[arg(long, default_value = "pretty")]
        output: String,
    },
    /// Start the HTTP server
    Serve {
        /// Document Intelligence endpoint
        #[arg(long, env = "AZURE_ENDPOINT")]
        endpoint: String,

        /// Document Intelligence access key
        #[arg(long, env = "AZURE_KEY")]
        key: String,

        /// Layout model to request
        #[arg(long = "model-id", env = "BIZFILE_MODEL_ID", default_value = "prebuilt-layout")]
        model_id: String,

        /// Seconds between completion polls
        #[arg(long = "poll-interval", env = "BIZFILE_POLL_INTERVAL", default_value = "2")]
        poll_interval_secs: u64,

        /// Overall bound on waiting for completion, in seconds
        #[arg(long = "poll-timeout", env = "BIZFILE_POLL_TIMEOUT", default_value = "120")]
        poll_timeout_secs: u64,

        /// Port to listen on
        #[arg(long, short, default_value = "8080", env = "BIZFILE_PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0", env = "BIZFILE_HOST")]
        host: String,

        /// Directory where uploaded documents are stored
        #[arg(long = "upload-dir", env = "BIZFILE_UPLOAD_DIR", default_value = "uploads")]
        upload_dir: PathBuf,

        /// Delete stored uploads once processing finishes
        #[arg(long = "discard-uploads", env = "BIZFILE_DISCARD_UPLOADS")]
        discard_uploads: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    bizfile_ocr::utils::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            url,
            file,
            endpoint,
            key,
            model_id,
            poll_interval_secs,
            poll_timeout_secs,
            output,
        } => {
            let config = config::AzureConfig {
                endpoint,
                key,
                model_id,
                poll_interval_secs,
                poll_timeout_secs,
            };

            if let Some(url) = url {
                info!("Processing URL: {}", url);
                cli::process_url(&url, &config, &output).await?;
            } else if let Some(file) = file {
                info!("Processing file: {}", file.display());
                cli::process_file(&file, &config, &output).await?;
            } else {
                eprintln!("Error: Either --url or --file must be provided");
                std::process::exit(1);
            }
        }
        Commands::Serve {
            endpoint,
            key,
            model_id,
            poll_interval_secs,
            poll_timeout_secs,
            port,
            host,
            upload_dir,
            discard_uploads,
        } => {
            let config = config::ServerConfig {
                azure: config::AzureConfig {
                    endpoint,
                    key,
                    model_id,
                    poll_interval_secs,
                    poll_timeout_secs,
                },
                host,
                port,
                upload_dir,
                retain_uploads: !discard_uploads,
            };

            info!("Starting server on {}:{}", config.host, config.port);
            server::run_server(config).await?;
        }
    }

    Ok(())
}
