//! HTTP server for BizFile upload and extraction.

use crate::api::{self, HealthResponse, UploadFailed, UploadRejected, UploadResponse, WelcomeResponse};
use crate::config::ServerConfig;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bizfile_ocr::{assemble, AzureClient};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Largest request body the upload route accepts. Scanned extracts run
/// well past axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application state shared across handlers
struct AppState {
    client: AzureClient,
    upload_dir: PathBuf,
    retain_uploads: bool,
}

/// Build the application router with all endpoints
fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/ocr", post(ocr_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize analysis client
    info!("Initializing analysis client...");
    let client = api::build_client(&config.azure)?;
    info!("Analysis client ready for model {}", config.azure.model_id);

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Storing uploads under {}", config.upload_dir.display());

    let state = Arc::new(AppState {
        client,
        upload_dir: config.upload_dir,
        retain_uploads: config.retain_uploads,
    });

    let app = build_router(state);

    // Parse address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    info!("Server listening on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /       - Welcome");
    info!("  GET  /health - Health check");
    info!("  POST /ocr    - BizFile upload and extraction");

    // Create listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Welcome endpoint
async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to azure OCR api.".to_string(),
    })
}

/// Health check endpoint
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// BizFile upload endpoint
async fn ocr_handler(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let start = Instant::now();

    // Pull the "pdf" field out of the multipart body, skipping other fields
    let mut document = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Malformed multipart upload");
                return (StatusCode::BAD_REQUEST, Json(UploadRejected::malformed(e)))
                    .into_response();
            }
        };
        if field.name() == Some("pdf") {
            match field.bytes().await {
                Ok(bytes) => {
                    document = Some(bytes);
                    break;
                }
                Err(e) => {
                    warn!(request_id = %request_id, error = %e, "Failed to read upload field");
                    return (StatusCode::BAD_REQUEST, Json(UploadRejected::malformed(e)))
                        .into_response();
                }
            }
        }
    }
    let Some(document) = document else {
        return (StatusCode::BAD_REQUEST, Json(UploadRejected::no_file())).into_response();
    };

    info!(request_id = %request_id, bytes = document.len(), "Processing BizFile upload");

    // Store the upload under a unique name
    let file_path = match api::store_upload(&state.upload_dir, &document).await {
        Ok(path) => path,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to store upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadFailed::from_error(e)),
            )
                .into_response();
        }
    };

    // Run the layout analysis
    let analysis_start = Instant::now();
    let analysis = state.client.analyze(&document).await;
    let analysis_time = analysis_start.elapsed();

    // Discard applies to failed analyses too, not just the success path
    if !state.retain_uploads {
        if let Err(e) = tokio::fs::remove_file(&file_path).await {
            warn!(request_id = %request_id, error = %e, "Failed to remove stored upload");
        }
    }

    let outcome = match analysis {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Document analysis failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadFailed::from_error(e)),
            )
                .into_response();
        }
    };

    // Assemble the structured record
    let record = assemble(&outcome.result);

    info!(
        request_id = %request_id,
        tables = outcome.result.tables.len(),
        officers = record.officers.len(),
        shareholders = record.shareholders.len(),
        charges = record.charges.len(),
        analysis_ms = analysis_time.as_secs_f64() * 1000.0,
        total_ms = start.elapsed().as_secs_f64() * 1000.0,
        "BizFile extracted"
    );

    (
        StatusCode::OK,
        Json(UploadResponse::success(record, file_path, outcome.raw)),
    )
        .into_response()
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Endpoint with nothing listening behind it, so analysis fails with a
    /// transport error instead of completing.
    fn unreachable_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        endpoint
    }

    async fn serve_app(upload_dir: &std::path::Path, retain_uploads: bool) -> SocketAddr {
        let client = AzureClient::new(unreachable_endpoint(), "test-key").unwrap();
        let state = Arc::new(AppState {
            client,
            upload_dir: upload_dir.to_path_buf(),
            retain_uploads,
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        addr
    }

    async fn post_pdf(addr: SocketAddr, bytes: Vec<u8>) -> reqwest::Response {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("extract.pdf")
            .mime_str("application/pdf")
            .unwrap();
        let form = reqwest::multipart::Form::new().part("pdf", part);
        reqwest::Client::new()
            .post(format!("http://{addr}/ocr"))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn multi_megabyte_uploads_reach_the_analysis_stage() {
        let dir = tempfile::tempdir().unwrap();
        let addr = serve_app(dir.path(), true).await;

        let response = post_pdf(addr, vec![0u8; 3 * 1024 * 1024]).await;

        // A body-size rejection would answer 400 before analysis is reached
        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "OCR failed");
    }

    #[tokio::test]
    async fn discarding_uploads_covers_failed_analyses_too() {
        let dir = tempfile::tempdir().unwrap();
        let addr = serve_app(dir.path(), false).await;

        let response = post_pdf(addr, b"%PDF-1.4".to_vec()).await;

        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn uploads_are_retained_by_default_when_analysis_fails() {
        let dir = tempfile::tempdir().unwrap();
        let addr = serve_app(dir.path(), true).await;

        let response = post_pdf(addr, b"%PDF-1.4".to_vec()).await;

        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
