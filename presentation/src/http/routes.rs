//! Routes and handlers

use super::error::{ApiError, VALIDATION_FAILED_MESSAGE};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use council_application::{InferenceTransport, RunAnalysisUseCase};
use council_domain::{AnalysisResult, Topic};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Body of `POST /api/v1/analyze`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub proposal: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

type SharedUseCase<T> = Arc<RunAnalysisUseCase<T>>;

/// Build the router over a configured analysis use case
pub fn router<T: InferenceTransport + 'static>(use_case: RunAnalysisUseCase<T>) -> Router {
    Router::new()
        .route("/api/v1/analyze", post(analyze::<T>))
        .route("/health", get(health))
        .with_state(Arc::new(use_case))
}

/// Serve `router` on `listener` until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn analyze<T: InferenceTransport + 'static>(
    State(use_case): State<SharedUseCase<T>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected analyze body: {}", rejection.body_text());
        ApiError::InvalidRequest(VALIDATION_FAILED_MESSAGE.to_string())
    })?;

    let topic = Topic::new(request.proposal.unwrap_or_default())
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let started = Instant::now();
    info!(chars = topic.content().chars().count(), "Analyze request accepted");

    match use_case.execute(topic).await {
        Ok(result) => {
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Analyze request completed"
            );
            Ok(Json(result))
        }
        Err(e) => {
            warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Analyze request failed: {}",
                e
            );
            Err(e.into())
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
