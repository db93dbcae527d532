//! Error responses for the HTTP surface

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use council_application::RunAnalysisError;
use serde::Serialize;
use tracing::warn;

/// Message for a body that could not be read as an analyze request
pub const VALIDATION_FAILED_MESSAGE: &str = "請求參數驗證失敗";

/// Message for failures that are not the backend's fault
pub const INTERNAL_ERROR_MESSAGE: &str = "系統發生錯誤，請稍後再試。";

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub error: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            error,
            message: message.into(),
        }
    }
}

/// Errors the HTTP surface turns into responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 `INVALID_REQUEST`
    InvalidRequest(String),
    /// 502 `AI_ANALYSIS_FAILED`
    AnalysisFailed(String),
    /// 500 `INTERNAL_ERROR`
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::AnalysisFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::AnalysisFailed(_) => "AI_ANALYSIS_FAILED",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::InvalidRequest(message) | ApiError::AnalysisFailed(message) => message,
            ApiError::Internal => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<RunAnalysisError> for ApiError {
    fn from(e: RunAnalysisError) -> Self {
        match e {
            RunAnalysisError::Failed(failure) => ApiError::AnalysisFailed(failure.user_message()),
            other => {
                warn!("Analysis ended without a stage failure: {}", other);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.code(), self.message());
        (self.status(), Json(body)).into_response()
    }
}
