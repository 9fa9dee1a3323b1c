use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

pub(crate) static GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Carries the full report out of `main` on startup failure.
#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

/// The single error body every failed request receives. Error detail stays
/// in the server log.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: &'static str,
}

impl Default for ErrorResponse {
    fn default() -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    pub fn parse<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Report::new(error).change_context(KernelError::Parse))
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.current_context() {
            KernelError::Validation | KernelError::Parse => StatusCode::BAD_REQUEST,
            KernelError::NotFound { .. } => StatusCode::NOT_FOUND,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self.0, "internal error");
        } else if status == StatusCode::NOT_FOUND {
            tracing::warn!(status = status.as_u16(), error = ?self.0, "record not found");
        } else if status == StatusCode::FORBIDDEN {
            tracing::warn!(status = status.as_u16(), error = ?self.0, "request forbidden");
        } else {
            tracing::warn!(status = status.as_u16(), error = ?self.0, "request rejected");
        }

        (status, Json(ErrorResponse::default())).into_response()
    }
}
