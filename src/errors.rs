use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Template(e) => {
                tracing::error!(error = ?e, "failed to render page");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UnknownField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
