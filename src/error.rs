use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Two-valued error taxonomy: bad creation input and unknown product id.
/// The message is exactly what goes on the wire as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn invalid_data() -> Self {
        Self::InvalidInput("Invalid data".to_string())
    }

    pub fn product_not_found() -> Self {
        Self::NotFound("Product not found".to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        assert_eq!(AppError::invalid_data().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::product_not_found().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn canonical_messages() {
        assert_eq!(AppError::invalid_data().to_string(), "Invalid data");
        assert_eq!(AppError::product_not_found().to_string(), "Product not found");
    }
}
