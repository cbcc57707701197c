use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Parse an integer route or query value, mapping failure to a 400 with `message`
pub fn parse_id(raw: &str, message: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| AppError::BadRequest(message.to_string()))
}

/// Like [`parse_id`] for optional filters; an absent or empty value is `None`
pub fn parse_optional_id(raw: Option<&str>, message: &str) -> Result<Option<i64>> {
    match raw {
        Some(value) if !value.is_empty() => parse_id(value, message).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "bad").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "Invalid province ID"),
            Err(AppError::BadRequest(ref msg)) if msg == "Invalid province ID"
        ));
    }

    #[test]
    fn test_parse_id_rejects_surrounding_whitespace() {
        assert!(parse_id(" 5", "bad").is_err());
        assert!(parse_id("5 ", "bad").is_err());
        assert!(parse_optional_id(Some(" 5"), "bad").is_err());
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(None, "bad").unwrap(), None);
        assert_eq!(parse_optional_id(Some(""), "bad").unwrap(), None);
        assert_eq!(parse_optional_id(Some("7"), "bad").unwrap(), Some(7));
        assert!(parse_optional_id(Some("7x"), "bad").is_err());
    }
}
