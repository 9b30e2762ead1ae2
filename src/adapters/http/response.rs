use crate::utils::error::AppError;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        match self {
            Self::Validation(e) => (
                status,
                Json(json!({ "error": "Validation failed", "details": e.details })),
            )
                .into_response(),
            Self::InvalidRequest { message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            Self::NotFound { entity, .. } => (
                status,
                Json(json!({ "error": format!("{} not found", entity) })),
            )
                .into_response(),
            Self::Conflict { message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            Self::RateLimited { retry_after_secs } => {
                let mut response = (
                    status,
                    Json(json!({ "error": "Too many requests, please try again later" })),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
                response
            }
            other => {
                // internals stay in the log
                tracing::error!(error = %other, "Request failed");
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ValidationError;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_lists_details() {
        let err = AppError::from(ValidationError::single("email", "Please enter a valid email address"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"][0]["field"], "email");
        assert_eq!(body["details"][0]["message"], "Please enter a valid email address");
    }

    #[tokio::test]
    async fn not_found_names_the_entity() {
        let response = AppError::not_found("Program", "nonexistent-id").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Program not found");
    }

    #[tokio::test]
    async fn rate_limited_sets_retry_after() {
        let response = AppError::RateLimited { retry_after_secs: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }

    #[tokio::test]
    async fn internal_errors_are_generic() {
        let response = AppError::StorageClosed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Internal server error");
    }
}
