use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::validation::FieldError;

/// Existing clients match this exact string, typo included.
pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrdo.";

pub const INTERNAL_ERROR_MESSAGE: &str = "Error al procesar la solicitud";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "Product not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": NOT_FOUND_MESSAGE })),
                )
                    .into_response()
            }
            ProductError::Internal(details) => {
                tracing::error!("Request failed: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Internal(err.to_string())
    }
}
