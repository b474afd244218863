pub mod handlers;

pub use handlers::not_found;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure for infrastructure-level errors.
///
/// Domain routes define their own error bodies; this shape covers the
/// cross-cutting cases such as the 404 fallback for unknown routes.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
