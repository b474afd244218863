use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - the sole managed resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price, strictly greater than zero
    pub price: f64,
    /// Whether the product is currently available
    pub availability: bool,
}

/// DTO for creating a new product
///
/// `availability` is not accepted on creation; new products always start
/// available.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// DTO for a full update: every field is overwritten
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}
