//! HTTP handlers for the Products API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{self, FieldError, Location};

/// Confirmation string returned by the delete operation.
pub const PRODUCT_DELETED_MESSAGE: &str = "Producto eliminado";

/// Success envelope for a single product
#[derive(Serialize, ToSchema)]
pub struct ProductBody {
    pub data: Product,
}

/// Success envelope for the product listing
#[derive(Serialize, ToSchema)]
pub struct ProductListBody {
    pub data: Vec<Product>,
}

/// Success envelope for the delete confirmation
#[derive(Serialize, ToSchema)]
pub struct DeletedBody {
    pub data: String,
}

/// 400 body listing every failed validation rule, in declaration order
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorsBody {
    pub errors: Vec<FieldError>,
}

/// 404 body for an addressed product that does not exist
#[derive(Serialize, ToSchema)]
pub struct NotFoundBody {
    pub error: String,
}

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(schemas(
        Product,
        CreateProduct,
        UpdateProduct,
        ProductBody,
        ProductListBody,
        DeletedBody,
        ValidationErrorsBody,
        NotFoundBody,
        FieldError,
        Location,
    )),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// A missing or non-JSON body runs through the rule sets as an empty
/// object, so field rules report it as all-fields-absent instead of the
/// framework rejecting the request with its own shape.
fn body_or_empty(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// List all products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, ordered by id descending", body = ProductListBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListBody>> {
    let products = service.list_products().await?;
    Ok(Json(ProductListBody { data: products }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductBody),
        (status = 400, description = "Validation errors", body = ValidationErrorsBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Option<Json<Value>>,
) -> ProductResult<impl IntoResponse> {
    let body = body_or_empty(body);
    let input = validation::validate_create(&body)?;

    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductBody { data: product })))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorsBody),
        (status = 404, description = "Product does not exist", body = NotFoundBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductBody>> {
    let id = validation::validate_id(&id)?;

    let product = service.get_product(id).await?;
    Ok(Json(ProductBody { data: product }))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductBody),
        (status = 400, description = "Validation errors", body = ValidationErrorsBody),
        (status = 404, description = "Product does not exist", body = NotFoundBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> ProductResult<Json<ProductBody>> {
    let body = body_or_empty(body);
    let (id, input) = validation::validate_update(&id, &body)?;

    let product = service.update_product(id, input).await?;
    Ok(Json(ProductBody { data: product }))
}

/// Toggle a product's availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Availability flipped", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorsBody),
        (status = 404, description = "Product does not exist", body = NotFoundBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductBody>> {
    let id = validation::validate_id(&id)?;

    let product = service.toggle_availability(id).await?;
    Ok(Json(ProductBody { data: product }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedBody),
        (status = 400, description = "Invalid id", body = ValidationErrorsBody),
        (status = 404, description = "Product does not exist", body = NotFoundBody),
        (status = 500, description = "Data access failure")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<DeletedBody>> {
    let id = validation::validate_id(&id)?;

    service.delete_product(id).await?;
    Ok(Json(DeletedBody {
        data: PRODUCT_DELETED_MESSAGE.to_string(),
    }))
}
