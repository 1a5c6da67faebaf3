//! # Product API
//!
//! Routes:
//! - POST   /api/products — Create product (name unique across all products)
//! - GET    /api/products — List products
//! - PATCH  /api/products/{id} — Update name, sku, description
//! - PATCH  /api/products/{id}/stock — Update stock count only
//! - DELETE /api/products/{id} — Delete product

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use franq_core::Product;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::{validated_json, Validate};
use crate::routes::franchises::validate_name;
use crate::state::AppState;

/// Request to create a product under a branch.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stock: i64,
    pub sku: i64,
    pub branch_id: i64,
}

/// Request to update a product's descriptive fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: String,
    pub sku: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to overwrite a product's stock count.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductStockRequest {
    pub stock: i64,
}

fn validate_stock(stock: i64) -> Result<(), String> {
    if stock < 0 {
        return Err("stock must not be negative".to_string());
    }
    Ok(())
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_stock(self.stock)
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateProductStockRequest {
    fn validate(&self) -> Result<(), String> {
        validate_stock(self.stock)
    }
}

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", post(create_product).get(list_products))
        .route(
            "/api/products/{id}",
            patch(update_product).delete(delete_product),
        )
        .route("/api/products/{id}/stock", patch(update_product_stock))
}

/// POST /api/products — Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 409, description = "Name already taken", body = crate::error::ErrorBody),
        (status = 422, description = "Unknown branchId or negative stock", body = crate::error::ErrorBody),
    ),
    tag = "products"
)]
pub(crate) async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let req = validated_json(body)?;

    if db::products::find_by_name(&state.pool, &req.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "product '{}' already exists",
            req.name
        )));
    }

    let product = db::products::insert(
        &state.pool,
        &req.name,
        req.description.as_deref(),
        req.stock,
        req.sku,
        req.branch_id,
    )
    .await?;
    tracing::info!(id = product.id, name = %product.name, branch_id = product.branch_id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products — List all products.
#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "All products", body = [Product])),
    tag = "products"
)]
pub(crate) async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(db::products::list(&state.pool).await?))
}

/// PATCH /api/products/{id} — Update a product's descriptive fields.
///
/// Stock is deliberately untouched here; it has its own operation below.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "products"
)]
pub(crate) async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let req = validated_json(body)?;
    let product = db::products::update(&state.pool, id, &req.name, req.sku, req.description.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}/stock — Overwrite the stock count.
#[utoipa::path(
    patch,
    path = "/api/products/{id}/stock",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductStockRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "products"
)]
pub(crate) async fn update_product_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateProductStockRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let req = validated_json(body)?;
    let product = db::products::update_stock(&state.pool, id, req.stock)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} — Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "products"
)]
pub(crate) async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !db::products::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("product {id} not found")));
    }
    tracing::info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
