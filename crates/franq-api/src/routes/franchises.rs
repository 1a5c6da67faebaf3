//! # Franchise API
//!
//! Routes:
//! - POST   /api/franchises — Create franchise (name must be unique)
//! - GET    /api/franchises — List franchises
//! - GET    /api/franchises/details — Franchises with nested branches and products
//! - PATCH  /api/franchises/{id} — Rename franchise
//! - DELETE /api/franchises/{id} — Delete franchise (cascades to branches)
//! - GET    /api/franchises/{id}/products/max-stock — Highest-stock product per branch

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use franq_core::{aggregate, Franchise, FranchiseAggregate, ProductMaxStock};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::{validated_json, Validate};
use crate::state::AppState;

/// Request to create a franchise.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFranchiseRequest {
    pub name: String,
}

/// Request to rename a franchise.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFranchiseRequest {
    pub name: String,
}

pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > 255 {
        return Err("name must not exceed 255 characters".to_string());
    }
    Ok(())
}

impl Validate for CreateFranchiseRequest {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateFranchiseRequest {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

/// Build the franchises router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/franchises", post(create_franchise).get(list_franchises))
        .route("/api/franchises/details", get(franchise_details))
        .route(
            "/api/franchises/{id}",
            patch(update_franchise).delete(delete_franchise),
        )
        .route(
            "/api/franchises/{id}/products/max-stock",
            get(max_stock_per_branch),
        )
}

/// POST /api/franchises — Create a franchise.
#[utoipa::path(
    post,
    path = "/api/franchises",
    request_body = CreateFranchiseRequest,
    responses(
        (status = 201, description = "Franchise created", body = Franchise),
        (status = 409, description = "Name already taken", body = crate::error::ErrorBody),
    ),
    tag = "franchises"
)]
pub(crate) async fn create_franchise(
    State(state): State<AppState>,
    body: Result<Json<CreateFranchiseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Franchise>), AppError> {
    let req = validated_json(body)?;

    // Friendly-message pre-check; the unique index on franchise.name is
    // what actually closes the concurrent-create race.
    if db::franchises::find_by_name(&state.pool, &req.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "franchise '{}' already exists",
            req.name
        )));
    }

    let franchise = db::franchises::insert(&state.pool, &req.name).await?;
    tracing::info!(id = franchise.id, name = %franchise.name, "franchise created");
    Ok((StatusCode::CREATED, Json(franchise)))
}

/// GET /api/franchises — List all franchises.
#[utoipa::path(
    get,
    path = "/api/franchises",
    responses((status = 200, description = "All franchises", body = [Franchise])),
    tag = "franchises"
)]
pub(crate) async fn list_franchises(
    State(state): State<AppState>,
) -> Result<Json<Vec<Franchise>>, AppError> {
    Ok(Json(db::franchises::list(&state.pool).await?))
}

/// GET /api/franchises/details — Franchises with branches and products.
///
/// One query per level, joined in memory. Child list order is not
/// guaranteed; parents with no children carry empty lists.
#[utoipa::path(
    get,
    path = "/api/franchises/details",
    responses((status = 200, description = "Nested franchise views", body = [FranchiseAggregate])),
    tag = "franchises"
)]
pub(crate) async fn franchise_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<FranchiseAggregate>>, AppError> {
    let franchises = db::franchises::list(&state.pool).await?;
    let branches = db::branches::list(&state.pool).await?;
    let products = db::products::list(&state.pool).await?;
    Ok(Json(aggregate::franchise_aggregates(
        franchises, branches, products,
    )))
}

/// PATCH /api/franchises/{id} — Rename a franchise.
#[utoipa::path(
    patch,
    path = "/api/franchises/{id}",
    params(("id" = i64, Path, description = "Franchise id")),
    request_body = UpdateFranchiseRequest,
    responses(
        (status = 200, description = "Updated franchise", body = Franchise),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "franchises"
)]
pub(crate) async fn update_franchise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateFranchiseRequest>, JsonRejection>,
) -> Result<Json<Franchise>, AppError> {
    let req = validated_json(body)?;
    let franchise = db::franchises::update(&state.pool, id, &req.name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("franchise {id} not found")))?;
    Ok(Json(franchise))
}

/// DELETE /api/franchises/{id} — Delete a franchise.
#[utoipa::path(
    delete,
    path = "/api/franchises/{id}",
    params(("id" = i64, Path, description = "Franchise id")),
    responses(
        (status = 204, description = "Franchise deleted"),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "franchises"
)]
pub(crate) async fn delete_franchise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !db::franchises::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("franchise {id} not found")));
    }
    tracing::info!(id, "franchise deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/franchises/{id}/products/max-stock — Per-branch max-stock rows.
///
/// An unknown franchise id yields an empty list, not a 404; the operation
/// is a pure projection over whatever branches match.
#[utoipa::path(
    get,
    path = "/api/franchises/{id}/products/max-stock",
    params(("id" = i64, Path, description = "Franchise id")),
    responses((status = 200, description = "One row per stocked branch", body = [ProductMaxStock])),
    tag = "franchises"
)]
pub(crate) async fn max_stock_per_branch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ProductMaxStock>>, AppError> {
    Ok(Json(
        db::products::max_stock_per_branch(&state.pool, id).await?,
    ))
}
