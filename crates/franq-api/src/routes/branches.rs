//! # Branch API
//!
//! Routes:
//! - POST   /api/branches — Create branch (name unique across all branches)
//! - GET    /api/branches — List branches
//! - GET    /api/branches/details — Branches paired with their products
//! - PATCH  /api/branches/{id} — Update name, address, owning franchise
//! - DELETE /api/branches/{id} — Delete branch (cascades to products)

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use franq_core::{aggregate, Branch, BranchAggregate};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::{validated_json, Validate};
use crate::routes::franchises::validate_name;
use crate::state::AppState;

/// Request to create a branch under a franchise.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub name: String,
    pub address: String,
    pub franchise_id: i64,
}

/// Request to update a branch's mutable fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    pub name: String,
    pub address: String,
    pub franchise_id: i64,
}

fn validate_branch(name: &str, address: &str) -> Result<(), String> {
    validate_name(name)?;
    if address.trim().is_empty() {
        return Err("address must not be empty".to_string());
    }
    Ok(())
}

impl Validate for CreateBranchRequest {
    fn validate(&self) -> Result<(), String> {
        validate_branch(&self.name, &self.address)
    }
}

impl Validate for UpdateBranchRequest {
    fn validate(&self) -> Result<(), String> {
        validate_branch(&self.name, &self.address)
    }
}

/// Build the branches router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/branches", post(create_branch).get(list_branches))
        .route("/api/branches/details", get(branch_details))
        .route(
            "/api/branches/{id}",
            patch(update_branch).delete(delete_branch),
        )
}

/// POST /api/branches — Create a branch.
#[utoipa::path(
    post,
    path = "/api/branches",
    request_body = CreateBranchRequest,
    responses(
        (status = 201, description = "Branch created", body = Branch),
        (status = 409, description = "Name already taken", body = crate::error::ErrorBody),
        (status = 422, description = "Unknown franchiseId", body = crate::error::ErrorBody),
    ),
    tag = "branches"
)]
pub(crate) async fn create_branch(
    State(state): State<AppState>,
    body: Result<Json<CreateBranchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Branch>), AppError> {
    let req = validated_json(body)?;

    if db::branches::find_by_name(&state.pool, &req.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "branch '{}' already exists",
            req.name
        )));
    }

    let branch =
        db::branches::insert(&state.pool, &req.name, &req.address, req.franchise_id).await?;
    tracing::info!(id = branch.id, name = %branch.name, franchise_id = branch.franchise_id, "branch created");
    Ok((StatusCode::CREATED, Json(branch)))
}

/// GET /api/branches — List all branches.
#[utoipa::path(
    get,
    path = "/api/branches",
    responses((status = 200, description = "All branches", body = [Branch])),
    tag = "branches"
)]
pub(crate) async fn list_branches(State(state): State<AppState>) -> Result<Json<Vec<Branch>>, AppError> {
    Ok(Json(db::branches::list(&state.pool).await?))
}

/// GET /api/branches/details — Branches with their product lists.
#[utoipa::path(
    get,
    path = "/api/branches/details",
    responses((status = 200, description = "Branch views with products", body = [BranchAggregate])),
    tag = "branches"
)]
pub(crate) async fn branch_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<BranchAggregate>>, AppError> {
    let branches = db::branches::list(&state.pool).await?;
    let products = db::products::list(&state.pool).await?;
    Ok(Json(aggregate::branch_aggregates(branches, products)))
}

/// PATCH /api/branches/{id} — Update a branch.
#[utoipa::path(
    patch,
    path = "/api/branches/{id}",
    params(("id" = i64, Path, description = "Branch id")),
    request_body = UpdateBranchRequest,
    responses(
        (status = 200, description = "Updated branch", body = Branch),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "branches"
)]
pub(crate) async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateBranchRequest>, JsonRejection>,
) -> Result<Json<Branch>, AppError> {
    let req = validated_json(body)?;
    let branch = db::branches::update(&state.pool, id, &req.name, &req.address, req.franchise_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("branch {id} not found")))?;
    Ok(Json(branch))
}

/// DELETE /api/branches/{id} — Delete a branch.
#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    params(("id" = i64, Path, description = "Branch id")),
    responses(
        (status = 204, description = "Branch deleted"),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody),
    ),
    tag = "branches"
)]
pub(crate) async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !db::branches::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("branch {id} not found")));
    }
    tracing::info!(id, "branch deleted");
    Ok(StatusCode::NO_CONTENT)
}
