//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FRANQ API",
        version = "0.1.0",
        description = "Franchise network API: franchises, branches, products, nested detail views, and the per-branch max-stock projection."
    ),
    paths(
        // Franchises
        crate::routes::franchises::create_franchise,
        crate::routes::franchises::list_franchises,
        crate::routes::franchises::franchise_details,
        crate::routes::franchises::update_franchise,
        crate::routes::franchises::delete_franchise,
        crate::routes::franchises::max_stock_per_branch,
        // Branches
        crate::routes::branches::create_branch,
        crate::routes::branches::list_branches,
        crate::routes::branches::branch_details,
        crate::routes::branches::update_branch,
        crate::routes::branches::delete_branch,
        // Products
        crate::routes::products::create_product,
        crate::routes::products::list_products,
        crate::routes::products::update_product,
        crate::routes::products::update_product_stock,
        crate::routes::products::delete_product,
    ),
    components(schemas(
        franq_core::Franchise,
        franq_core::Branch,
        franq_core::Product,
        franq_core::BranchAggregate,
        franq_core::FranchiseAggregate,
        franq_core::ProductMaxStock,
        crate::routes::franchises::CreateFranchiseRequest,
        crate::routes::franchises::UpdateFranchiseRequest,
        crate::routes::branches::CreateBranchRequest,
        crate::routes::branches::UpdateBranchRequest,
        crate::routes::products::CreateProductRequest,
        crate::routes::products::UpdateProductRequest,
        crate::routes::products::UpdateProductStockRequest,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    ))
)]
pub struct ApiDoc;

/// Build the router serving the generated spec.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_spec))
}

pub(crate) async fn serve_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
