//! # Integration Tests for franq-api
//!
//! Drives the assembled router against in-memory SQLite: create/conflict
//! behavior, update and delete error paths, the nested detail views, the
//! max-stock projection, and the health probes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use franq_api::{AppConfig, AppState};

/// Helper: build the app over a fresh in-memory database.
async fn test_app() -> axum::Router {
    let pool = franq_api::db::init_pool("sqlite::memory:")
        .await
        .expect("in-memory pool should open");
    franq_api::app(AppState::new(pool, AppConfig::default()))
}

/// Helper: read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper: read a response body as a string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Helper: POST and return the created entity's id.
async fn create(app: &axum::Router, uri: &str, body: serde_json::Value) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request("POST", uri, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let app = test_app().await;
    let response = app.oneshot(get_request("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let app = test_app().await;
    let response = app.oneshot(get_request("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Franchises ---------------------------------------------------------------

#[tokio::test]
async fn test_create_franchise_returns_generated_id() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/franchises",
            serde_json::json!({"name": "Norte"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let franchise = body_json(response).await;
    assert_eq!(franchise["name"], "Norte");
    assert!(franchise["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_duplicate_franchise_name_conflicts() {
    let app = test_app().await;
    create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/franchises",
            serde_json::json!({"name": "Norte"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_franchise_empty_name_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/franchises",
            serde_json::json!({"name": "  "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_franchise() {
    let app = test_app().await;
    let id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/franchises/{id}"),
            serde_json::json!({"name": "Norte Renovada"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Norte Renovada");
}

#[tokio::test]
async fn test_update_unknown_franchise_is_not_found() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/franchises/404",
            serde_json::json!({"name": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_without_body_is_validation_error() {
    let app = test_app().await;
    let id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    // No body at all: rejected before any lookup runs.
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/franchises/{id}"))
                .header("content-type", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_franchise_then_lookup_fails() {
    let app = test_app().await;
    let id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/franchises/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // A second delete of the same id is NOT_FOUND.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/franchises/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Branches -----------------------------------------------------------------

#[tokio::test]
async fn test_create_branch_under_franchise() {
    let app = test_app().await;
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/branches",
            serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": franchise_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let branch = body_json(response).await;
    assert_eq!(branch["franchiseId"], franchise_id);
}

#[tokio::test]
async fn test_create_branch_unknown_franchise_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/branches",
            serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": 99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_branch_name_conflicts_across_franchises() {
    let app = test_app().await;
    let norte = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;
    let sur = create(&app, "/api/franchises", serde_json::json!({"name": "Sur"})).await;
    create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": norte}),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/branches",
            serde_json::json!({"name": "Centro", "address": "Otra", "franchiseId": sur}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_branch_details_include_empty_product_list() {
    let app = test_app().await;
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;
    create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": franchise_id}),
    )
    .await;

    let response = app.oneshot(get_request("/api/branches/details")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let details = body_json(response).await;
    assert_eq!(details.as_array().unwrap().len(), 1);
    assert_eq!(details[0]["branch"]["name"], "Centro");
    assert_eq!(details[0]["products"], serde_json::json!([]));
}

// -- Products -----------------------------------------------------------------

#[tokio::test]
async fn test_product_stock_update() {
    let app = test_app().await;
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;
    let branch_id = create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": franchise_id}),
    )
    .await;
    let product_id = create(
        &app,
        "/api/products",
        serde_json::json!({"name": "Combo", "stock": 10, "sku": 7, "branchId": branch_id}),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/products/{product_id}/stock"),
            serde_json::json!({"stock": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product = body_json(response).await;
    assert_eq!(product["stock"], 3);
    assert_eq!(product["name"], "Combo");
}

#[tokio::test]
async fn test_negative_stock_rejected() {
    let app = test_app().await;
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;
    let branch_id = create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": franchise_id}),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            serde_json::json!({"name": "Combo", "stock": -1, "sku": 7, "branchId": branch_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/products/404",
            serde_json::json!({"name": "Ghost", "sku": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Max-stock projection -----------------------------------------------------

#[tokio::test]
async fn test_max_stock_per_branch() {
    let app = test_app().await;
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;
    let b1 = create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "B1", "address": "x", "franchiseId": franchise_id}),
    )
    .await;
    let b2 = create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "B2", "address": "y", "franchiseId": franchise_id}),
    )
    .await;
    for (name, stock, sku, branch) in [
        ("P1", 5, 1, b1),
        ("P2", 10, 2, b1),
        ("P3", 7, 3, b2),
    ] {
        create(
            &app,
            "/api/products",
            serde_json::json!({"name": name, "stock": stock, "sku": sku, "branchId": branch}),
        )
        .await;
    }

    let response = app
        .oneshot(get_request(&format!(
            "/api/franchises/{franchise_id}/products/max-stock"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["branchId"], b1);
    assert_eq!(rows[0]["stock"], 10);
    assert_eq!(rows[0]["productName"], "P2");
    assert_eq!(rows[1]["branchId"], b2);
    assert_eq!(rows[1]["stock"], 7);
}

#[tokio::test]
async fn test_max_stock_unknown_franchise_is_empty_list() {
    let app = test_app().await;
    let response = app
        .oneshot(get_request("/api/franchises/404/products/max-stock"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// -- End-to-end scenario ------------------------------------------------------

#[tokio::test]
async fn test_norte_centro_combo_scenario() {
    let app = test_app().await;

    // Create franchise "Norte".
    let franchise_id = create(&app, "/api/franchises", serde_json::json!({"name": "Norte"})).await;

    // A second create with the same name conflicts.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/franchises",
            serde_json::json!({"name": "Norte"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Branch "Centro" under it, product "Combo" under that.
    let branch_id = create(
        &app,
        "/api/branches",
        serde_json::json!({"name": "Centro", "address": "Calle 1", "franchiseId": franchise_id}),
    )
    .await;
    create(
        &app,
        "/api/products",
        serde_json::json!({"name": "Combo", "stock": 10, "sku": 7, "branchId": branch_id}),
    )
    .await;

    // The details view nests all three levels.
    let response = app
        .oneshot(get_request("/api/franchises/details"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let details = body_json(response).await;
    let details = details.as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["franchise"]["name"], "Norte");
    let branches = details[0]["branches"].as_array().unwrap();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["branch"]["name"], "Centro");
    let products = branches[0]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Combo");
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_generation() {
    let app = test_app().await;
    let response = app.oneshot(get_request("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let spec = body_json(response).await;
    assert!(spec["openapi"].is_string());
    assert!(spec["paths"]["/api/franchises"].is_object());
    assert!(spec["paths"]["/api/products/{id}/stock"].is_object());
}
