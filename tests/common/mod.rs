//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use bakery_api::{
    app, apply_migrations, connect_in_memory, AppState, BakedGood, Bakery, CatalogService,
    NewBakedGood, NewBakery,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> SqlitePool {
    let pool = connect_in_memory().await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

/// Build the application router exactly as the server binary does.
pub fn build_test_app(pool: SqlitePool) -> Router {
    app(AppState::new(pool))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn insert_bakery(pool: &SqlitePool, name: &str) -> Bakery {
    CatalogService::insert_bakery(pool, &NewBakery::new(name))
        .await
        .unwrap()
}

pub async fn insert_good(pool: &SqlitePool, name: &str, price: f64, bakery_id: Option<i64>) -> BakedGood {
    let mut good = NewBakedGood::new(name, price);
    good.bakery_id = bakery_id;
    CatalogService::insert_baked_good(pool, &good).await.unwrap()
}
