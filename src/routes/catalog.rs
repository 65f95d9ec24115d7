//! Catalog routes: landing page, bakeries, and baked goods by price.

use crate::handlers::{
    baked_goods_by_price, favicon, index, list_bakeries, most_expensive_baked_good, read_bakery,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(read_bakery))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .with_state(state)
}
