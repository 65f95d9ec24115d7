//! Baked good handlers: price ranking.

use crate::error::AppError;
use crate::model::BakedGood;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /baked_goods/by_price
pub async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakedGood>>, AppError> {
    let goods = CatalogService::baked_goods_by_price(&state.pool).await?;
    Ok(Json(goods))
}

/// GET /baked_goods/most_expensive
pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<Json<BakedGood>, AppError> {
    CatalogService::most_expensive_baked_good(&state.pool)
        .await?
        .map(Json)
        .ok_or_else(AppError::no_baked_goods)
}
