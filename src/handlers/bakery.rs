//! Bakery handlers: list and read by id.

use crate::error::AppError;
use crate::extractors::BakeryId;
use crate::model::BakeryWithGoods;
use crate::response::PrettyJson;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /bakeries
pub async fn list_bakeries(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakeryWithGoods>>, AppError> {
    let bakeries = CatalogService::list_bakeries(&state.pool).await?;
    tracing::debug!(count = bakeries.len(), "listed bakeries");
    Ok(PrettyJson(bakeries))
}

/// GET /bakeries/:id
pub async fn read_bakery(
    State(state): State<AppState>,
    BakeryId(id): BakeryId,
) -> Result<Json<BakeryWithGoods>, AppError> {
    CatalogService::find_bakery(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(AppError::bakery_not_found)
}
