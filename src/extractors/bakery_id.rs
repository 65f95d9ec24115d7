//! Extract an integer bakery id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Bakery primary key from the route. Only unsigned decimal digits match;
/// anything else is treated as an unknown bakery, so the client always sees the same 404.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BakeryId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BakeryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bakery_not_found())?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::bakery_not_found());
        }
        raw.parse::<i64>()
            .map(BakeryId)
            .map_err(|_| AppError::bakery_not_found())
    }
}
