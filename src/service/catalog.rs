//! Catalog reads and direct writes against SQLite.

use crate::error::AppError;
use crate::model::{BakedGood, Bakery, BakeryWithGoods, NewBakedGood, NewBakery};
use sqlx::SqlitePool;
use std::collections::HashMap;

const BAKERY_COLUMNS: &str = "id, name, created_at, updated_at";
const BAKED_GOOD_COLUMNS: &str = "id, name, price, created_at, updated_at, bakery_id";

pub struct CatalogService;

impl CatalogService {
    /// All bakeries by id, each with its baked goods. Goods are fetched in one query and grouped in memory.
    pub async fn list_bakeries(pool: &SqlitePool) -> Result<Vec<BakeryWithGoods>, AppError> {
        let bakeries: Vec<Bakery> =
            sqlx::query_as(&format!("SELECT {} FROM bakeries ORDER BY id", BAKERY_COLUMNS))
                .fetch_all(pool)
                .await?;
        if bakeries.is_empty() {
            return Ok(Vec::new());
        }
        let goods: Vec<BakedGood> = sqlx::query_as(&format!(
            "SELECT {} FROM baked_goods WHERE bakery_id IS NOT NULL ORDER BY id",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_all(pool)
        .await?;

        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for good in goods {
            if let Some(bakery_id) = good.bakery_id {
                by_bakery.entry(bakery_id).or_default().push(good);
            }
        }
        Ok(bakeries
            .into_iter()
            .map(|bakery| {
                let baked_goods = by_bakery.remove(&bakery.id).unwrap_or_default();
                BakeryWithGoods { bakery, baked_goods }
            })
            .collect())
    }

    /// Fetch one bakery by primary key with its baked goods.
    pub async fn find_bakery(pool: &SqlitePool, id: i64) -> Result<Option<BakeryWithGoods>, AppError> {
        let bakery: Option<Bakery> =
            sqlx::query_as(&format!("SELECT {} FROM bakeries WHERE id = ?", BAKERY_COLUMNS))
                .bind(id)
                .fetch_optional(pool)
                .await?;
        let Some(bakery) = bakery else {
            return Ok(None);
        };
        let baked_goods = Self::baked_goods_of(pool, bakery.id).await?;
        Ok(Some(BakeryWithGoods { bakery, baked_goods }))
    }

    pub async fn baked_goods_of(pool: &SqlitePool, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let goods = sqlx::query_as(&format!(
            "SELECT {} FROM baked_goods WHERE bakery_id = ? ORDER BY id",
            BAKED_GOOD_COLUMNS
        ))
        .bind(bakery_id)
        .fetch_all(pool)
        .await?;
        Ok(goods)
    }

    /// All baked goods, most expensive first. Equal prices keep insertion (id) order.
    pub async fn baked_goods_by_price(pool: &SqlitePool) -> Result<Vec<BakedGood>, AppError> {
        let goods = sqlx::query_as(&format!(
            "SELECT {} FROM baked_goods ORDER BY price DESC, id ASC",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(goods)
    }

    /// The highest-priced baked good (lowest id on ties), or None when the table is empty.
    pub async fn most_expensive_baked_good(pool: &SqlitePool) -> Result<Option<BakedGood>, AppError> {
        let good = sqlx::query_as(&format!(
            "SELECT {} FROM baked_goods ORDER BY price DESC, id ASC LIMIT 1",
            BAKED_GOOD_COLUMNS
        ))
        .fetch_optional(pool)
        .await?;
        Ok(good)
    }

    /// Insert one bakery. Returns the stored row.
    pub async fn insert_bakery(pool: &SqlitePool, new: &NewBakery) -> Result<Bakery, AppError> {
        let bakery = sqlx::query_as(&format!(
            "INSERT INTO bakeries (name) VALUES (?) RETURNING {}",
            BAKERY_COLUMNS
        ))
        .bind(&new.name)
        .fetch_one(pool)
        .await?;
        Ok(bakery)
    }

    /// Insert one baked good. Fails with a foreign-key error when `bakery_id` names no bakery.
    pub async fn insert_baked_good(pool: &SqlitePool, new: &NewBakedGood) -> Result<BakedGood, AppError> {
        let good = sqlx::query_as(&format!(
            "INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?) RETURNING {}",
            BAKED_GOOD_COLUMNS
        ))
        .bind(&new.name)
        .bind(new.price)
        .bind(new.bakery_id)
        .fetch_one(pool)
        .await?;
        Ok(good)
    }

    /// Delete one bakery by id. Its baked goods are kept and detached (`bakery_id` set to NULL).
    /// Returns whether a row was removed.
    pub async fn delete_bakery(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let detached = sqlx::query("UPDATE baked_goods SET bakery_id = NULL WHERE bakery_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM bakeries WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::debug!(id, detached = detached.rows_affected(), "deleted bakery");
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_baked_good(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
