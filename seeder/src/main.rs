//! Seeder: migrates the configured database and fills it with sample catalog data.
//!
//! Run from repo root: `cargo run -p bakery-seeder`
//! Pass `--reset` to clear both tables first.

use bakery_api::{
    apply_migrations, connect, ensure_database_exists, AppError, CatalogService, NewBakedGood,
    NewBakery, ServerConfig,
};
use sqlx::SqlitePool;

const SAMPLE: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.0)],
    ),
    ("Bakery 1", &[]),
    ("Bakery 2", &[]),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bakery_api=info,bakery_seeder=info")),
        )
        .init();

    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");
    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;

    if reset {
        clear(&pool).await?;
    }
    let (bakeries, goods) = seed(&pool).await?;
    tracing::info!(bakeries, goods, database_url = %config.database_url, "seeded catalog");

    pool.close().await;
    Ok(())
}

async fn clear(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("DELETE FROM baked_goods").execute(pool).await?;
    sqlx::query("DELETE FROM bakeries").execute(pool).await?;
    tracing::info!("cleared existing rows");
    Ok(())
}

async fn seed(pool: &SqlitePool) -> Result<(usize, usize), AppError> {
    let mut goods_count = 0;
    for (bakery_name, goods) in SAMPLE {
        let bakery = CatalogService::insert_bakery(pool, &NewBakery::new(*bakery_name)).await?;
        for (name, price) in goods.iter() {
            let good = NewBakedGood::new(*name, *price).from_bakery(bakery.id);
            CatalogService::insert_baked_good(pool, &good).await?;
            goods_count += 1;
        }
    }
    Ok((SAMPLE.len(), goods_count))
}
