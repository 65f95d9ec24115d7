//! Bakery API: read-only REST catalog of bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{BakedGood, Bakery, BakeryWithGoods, NewBakedGood, NewBakery};
pub use routes::{app, catalog_routes, common_routes, common_routes_with_ready};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_database_exists};
