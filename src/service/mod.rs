//! CatalogService: typed queries over the bakery tables.

mod catalog;
pub use catalog::CatalogService;
