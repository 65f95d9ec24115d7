//! HTTP handlers for the catalog routes.

pub mod baked_good;
pub mod bakery;
pub mod index;
pub use baked_good::*;
pub use bakery::*;
pub use index::*;
