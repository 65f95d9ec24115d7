//! Catalog entities: row mappings and their JSON shape.

mod baked_good;
mod bakery;
pub mod timestamp;

pub use baked_good::{BakedGood, NewBakedGood};
pub use bakery::{Bakery, BakeryWithGoods, NewBakery};
