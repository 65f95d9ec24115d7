//! Request extractors.

mod bakery_id;
pub use bakery_id::BakeryId;
