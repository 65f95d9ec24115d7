//! Fixed-pattern timestamp rendering for JSON output.

use chrono::NaiveDateTime;
use serde::Serializer;

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `serialize_with` target for nullable timestamps: `YYYY-MM-DD HH:MM:SS` or `null`.
pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.collect_str(&ts.format(FORMAT)),
        None => serializer.serialize_none(),
    }
}
