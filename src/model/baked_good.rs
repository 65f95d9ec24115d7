use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `baked_goods`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub updated_at: Option<NaiveDateTime>,
    pub bakery_id: Option<i64>,
}

/// Insert payload; `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
}

impl NewBakedGood {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        NewBakedGood {
            name: name.into(),
            price,
            bakery_id: None,
        }
    }

    pub fn from_bakery(mut self, bakery_id: i64) -> Self {
        self.bakery_id = Some(bakery_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn serializes_all_fields_with_formatted_timestamps() {
        let created = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let good = BakedGood {
            id: 4,
            name: "Croissant".into(),
            price: 3.5,
            created_at: Some(created),
            updated_at: None,
            bakery_id: Some(1),
        };
        assert_eq!(
            serde_json::to_value(&good).unwrap(),
            json!({
                "id": 4,
                "name": "Croissant",
                "price": 3.5,
                "created_at": "2024-03-09 07:05:00",
                "updated_at": null,
                "bakery_id": 1
            })
        );
    }

    #[test]
    fn orphan_serializes_null_bakery() {
        let good = BakedGood {
            id: 1,
            name: "Scone".into(),
            price: 2.0,
            created_at: None,
            updated_at: None,
            bakery_id: None,
        };
        let value = serde_json::to_value(&good).unwrap();
        assert!(value["bakery_id"].is_null());
        assert!(value["created_at"].is_null());
    }
}
