use super::BakedGood;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `bakeries`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub updated_at: Option<NaiveDateTime>,
}

/// A bakery together with the baked goods that reference it.
/// Serializes flat, with the goods under `baked_goods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakeryWithGoods {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}

#[derive(Debug, Clone)]
pub struct NewBakery {
    pub name: String,
}

impl NewBakery {
    pub fn new(name: impl Into<String>) -> Self {
        NewBakery { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(12, 0, 59)
            .unwrap()
    }

    #[test]
    fn nests_goods_one_level() {
        let bakery = BakeryWithGoods {
            bakery: Bakery {
                id: 2,
                name: "Delightful donuts".into(),
                created_at: Some(noon()),
                updated_at: Some(noon()),
            },
            baked_goods: vec![BakedGood {
                id: 7,
                name: "Chocolate dipped donut".into(),
                price: 2.75,
                created_at: None,
                updated_at: None,
                bakery_id: Some(2),
            }],
        };
        assert_eq!(
            serde_json::to_value(&bakery).unwrap(),
            json!({
                "id": 2,
                "name": "Delightful donuts",
                "created_at": "2023-12-31 12:00:59",
                "updated_at": "2023-12-31 12:00:59",
                "baked_goods": [{
                    "id": 7,
                    "name": "Chocolate dipped donut",
                    "price": 2.75,
                    "created_at": null,
                    "updated_at": null,
                    "bakery_id": 2
                }]
            })
        );
    }

    #[test]
    fn empty_bakery_has_empty_goods_list() {
        let bakery = BakeryWithGoods {
            bakery: Bakery {
                id: 1,
                name: "Empty shelf".into(),
                created_at: None,
                updated_at: None,
            },
            baked_goods: Vec::new(),
        };
        let value = serde_json::to_value(&bakery).unwrap();
        assert_eq!(value["baked_goods"], json!([]));
        assert!(value["created_at"].is_null());
    }
}
