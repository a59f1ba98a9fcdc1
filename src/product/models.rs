use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::category::models::Category;
use crate::schema::product;

#[derive(
    Queryable, Selectable, Debug, PartialEq, Identifiable, Associations, Serialize, QueryableByName,
)]
#[diesel(table_name = product)]
#[diesel(belongs_to(Category, foreign_key = category))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub price: BigDecimal,
    #[serde(rename = "heroImage")]
    pub hero_image: String,
    #[serde(rename = "imagesUrl")]
    pub images_url: Vec<String>,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: i32,
    pub category: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = product)]
pub struct NewProduct {
    pub title: String,
    pub slug: String,
    pub price: BigDecimal,
    #[serde(rename = "heroImage")]
    pub hero_image: String,
    #[serde(rename = "imagesUrl")]
    pub images_url: Vec<String>,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: i32,
    pub category: i32,
}

#[derive(Insertable, Deserialize, AsChangeset)]
#[diesel(table_name = product)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub price: Option<BigDecimal>,
    #[serde(rename = "heroImage")]
    pub hero_image: Option<String>,
    #[serde(rename = "imagesUrl")]
    pub images_url: Option<Vec<String>>,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: Option<i32>,
    pub category: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_product_requires_category() {
        let missing_category = json!({
            "title": "iPhone 14",
            "slug": "iphone-14",
            "price": "899.00",
            "heroImage": "http://x/hero.png",
            "imagesUrl": ["http://x/1.png", "http://x/2.png"],
            "maxQuantity": 10
        });
        assert!(serde_json::from_value::<NewProduct>(missing_category).is_err());
    }

    #[test]
    fn new_product_deserializes_gallery() {
        let payload = json!({
            "title": "iPhone 14",
            "slug": "iphone-14",
            "price": "899.00",
            "heroImage": "http://x/hero.png",
            "imagesUrl": ["http://x/1.png"],
            "maxQuantity": 10,
            "category": 1
        });
        let product: NewProduct = serde_json::from_value(payload).unwrap();
        assert_eq!(product.images_url, vec!["http://x/1.png"]);
        assert_eq!(product.max_quantity, 10);
    }
}
