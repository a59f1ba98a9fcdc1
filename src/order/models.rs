use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::product::models::Product;
use crate::schema::{order, order_item};
use crate::user::models::User;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Associations, Serialize)]
#[diesel(table_name = order)]
#[diesel(belongs_to(User, foreign_key = user))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub slug: String,
    pub status: String,
    #[serde(rename = "totalPrice")]
    pub total_price: BigDecimal,
    pub description: Option<String>,
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    // Known statuses; the database does not enforce these.
    pub const STATUS_PENDING: &'static str = "pending";
    pub const STATUS_PAID: &'static str = "paid";
    pub const STATUS_SHIPPED: &'static str = "shipped";
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = order)]
pub struct NewOrder {
    pub slug: String,
    pub status: String,
    #[serde(rename = "totalPrice")]
    pub total_price: BigDecimal,
    pub description: Option<String>,
    pub user: String,
}

#[derive(Insertable, Deserialize, AsChangeset)]
#[diesel(table_name = order)]
pub struct UpdateOrder {
    pub slug: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "totalPrice")]
    pub total_price: Option<BigDecimal>,
    pub description: Option<String>,
    pub user: Option<String>,
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Associations, Serialize)]
#[diesel(table_name = order_item)]
#[diesel(belongs_to(Order, foreign_key = order))]
#[diesel(belongs_to(Product, foreign_key = product))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order: i32,
    pub product: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = order_item)]
pub struct NewOrderItem {
    pub order: i32,
    pub product: i32,
    pub quantity: i32,
}
