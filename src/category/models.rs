use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::category;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = category)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub products: Option<Vec<i32>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = category)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub products: Option<Vec<i32>>,
}

#[derive(Insertable, Deserialize, AsChangeset)]
#[diesel(table_name = category)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub products: Option<Vec<i32>>,
}
