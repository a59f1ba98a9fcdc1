use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::users;

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    // Issued by the auth provider, not generated by Postgres.
    pub id: String,
    pub email: String,
    pub avatar_url: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub expo_notification_token: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub avatar_url: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub expo_notification_token: Option<String>,
    pub stripe_customer_id: Option<String>,
}

#[derive(Insertable, Deserialize, AsChangeset)]
#[diesel(table_name = users)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub expo_notification_token: Option<String>,
    pub stripe_customer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_carries_external_id() {
        let payload = json!({
            "id": "auth-user-1",
            "email": "a@b.c",
            "avatar_url": "http://x/a.png"
        });
        let user: NewUser = serde_json::from_value(payload).unwrap();
        assert_eq!(user.id, "auth-user-1");
        assert!(user.stripe_customer_id.is_none());
    }

    #[test]
    fn user_type_keeps_database_spelling_in_json() {
        let patch: UpdateUser =
            serde_json::from_value(json!({ "type": "ADMIN" })).unwrap();
        assert_eq!(patch.type_.as_deref(), Some("ADMIN"));
    }
}
