use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;

pub mod category;
pub mod contract;
pub mod error;
pub mod functions;
pub mod order;
pub mod pool;
pub mod product;
pub mod schema;
pub mod user;

pub use error::DbError;

pub fn establish_connection() -> Result<PgConnection, DbError> {
    dotenv().ok();

    let db_url = env::var("DATABASE_URL")?;
    let conn = PgConnection::establish(&db_url)?;
    tracing::debug!("connected to database");

    Ok(conn)
}
