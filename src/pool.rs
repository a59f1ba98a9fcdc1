use std::env;

use crate::error::DbError;

pub type Pool = deadpool_diesel::postgres::Pool;

pub fn create_pool(db_url: &str) -> Result<Pool, DbError> {
    let manager = deadpool_diesel::postgres::Manager::new(db_url, deadpool_diesel::Runtime::Tokio1);
    let pool = deadpool_diesel::postgres::Pool::builder(manager)
        .build()
        .map_err(|e| DbError::Pool(e.to_string()))?;
    tracing::debug!("created db pool");

    Ok(pool)
}

pub fn pool_from_env() -> Result<Pool, DbError> {
    dotenvy::dotenv().ok();

    let db_url = env::var("DATABASE_URL")?;
    create_pool(&db_url)
}
