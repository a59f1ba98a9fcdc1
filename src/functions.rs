use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;

/// Calls the `decrement_product_quantity` stored function. The atomic
/// check-and-subtract lives in the database; this is only its typed
/// signature.
pub fn decrement_product_quantity(
    conn: &mut PgConnection,
    product_id: i32,
    quantity: i32,
) -> QueryResult<()> {
    tracing::debug!(product_id, quantity, "decrement_product_quantity");
    sql_query("SELECT decrement_product_quantity($1, $2)")
        .bind::<Integer, _>(product_id)
        .bind::<Integer, _>(quantity)
        .execute(conn)?;

    Ok(())
}
