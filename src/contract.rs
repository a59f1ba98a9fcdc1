//! Runtime view of the schema: per-table field shapes and foreign-key
//! edges, mirroring what the `schema` module declares at compile time.
//!
//! A read returns every `row` field. An insert must supply the
//! `insert_required` fields; the `insert_optional` ones are filled by the
//! database (generated ids, `created_at` defaults) or are nullable. An
//! update may touch any subset of `update`.

/// Shape descriptors for one table, keyed by the database column spelling.
#[derive(Debug, PartialEq, Eq)]
pub struct TableContract {
    pub name: &'static str,
    pub row: &'static [&'static str],
    pub insert_required: &'static [&'static str],
    pub insert_optional: &'static [&'static str],
    pub update: &'static [&'static str],
    pub relationships: &'static [Relationship],
}

/// A declared foreign-key edge, named after the constraint in Postgres.
#[derive(Debug, PartialEq, Eq)]
pub struct Relationship {
    pub foreign_key: &'static str,
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub one_to_one: bool,
}

/// Signature of a stored function callable through the client.
#[derive(Debug, PartialEq, Eq)]
pub struct FunctionContract {
    pub name: &'static str,
    pub args: &'static [(&'static str, &'static str)],
    pub returns: Option<&'static str>,
}

pub const CATEGORY: TableContract = TableContract {
    name: "category",
    row: &["id", "name", "slug", "imageUrl", "products", "created_at"],
    insert_required: &["name", "slug", "imageUrl"],
    insert_optional: &["id", "products", "created_at"],
    update: &["id", "name", "slug", "imageUrl", "products", "created_at"],
    relationships: &[],
};

pub const ORDER: TableContract = TableContract {
    name: "order",
    row: &["id", "slug", "status", "totalPrice", "description", "user", "created_at"],
    insert_required: &["slug", "status", "totalPrice", "user"],
    insert_optional: &["id", "description", "created_at"],
    update: &["id", "slug", "status", "totalPrice", "description", "user", "created_at"],
    relationships: &[Relationship {
        foreign_key: "order_user_fkey",
        column: "user",
        references_table: "users",
        references_column: "id",
        one_to_one: false,
    }],
};

pub const ORDER_ITEM: TableContract = TableContract {
    name: "order_item",
    row: &["id", "order", "product", "quantity", "created_at"],
    insert_required: &["order", "product", "quantity"],
    insert_optional: &["id", "created_at"],
    update: &["id", "order", "product", "quantity", "created_at"],
    relationships: &[
        Relationship {
            foreign_key: "order_item_order_fkey",
            column: "order",
            references_table: "order",
            references_column: "id",
            one_to_one: false,
        },
        Relationship {
            foreign_key: "order_item_product_fkey",
            column: "product",
            references_table: "product",
            references_column: "id",
            one_to_one: false,
        },
    ],
};

pub const PRODUCT: TableContract = TableContract {
    name: "product",
    row: &[
        "id",
        "title",
        "slug",
        "price",
        "heroImage",
        "imagesUrl",
        "maxQuantity",
        "category",
        "created_at",
    ],
    insert_required: &[
        "title",
        "slug",
        "price",
        "heroImage",
        "imagesUrl",
        "maxQuantity",
        "category",
    ],
    insert_optional: &["id", "created_at"],
    update: &[
        "id",
        "title",
        "slug",
        "price",
        "heroImage",
        "imagesUrl",
        "maxQuantity",
        "category",
        "created_at",
    ],
    relationships: &[Relationship {
        foreign_key: "product_category_fkey",
        column: "category",
        references_table: "category",
        references_column: "id",
        one_to_one: false,
    }],
};

pub const USERS: TableContract = TableContract {
    name: "users",
    row: &[
        "id",
        "email",
        "avatar_url",
        "type",
        "expo_notification_token",
        "stripe_customer_id",
        "created_at",
    ],
    insert_required: &["id", "email", "avatar_url"],
    insert_optional: &[
        "type",
        "expo_notification_token",
        "stripe_customer_id",
        "created_at",
    ],
    update: &[
        "id",
        "email",
        "avatar_url",
        "type",
        "expo_notification_token",
        "stripe_customer_id",
        "created_at",
    ],
    relationships: &[],
};

pub const DECREMENT_PRODUCT_QUANTITY: FunctionContract = FunctionContract {
    name: "decrement_product_quantity",
    args: &[("product_id", "integer"), ("quantity", "integer")],
    returns: None,
};

const TABLES: [&TableContract; 5] = [&CATEGORY, &ORDER, &ORDER_ITEM, &PRODUCT, &USERS];

/// Every declared table, in name order.
pub fn tables() -> &'static [&'static TableContract] {
    &TABLES
}

pub fn table(name: &str) -> Option<&'static TableContract> {
    TABLES.iter().find(|t| t.name == name).copied()
}

pub fn row_shape(table_name: &str) -> Option<&'static [&'static str]> {
    table(table_name).map(|t| t.row)
}

pub fn insert_shape(table_name: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    table(table_name).map(|t| (t.insert_required, t.insert_optional))
}

pub fn update_shape(table_name: &str) -> Option<&'static [&'static str]> {
    table(table_name).map(|t| t.update)
}

pub fn relationships(table_name: &str) -> Option<&'static [Relationship]> {
    table(table_name).map(|t| t.relationships)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_required_fields_are_row_fields() {
        for table in tables() {
            for field in table.insert_required {
                assert!(
                    table.row.contains(field),
                    "{}.{} required on insert but absent from row",
                    table.name,
                    field
                );
            }
        }
    }

    #[test]
    fn insert_shape_partitions_the_row() {
        for table in tables() {
            assert_eq!(
                table.insert_required.len() + table.insert_optional.len(),
                table.row.len(),
                "{}: insert shape does not cover the row",
                table.name
            );
            for field in table.insert_optional {
                assert!(table.row.contains(field));
                assert!(!table.insert_required.contains(field));
            }
        }
    }

    #[test]
    fn every_row_field_is_updatable() {
        for table in tables() {
            assert_eq!(table.update, table.row, "{}", table.name);
        }
    }

    #[test]
    fn foreign_keys_reference_declared_tables() {
        for t in tables() {
            for rel in t.relationships {
                let referenced = table(rel.references_table)
                    .unwrap_or_else(|| panic!("{} references unknown table", rel.foreign_key));
                assert!(
                    referenced.row.contains(&rel.references_column),
                    "{} references unknown column {}.{}",
                    rel.foreign_key,
                    rel.references_table,
                    rel.references_column
                );
                assert!(t.row.contains(&rel.column));
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(table("order_item"), Some(&ORDER_ITEM));
        assert!(table("carts").is_none());
        assert_eq!(row_shape("users").map(|r| r.len()), Some(7));
        assert!(relationships("category").is_some_and(|r| r.is_empty()));
    }

    #[test]
    fn decrement_signature() {
        let f = &DECREMENT_PRODUCT_QUANTITY;
        assert_eq!(f.args, [("product_id", "integer"), ("quantity", "integer")]);
        assert!(f.returns.is_none());
    }
}
