//! SQL export: one INSERT statement per record, grouped by table.

use crate::model::Dataset;
use std::fmt::Write;

const HEADER: &str = "-- Test Data Generated by qa-datagen";

/// SQL value representation
#[derive(Debug, Clone, Copy)]
pub enum SqlValue<'a> {
    Int(i64),
    Float(f64),
    String(&'a str),
    Bool(bool),
}

impl SqlValue<'_> {
    /// Format as an SQL literal
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Float(n) => format!("{:.2}", n),
            SqlValue::String(s) => format!("'{}'", escape_sql_string(s)),
            SqlValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        }
    }
}

/// Standard SQL string escaping: double embedded single quotes.
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

fn push_insert(out: &mut String, table: &str, columns: &[&str], values: &[SqlValue<'_>]) {
    let values: Vec<String> = values.iter().map(SqlValue::to_sql).collect();
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns.join(", "),
        values.join(", ")
    );
}

/// Render the dataset as INSERT statements for users, products, orders and order_items.
pub fn render_sql(dataset: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n-- USERS\n");

    for user in &dataset.users {
        push_insert(
            &mut out,
            "users",
            &["id", "email", "name", "phone", "created_at", "plan", "is_active"],
            &[
                SqlValue::String(&user.id),
                SqlValue::String(&user.email),
                SqlValue::String(&user.name),
                SqlValue::String(&user.phone),
                SqlValue::String(&user.created_at),
                SqlValue::String(user.plan.as_str()),
                SqlValue::Bool(user.is_active),
            ],
        );
    }

    out.push_str("\n-- PRODUCTS\n");
    for product in &dataset.products {
        push_insert(
            &mut out,
            "products",
            &["id", "name", "price", "category", "stock", "sku"],
            &[
                SqlValue::String(&product.id),
                SqlValue::String(&product.name),
                SqlValue::Float(product.price),
                SqlValue::String(product.category.as_str()),
                SqlValue::Int(i64::from(product.stock)),
                SqlValue::String(&product.sku),
            ],
        );
    }

    out.push_str("\n-- ORDERS\n");
    for order in &dataset.orders {
        push_insert(
            &mut out,
            "orders",
            &["id", "user_id", "total", "status", "created_at"],
            &[
                SqlValue::String(&order.id),
                SqlValue::String(&order.user_id),
                SqlValue::Float(order.total),
                SqlValue::String(order.status.as_str()),
                SqlValue::String(&order.created_at),
            ],
        );
    }

    out.push_str("\n-- ORDER_ITEMS\n");
    for order in &dataset.orders {
        for item in &order.items {
            push_insert(
                &mut out,
                "order_items",
                &["order_id", "product_id", "quantity", "price", "subtotal"],
                &[
                    SqlValue::String(&order.id),
                    SqlValue::String(&item.product_id),
                    SqlValue::Int(i64::from(item.quantity)),
                    SqlValue::Float(item.price),
                    SqlValue::Float(item.subtotal),
                ],
            );
        }
    }

    out
}
