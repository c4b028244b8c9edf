//! JSON export document.

use crate::error::Result;
use crate::model::{Dataset, Order, Product, Statistics, User};
use serde::Serialize;

/// Top-level JSON document. Field order is the output key order.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub generated_at: &'a str,
    pub statistics: Statistics,
    pub users: &'a [User],
    pub products: &'a [Product],
    pub orders: &'a [Order],
}

impl<'a> ExportDocument<'a> {
    pub fn new(dataset: &'a Dataset, generated_at: &'a str) -> Self {
        Self {
            generated_at,
            statistics: dataset.statistics(),
            users: &dataset.users,
            products: &dataset.products,
            orders: &dataset.orders,
        }
    }
}

/// Pretty-printed (2-space) JSON with a trailing newline. Non-ASCII stays literal.
pub fn render_json(dataset: &Dataset, generated_at: &str) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&ExportDocument::new(dataset, generated_at))?;
    out.push('\n');
    Ok(out)
}
