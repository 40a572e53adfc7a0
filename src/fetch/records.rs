use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{CartEntry, CartLine, Product};

/// Cart record as returned by the store API
///
/// The wire format is camelCase; dates are RFC 3339 timestamps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCartRecord {
    pub user_id: u64,
    pub date: DateTime<Utc>,
    pub products: Vec<RawCartLine>,
}

/// One product line inside a raw cart record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCartLine {
    pub product_id: u64,
    pub quantity: u32,
}

/// Product record as returned by the store API
///
/// The catalog carries more fields (title, price, description, image);
/// only the id and the aggregation dimension are retained.
#[derive(Debug, Deserialize)]
pub struct RawProductRecord {
    pub id: u64,
    pub category: String,
}

impl From<RawCartLine> for CartLine {
    fn from(raw: RawCartLine) -> Self {
        CartLine::new(raw.product_id, raw.quantity)
    }
}

impl From<RawCartRecord> for CartEntry {
    fn from(raw: RawCartRecord) -> Self {
        CartEntry::new(
            raw.user_id,
            raw.date,
            raw.products.into_iter().map(CartLine::from).collect(),
        )
    }
}

impl From<RawProductRecord> for Product {
    fn from(raw: RawProductRecord) -> Self {
        Product::new(raw.id, raw.category)
    }
}
