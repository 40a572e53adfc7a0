use chrono::{DateTime, Utc};

/// One product line inside a cart entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: u64, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A user's recorded set of added products at a point in time
///
/// Immutable once constructed; entries exist only for the duration of one
/// pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub user_id: u64,
    pub date: DateTime<Utc>,
    pub products: Vec<CartLine>,
}

impl CartEntry {
    pub fn new(user_id: u64, date: DateTime<Utc>, products: Vec<CartLine>) -> Self {
        Self {
            user_id,
            date,
            products,
        }
    }

    /// Total quantity across all lines in this entry
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
