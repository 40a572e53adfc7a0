use std::collections::HashMap;

/// Category assigned to product ids absent from the catalog
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A catalog product reduced to its aggregation dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub category: String,
}

impl Product {
    pub fn new(id: u64, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
        }
    }
}

/// Lookup from product id to category, built once per run
///
/// Duplicate ids in the catalog resolve to the last one seen, which keeps
/// the mapping deterministic for a given input order.
#[derive(Debug, Default)]
pub struct CategoryLookup {
    by_id: HashMap<u64, String>,
}

impl CategoryLookup {
    /// Build the lookup by scanning the catalog once
    pub fn from_products(products: &[Product]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for product in products {
            by_id.insert(product.id, product.category.clone());
        }
        Self { by_id }
    }

    /// Resolve a product id to its category, defaulting to "unknown"
    pub fn resolve(&self, product_id: u64) -> &str {
        self.by_id
            .get(&product_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
