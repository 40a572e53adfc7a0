use std::collections::HashMap;

use tracing::debug;

use super::error::InputError;
use crate::domain::{CartEntry, CategoryLookup, Product, UserAggregate, UserSummary};

/// Fold cart entries and the product catalog into one summary per user
///
/// Cart entries are scanned in input order and users appear in the output
/// in the order they were first encountered. An entry with no product
/// lines contributes no category but still moves that user's last added
/// date forward.
///
/// Pure function over its inputs; fails instead of returning an empty
/// result when either collection is empty.
pub fn aggregate(
    carts: &[CartEntry],
    products: &[Product],
) -> Result<Vec<UserSummary>, InputError> {
    if carts.is_empty() {
        return Err(InputError::NoCartData);
    }
    if products.is_empty() {
        return Err(InputError::NoProductData);
    }

    let categories = CategoryLookup::from_products(products);
    debug!(products = categories.len(), "built category lookup");

    // First-seen order drives the output order; the map holds the state.
    let mut seen_order: Vec<u64> = Vec::new();
    let mut aggregates: HashMap<u64, UserAggregate> = HashMap::new();

    for entry in carts {
        let aggregate = aggregates.entry(entry.user_id).or_insert_with(|| {
            seen_order.push(entry.user_id);
            UserAggregate::new(entry.date)
        });
        aggregate.observe_date(entry.date);

        for line in &entry.products {
            aggregate.add_quantity(categories.resolve(line.product_id), line.quantity);
        }
    }

    debug!(
        users = seen_order.len(),
        entries = carts.len(),
        "scanned cart entries"
    );

    Ok(seen_order
        .into_iter()
        .filter_map(|user_id| {
            aggregates
                .remove(&user_id)
                .and_then(|aggregate| aggregate.into_summary(user_id))
        })
        .collect())
}
