use tracing::info;

use super::error::AppError;
use crate::engine::aggregate;
use crate::fetch::{StoreSource, extract_both};
use crate::sink::SummarySink;

/// One extract-transform-load run over a store source
///
/// Stateless across invocations: each run fetches fresh collections, folds
/// them into per-user summaries, and hands the result to the sink. The
/// first failing stage aborts the run and nothing is written.
pub struct CartPipeline<S> {
    source: S,
}

impl<S: StoreSource> CartPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run extract → aggregate → persist; returns the number of rows written
    pub async fn run<K>(&self, sink: &mut K) -> Result<usize, AppError>
    where
        K: SummarySink + Send,
    {
        let (carts, products) = extract_both(&self.source).await?;
        info!(carts = carts.len(), products = products.len(), "extract complete");

        let summaries = aggregate(&carts, &products)?;
        info!(users = summaries.len(), "aggregation complete");

        sink.persist(&summaries).await?;
        Ok(summaries.len())
    }
}
