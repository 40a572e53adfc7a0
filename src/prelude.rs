//! Prelude module for convenient imports
//!
//! Import everything you need with: `use cartsum::prelude::*;`

// Domain types
pub use crate::domain::{
    CartEntry, CartLine, CategoryLookup, CategoryTotals, Product, UserAggregate, UserSummary,
};

// Fetch types
pub use crate::fetch::{FetchError, HttpSource, StoreSource, extract_both};

// Engine types
pub use crate::engine::{InputError, aggregate};

// Sink types
pub use crate::sink::{CsvSink, PersistError, SqliteSink, SummarySink, write_summaries};

// App types
pub use crate::app::{AppError, CartPipeline, CliApp};
