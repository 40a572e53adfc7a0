pub mod csv_writer;
pub mod error;
pub mod sqlite_writer;

// Re-export commonly used types
pub use csv_writer::{CsvSink, write_summaries};
pub use error::PersistError;
pub use sqlite_writer::{SUMMARY_TABLE, SqliteSink};

use async_trait::async_trait;

use crate::domain::UserSummary;

/// Destination for the aggregated summary rows
///
/// A persist replaces whatever the destination held before; partial writes
/// are never left behind on failure of an earlier pipeline stage, because
/// the sink only runs once aggregation has succeeded.
#[async_trait]
pub trait SummarySink {
    /// Persist the full summary sequence
    async fn persist(&mut self, summaries: &[UserSummary]) -> Result<(), PersistError>;
}
