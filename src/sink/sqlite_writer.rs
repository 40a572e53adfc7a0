use std::path::Path;

use async_trait::async_trait;
use rusqlite::{Connection, params};
use tracing::info;

use super::SummarySink;
use super::error::PersistError;
use crate::domain::UserSummary;

/// Name of the summary table, fully replaced on each run
pub const SUMMARY_TABLE: &str = "user_cart_data";

/// Write the summary table to a SQLite database
///
/// Each persist drops and recreates `user_cart_data` inside one
/// transaction — a full replace, not an upsert or append.
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Open (or create) the database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self, PersistError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Access the underlying connection (query-back in tests and tooling)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[async_trait]
impl SummarySink for SqliteSink {
    async fn persist(&mut self, summaries: &[UserSummary]) -> Result<(), PersistError> {
        if summaries.is_empty() {
            return Err(PersistError::NothingToPersist);
        }

        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {SUMMARY_TABLE}"), [])?;
        tx.execute(
            &format!(
                "CREATE TABLE {SUMMARY_TABLE} (
                    user_id INTEGER NOT NULL,
                    last_added_date TEXT NOT NULL,
                    top_category TEXT NOT NULL
                )"
            ),
            [],
        )?;

        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO {SUMMARY_TABLE} (user_id, last_added_date, top_category) \
                 VALUES (?1, ?2, ?3)"
            ))?;
            for summary in summaries {
                insert.execute(params![
                    summary.user_id,
                    summary.last_added_date.to_string(),
                    summary.top_category,
                ])?;
            }
        }

        tx.commit()?;
        info!(rows = summaries.len(), table = SUMMARY_TABLE, "replaced summary table");
        Ok(())
    }
}
