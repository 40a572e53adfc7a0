use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv_async::AsyncWriterBuilder;
use futures::io::AsyncWrite;
use tokio::fs::File;
use tokio_util::compat::TokioAsyncWriteCompatExt;
use tracing::info;

use super::SummarySink;
use super::error::PersistError;
use crate::domain::UserSummary;

/// Serialize summary rows as CSV to an async writer
///
/// The header row comes from the record's field names
/// (`user_id,last_added_date,top_category`); no index column is written.
pub async fn write_summaries<W>(summaries: &[UserSummary], writer: W) -> Result<(), PersistError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut serializer = AsyncWriterBuilder::new().create_serializer(writer);
    for summary in summaries {
        serializer.serialize(summary).await?;
    }
    serializer.flush().await?;
    Ok(())
}

/// Write the summary table to a delimited file
///
/// Overwrite semantics: any previous file at the path is replaced.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SummarySink for CsvSink {
    async fn persist(&mut self, summaries: &[UserSummary]) -> Result<(), PersistError> {
        if summaries.is_empty() {
            return Err(PersistError::NothingToPersist);
        }

        let file = File::create(&self.path).await?;
        write_summaries(summaries, file.compat_write()).await?;

        info!(rows = summaries.len(), path = %self.path.display(), "wrote summary file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::io::Cursor;

    fn summary(user_id: u64, day: u32, category: &str) -> UserSummary {
        UserSummary {
            user_id,
            last_added_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            top_category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn writes_header_and_rows() {
        let summaries = vec![summary(1, 2, "clothing"), summary(2, 5, "electronics")];
        let mut output = Cursor::new(Vec::new());

        write_summaries(&summaries, &mut output).await.unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "user_id,last_added_date,top_category");
        assert_eq!(lines[1], "1,2024-01-02,clothing");
        assert_eq!(lines[2], "2,2024-01-05,electronics");
    }

    #[tokio::test]
    async fn sink_refuses_empty_summaries() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvSink::new(dir.path().join("out.csv"));

        let result = sink.persist(&[]).await;
        assert!(matches!(result, Err(PersistError::NothingToPersist)));
        assert!(!dir.path().join("out.csv").exists());
    }

    #[tokio::test]
    async fn sink_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = CsvSink::new(&path);

        sink.persist(&[summary(1, 2, "clothing"), summary(2, 3, "toys")])
            .await
            .unwrap();
        sink.persist(&[summary(9, 4, "garden")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "9,2024-01-04,garden");
    }
}
