use std::io;

use thiserror::Error;

/// Sink-level errors for persisting the summary table
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("no summary rows to persist")]
    NothingToPersist,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            PersistError::NothingToPersist.to_string(),
            "no summary rows to persist"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err = PersistError::from(io_err);

        match err {
            PersistError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn sqlite_error_conversion() {
        let sqlite_err = rusqlite::Error::InvalidQuery;
        let err = PersistError::from(sqlite_err);

        match err {
            PersistError::Sqlite(_) => {}
            _ => panic!("Expected Sqlite error variant"),
        }
    }
}
