use reqwest::StatusCode;
use thiserror::Error;

/// Fetch-level errors for remote extraction
///
/// Any fetch failure aborts the run; nothing is retried and no partial
/// results are used.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: StatusCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_endpoint() {
        let err = FetchError::Status {
            endpoint: "https://store.example/carts".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };

        assert_eq!(
            err.to_string(),
            "https://store.example/carts returned status 500 Internal Server Error"
        );
    }
}
