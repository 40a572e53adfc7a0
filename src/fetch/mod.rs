pub mod error;
pub mod http;
pub mod records;
pub mod source;

// Re-export commonly used types
pub use error::FetchError;
pub use http::HttpSource;
pub use records::{RawCartLine, RawCartRecord, RawProductRecord};
pub use source::{StoreSource, extract_both};
