//! Per-user shopping-cart aggregation pipeline
//!
//! Extracts cart and product collections from a store API, folds them into
//! one summary row per user (last added date and top category), and
//! persists the result to a CSV file or a SQLite table.

pub mod app;
pub mod domain;
pub mod engine;
pub mod fetch;
pub mod prelude;
pub mod sink;
