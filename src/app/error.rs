use std::io;

use thiserror::Error;

use crate::engine::InputError;
use crate::fetch::FetchError;
use crate::sink::PersistError;

/// Top-level application errors unifying all pipeline stages
#[derive(Error, Debug)]
pub enum AppError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("persist error: {0}")]
    Persist(#[from] PersistError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
