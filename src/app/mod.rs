pub mod cli;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use cli::CliApp;
pub use error::AppError;
pub use pipeline::CartPipeline;
