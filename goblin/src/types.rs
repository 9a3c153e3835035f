use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    /// A lambda declared a parameter count the target has no marker for.
    #[error("Unsupported lambda arity {arity} (expected 0, 1 or 2): {lambda}")]
    UnsupportedLambdaArity { arity: usize, lambda: String },

    #[error("Lambda source does not parse as a function: {0}")]
    MalformedLambdaSource(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] sonic_rs::Error),

    #[error("Invalid traversal descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type TranslatorResult<T> = Result<T, TranslatorError>;
