// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ZipfError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ZipfError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, ZipfError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Percentage normalization over a zero total is undefined. Surfaced as
    /// a named failure instead of propagating NaN through the pipeline.
    #[error("cannot compute percentages: total word count is zero")]
    EmptyInput,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("'{path}': found {found} ranked entries, need at least {need}")]
    NotEnoughEntries {
        path: PathBuf,
        found: usize,
        need: usize,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}' line {line_number}: {reason} (in: {line})")]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ZipfError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ZipfError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ZipfError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
