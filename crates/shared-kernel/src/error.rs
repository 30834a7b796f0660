// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SilkRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SilkRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl SilkRangeError {
    /// True when the error (or any wrapped cause) is an unreadable configuration file.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_config_error(),
            Self::Infrastructure(InfrastructureError::ConfigRead { .. }) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SilkRangeError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Search of partition {class}|{type_name} failed: {source}")]
    PartitionSearchFailed {
        class: String,
        type_name: String,
        #[source]
        source: Box<SilkRangeError>,
    },

    #[error("Listing types of class '{class}' failed: {source}")]
    ClassListingFailed {
        class: String,
        #[source]
        source: Box<SilkRangeError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read configuration '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{path}': {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render report: {0}")]
    RenderFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for SilkRangeError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SilkRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SilkRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SilkRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
