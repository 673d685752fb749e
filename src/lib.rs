//! # gravitino-client
//!
//! Core pieces of the Gravitino client: request authorization and filesystem
//! backend selection.
//!
//! ## Authorization
//!
//! ```rust
//! use gravitino_client::auth::{AuthDataProvider, SimpleAuthProvider};
//!
//! let provider = SimpleAuthProvider::new(Some("alice"));
//! assert!(provider.has_credential());
//! assert_eq!(provider.credential(), b"Basic YWxpY2U6ZHVtbXk=");
//! ```
//!
//! ## Filesystem selection
//!
//! ```rust
//! use gravitino_client::filesystem::{FileSystemContext, SimpleFileSystemContext, StorageKind};
//!
//! # fn main() -> Result<(), gravitino_client::Error> {
//! let ctx = SimpleFileSystemContext::new("file:/tmp/warehouse")?;
//! assert_eq!(ctx.filesystem().kind(), StorageKind::Local);
//!
//! let err = SimpleFileSystemContext::new("s3://bucket/key").unwrap_err();
//! assert!(err.is_unsupported());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;
pub mod filesystem;
pub mod prelude;

// Re-exports for convenience
pub use auth::{AuthDataProvider, AuthScheme, Credential, SimpleAuthProvider};
pub use config::{
    AuthSettings, CompositeVarSource, EnvVarSource, FileSystemSettings, MemoryVarSource,
    Settings, VarSource,
};
pub use filesystem::{
    FileSystem, FileSystemContext, HadoopEnvironment, SimpleFileSystemContext, StorageKind,
};

/// Error type for gravitino-client operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No backend handles the URI's scheme.
    #[error("Storage type doesn't support now. Path:{uri}")]
    UnsupportedStorage { uri: String },

    /// Operation not supported by this provider or context variant.
    #[error("{operation} is not supported by {provider}")]
    NotSupported {
        provider: &'static str,
        operation: &'static str,
    },

    /// URI has a supported scheme but cannot be bound.
    #[error("Invalid URI {uri}: {message}")]
    InvalidUri { uri: String, message: String },

    /// The storage backend rejected the binding.
    #[error("Storage backend error: {0}")]
    Backend(#[from] opendal::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration, URI, or parsing errors
    Configuration,
    /// Capability or scheme not available in this variant
    Unsupported,
    /// Backend library failures
    Internal,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::Json(_) | Error::InvalidUri { .. } => {
                ErrorCategory::Configuration
            }
            Error::UnsupportedStorage { .. } | Error::NotSupported { .. } => {
                ErrorCategory::Unsupported
            }
            Error::Backend(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_unsupported(&self) -> bool {
        self.category() == ErrorCategory::Unsupported
    }
}

/// Result type alias for gravitino-client operations.
pub type Result<T> = std::result::Result<T, Error>;
