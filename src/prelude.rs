//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use gravitino_client::prelude::*;
//! ```

// Core types
pub use crate::Error;
pub use crate::Result;

// Authentication
pub use crate::auth::{AuthDataProvider, Credential, SimpleAuthProvider};

// Configuration
pub use crate::config::{EnvVarSource, MemoryVarSource, Settings, VarSource};

// Filesystem
pub use crate::filesystem::{FileSystem, FileSystemContext, SimpleFileSystemContext, StorageKind};
