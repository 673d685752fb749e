//! Pluggable configuration sources.
//!
//! Everything that would otherwise read the process environment takes a
//! [`VarSource`] instead:
//!
//! ```rust
//! use gravitino_client::config::{CompositeVarSource, EnvVarSource, MemoryVarSource, VarSource};
//!
//! let source = CompositeVarSource::new()
//!     .source(MemoryVarSource::new().value("GRAVITINO_USER", "alice"))
//!     .source(EnvVarSource::new());
//!
//! assert_eq!(source.get("GRAVITINO_USER").as_deref(), Some("alice"));
//! ```

pub mod composite;
pub mod env;
pub mod memory;
pub mod provider;
pub mod settings;

pub use composite::CompositeVarSource;
pub use env::EnvVarSource;
pub use memory::MemoryVarSource;
pub use provider::VarSource;
pub use settings::{AuthSettings, FileSystemSettings, Settings};
