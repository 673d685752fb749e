//! Filesystem backend selection.
//!
//! A context is built from a single URI and binds one backend for its whole
//! lifetime. I/O goes through the bound [`opendal::Operator`].
//!
//! ```rust
//! use gravitino_client::filesystem::{FileSystemContext, SimpleFileSystemContext, StorageKind};
//!
//! # fn example() -> gravitino_client::Result<()> {
//! let ctx = SimpleFileSystemContext::new("file:/tmp/data")?;
//! assert_eq!(ctx.filesystem().kind(), StorageKind::Local);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod backend;
mod context;
mod hadoop;
pub mod registry;

pub use backend::{FileSystem, StorageKind};
pub use context::{FileSystemContext, SimpleFileSystemContext};
pub use hadoop::{HADOOP_CONF_DIR, HADOOP_HOME, HADOOP_USER_NAME, HadoopEnvironment};
pub use registry::{BACKENDS, BackendEntry};
