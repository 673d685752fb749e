//! Bound storage backends.

use opendal::services::{Fs, Webhdfs};
use opendal::{Operator, Scheme};

use crate::Result;

/// Root used for every binding; URI paths are resolved against it by the caller.
const BACKEND_ROOT: &str = "/";

/// Kind of backend a [`FileSystem`] is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Hadoop,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Local => "local",
            StorageKind::Hadoop => "hadoop",
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a storage backend.
///
/// All backends expose the same [`Operator`] surface; the kind records which
/// one was chosen and never changes.
#[derive(Clone, Debug)]
pub struct FileSystem {
    kind: StorageKind,
    operator: Operator,
}

impl FileSystem {
    /// Local disk, rooted at `/`.
    pub fn local() -> Result<Self> {
        let operator = Operator::new(Fs::default().root(BACKEND_ROOT))?.finish();
        Ok(Self {
            kind: StorageKind::Local,
            operator,
        })
    }

    /// HDFS through its WebHDFS REST endpoint (e.g. `http://namenode:9870`).
    pub fn webhdfs(endpoint: &str) -> Result<Self> {
        let builder = Webhdfs::default().endpoint(endpoint).root(BACKEND_ROOT);
        let operator = Operator::new(builder)?.finish();
        Ok(Self {
            kind: StorageKind::Hadoop,
            operator,
        })
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Scheme reported by the underlying operator.
    pub fn scheme(&self) -> Scheme {
        self.operator.info().scheme()
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn into_operator(self) -> Operator {
        self.operator
    }
}
