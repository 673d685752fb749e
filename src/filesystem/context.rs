//! Filesystem contexts.

use secrecy::SecretString;

use super::backend::FileSystem;
use super::hadoop::HadoopEnvironment;
use super::registry;
use crate::config::{EnvVarSource, FileSystemSettings, Settings, VarSource};
use crate::{Error, Result};

/// Capability surface of a filesystem context.
///
/// Variants implement the subset they support; the rest report
/// [`Error::NotSupported`].
pub trait FileSystemContext: Send + Sync {
    /// Context name for debugging.
    fn name(&self) -> &'static str;

    /// The bound backend.
    fn filesystem(&self) -> &FileSystem;

    /// Secret used to access the backend.
    fn secret(&self) -> Result<SecretString> {
        Err(Error::NotSupported {
            provider: self.name(),
            operation: "secret",
        })
    }
}

/// Context that binds a backend purely from the URI scheme.
///
/// - `hdfs://`, `lavafs://`: WebHDFS, after discovering the Hadoop environment
/// - `file:/`: local disk
///
/// Any other URI fails with [`Error::UnsupportedStorage`].
#[derive(Debug)]
pub struct SimpleFileSystemContext {
    filesystem: FileSystem,
    hadoop_env: Option<HadoopEnvironment>,
}

impl SimpleFileSystemContext {
    /// Bind `uri` using the process environment and default settings.
    pub fn new(uri: &str) -> Result<Self> {
        Self::with_source(uri, &EnvVarSource::new(), &FileSystemSettings::default())
    }

    pub fn with_source(
        uri: &str,
        source: &dyn VarSource,
        settings: &FileSystemSettings,
    ) -> Result<Self> {
        let binding = registry::bind(uri, source, settings)?;
        Ok(Self {
            filesystem: binding.filesystem,
            hadoop_env: binding.hadoop_env,
        })
    }

    /// Bind `uri` using the filesystem section of a full settings document.
    pub fn from_settings(uri: &str, source: &dyn VarSource, settings: &Settings) -> Result<Self> {
        Self::with_source(uri, source, &settings.filesystem)
    }

    /// Environment discovered for a Hadoop binding; `None` for other backends.
    pub fn hadoop_environment(&self) -> Option<&HadoopEnvironment> {
        self.hadoop_env.as_ref()
    }
}

impl FileSystemContext for SimpleFileSystemContext {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn filesystem(&self) -> &FileSystem {
        &self.filesystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryVarSource;
    use crate::filesystem::StorageKind;

    fn context(uri: &str) -> Result<SimpleFileSystemContext> {
        SimpleFileSystemContext::with_source(
            uri,
            &MemoryVarSource::new().value("HADOOP_HOME", "/opt/hadoop"),
            &FileSystemSettings::default(),
        )
    }

    #[test]
    fn test_local_context() {
        let ctx = context("file:/tmp/x").unwrap();
        assert_eq!(ctx.filesystem().kind(), StorageKind::Local);
        assert!(ctx.hadoop_environment().is_none());
    }

    #[test]
    fn test_hadoop_context() {
        let ctx = context("hdfs://host/path").unwrap();
        assert_eq!(ctx.filesystem().kind(), StorageKind::Hadoop);
        let env = ctx.hadoop_environment().unwrap();
        assert_eq!(env.hadoop_home.as_deref(), Some(std::path::Path::new("/opt/hadoop")));
    }

    #[test]
    fn test_lavafs_context() {
        let ctx = context("lavafs://cluster/data").unwrap();
        assert_eq!(ctx.filesystem().kind(), StorageKind::Hadoop);
        assert!(ctx.hadoop_environment().is_some());
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = context("s3://bucket/key").unwrap_err();
        assert!(err.to_string().contains("s3://bucket/key"));
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_from_settings_uses_filesystem_section() {
        let settings = Settings::from_json(r#"{"filesystem": {"webhdfsPort": 0}}"#);
        assert!(settings.is_err());

        let settings =
            Settings::from_json(r#"{"filesystem": {"webhdfsEndpoint": "http://gw:14000"}}"#)
                .unwrap();
        let ctx = SimpleFileSystemContext::from_settings(
            "hdfs:///data",
            &MemoryVarSource::new(),
            &settings,
        )
        .unwrap();
        assert_eq!(ctx.filesystem().kind(), StorageKind::Hadoop);
    }

    #[test]
    fn test_secret_not_supported() {
        for uri in ["file:/tmp/x", "hdfs://host/path"] {
            let ctx = context(uri).unwrap();
            let err = ctx.secret().unwrap_err();
            assert!(matches!(
                err,
                Error::NotSupported {
                    provider: "simple",
                    operation: "secret"
                }
            ));
        }
    }
}
