//! Ordered URI-prefix dispatch table.
//!
//! Entries are matched top-down; the first whose prefix matches the URI
//! builds the binding. Adding a backend means adding one entry here.

use url::Url;

use super::backend::{FileSystem, StorageKind};
use super::hadoop::HadoopEnvironment;
use crate::config::{FileSystemSettings, VarSource};
use crate::{Error, Result};

/// Result of binding a URI to a backend.
#[derive(Debug)]
pub(crate) struct Binding {
    pub filesystem: FileSystem,
    pub hadoop_env: Option<HadoopEnvironment>,
}

type Factory = fn(&str, &dyn VarSource, &FileSystemSettings) -> Result<Binding>;

pub struct BackendEntry {
    pub kind: StorageKind,
    pub prefixes: &'static [&'static str],
    factory: Factory,
}

impl BackendEntry {
    pub fn matches(&self, uri: &str) -> bool {
        self.prefixes.iter().any(|prefix| uri.starts_with(prefix))
    }
}

pub static BACKENDS: &[BackendEntry] = &[
    BackendEntry {
        kind: StorageKind::Hadoop,
        prefixes: &["hdfs://", "lavafs://"],
        factory: bind_hadoop,
    },
    BackendEntry {
        kind: StorageKind::Local,
        prefixes: &["file:/"],
        factory: bind_local,
    },
];

/// First entry matching `uri`, if any.
pub fn lookup(uri: &str) -> Option<&'static BackendEntry> {
    BACKENDS.iter().find(|entry| entry.matches(uri))
}

pub(crate) fn bind(
    uri: &str,
    source: &dyn VarSource,
    settings: &FileSystemSettings,
) -> Result<Binding> {
    let Some(entry) = lookup(uri) else {
        tracing::warn!("No storage backend for {}", uri);
        return Err(Error::UnsupportedStorage {
            uri: uri.to_string(),
        });
    };
    tracing::debug!("Binding {} to {} backend", uri, entry.kind);
    (entry.factory)(uri, source, settings)
}

fn bind_hadoop(
    uri: &str,
    source: &dyn VarSource,
    settings: &FileSystemSettings,
) -> Result<Binding> {
    settings.validate()?;
    let hadoop_env = HadoopEnvironment::discover(source);
    let endpoint = webhdfs_endpoint(uri, settings)?;
    let filesystem = FileSystem::webhdfs(&endpoint)?;
    Ok(Binding {
        filesystem,
        hadoop_env: Some(hadoop_env),
    })
}

fn bind_local(
    _uri: &str,
    _source: &dyn VarSource,
    _settings: &FileSystemSettings,
) -> Result<Binding> {
    Ok(Binding {
        filesystem: FileSystem::local()?,
        hadoop_env: None,
    })
}

/// WebHDFS endpoint for `uri`: the configured override, else the URI host on
/// the configured WebHDFS port.
fn webhdfs_endpoint(uri: &str, settings: &FileSystemSettings) -> Result<String> {
    if let Some(endpoint) = &settings.webhdfs_endpoint {
        return Ok(endpoint.clone());
    }

    let invalid = |message: String| Error::InvalidUri {
        uri: uri.to_string(),
        message,
    };
    let url = Url::parse(uri).map_err(|e| invalid(e.to_string()))?;
    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| invalid("missing NameNode host".into()))?;

    Ok(format!("http://{}:{}", host, settings.webhdfs_port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryVarSource;

    #[test]
    fn test_lookup_order() {
        assert_eq!(lookup("hdfs://nn:8020/a").map(|e| e.kind), Some(StorageKind::Hadoop));
        assert_eq!(lookup("lavafs://nn/a").map(|e| e.kind), Some(StorageKind::Hadoop));
        assert_eq!(lookup("file:/tmp/x").map(|e| e.kind), Some(StorageKind::Local));
        assert_eq!(lookup("file:///tmp/x").map(|e| e.kind), Some(StorageKind::Local));
        assert!(lookup("s3://bucket/key").is_none());
        assert!(lookup("/tmp/x").is_none());
        assert!(lookup("HDFS://nn/a").is_none());
    }

    #[test]
    fn test_endpoint_from_uri() {
        let settings = FileSystemSettings::default();
        assert_eq!(
            webhdfs_endpoint("hdfs://namenode:8020/warehouse", &settings).unwrap(),
            "http://namenode:9870"
        );
        assert_eq!(
            webhdfs_endpoint("lavafs://cluster-a/data", &settings.clone().webhdfs_port(50070))
                .unwrap(),
            "http://cluster-a:50070"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let settings = FileSystemSettings::default().webhdfs_endpoint("https://gateway:8443");
        assert_eq!(
            webhdfs_endpoint("hdfs://ignored/path", &settings).unwrap(),
            "https://gateway:8443"
        );
    }

    #[test]
    fn test_endpoint_requires_host() {
        let err = webhdfs_endpoint("hdfs:///path", &FileSystemSettings::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidUri { ref uri, .. } if uri == "hdfs:///path"));
    }

    #[test]
    fn test_bind_unsupported() {
        let err = bind(
            "gs://bucket/key",
            &MemoryVarSource::new(),
            &FileSystemSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedStorage { ref uri } if uri == "gs://bucket/key"));
    }

    #[test]
    fn test_bind_hadoop_rejects_invalid_settings() {
        let err = bind(
            "hdfs://nn/path",
            &MemoryVarSource::new(),
            &FileSystemSettings::default().webhdfs_port(0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
