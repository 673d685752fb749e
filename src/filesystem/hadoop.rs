//! Hadoop runtime environment discovery.

use std::path::PathBuf;

use crate::config::VarSource;

pub const HADOOP_HOME: &str = "HADOOP_HOME";
pub const HADOOP_CONF_DIR: &str = "HADOOP_CONF_DIR";
pub const HADOOP_USER_NAME: &str = "HADOOP_USER_NAME";

/// Configuration discovered for a distributed filesystem binding.
///
/// Every field is optional; a client with no Hadoop installation still binds
/// and relies on the backend defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HadoopEnvironment {
    pub hadoop_home: Option<PathBuf>,
    /// `HADOOP_CONF_DIR`, else `$HADOOP_HOME/etc/hadoop`.
    pub conf_dir: Option<PathBuf>,
    /// `HADOOP_USER_NAME`. Informational only; it does not set the WebHDFS identity.
    pub user: Option<String>,
}

impl HadoopEnvironment {
    pub fn discover(source: &dyn VarSource) -> Self {
        let hadoop_home = source.get_non_empty(HADOOP_HOME).map(PathBuf::from);
        let conf_dir = source
            .get_non_empty(HADOOP_CONF_DIR)
            .map(PathBuf::from)
            .or_else(|| hadoop_home.as_ref().map(|home| home.join("etc").join("hadoop")));
        let user = source.get_non_empty(HADOOP_USER_NAME);

        let env = Self {
            hadoop_home,
            conf_dir,
            user,
        };
        tracing::debug!(
            hadoop_home = ?env.hadoop_home,
            conf_dir = ?env.conf_dir,
            user = ?env.user,
            "Discovered Hadoop environment from {}",
            source.name()
        );
        env
    }

    pub fn is_empty(&self) -> bool {
        self.hadoop_home.is_none() && self.conf_dir.is_none() && self.user.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryVarSource;

    #[test]
    fn test_discover_empty() {
        let env = HadoopEnvironment::discover(&MemoryVarSource::new());
        assert!(env.is_empty());
        assert_eq!(env, HadoopEnvironment::default());
    }

    #[test]
    fn test_conf_dir_defaults_from_home() {
        let source = MemoryVarSource::new().value("HADOOP_HOME", "/opt/hadoop");
        let env = HadoopEnvironment::discover(&source);
        assert_eq!(env.hadoop_home, Some(PathBuf::from("/opt/hadoop")));
        assert_eq!(env.conf_dir, Some(PathBuf::from("/opt/hadoop/etc/hadoop")));
        assert!(env.user.is_none());
    }

    #[test]
    fn test_explicit_conf_dir_and_user() {
        let source = MemoryVarSource::new()
            .value("HADOOP_HOME", "/opt/hadoop")
            .value("HADOOP_CONF_DIR", "/etc/hadoop/conf")
            .value("HADOOP_USER_NAME", "etl");
        let env = HadoopEnvironment::discover(&source);
        assert_eq!(env.conf_dir, Some(PathBuf::from("/etc/hadoop/conf")));
        assert_eq!(env.user.as_deref(), Some("etl"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let source = MemoryVarSource::new()
            .value("HADOOP_HOME", "")
            .value("HADOOP_USER_NAME", "");
        assert!(HadoopEnvironment::discover(&source).is_empty());
    }
}
