//! Client settings.
//!
//! Every field has a default, so an empty JSON object is a valid settings
//! document.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_TOKEN_VAR: &str = "GRAVITINO_TOKEN";
pub const DEFAULT_USER_VAR: &str = "GRAVITINO_USER";
pub const DEFAULT_IDENTITY_VAR: &str = "user.name";
pub const DEFAULT_WEBHDFS_PORT: u16 = 9870;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub filesystem: FileSystemSettings,
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.filesystem.validate()?;
        Ok(settings)
    }
}

/// Variable names consulted when building a simple credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthSettings {
    /// Holds a pre-formatted token, sent as `Token <value>`.
    pub token_var: String,
    /// Holds the basic-auth user name.
    pub user_var: String,
    /// Secondary identity key, consulted when the user variable is unset or empty.
    pub identity_var: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_var: DEFAULT_TOKEN_VAR.to_string(),
            user_var: DEFAULT_USER_VAR.to_string(),
            identity_var: DEFAULT_IDENTITY_VAR.to_string(),
        }
    }
}

impl AuthSettings {
    pub fn token_var(mut self, var: impl Into<String>) -> Self {
        self.token_var = var.into();
        self
    }

    pub fn user_var(mut self, var: impl Into<String>) -> Self {
        self.user_var = var.into();
        self
    }

    pub fn identity_var(mut self, var: impl Into<String>) -> Self {
        self.identity_var = var.into();
        self
    }
}

/// Backend binding options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSystemSettings {
    /// WebHDFS port on the NameNode named by an `hdfs://` URI.
    pub webhdfs_port: u16,
    /// Full WebHDFS endpoint; overrides the host/port derived from the URI.
    pub webhdfs_endpoint: Option<String>,
}

impl Default for FileSystemSettings {
    fn default() -> Self {
        Self {
            webhdfs_port: DEFAULT_WEBHDFS_PORT,
            webhdfs_endpoint: None,
        }
    }
}

impl FileSystemSettings {
    pub fn webhdfs_port(mut self, port: u16) -> Self {
        self.webhdfs_port = port;
        self
    }

    pub fn webhdfs_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.webhdfs_endpoint = Some(endpoint.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.webhdfs_port == 0 {
            return Err(Error::Config("webhdfsPort must be non-zero".into()));
        }
        if let Some(endpoint) = &self.webhdfs_endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(Error::Config(format!(
                "webhdfsEndpoint must be an http(s) URL, got: {}",
                endpoint
            )));
        }
        Ok(())
    }
}
