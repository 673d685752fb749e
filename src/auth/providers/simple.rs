//! Simple credential provider.

use crate::auth::{AuthDataProvider, AuthScheme, Credential};
use crate::config::{AuthSettings, EnvVarSource, Settings, VarSource};

/// Secret paired with the user name in basic credentials.
pub const DUMMY_SECRET: &str = "dummy";

/// User name used when no identity is configured anywhere.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Provider that derives a static credential from an explicit user or the
/// environment.
///
/// Resolution order, first match wins:
/// 1. explicit user passed by the caller, even when empty
/// 2. token variable (`GRAVITINO_TOKEN`), sent as `Token <value>`
/// 3. user variable (`GRAVITINO_USER`), then identity key (`user.name`),
///    then `anonymous`
///
/// Users are sent as `Basic base64(<user>:dummy)`. Resolution never fails.
#[derive(Debug, Clone)]
pub struct SimpleAuthProvider {
    credential: Credential,
}

impl SimpleAuthProvider {
    /// Resolve against the process environment with default variable names.
    pub fn new(explicit: Option<&str>) -> Self {
        Self::from_source(explicit, &EnvVarSource::new(), &AuthSettings::default())
    }

    /// Resolve from the process environment only.
    pub fn from_env() -> Self {
        Self::new(None)
    }

    /// Resolve against an arbitrary variable source.
    pub fn from_source(
        explicit: Option<&str>,
        source: &dyn VarSource,
        settings: &AuthSettings,
    ) -> Self {
        Self {
            credential: resolve(explicit, source, settings),
        }
    }

    /// Resolve using the auth section of a full settings document.
    pub fn from_settings(
        explicit: Option<&str>,
        source: &dyn VarSource,
        settings: &Settings,
    ) -> Self {
        Self::from_source(explicit, source, &settings.auth)
    }

    pub fn scheme(&self) -> AuthScheme {
        self.credential.scheme()
    }
}

impl Default for SimpleAuthProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AuthDataProvider for SimpleAuthProvider {
    fn name(&self) -> &str {
        "simple"
    }

    fn has_credential(&self) -> bool {
        true
    }

    fn credential(&self) -> &[u8] {
        self.credential.as_bytes()
    }
}

fn resolve(explicit: Option<&str>, source: &dyn VarSource, settings: &AuthSettings) -> Credential {
    if let Some(user) = explicit {
        tracing::debug!("Credential resolved from: explicit user");
        return basic_for(user);
    }

    if let Some(token) = source.get(&settings.token_var) {
        tracing::debug!(
            "Credential resolved from: {} ({})",
            settings.token_var,
            source.name()
        );
        return Credential::token(&token);
    }

    basic_for(&resolve_user(source, settings))
}

fn resolve_user(source: &dyn VarSource, settings: &AuthSettings) -> String {
    [&settings.user_var, &settings.identity_var]
        .into_iter()
        .find_map(|key| {
            let user = source.get_non_empty(key)?;
            tracing::debug!("User resolved from: {} ({})", key, source.name());
            Some(user)
        })
        .unwrap_or_else(|| {
            tracing::debug!("No user configured, falling back to {}", ANONYMOUS_USER);
            ANONYMOUS_USER.to_string()
        })
}

fn basic_for(user: &str) -> Credential {
    Credential::basic(&format!("{}:{}", user, DUMMY_SECRET))
}
