//! Credential types.

use base64::prelude::*;
use secrecy::{ExposeSecret, SecretSlice};

use super::constants::{AUTHORIZATION_BASIC_HEADER, AUTHORIZATION_TOKEN_HEADER};

/// Authorization scheme of a [`Credential`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Basic base64(user:secret)`.
    Basic,
    /// `Token <raw-token>`.
    Token,
}

impl AuthScheme {
    /// Header value prefix, including the trailing space.
    pub fn header_prefix(&self) -> &'static str {
        match self {
            AuthScheme::Basic => AUTHORIZATION_BASIC_HEADER,
            AuthScheme::Token => AUTHORIZATION_TOKEN_HEADER,
        }
    }
}

/// A finished authorization header value.
///
/// The bytes are fixed at construction and zeroized on drop.
pub struct Credential {
    scheme: AuthScheme,
    header: SecretSlice<u8>,
}

impl Credential {
    /// Basic credential over `user_information` (usually `user:secret`).
    pub fn basic(user_information: &str) -> Self {
        let encoded = BASE64_STANDARD.encode(user_information.as_bytes());
        Self::from_parts(AuthScheme::Basic, &encoded)
    }

    /// Token credential; the token is sent verbatim.
    pub fn token(token: &str) -> Self {
        Self::from_parts(AuthScheme::Token, token)
    }

    fn from_parts(scheme: AuthScheme, payload: &str) -> Self {
        let mut value = String::with_capacity(scheme.header_prefix().len() + payload.len());
        value.push_str(scheme.header_prefix());
        value.push_str(payload);
        Self {
            scheme,
            header: SecretSlice::from(value.into_bytes()),
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Header value as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.header.expose_secret()
    }

    /// Get credential type name.
    pub fn credential_type(&self) -> &'static str {
        match self.scheme {
            AuthScheme::Basic => "basic",
            AuthScheme::Token => "token",
        }
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self {
            scheme: self.scheme,
            header: SecretSlice::from(self.as_bytes().to_vec()),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("scheme", &self.scheme)
            .field("header", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_credential() {
        let cred = Credential::basic("alice:dummy");
        assert_eq!(cred.scheme(), AuthScheme::Basic);
        assert_eq!(cred.credential_type(), "basic");
        assert_eq!(cred.as_bytes(), b"Basic YWxpY2U6ZHVtbXk=");
    }

    #[test]
    fn test_token_credential() {
        let cred = Credential::token("abc.def");
        assert_eq!(cred.scheme(), AuthScheme::Token);
        assert_eq!(cred.credential_type(), "token");
        assert_eq!(cred.as_bytes(), b"Token abc.def");
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::token("super-secret");
        let debug = format!("{:?}", cred);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_clone_preserves_bytes() {
        let cred = Credential::basic("bob:dummy");
        let cloned = cred.clone();
        assert_eq!(cred.as_bytes(), cloned.as_bytes());
        assert_eq!(cred.scheme(), cloned.scheme());
    }
}
