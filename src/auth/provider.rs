//! Auth data provider trait.

use super::constants::HTTP_HEADER_AUTHORIZATION;

/// Source of the authorization data attached to every client request.
pub trait AuthDataProvider: Send + Sync {
    /// Provider name for debugging.
    fn name(&self) -> &str;

    /// Whether this provider holds a credential to send.
    fn has_credential(&self) -> bool;

    /// Ready-to-send header value.
    fn credential(&self) -> &[u8];

    /// `(header name, header value)` pair, if a credential is available.
    fn authorization_header(&self) -> Option<(&'static str, &[u8])> {
        self.has_credential()
            .then(|| (HTTP_HEADER_AUTHORIZATION, self.credential()))
    }

    /// Release held resources. No-op unless the provider owns any.
    fn close(&mut self) {}
}
