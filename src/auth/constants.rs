//! HTTP header names and value prefixes.

/// Header carrying the credential.
pub const HTTP_HEADER_AUTHORIZATION: &str = "Authorization";

pub const AUTHORIZATION_BASIC_HEADER: &str = "Basic ";

pub const AUTHORIZATION_TOKEN_HEADER: &str = "Token ";

/// Reserved for proxy-user forwarding; no provider populates it yet.
pub const PROXY_USER: &str = "X-Proxy-User";
