//! Request authorization for the Gravitino client.
//!
//! A provider builds its credential once and hands out the same header value
//! for the lifetime of a client session:
//! - **Basic**: `Basic base64(<user>:dummy)` for simple authentication
//! - **Token**: `Token <token>` for a pre-issued token

pub mod constants;
mod credential;
mod provider;
mod providers;

pub use credential::{AuthScheme, Credential};
pub use provider::AuthDataProvider;
pub use providers::{ANONYMOUS_USER, DUMMY_SECRET, SimpleAuthProvider};
