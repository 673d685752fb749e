//! Auth data provider implementations.

mod simple;

pub use simple::{ANONYMOUS_USER, DUMMY_SECRET, SimpleAuthProvider};
