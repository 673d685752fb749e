//! In-Memory Variable Source
//!
//! Fixed key-value store. Useful for testing and code-defined configuration.

use std::collections::HashMap;

use super::provider::VarSource;

/// In-memory variable source
#[derive(Debug, Clone)]
pub struct MemoryVarSource {
    data: HashMap<String, String>,
    name: String,
}

impl MemoryVarSource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            name: "memory".to_string(),
        }
    }

    /// Create a source with a custom name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: HashMap::new(),
            name: name.into(),
        }
    }

    /// Create a source with initial data
    pub fn from_data(data: HashMap<String, String>) -> Self {
        Self {
            data,
            name: "memory".to_string(),
        }
    }

    /// Add a value (builder pattern)
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for MemoryVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VarSource for MemoryVarSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }
}
