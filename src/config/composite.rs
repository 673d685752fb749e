//! Composite Variable Source
//!
//! Chains multiple sources with priority ordering.
//! Earlier sources have higher priority.

use super::provider::VarSource;

/// Variable source that chains multiple sources
#[derive(Default)]
pub struct CompositeVarSource {
    sources: Vec<Box<dyn VarSource>>,
}

impl CompositeVarSource {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a source (first added = highest priority)
    pub fn add_source(&mut self, source: Box<dyn VarSource>) {
        self.sources.push(source);
    }

    /// Add a source and return self (for chaining)
    pub fn source<S: VarSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl VarSource for CompositeVarSource {
    fn name(&self) -> &str {
        "composite"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let value = source.get(key)?;
            tracing::trace!("{} resolved from: {}", key, source.name());
            Some(value)
        })
    }
}

impl std::fmt::Debug for CompositeVarSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeVarSource")
            .field("source_count", &self.sources.len())
            .field("source_names", &self.source_names())
            .finish()
    }
}
