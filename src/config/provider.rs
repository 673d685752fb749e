//! Variable source trait

/// Read-only lookup of named configuration variables.
///
/// Credential and backend resolution take a `&dyn VarSource` instead of
/// reading the process environment directly, so callers can substitute
/// deterministic fixtures.
pub trait VarSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Get a raw variable value, `None` if unset
    fn get(&self, key: &str) -> Option<String>;

    /// Get a variable, treating an empty value as unset
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Whether the variable is present (an empty value still counts)
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: VarSource + ?Sized> VarSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: VarSource + ?Sized> VarSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
