//! Per-session placeholder values.

use std::collections::HashMap;

/// The current value of each placeholder for one use session.
///
/// A binding that is empty or whitespace-only counts as unfilled. Values
/// are stored as given and are never scanned for placeholders themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Names this store was initialized for, in detection order.
    names: Vec<String>,
    values: HashMap<String, String>,
}

impl Bindings {
    /// Create bindings with every name mapped to the empty string.
    pub fn initialize<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let values = names
            .iter()
            .map(|n| (n.clone(), String::new()))
            .collect();
        Self { names, values }
    }

    /// Overwrite the value for one placeholder.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// The current value for `name`, if one has been recorded.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true if `name` has a value with non-whitespace content.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// The names from `names` that are still unfilled, in the given order.
    pub fn missing<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| !self.is_filled(n))
            .map(str::to_string)
            .collect()
    }

    /// The placeholder names these bindings were initialized for.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Reset to empty values if `names` differs from the tracked set.
    ///
    /// Returns true when a reset happened. Reordering the same names is
    /// not a change.
    pub fn sync<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let same_set = names.len() == self.names.len()
            && names
                .iter()
                .all(|n| self.names.iter().any(|known| known == n.as_ref()));
        if same_set {
            return false;
        }

        *self = Self::initialize(names);
        true
    }
}
