//! In-memory bindings.

use std::collections::HashMap;
use std::fmt;

use crate::binding::traits::Binding;
use crate::secret::is_valid_secret_key;

/// A binding whose entries live in a caller-supplied map.
///
/// Useful in tests and for building bindings from sources other than the
/// filesystem: any producer that can assemble a name and a key/value map
/// can participate in discovery and filtering alongside projected bindings.
pub struct MapBinding {
    name: String,
    content: HashMap<String, Vec<u8>>,
}

impl MapBinding {
    /// Creates a binding with the given name and entries.
    pub fn new(name: impl Into<String>, content: HashMap<String, Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Creates a binding with the given name and no entries.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, HashMap::new())
    }

    /// Adds an entry (builder pattern).
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }
}

// Entry values are secrets; Debug shows only the key set.
impl fmt::Debug for MapBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapBinding")
            .field("name", &self.name)
            .field("keys", &self.content.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Binding for MapBinding {
    fn get_as_bytes(&self, key: &str) -> Option<Vec<u8>> {
        if !is_valid_secret_key(key) {
            return None;
        }

        self.content.get(key).cloned()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
