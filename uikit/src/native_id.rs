//! Opaque identifiers for accessibility linkage.

use uuid::Uuid;

/// Identifier shared by a component's parts so assistive technology can
/// associate a trigger with the region it controls.
///
/// Generated once per component instance and stable for its lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NativeId(Uuid);

impl NativeId {
    /// Create a new unique ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derive a per-part element key, e.g. `collapsible-trigger-<id>`.
    pub fn key(&self, part: &str) -> String {
        format!("{part}-{}", self.0)
    }
}

impl Default for NativeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NativeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
