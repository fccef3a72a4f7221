/// TransformCatalog — name→matrix registry for user-defined frames.
///
/// Registration publishes a new immutable, reference-counted matrix value;
/// it never mutates a stored matrix in place, so concurrent readers of a
/// previously resolved handle can never observe a half-written matrix.
/// Re-registering a name fully replaces the old value (last write wins).
///
/// Registration happens on the setup thread before shading starts; lookups
/// during shading are read-only (caller contract, not enforced here).

use std::sync::Arc;
use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::strings::{intern, NameHash};

/// Shared, immutable transform matrix.
///
/// Also the type of the direct matrix handles carried in shader globals
/// (shader-space and object-space transforms).
pub type TransformHandle = Arc<Mat4>;

/// Registry of user-defined named transforms.
#[derive(Debug, Default)]
pub struct TransformCatalog {
    xforms: FxHashMap<NameHash, TransformHandle>,
}

impl TransformCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            xforms: FxHashMap::default(),
        }
    }

    /// Register a named transform, interning its name.
    ///
    /// Overwrite semantics: a previous matrix under the same name is fully
    /// replaced. Returns the interned name hash.
    pub fn register(&mut self, name: &str, xform: Mat4) -> NameHash {
        let hash = intern(name);
        self.xforms.insert(hash, Arc::new(xform));
        hash
    }

    /// Resolve a named transform to its stored matrix, as-is.
    ///
    /// `None` means the name is unknown in the current context — a
    /// recoverable condition at shading time, not an error.
    pub fn forward(&self, name: NameHash) -> Option<Mat4> {
        self.xforms.get(&name).map(|m| **m)
    }

    /// Resolve a named transform to the numeric inverse of its matrix.
    pub fn inverse(&self, name: NameHash) -> Option<Mat4> {
        self.xforms.get(&name).map(|m| m.inverse())
    }

    /// Shared handle to a named transform.
    pub fn handle(&self, name: NameHash) -> Option<&TransformHandle> {
        self.xforms.get(&name)
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.xforms.len()
    }

    /// True if no transforms are registered.
    pub fn is_empty(&self) -> bool {
        self.xforms.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
