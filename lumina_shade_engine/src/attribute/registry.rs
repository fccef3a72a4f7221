/// Attribute getter dispatch — name hash to try-resolve capability.
///
/// The table maps an interned attribute name to a getter on the host `R`
/// (in practice the renderer). Lookup is scope-independent. A getter checks
/// the requested type before answering and declines with `None` on any
/// mismatch; the caller treats a decline as fallthrough to the later
/// resolution stages, not as failure of the whole query.

use rustc_hash::FxHashMap;
use crate::shading::ShaderGlobals;
use crate::strings::NameHash;
use super::{AttrType, AttrValue};

/// A single try-resolve capability on host `R`.
///
/// Arguments: host, current shade state (if any), "want derivatives" flag,
/// requested type.
pub type AttrGetter<R> =
    fn(&R, Option<&ShaderGlobals>, bool, AttrType) -> Option<AttrValue>;

/// Dispatch table of attribute getters.
pub struct AttrGetterTable<R> {
    getters: FxHashMap<NameHash, AttrGetter<R>>,
}

impl<R> AttrGetterTable<R> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            getters: FxHashMap::default(),
        }
    }

    /// Register a getter for an attribute name.
    ///
    /// Re-registering a name replaces the previous getter.
    pub fn register(&mut self, name: NameHash, getter: AttrGetter<R>) {
        self.getters.insert(name, getter);
    }

    /// Dispatch a query to the getter registered for `name`, if any.
    ///
    /// Returns `None` both when no getter is registered and when the
    /// registered getter declines (type mismatch) — either way the caller
    /// falls through.
    pub fn dispatch(
        &self,
        host: &R,
        sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
        name: NameHash,
    ) -> Option<AttrValue> {
        let getter = self.getters.get(&name)?;
        getter(host, sg, derivatives, ty)
    }

    /// Number of registered getters.
    pub fn len(&self) -> usize {
        self.getters.len()
    }

    /// True if no getters are registered.
    pub fn is_empty(&self) -> bool {
        self.getters.is_empty()
    }
}

impl<R> Default for AttrGetterTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
