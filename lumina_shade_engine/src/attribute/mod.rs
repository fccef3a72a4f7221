//! Attribute module — typed attribute values, getter dispatch, userdata.
//!
//! Attribute resolution is exact-typed (including array arity) with no
//! coercion; a query that misses returns `None` for the shading executor
//! to handle, never an error. The dispatch table maps interned name hashes
//! to try-resolve capabilities; adding an attribute means registering a new
//! entry, not growing a conditional.

mod value;
mod registry;
mod userdata;

pub use value::{AttrType, AttrData, AttrValue};
pub use registry::{AttrGetter, AttrGetterTable};
pub use userdata::resolve_userdata;
