//! String interning — stable name hashes for fast repeated comparison.
//!
//! Every name the shading executor sends across the boundary (spaces,
//! attribute names, scopes) is reduced once to a `NameHash`; all later
//! comparisons are integer comparisons. The fixed names this engine
//! understands live in `known` and are interned at renderer construction.

mod name_hash;
pub mod known;

pub use name_hash::{NameHash, intern, lookup};
