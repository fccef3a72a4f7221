/// Typed attribute values with optional derivative blocks.
///
/// A resolved attribute is the value plus, when derivatives were requested
/// and the source supplies them, two more same-typed blocks: d/dx and d/dy.
/// Spatially-constant attributes answer derivative requests with zero
/// blocks; sources that never produce derivatives leave them absent.

use crate::strings::NameHash;

/// Requested attribute type, matched exactly (including array arity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Float,
    Int,
    /// Interned string
    Str,
    /// float[2]
    Float2,
    /// float[4]
    Float4,
    /// int[2]
    Int2,
}

/// One typed attribute payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrData {
    Float(f32),
    Int(i32),
    Str(NameHash),
    Float2([f32; 2]),
    Float4([f32; 4]),
    Int2([i32; 2]),
}

impl AttrData {
    /// The type of this payload.
    pub fn attr_type(&self) -> AttrType {
        match self {
            AttrData::Float(_) => AttrType::Float,
            AttrData::Int(_) => AttrType::Int,
            AttrData::Str(_) => AttrType::Str,
            AttrData::Float2(_) => AttrType::Float2,
            AttrData::Float4(_) => AttrType::Float4,
            AttrData::Int2(_) => AttrType::Int2,
        }
    }

    /// A zero payload of the given type (for constant-attribute derivatives).
    pub fn zeroed(ty: AttrType) -> AttrData {
        match ty {
            AttrType::Float => AttrData::Float(0.0),
            AttrType::Int => AttrData::Int(0),
            AttrType::Str => AttrData::Str(NameHash::EMPTY),
            AttrType::Float2 => AttrData::Float2([0.0; 2]),
            AttrType::Float4 => AttrData::Float4([0.0; 4]),
            AttrType::Int2 => AttrData::Int2([0; 2]),
        }
    }
}

/// A resolved attribute: value plus optional d/dx and d/dy blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrValue {
    pub value: AttrData,
    pub dx: Option<AttrData>,
    pub dy: Option<AttrData>,
}

impl AttrValue {
    /// A value with no derivative blocks (the source does not supply them).
    pub fn value(value: AttrData) -> Self {
        Self {
            value,
            dx: None,
            dy: None,
        }
    }

    /// A spatially-constant value: zero derivative blocks when requested.
    pub fn uniform(value: AttrData, derivatives: bool) -> Self {
        let zero = derivatives.then(|| AttrData::zeroed(value.attr_type()));
        Self {
            value,
            dx: zero,
            dy: zero,
        }
    }

    /// A varying value with its analytic partials.
    pub fn varying(value: AttrData, dx: AttrData, dy: AttrData) -> Self {
        Self {
            value,
            dx: Some(dx),
            dy: Some(dy),
        }
    }

    /// True if both derivative blocks are present.
    pub fn has_derivatives(&self) -> bool {
        self.dx.is_some() && self.dy.is_some()
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
