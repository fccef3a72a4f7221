/// Userdata fallback — per-point varying attributes from shade state.
///
/// Resolves exactly the two floats of the surface parameterization, `s` and
/// `t`, from the current shade point's u/v. In a full renderer this would
/// look up primitive-specific userdata; the image plane has only its
/// parameterization.

use crate::shading::ShaderGlobals;
use crate::strings::known;
use crate::strings::NameHash;
use super::{AttrData, AttrType, AttrValue};

/// Resolve a userdata attribute from the current shade state.
///
/// Value is the parametric coordinate; derivatives, when requested, are the
/// stored analytic partials. Any other name or type resolves to `None`.
pub fn resolve_userdata(
    sg: &ShaderGlobals,
    derivatives: bool,
    name: NameHash,
    ty: AttrType,
) -> Option<AttrValue> {
    if ty != AttrType::Float {
        return None;
    }
    if name == known::S {
        return Some(if derivatives {
            AttrValue::varying(
                AttrData::Float(sg.u),
                AttrData::Float(sg.dudx),
                AttrData::Float(sg.dudy),
            )
        } else {
            AttrValue::value(AttrData::Float(sg.u))
        });
    }
    if name == known::T {
        return Some(if derivatives {
            AttrValue::varying(
                AttrData::Float(sg.v),
                AttrData::Float(sg.dvdx),
                AttrData::Float(sg.dvdy),
            )
        } else {
            AttrValue::value(AttrData::Float(sg.v))
        });
    }
    None
}

#[cfg(test)]
#[path = "userdata_tests.rs"]
mod tests;
