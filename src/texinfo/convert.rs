//! Reduction of compiled texture records to editor form.

use crate::geom::{UvPair, Vec3};

use super::basis::canonical_basis;
use super::{NEUTRAL_FLAGS, TEXTURE_UNRESOLVED, TexInfo};

/// Errors from the checked conversion surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TexInfoError {
    /// The compiled U axis carries no usable direction, so no finite scale
    /// exists for it.
    #[error("compiled u axis must be finite and non-zero")]
    DegenerateUAxis,
    /// The compiled V axis carries no usable direction.
    #[error("compiled v axis must be finite and non-zero")]
    DegenerateVAxis,
}

/// Reduce a compiled-form record to editor form.
///
/// Scale is the inverse of each raw axis length; the axes are normalized to
/// unit length; rotation is recovered by projecting the unit U axis onto the
/// canonical basis for the face normal derived from the axes themselves; the
/// translation has the entity-origin offset removed using the **raw** axes,
/// making it placement-independent. Flags come out neutral and the texture
/// index as [`TEXTURE_UNRESOLVED`], both for later binding.
///
/// A zero-length input axis yields an infinite scale component; the
/// conversion itself does not guard this. Run [`super::sanitize()`] first
/// for untrusted input, or use [`try_to_editor`] to surface the condition as
/// an error instead.
#[must_use]
pub fn to_editor(info: &TexInfo, origin: Vec3) -> TexInfo {
    let scale = UvPair::new(1.0 / info.u_axis.length(), 1.0 / info.v_axis.length());

    // Degenerate axes fall back to zero so the projection below stays total;
    // atan2(0, 0) is 0.
    let u_axis = info.u_axis.normalized().unwrap_or(Vec3::ZERO);
    let v_axis = info.v_axis.normalized().unwrap_or(Vec3::ZERO);

    // The basis table assumes this cross orientation; flipping it would turn
    // wall rotations by 180 degrees.
    let normal = u_axis.cross(v_axis).normalized().unwrap_or(Vec3::ZERO);
    let (base_u, base_v) = canonical_basis(normal);

    let x = u_axis.dot(base_u);
    let y = u_axis.dot(base_v);
    // The basis is defined for clockwise-viewed rotation, atan2 is
    // counter-clockwise, hence the negation.
    let degrees = -y.atan2(x).to_degrees();

    let translation = UvPair::new(
        info.translation.u - info.u_axis.dot(origin),
        info.translation.v - info.v_axis.dot(origin),
    );

    TexInfo {
        u_axis,
        v_axis,
        translation,
        scale,
        rotation: wrap_rotation(degrees),
        flags: NEUTRAL_FLAGS,
        texture: TEXTURE_UNRESOLVED,
    }
}

/// Checked variant of [`to_editor`]: reports a compiled axis without a
/// usable direction instead of propagating an infinite scale.
pub fn try_to_editor(info: &TexInfo, origin: Vec3) -> Result<TexInfo, TexInfoError> {
    if info.u_axis.normalized().is_none() {
        return Err(TexInfoError::DegenerateUAxis);
    }
    if info.v_axis.normalized().is_none() {
        return Err(TexInfoError::DegenerateVAxis);
    }
    Ok(to_editor(info, origin))
}

/// Normalize into [0, 360) and round to the nearest whole degree. Ties round
/// up; a value that rounds to 360 wraps back to 0.
fn wrap_rotation(degrees: f64) -> i32 {
    let wrapped = degrees.rem_euclid(360.0);
    #[allow(clippy::cast_possible_truncation)]
    let rounded = wrapped.round() as i32;
    rounded.rem_euclid(360)
}
