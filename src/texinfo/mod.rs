//! Texture-projection records and the compiled-to-editor reduction.
//!
//! A compiled face stores its texture projection as two raw axis vectors
//! whose length encodes scale, plus a texture-space translation baked
//! against the owning entity's world origin. The editor form stores unit
//! axes, explicit scale factors, an integer rotation against the canonical
//! basis for the face orientation, and an origin-independent translation.
//!
//! The typical flow for untrusted compiled input is [`sanitize()`] followed
//! by [`to_editor()`]; [`reconstruct()`] packages exactly that. Both stages
//! are pure and independently callable.

mod basis;
mod convert;
mod sanitize;

#[cfg(test)]
mod tests;

pub use basis::{canonical_basis, default_axes};
pub use convert::{TexInfoError, to_editor, try_to_editor};
pub use sanitize::{SanitizeDiagnostics, sanitize, sanitize_with_diagnostics};

use serde::{Deserialize, Serialize};

use crate::geom::{Plane, UvPair, Vec3};

/// Neutral surface flags emitted by the converter. The real surface and
/// content flags are substituted by the writer stage.
pub const NEUTRAL_FLAGS: u32 = 0;

/// Sentinel texture index emitted by the converter; the texture-resolution
/// stage binds the real index later.
pub const TEXTURE_UNRESOLVED: i32 = -1;

/// A texture projection, covering both the compiled and the editor variant.
///
/// Compiled form: `u_axis`/`v_axis` carry arbitrary length (length encodes
/// scale) and `translation` is relative to the owning entity's origin;
/// `scale` and `rotation` are not meaningful yet. Editor form, as produced
/// by [`to_editor`]: unit axes, explicit per-axis scale, integer rotation in
/// [0, 360), origin-independent translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TexInfo {
    pub u_axis: Vec3,
    pub v_axis: Vec3,
    pub translation: UvPair,
    pub scale: UvPair,
    pub rotation: i32,
    pub flags: u32,
    pub texture: i32,
}

impl TexInfo {
    /// Build a compiled-form record as the parser stage supplies it: raw
    /// axes and translation, neutral everything else.
    #[must_use]
    pub const fn compiled(u_axis: Vec3, v_axis: Vec3, translation: UvPair) -> Self {
        Self {
            u_axis,
            v_axis,
            translation,
            scale: UvPair::new(1.0, 1.0),
            rotation: 0,
            flags: NEUTRAL_FLAGS,
            texture: TEXTURE_UNRESOLVED,
        }
    }
}

/// Sanitize a compiled record against its face plane, then reduce it to
/// editor form. Repairs are reported back and logged at debug level.
#[must_use]
pub fn reconstruct(info: &TexInfo, plane: &Plane, origin: Vec3) -> (TexInfo, SanitizeDiagnostics) {
    let (clean, diagnostics) = sanitize_with_diagnostics(info, plane);
    if !diagnostics.is_clean() {
        log::debug!("repaired texture projection before reduction: {diagnostics:?}");
    }
    (to_editor(&clean, origin), diagnostics)
}
