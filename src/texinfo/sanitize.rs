//! Defensive repair of texture records coming from untrusted compiled data.

use crate::geom::{Plane, Vec3};

use super::TexInfo;
use super::basis::default_axes;

/// An axis pair whose cross product projects onto the face normal with less
/// magnitude than this no longer defines a projection onto the face.
const DEGENERATE_BASIS_EPS: f64 = 0.01;

/// Per-field repair report from a sanitization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeDiagnostics {
    /// Scale components replaced with 1.
    pub scale_repairs: usize,
    /// Translation components replaced with 0.
    pub translation_repairs: usize,
    /// Axes individually replaced with the plane default.
    pub axes_replaced: usize,
    /// Whether the whole pair was discarded as degenerate against the face
    /// normal.
    pub degenerate_pair: bool,
}

impl SanitizeDiagnostics {
    /// True when the input needed no repair.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Replace non-finite, zero, or geometrically degenerate fields with safe
/// defaults derived from the face plane. Pure; returns a new record.
///
/// Idempotent: sanitizing an already-sanitized record changes nothing.
#[must_use]
pub fn sanitize(info: &TexInfo, plane: &Plane) -> TexInfo {
    sanitize_with_diagnostics(info, plane).0
}

/// [`sanitize`] plus a report of which repairs fired.
#[must_use]
pub fn sanitize_with_diagnostics(info: &TexInfo, plane: &Plane) -> (TexInfo, SanitizeDiagnostics) {
    let mut out = *info;
    let mut report = SanitizeDiagnostics::default();
    let (default_u, default_v) = default_axes(plane);

    if !out.scale.u.is_finite() || out.scale.u == 0.0 {
        out.scale.u = 1.0;
        report.scale_repairs += 1;
    }
    if !out.scale.v.is_finite() || out.scale.v == 0.0 {
        out.scale.v = 1.0;
        report.scale_repairs += 1;
    }

    if !out.translation.u.is_finite() {
        out.translation.u = 0.0;
        report.translation_repairs += 1;
    }
    if !out.translation.v.is_finite() {
        out.translation.v = 0.0;
        report.translation_repairs += 1;
    }

    if !usable_axis(out.u_axis) {
        out.u_axis = default_u;
        report.axes_replaced += 1;
    }
    if !usable_axis(out.v_axis) {
        out.v_axis = default_v;
        report.axes_replaced += 1;
    }

    // Both axes can be individually fine yet span a plane the face normal
    // lies in, leaving nothing to project the texture onto. The check runs
    // on the post-repair axes and discards the pair as a whole.
    if out.u_axis.cross(out.v_axis).dot(plane.normal).abs() < DEGENERATE_BASIS_EPS {
        out.u_axis = default_u;
        out.v_axis = default_v;
        report.degenerate_pair = true;
    }

    (out, report)
}

fn usable_axis(axis: Vec3) -> bool {
    axis.is_finite() && axis != Vec3::ZERO
}
