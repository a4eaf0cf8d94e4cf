//! Canonical texture-axis bases by face orientation.
//!
//! Every face orientation maps to exactly one of three fixed axis pairs;
//! editor rotations are measured against the selected pair. The decision
//! table replicates the historical compiler convention, so the cutoffs are
//! hard and the cases never blend.

use crate::geom::{Plane, Vec3};

/// Dominant-Z cutoff separating floors and ceilings from walls.
const FLOOR_CEILING_CUTOFF: f64 = 0.999;

const FLOOR_CEILING: (Vec3, Vec3) = (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
const EAST_WEST_WALL: (Vec3, Vec3) = (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
const NORTH_SOUTH_WALL: (Vec3, Vec3) = (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

/// Select the canonical `(base_u, base_v)` pair for a unit face normal.
///
/// Ordered decision table, first match wins:
/// 1. `|normal.z| > 0.999` - floor or ceiling.
/// 2. `|normal.x| > |normal.y|` - east/west wall.
/// 3. otherwise - north/south wall.
#[must_use]
pub fn canonical_basis(normal: Vec3) -> (Vec3, Vec3) {
    if normal.z.abs() > FLOOR_CEILING_CUTOFF {
        FLOOR_CEILING
    } else if normal.x.abs() > normal.y.abs() {
        EAST_WEST_WALL
    } else {
        NORTH_SOUTH_WALL
    }
}

/// Default axis pair for a face plane, used when the sanitizer discards
/// unusable compiled axes. Same classification as [`canonical_basis`]; the
/// returned axes are unit length, which in the compiled convention encodes
/// scale 1.
#[must_use]
pub fn default_axes(plane: &Plane) -> (Vec3, Vec3) {
    canonical_basis(plane.normal)
}
