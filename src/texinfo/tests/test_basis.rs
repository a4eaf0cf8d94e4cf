use crate::geom::{Plane, Vec3};
use crate::texinfo::{canonical_basis, default_axes};

#[test]
fn floor_and_ceiling_normals_get_the_down_v_basis() {
    let normals = [
        Vec3::Z,
        -Vec3::Z,
        Vec3::new(0.01, -0.02, 0.9995),
        Vec3::new(0.0, 0.0, -0.9999),
    ];
    for normal in normals {
        let (base_u, base_v) = canonical_basis(normal);
        assert_eq!(base_u, Vec3::new(1.0, 0.0, 0.0), "normal {normal:?}");
        assert_eq!(base_v, Vec3::new(0.0, -1.0, 0.0), "normal {normal:?}");
    }
}

#[test]
fn east_west_walls_get_the_y_u_basis() {
    let normals = [
        Vec3::X,
        -Vec3::X,
        Vec3::new(0.8, 0.5, 0.33),
        Vec3::new(-0.6, 0.5, 0.62),
    ];
    for normal in normals {
        let (base_u, base_v) = canonical_basis(normal);
        assert_eq!(base_u, Vec3::new(0.0, 1.0, 0.0), "normal {normal:?}");
        assert_eq!(base_v, Vec3::new(0.0, 0.0, -1.0), "normal {normal:?}");
    }
}

#[test]
fn north_south_walls_get_the_x_u_basis() {
    let normals = [
        Vec3::Y,
        -Vec3::Y,
        Vec3::new(0.5, -0.7, 0.5),
        // |x| == |y| is not strictly greater, so it falls through.
        Vec3::new(0.5, 0.5, 0.7),
    ];
    for normal in normals {
        let (base_u, base_v) = canonical_basis(normal);
        assert_eq!(base_u, Vec3::new(1.0, 0.0, 0.0), "normal {normal:?}");
        assert_eq!(base_v, Vec3::new(0.0, 0.0, -1.0), "normal {normal:?}");
    }
}

#[test]
fn floor_cutoff_is_strict() {
    // z exactly at the cutoff is still classified as a wall.
    let normal = Vec3::new(0.0, 0.0447, 0.999);
    let (base_u, base_v) = canonical_basis(normal);
    assert_eq!(base_u, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(base_v, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn default_axes_match_the_canonical_basis_of_the_plane_normal() {
    let normals = [Vec3::Z, Vec3::X, Vec3::Y, Vec3::new(0.3, -0.9, 0.3)];
    for normal in normals {
        let plane = Plane::new(normal, 64.0);
        assert_eq!(default_axes(&plane), canonical_basis(normal));
    }
}
