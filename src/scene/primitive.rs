//! Primitive table - one solid per type tag with fixed default dimensions

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::*;
use crate::catalog::PrimitiveKind;

/// The single solid for `kind`.
pub fn build(kind: PrimitiveKind) -> SceneNode {
    let (geometry, transform) = shape(kind);
    let mut m = mesh(Part::Solid, geometry);
    m.transform = transform;
    m.into()
}

/// Geometry and rest transform for `kind`; also used by the code generator.
pub fn shape(kind: PrimitiveKind) -> (Geometry, Transform) {
    use PrimitiveKind as K;
    let upright = Transform::IDENTITY;
    let geometry = match kind {
        K::Box => cuboid(1.2, 1.2, 1.2),
        K::Sphere => sphere(0.8, 64, 64),
        K::Knot => Geometry::TorusKnot {
            radius: 0.5,
            tube: 0.2,
            tubular_segments: 128,
            radial_segments: 32,
            p: 2,
            q: 3,
        },
        K::Torus => Geometry::Torus {
            radius: 0.6,
            tube: 0.2,
            radial_segments: 16,
            tubular_segments: 100,
            arc: TAU,
        },
        K::Octahedron => Geometry::Octahedron { radius: 0.9, detail: 0 },
        K::Tetrahedron => Geometry::Tetrahedron { radius: 0.9, detail: 0 },
        K::Icosahedron => Geometry::Icosahedron { radius: 0.9, detail: 0 },
        K::Dodecahedron => Geometry::Dodecahedron { radius: 0.9, detail: 0 },
        K::Cylinder => prism(0.6, 0.6, 1.4, 48),
        K::Cone => cone(0.7, 1.4, 48),
        K::Capsule => capsule(0.45, 0.9),
        K::Ring => {
            let geometry = Geometry::Ring { inner_radius: 0.45, outer_radius: 0.85, segments: 64 };
            return (geometry, tilted(-FRAC_PI_2 / 2.0));
        }
        // Open pipe: three quarters of a torus
        K::Tube => Geometry::Torus {
            radius: 0.65,
            tube: 0.14,
            radial_segments: 24,
            tubular_segments: 96,
            arc: 1.5 * PI,
        },
        K::TorusKnotAlt => Geometry::TorusKnot {
            radius: 0.55,
            tube: 0.14,
            tubular_segments: 200,
            radial_segments: 24,
            p: 3,
            q: 5,
        },
        K::Plane => return (plane(1.6, 1.6), tilted(-FRAC_PI_2 / 2.0)),
        K::Circle => return (Geometry::Circle { radius: 0.9, segments: 64 }, tilted(-FRAC_PI_2 / 2.0)),
        K::Lathe => Geometry::Lathe { points: vase_profile(), segments: 48 },
        K::Extrude => Geometry::Extrude { outline: star_outline(5, 0.8, 0.38), depth: 0.35, bevel: 0.05 },
        K::Polyhedron => Geometry::Icosahedron { radius: 0.9, detail: 1 },
        K::Dipyramid => {
            let transform = Transform { scale: Vec3::new(1.0, 1.5, 1.0), ..upright };
            return (Geometry::Octahedron { radius: 0.7, detail: 0 }, transform);
        }
    };
    (geometry, upright)
}

fn tilted(x: f32) -> Transform {
    Transform { rotation: Vec3::x(x), ..Transform::IDENTITY }
}

/// (radius, height) profile of a vase, bottom to lip
fn vase_profile() -> Vec<[f32; 2]> {
    const STEPS: usize = 12;
    (0..=STEPS)
        .map(|i| {
            let t = i as f32 / STEPS as f32;
            let radius = 0.35 + 0.25 * (t * PI * 1.5).sin() + 0.05 * t;
            [radius.max(0.05), t * 1.6 - 0.8]
        })
        .collect()
}

/// Closed star outline with alternating outer/inner vertices
fn star_outline(points: usize, outer: f32, inner: f32) -> Vec<[f32; 2]> {
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = i as f32 / (points * 2) as f32 * TAU + FRAC_PI_2;
            [a.cos() * r, a.sin() * r]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_one_solid() {
        for kind in PrimitiveKind::ALL {
            let node = build(*kind);
            let m = node.as_mesh().expect("primitive is a single mesh");
            assert_eq!(m.part, Part::Solid);
        }
    }

    #[test]
    fn defaults_match_reference_dimensions() {
        assert_eq!(shape(PrimitiveKind::Box).0, cuboid(1.2, 1.2, 1.2));
        assert_eq!(shape(PrimitiveKind::Sphere).0, sphere(0.8, 64, 64));
        assert_eq!(shape(PrimitiveKind::Knot).0.kind_name(), "torusKnot");
        assert_eq!(shape(PrimitiveKind::Octahedron).0, Geometry::Octahedron { radius: 0.9, detail: 0 });
    }

    #[test]
    fn flat_kinds_are_tilted_toward_camera() {
        for kind in [PrimitiveKind::Plane, PrimitiveKind::Circle, PrimitiveKind::Ring] {
            let (geometry, transform) = shape(kind);
            assert!(geometry.is_flat());
            assert!(transform.rotation.x < 0.0);
        }
    }

    #[test]
    fn star_outline_alternates_radius() {
        let outline = star_outline(5, 1.0, 0.5);
        assert_eq!(outline.len(), 10);
        let r0 = (outline[0][0].powi(2) + outline[0][1].powi(2)).sqrt();
        let r1 = (outline[1][0].powi(2) + outline[1][1].powi(2)).sqrt();
        assert!((r0 - 1.0).abs() < 1e-5);
        assert!((r1 - 0.5).abs() < 1e-5);
    }

    #[test]
    fn vase_profile_has_positive_radius() {
        assert!(vase_profile().iter().all(|[r, _]| *r > 0.0));
    }
}
