//! Builder API — convenience constructors for scene nodes.
//!
//! These keep the per-species construction tables readable: a mesh is
//! `mesh(part, geometry)` followed by chained placement and paint calls.

use super::*;

/// Mesh at the origin following the live material.
pub fn mesh(part: Part, geometry: Geometry) -> Mesh {
    let double_sided = geometry.is_flat();
    Mesh {
        part,
        geometry,
        transform: Transform::IDENTITY,
        paint: Paint::Base,
        material: Material::default(),
        source: MaterialSource::Base,
        cast_shadow: true,
        double_sided,
    }
}

/// Group at the origin.
pub fn group(part: Part, children: impl IntoIterator<Item = SceneNode>) -> Group {
    Group {
        part,
        transform: Transform::IDENTITY,
        motion: None,
        children: children.into_iter().collect(),
    }
}

impl Mesh {
    pub fn at(mut self, position: impl Into<Vec3>) -> Self {
        self.transform.position = position.into();
        self
    }

    pub fn rotated(mut self, rotation: impl Into<Vec3>) -> Self {
        self.transform.rotation = rotation.into();
        self
    }

    pub fn scaled(mut self, scale: impl Into<Vec3>) -> Self {
        self.transform.scale = scale.into();
        self
    }

    /// Hardcoded color with standard-material defaults.
    pub fn fixed(self, color: u32) -> Self {
        self.fixed_material(Material::plain(HexColor::from_rgb(color)))
    }

    pub fn fixed_material(mut self, material: Material) -> Self {
        self.paint = Paint::Fixed(material);
        self
    }

    /// Own color, live metalness/roughness.
    pub fn tinted(mut self, color: u32) -> Self {
        self.paint = Paint::Tinted { color: HexColor::from_rgb(color), roughness: None };
        self
    }

    pub fn painted(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    pub fn no_shadow(mut self) -> Self {
        self.cast_shadow = false;
        self
    }
}

impl Group {
    pub fn at(mut self, position: impl Into<Vec3>) -> Self {
        self.transform.position = position.into();
        self
    }

    pub fn rotated(mut self, rotation: impl Into<Vec3>) -> Self {
        self.transform.rotation = rotation.into();
        self
    }

    pub fn with_motion(mut self, role: MotionRole) -> Self {
        self.motion = Some(role);
        self
    }

    pub fn push(&mut self, child: impl Into<SceneNode>) {
        self.children.push(child.into());
    }
}

// ── Geometry shorthands ─────────────────────────────────────────────────

pub fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    Geometry::Box { width, height, depth }
}

/// Sphere with the default 24x24 tessellation.
pub fn ball(radius: f32) -> Geometry {
    sphere(radius, 24, 24)
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    Geometry::Sphere { radius, width_segments, height_segments }
}

/// Cylinder with 16 radial segments.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Geometry {
    prism(radius_top, radius_bottom, height, 16)
}

pub fn prism(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    Geometry::Cylinder { radius_top, radius_bottom, height, radial_segments }
}

pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Geometry {
    Geometry::Cone { radius, height, radial_segments }
}

pub fn capsule(radius: f32, length: f32) -> Geometry {
    Geometry::Capsule { radius, length }
}

pub fn torus(radius: f32, tube: f32) -> Geometry {
    Geometry::Torus {
        radius,
        tube,
        radial_segments: 16,
        tubular_segments: 48,
        arc: std::f32::consts::TAU,
    }
}

pub fn plane(width: f32, height: f32) -> Geometry {
    Geometry::Plane { width, height }
}

pub fn disc(radius: f32) -> Geometry {
    Geometry::Circle { radius, segments: 32 }
}

/// Cylinder of `length` starting at `from`, leaning `lift` radians above +X
/// in the local XY plane. Returns the mesh and its far end.
pub fn strut(part: Part, radius_from: f32, radius_to: f32, length: f32, from: Vec3, lift: f32) -> (Mesh, Vec3) {
    let dir = Vec3::new(lift.cos(), lift.sin(), 0.0);
    let m = mesh(part, cylinder(radius_to, radius_from, length))
        .at(from + dir * (length / 2.0))
        .rotated([0.0, 0.0, lift - std::f32::consts::FRAC_PI_2]);
    (m, from + dir * length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_defaults_to_base_paint() {
        let m = mesh(Part::Torso, cuboid(1.0, 2.0, 3.0));
        assert_eq!(m.paint, Paint::Base);
        assert_eq!(m.transform, Transform::IDENTITY);
        assert!(m.cast_shadow);
        assert!(!m.double_sided);
    }

    #[test]
    fn flat_geometry_is_double_sided() {
        assert!(mesh(Part::EarPatch, plane(0.2, 0.2)).double_sided);
        assert!(mesh(Part::Wing, disc(0.5)).double_sided);
    }

    #[test]
    fn chained_placement() {
        let m = mesh(Part::Eye, ball(0.1)).at([1.0, 2.0, 3.0]).rotated([0.0, 0.5, 0.0]).fixed(0x111111);
        assert_eq!(m.transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform.rotation.y, 0.5);
        assert_eq!(m.paint, Paint::Fixed(Material::plain(HexColor::from_rgb(0x111111))));
    }

    #[test]
    fn group_collects_children() {
        let mut g = group(Part::Head, [mesh(Part::Head, ball(0.6)).into()]);
        g.push(mesh(Part::Ear, cuboid(0.1, 0.1, 0.1)));
        assert_eq!(g.children.len(), 2);
        assert_eq!(g.with_motion(MotionRole::IdleFloat).motion, Some(MotionRole::IdleFloat));
    }
}
