//! Scene — typed shape tree for one rendered model.
//!
//! The resolver turns a catalog descriptor plus live material parameters
//! into a tree of groups and meshes. The tree is the whole contract with
//! the rendering surface: geometry kind + arguments, local transform and a
//! concrete material per mesh. Nothing here touches the DOM.

mod animal;
mod builder;
mod jitter;
mod plant;
mod primitive;
mod resolve;

pub use builder::*;
pub use jitter::Jitter;
pub use primitive::shape as primitive_shape;
pub use resolve::{is_detailed, resolve, resolve_with};

use crate::primitives::{Coefficient, HexColor, IdleMotion, MotionRole, Vec3};

// ── Geometry ────────────────────────────────────────────────────────────

/// Primitive solid with its dimensional arguments.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32 },
    Cone { radius: f32, height: f32, radial_segments: u32 },
    Capsule { radius: f32, length: f32 },
    Torus { radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32, arc: f32 },
    TorusKnot { radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32 },
    Tetrahedron { radius: f32, detail: u32 },
    Octahedron { radius: f32, detail: u32 },
    Icosahedron { radius: f32, detail: u32 },
    Dodecahedron { radius: f32, detail: u32 },
    Plane { width: f32, height: f32 },
    Circle { radius: f32, segments: u32 },
    Ring { inner_radius: f32, outer_radius: f32, segments: u32 },
    /// Profile revolved around Y; points are (radius, height).
    Lathe { points: Vec<[f32; 2]>, segments: u32 },
    /// Closed 2D outline pushed along Z.
    Extrude { outline: Vec<[f32; 2]>, depth: f32, bevel: f32 },
}

impl Geometry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::Capsule { .. } => "capsule",
            Self::Torus { .. } => "torus",
            Self::TorusKnot { .. } => "torusKnot",
            Self::Tetrahedron { .. } => "tetrahedron",
            Self::Octahedron { .. } => "octahedron",
            Self::Icosahedron { .. } => "icosahedron",
            Self::Dodecahedron { .. } => "dodecahedron",
            Self::Plane { .. } => "plane",
            Self::Circle { .. } => "circle",
            Self::Ring { .. } => "ring",
            Self::Lathe { .. } => "lathe",
            Self::Extrude { .. } => "extrude",
        }
    }

    /// Flat geometry is only visible from the front unless rendered double-sided.
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Plane { .. } | Self::Circle { .. } | Self::Ring { .. })
    }
}

// ── Transform ───────────────────────────────────────────────────────────

/// Local transform relative to the parent group. Rotation is XYZ Euler, radians.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ── Material ────────────────────────────────────────────────────────────

/// Concrete standard-material values handed to the surface.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub color: HexColor,
    pub metalness: Coefficient,
    pub roughness: Coefficient,
    pub opacity: Coefficient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive: Option<HexColor>,
    pub emissive_intensity: f32,
}

impl Material {
    /// Standard-material defaults for a given color
    pub const fn plain(color: HexColor) -> Self {
        Self {
            color,
            metalness: Coefficient::ZERO,
            roughness: Coefficient::ONE,
            opacity: Coefficient::ONE,
            emissive: None,
            emissive_intensity: 0.0,
        }
    }

    pub const fn with_opacity(mut self, opacity: Coefficient) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_roughness(mut self, roughness: Coefficient) -> Self {
        self.roughness = roughness;
        self
    }

    pub const fn with_emissive(mut self, emissive: HexColor, intensity: f32) -> Self {
        self.emissive = Some(emissive);
        self.emissive_intensity = intensity;
        self
    }

    #[cfg(test)]
    pub fn is_transparent(&self) -> bool {
        self.opacity.value() < 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::plain(HexColor::WHITE)
    }
}

/// How a mesh picks its material when the tree is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Follows the live material parameters
    Base,
    /// Live metalness, own color (and optionally roughness)
    Tinted { color: HexColor, roughness: Option<Coefficient> },
    /// Hardcoded, ignores live parameters
    Fixed(Material),
}

impl Paint {
    pub fn apply(&self, base: &Material) -> Material {
        match *self {
            Self::Base => *base,
            Self::Tinted { color, roughness } => Material {
                color,
                roughness: roughness.unwrap_or(base.roughness),
                ..*base
            },
            Self::Fixed(material) => material,
        }
    }

    pub fn source(&self) -> MaterialSource {
        match self {
            Self::Base => MaterialSource::Base,
            Self::Tinted { .. } | Self::Fixed(_) => MaterialSource::Override,
        }
    }
}

/// Whether a painted mesh follows the live color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSource {
    Base,
    Override,
}

// ── Part ────────────────────────────────────────────────────────────────

/// Anatomical or structural role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    Root,
    Body,
    // Animals
    Torso,
    Belly,
    Stripe,
    Spot,
    Head,
    Neck,
    Ear,
    EarPatch,
    Eye,
    Pupil,
    Muzzle,
    Nose,
    Beak,
    Mane,
    Horn,
    Tusk,
    Trunk,
    Limb,
    LimbSegment,
    Claw,
    Pincer,
    Wing,
    Fin,
    Tail,
    TailSegment,
    Antenna,
    Tongue,
    // Plants
    Stem,
    Branch,
    Foliage,
    Blossom,
    Fruit,
    Pot,
    // Primitives
    Solid,
    Fallback,
}

// ── Nodes ───────────────────────────────────────────────────────────────

/// Leaf: one solid with its material.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    pub part: Part,
    pub geometry: Geometry,
    pub transform: Transform,
    #[serde(skip)]
    pub paint: Paint,
    /// Filled in by the resolver from `paint` and the live parameters.
    pub material: Material,
    pub source: MaterialSource,
    pub cast_shadow: bool,
    pub double_sided: bool,
}

/// Inner node positioning a set of children together.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub part: Part,
    pub transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionRole>,
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum SceneNode {
    Group(Group),
    Mesh(Mesh),
}

impl SceneNode {
    pub fn part(&self) -> Part {
        match self {
            Self::Group(g) => g.part,
            Self::Mesh(m) => m.part,
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Self::Mesh(m) => Some(m),
            Self::Group(_) => None,
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match self {
            Self::Group(g) => &g.children,
            Self::Mesh(_) => &[],
        }
    }

    /// Pre-order traversal, self first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a SceneNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Resolve every mesh's material against the live base material.
    pub fn paint(&mut self, base: &Material) {
        match self {
            Self::Mesh(m) => {
                m.material = m.paint.apply(base);
                m.source = m.paint.source();
            }
            Self::Group(g) => {
                for child in &mut g.children {
                    child.paint(base);
                }
            }
        }
    }
}

impl From<Mesh> for SceneNode {
    fn from(mesh: Mesh) -> Self {
        Self::Mesh(mesh)
    }
}

impl From<Group> for SceneNode {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

// ── SceneDescription ────────────────────────────────────────────────────

/// Rest-pose tree for one model, owned by the caller of `resolve`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub model_id: String,
    pub root: SceneNode,
    /// Constants the surface uses for nodes tagged with a motion role.
    pub motion: IdleMotion,
}

impl SceneDescription {
    pub fn nodes(&self) -> Vec<&SceneNode> {
        let mut out = Vec::new();
        self.root.walk(&mut |n| out.push(n));
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn meshes(&self) -> Vec<&Mesh> {
        self.nodes().into_iter().filter_map(SceneNode::as_mesh).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
impl SceneDescription {
    /// All nodes (groups or meshes) playing `part`.
    pub fn parts(&self, part: Part) -> Vec<&SceneNode> {
        self.nodes().into_iter().filter(|n| n.part() == part).collect()
    }

    pub fn count(&self, part: Part) -> usize {
        self.parts(part).len()
    }

    /// Shape signature ignoring jitter: (part, geometry kind) in traversal order.
    pub fn layout(&self) -> Vec<(Part, Option<&'static str>)> {
        self.nodes()
            .into_iter()
            .map(|n| (n.part(), n.as_mesh().map(|m| m.geometry.kind_name())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Material {
        Material {
            color: HexColor::from_rgb(0x123456),
            metalness: Coefficient::new(0.4),
            roughness: Coefficient::new(0.3),
            ..Material::default()
        }
    }

    #[test]
    fn paint_base_follows_live_material() {
        let m = Paint::Base.apply(&base());
        assert_eq!(m, base());
        assert_eq!(Paint::Base.source(), MaterialSource::Base);
    }

    #[test]
    fn paint_tinted_keeps_live_metalness() {
        let paint = Paint::Tinted { color: HexColor::WHITE, roughness: Some(Coefficient::new(0.8)) };
        let m = paint.apply(&base());
        assert_eq!(m.color, HexColor::WHITE);
        assert_eq!(m.metalness.value(), 0.4);
        assert_eq!(m.roughness.value(), 0.8);
        assert_eq!(paint.source(), MaterialSource::Override);
    }

    #[test]
    fn paint_fixed_ignores_live_material() {
        let fixed = Material::plain(HexColor::BLACK);
        assert_eq!(Paint::Fixed(fixed).apply(&base()), fixed);
    }

    #[test]
    fn geometry_serializes_with_kind_tag() {
        let g = Geometry::Cylinder { radius_top: 0.1, radius_bottom: 0.2, height: 1.0, radial_segments: 8 };
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["kind"], "cylinder");
        assert_eq!(json["radialSegments"], 8);
    }

    #[test]
    fn walk_is_preorder() {
        let tree: SceneNode = group(
            Part::Root,
            [
                mesh(Part::Head, ball(0.5)).into(),
                group(Part::Limb, [mesh(Part::LimbSegment, cuboid(1.0, 1.0, 1.0)).into()]).into(),
            ],
        )
        .into();
        let mut parts = Vec::new();
        tree.walk(&mut |n| parts.push(n.part()));
        assert_eq!(parts, vec![Part::Root, Part::Head, Part::Limb, Part::LimbSegment]);
    }
}
