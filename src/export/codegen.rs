//! Code generator - exportable component text for the current model
//!
//! The export is a single mesh with the live material, deliberately simpler
//! than the composite the viewer shows. Primitives keep their own geometry;
//! plants and animals are summarized as one sphere.

use crate::catalog::{ModelDescriptor, ModelKind};
use crate::scene::{Geometry, Transform, primitive_shape};
use crate::state::MaterialParams;

const SUMMARY_GEOMETRY: Geometry = Geometry::Sphere { radius: 1.0, width_segments: 64, height_segments: 64 };

/// Component source for `descriptor` rendered with `params`.
pub fn generate_code(descriptor: &ModelDescriptor, params: &MaterialParams) -> String {
    let (geometry, transform) = match descriptor.kind() {
        Some(ModelKind::Primitive(kind)) => primitive_shape(kind),
        _ => (SUMMARY_GEOMETRY, Transform::IDENTITY),
    };
    let needs_three = matches!(geometry, Geometry::Extrude { .. });

    let mut lines: Vec<String> = vec![
        "import React from 'react';".into(),
        "import { Canvas } from '@react-three/fiber';".into(),
        "import { OrbitControls, Stage } from '@react-three/drei';".into(),
    ];
    if needs_three {
        lines.push("import * as THREE from 'three';".into());
    }
    lines.push(String::new());
    lines.push("/**".into());
    lines.push(format!(" * 3D模型组件: {}", comment_safe(&descriptor.name)));
    lines.push(" * 风格: 极简写实".into());
    lines.push(" */".into());
    if let Geometry::Extrude { outline, .. } = &geometry {
        lines.push(format!("const outline = [{}];", point_list(outline)));
        lines.push("const shape = new THREE.Shape(outline.map(([x, y]) => new THREE.Vector2(x, y)));".into());
        lines.push(String::new());
    }
    lines.push(format!("export const {}Scene = () => {{", component_name(&descriptor.name)));
    lines.push("  return (".into());
    lines.push(format!(
        "    <div style={{{{ width: '100%', height: '500px', borderRadius: '40px', overflow: 'hidden', background: '{}' }}}}>",
        params.background
    ));
    lines.push("      <Canvas shadows camera={{ position: [0, 2, 5], fov: 40 }}>".into());
    lines.push("        <Stage intensity={0.6} environment=\"apartment\" adjustCamera={1.2}>".into());
    lines.push(format!("          <mesh castShadow receiveShadow{}>", transform_props(&transform)));
    lines.push(format!("            {}", geometry_element(&geometry)));
    lines.push(format!(
        "            <meshStandardMaterial color=\"{}\" metalness={{{}}} roughness={{{}}} />",
        params.color, params.metalness, params.roughness
    ));
    lines.push("          </mesh>".into());
    lines.push("        </Stage>".into());
    lines.push("        <OrbitControls makeDefault />".into());
    lines.push("      </Canvas>".into());
    lines.push("    </div>".into());
    lines.push("  );".into());
    lines.push("};".into());
    lines.join("\n")
}

/// Identifier derived from a display name: whitespace and punctuation are
/// dropped, a leading digit gets an underscore, empty becomes `Model`.
pub fn component_name(name: &str) -> String {
    let ident: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    match ident.chars().next() {
        None => "Model".into(),
        Some(c) if c.is_ascii_digit() => format!("_{ident}"),
        Some(_) => ident,
    }
}

fn comment_safe(text: &str) -> String {
    text.replace("*/", "* /").replace(['\n', '\r'], " ")
}

/// Shortest stable literal: three decimals, trailing zeros trimmed.
fn num(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { "0".into() } else { format!("{rounded}") }
}

fn nums(values: &[f32]) -> String {
    values.iter().map(|v| num(*v)).collect::<Vec<_>>().join(", ")
}

fn point_list(points: &[[f32; 2]]) -> String {
    points.iter().map(|[x, y]| format!("[{}, {}]", num(*x), num(*y))).collect::<Vec<_>>().join(", ")
}

fn transform_props(transform: &Transform) -> String {
    let mut props = String::new();
    let Transform { position, rotation, scale } = transform;
    if *position != Transform::IDENTITY.position {
        props.push_str(&format!(" position={{[{}]}}", nums(&[position.x, position.y, position.z])));
    }
    if *rotation != Transform::IDENTITY.rotation {
        props.push_str(&format!(" rotation={{[{}]}}", nums(&[rotation.x, rotation.y, rotation.z])));
    }
    if *scale != Transform::IDENTITY.scale {
        props.push_str(&format!(" scale={{[{}]}}", nums(&[scale.x, scale.y, scale.z])));
    }
    props
}

fn geometry_element(geometry: &Geometry) -> String {
    let args = match geometry {
        Geometry::Box { width, height, depth } => nums(&[*width, *height, *depth]),
        Geometry::Sphere { radius, width_segments, height_segments } => {
            format!("{}, {width_segments}, {height_segments}", num(*radius))
        }
        Geometry::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
            format!("{}, {radial_segments}", nums(&[*radius_top, *radius_bottom, *height]))
        }
        Geometry::Cone { radius, height, radial_segments } => {
            format!("{}, {radial_segments}", nums(&[*radius, *height]))
        }
        Geometry::Capsule { radius, length } => nums(&[*radius, *length]),
        Geometry::Torus { radius, tube, radial_segments, tubular_segments, arc } => {
            format!("{}, {radial_segments}, {tubular_segments}, {}", nums(&[*radius, *tube]), num(*arc))
        }
        Geometry::TorusKnot { radius, tube, tubular_segments, radial_segments, p, q } => {
            format!("{}, {tubular_segments}, {radial_segments}, {p}, {q}", nums(&[*radius, *tube]))
        }
        Geometry::Tetrahedron { radius, detail }
        | Geometry::Octahedron { radius, detail }
        | Geometry::Icosahedron { radius, detail }
        | Geometry::Dodecahedron { radius, detail } => format!("{}, {detail}", num(*radius)),
        Geometry::Plane { width, height } => nums(&[*width, *height]),
        Geometry::Circle { radius, segments } => format!("{}, {segments}", num(*radius)),
        Geometry::Ring { inner_radius, outer_radius, segments } => {
            format!("{}, {segments}", nums(&[*inner_radius, *outer_radius]))
        }
        Geometry::Lathe { points, segments } => {
            let points = points
                .iter()
                .map(|[x, y]| format!("{{ x: {}, y: {} }}", num(*x), num(*y)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{points}], {segments}")
        }
        Geometry::Extrude { depth, bevel, .. } => {
            format!("shape, {{ depth: {}, bevelSize: {}, bevelThickness: {} }}", num(*depth), num(*bevel), num(*bevel))
        }
    };
    // JSX intrinsic names follow the three.js class: `torusKnot` -> `torusKnotGeometry`
    format!("<{}Geometry args={{[{args}]}} />", geometry.kind_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::config::DEFAULT_BACKGROUND;
    use crate::primitives::{Coefficient, HexColor};

    fn params(color: u32, metalness: f32, roughness: f32) -> MaterialParams {
        MaterialParams {
            color: HexColor::from_rgb(color),
            metalness: Coefficient::new(metalness),
            roughness: Coefficient::new(roughness),
            background: DEFAULT_BACKGROUND,
        }
    }

    #[test]
    fn embeds_live_material_literals() {
        let descriptor = Catalog::builtin().require("p-0").unwrap();
        let code = generate_code(descriptor, &params(0xabcdef, 0.35, 0.65));
        assert!(code.contains("color=\"#abcdef\""));
        assert!(code.contains("metalness={0.35}"));
        assert!(code.contains("roughness={0.65}"));
        assert!(code.contains("background: '#e0e5ec'"));
    }

    #[test]
    fn identifier_has_no_whitespace() {
        assert_eq!(component_name("工业 倒角\t方体"), "工业倒角方体");
        assert_eq!(component_name("  Chrome  Box "), "ChromeBox");
        assert_eq!(component_name("3D Knot"), "_3DKnot");
        assert_eq!(component_name(" - "), "Model");

        let descriptor = ModelDescriptor::new("p-x", Category::Primitive, "box", "工业 倒角 方体", "📦");
        let code = generate_code(&descriptor, &params(0, 0.0, 1.0));
        assert!(code.contains("export const 工业倒角方体Scene = () => {"));
    }

    #[test]
    fn output_is_deterministic() {
        let descriptor = Catalog::builtin().require("a-0").unwrap();
        let p = params(0xff9933, 0.1, 0.8);
        assert_eq!(generate_code(descriptor, &p), generate_code(descriptor, &p));
    }

    #[test]
    fn primitives_export_their_geometry() {
        let catalog = Catalog::builtin();
        let knot = catalog.all().iter().find(|d| d.tag == "knot").unwrap();
        let code = generate_code(knot, &params(0x6366f1, 0.6, 0.2));
        assert!(code.contains("<torusKnotGeometry args={[0.5, 0.2, 128, 32, 2, 3]} />"));

        let extrude = catalog.all().iter().find(|d| d.tag == "extrude").unwrap();
        let code = generate_code(extrude, &params(0x6366f1, 0.6, 0.2));
        assert!(code.contains("import * as THREE from 'three';"));
        assert!(code.contains("<extrudeGeometry args={[shape, {"));
    }

    #[test]
    fn composites_export_one_summary_shape() {
        let tiger = Catalog::builtin().require("a-0").unwrap();
        let code = generate_code(tiger, &params(0xff9933, 0.1, 0.8));
        assert_eq!(code.matches("<mesh ").count(), 1);
        assert!(code.contains("<sphereGeometry args={[1, 64, 64]} />"));
        assert!(!code.contains("THREE"));
    }

    #[test]
    fn comment_cannot_be_closed_by_name() {
        let descriptor = ModelDescriptor::new("p-y", Category::Primitive, "box", "evil */ name", "📦");
        let code = generate_code(&descriptor, &params(0, 0.0, 1.0));
        assert_eq!(code.matches("*/").count(), 1);
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(std::f32::consts::TAU), "6.283");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1.5), "1.5");
    }
}
