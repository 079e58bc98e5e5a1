//! Plant table - trunks, stems and foliage
//!
//! Foliage and green stems follow the live color. Bark, pots and blossoms
//! are fixed per species.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::resolve::{Construct, lookup};
use super::*;
use crate::catalog::PlantKind;

const BARK: u32 = 0x3f2305;
const DARK_BARK: u32 = 0x451a03;
const PALM_BARK: u32 = 0x8b5a2b;
const BIRCH_BARK: u32 = 0xf5f5f4;
const TERRACOTTA: u32 = 0x7c2d12;

const DETAILED: &[(PlantKind, Construct)] = &[
    (PlantKind::Willow, willow),
    (PlantKind::Cactus, cactus),
    (PlantKind::Pine, pine),
    (PlantKind::Cypress, cypress),
    (PlantKind::Bamboo, bamboo),
    (PlantKind::Cherry, cherry),
    (PlantKind::Palm, palm),
    (PlantKind::Birch, birch),
    (PlantKind::Bonsai, bonsai),
    (PlantKind::Fern, fern),
];

pub fn build(kind: PlantKind, jitter: &mut Jitter) -> SceneNode {
    match lookup(DETAILED, kind) {
        Some(construct) => construct(jitter),
        None => generic(jitter),
    }
}

pub fn is_detailed(kind: PlantKind) -> bool {
    lookup(DETAILED, kind).is_some()
}

/// Trunk with a single round crown.
fn generic(_jitter: &mut Jitter) -> SceneNode {
    group(
        Part::Body,
        [
            mesh(Part::Stem, cylinder(0.18, 0.28, 2.4)).fixed(BARK).into(),
            mesh(Part::Foliage, sphere(0.9, 10, 10)).at([0.0, 1.4, 0.0]).into(),
        ],
    )
    .into()
}

const WILLOW_STRANDS: usize = 14;

fn willow(_jitter: &mut Jitter) -> SceneNode {
    let mut tree = group(Part::Body, [mesh(Part::Stem, cylinder(0.12, 0.2, 2.2)).fixed(DARK_BARK).into()]);
    for i in 0..WILLOW_STRANDS {
        let strand = group(
            Part::Branch,
            [mesh(Part::Foliage, capsule(0.02, 1.8)).at([0.55, -0.7, 0.0]).rotated([0.0, 0.0, -0.4]).into()],
        )
        .at([0.0, 1.3, 0.0])
        .rotated([0.0, i as f32 / WILLOW_STRANDS as f32 * TAU, 0.0]);
        tree.push(strand);
    }
    tree.into()
}

fn cactus(_jitter: &mut Jitter) -> SceneNode {
    group(
        Part::Body,
        [
            mesh(Part::Stem, prism(0.32, 0.32, 1.9, 8)).into(),
            mesh(Part::Branch, prism(0.16, 0.16, 0.8, 6)).at([0.5, 0.3, 0.0]).rotated([0.0, 0.0, PI / 4.5]).into(),
            mesh(Part::Branch, prism(0.16, 0.16, 0.7, 6)).at([-0.5, 0.8, 0.0]).rotated([0.0, 0.0, -PI / 4.5]).into(),
        ],
    )
    .into()
}

const PINE_TIERS: usize = 4;

fn pine(jitter: &mut Jitter) -> SceneNode {
    let mut tree = group(
        Part::Body,
        [mesh(Part::Stem, cylinder(0.12, 0.2, 2.0)).at([0.0, -0.4, 0.0]).fixed(DARK_BARK).into()],
    );
    for i in 0..PINE_TIERS {
        let i_f = i as f32;
        let tier = mesh(Part::Foliage, cone(1.0 - i_f * 0.2, 0.9, 12))
            .at([0.0, 0.1 + i_f * 0.45, 0.0])
            .rotated([0.0, jitter.limb_angle() * 4.0, 0.0]);
        tree.push(tier);
    }
    tree.into()
}

fn cypress(_jitter: &mut Jitter) -> SceneNode {
    group(
        Part::Body,
        [
            mesh(Part::Stem, cylinder(0.1, 0.14, 0.8)).at([0.0, -1.0, 0.0]).fixed(DARK_BARK).into(),
            mesh(Part::Foliage, capsule(0.45, 1.6)).at([0.0, 0.3, 0.0]).into(),
            mesh(Part::Foliage, cone(0.3, 0.6, 12)).at([0.0, 1.55, 0.0]).into(),
        ],
    )
    .into()
}

const BAMBOO_CULMS: [[f32; 2]; 5] = [[0.0, 0.0], [0.3, 0.15], [-0.25, 0.2], [0.1, -0.3], [-0.2, -0.2]];
const BAMBOO_JOINTS: usize = 6;

fn bamboo(jitter: &mut Jitter) -> SceneNode {
    let mut clump = group(Part::Body, []);
    for (c, [x, z]) in BAMBOO_CULMS.iter().copied().enumerate() {
        let joints = BAMBOO_JOINTS - c % 2;
        let mut culm = group(Part::Stem, []).at([x, 0.0, z]).rotated([jitter.limb_angle(), 0.0, jitter.limb_angle()]);
        for j in 0..joints {
            let y = -1.1 + j as f32 * 0.48;
            culm.push(mesh(Part::Stem, cylinder(0.06, 0.07, 0.46)).at([0.0, y, 0.0]));
            culm.push(
                mesh(Part::Branch, torus(0.072, 0.014))
                    .at([0.0, y + 0.23, 0.0])
                    .rotated([FRAC_PI_2, 0.0, 0.0])
                    .tinted(0x4d7c0f)
                    .no_shadow(),
            );
        }
        let top = -1.1 + joints as f32 * 0.48;
        for side in [1.0f32, -1.0] {
            let leaf = mesh(Part::Foliage, capsule(0.03, 0.35))
                .at([side * 0.15, top, 0.0])
                .rotated([0.0, c as f32, side * -(0.9 + jitter.limb_angle())])
                .tinted(0x4ade80);
            culm.push(leaf);
        }
        clump.push(culm);
    }
    clump.into()
}

const PALM_SEGMENTS: usize = 6;
const PALM_FRONDS: usize = 8;

fn palm(jitter: &mut Jitter) -> SceneNode {
    let mut tree = group(Part::Body, []);
    for i in 0..PALM_SEGMENTS {
        let i_f = i as f32;
        let r = 0.16 - i_f * 0.012;
        tree.push(
            mesh(Part::Stem, cylinder(r - 0.012, r, 0.42))
                .at([0.03 * i_f * i_f, -1.0 + i_f * 0.4, 0.0])
                .rotated([0.0, 0.0, -0.05 * i_f])
                .fixed(PALM_BARK),
        );
    }
    let crown_at = Vec3::new(0.03 * (PALM_SEGMENTS as f32).powi(2), -1.0 + PALM_SEGMENTS as f32 * 0.4 - 0.1, 0.0);
    let mut crown = group(Part::Foliage, []).at(crown_at);
    for i in 0..PALM_FRONDS {
        let frond = group(
            Part::Branch,
            [mesh(Part::Foliage, capsule(0.05, 1.1))
                .at([0.5, -0.1, 0.0])
                .rotated([0.0, 0.0, -FRAC_PI_2 + 0.5 + jitter.limb_angle()])
                .scaled([1.0, 1.0, 2.5])
                .into()],
        )
        .rotated([0.0, i as f32 / PALM_FRONDS as f32 * TAU, 0.0]);
        crown.push(frond);
    }
    for k in 0..3 {
        let a = k as f32 / 3.0 * TAU;
        crown.push(mesh(Part::Fruit, ball(0.09)).at([0.12 * a.cos(), -0.15, 0.12 * a.sin()]).fixed(0x78350f));
    }
    tree.push(crown);
    tree.into()
}

const CHERRY_CLUSTERS: [[f32; 4]; 5] = [
    // x, y, z, radius
    [0.0, 1.3, 0.0, 0.75],
    [0.6, 1.0, 0.2, 0.5],
    [-0.55, 1.05, -0.1, 0.55],
    [0.1, 1.0, 0.6, 0.45],
    [-0.1, 1.1, -0.55, 0.45],
];

fn cherry(jitter: &mut Jitter) -> SceneNode {
    let (left, _) = strut(Part::Branch, 0.09, 0.05, 0.8, Vec3::new(0.0, 0.3, 0.0), 0.9);
    let (right, _) = strut(Part::Branch, 0.09, 0.05, 0.8, Vec3::new(0.0, 0.3, 0.0), PI - 0.9);
    let mut tree: Vec<SceneNode> = vec![
        mesh(Part::Stem, cylinder(0.14, 0.22, 2.0)).at([0.0, -0.5, 0.0]).fixed(BARK).into(),
        left.fixed(BARK).into(),
        right.fixed(BARK).into(),
    ];
    for [x, y, z, r] in CHERRY_CLUSTERS {
        tree.push(mesh(Part::Foliage, sphere(r, 16, 12)).at([x, y, z]).into());
    }
    // Blossoms dotted over the crown surface
    for i in 0..12 {
        let a = i as f32 / 12.0 * TAU;
        let y = 1.1 + 0.4 * (i as f32 * 1.7).sin();
        let r = 0.8 + jitter.spot_offset();
        tree.push(
            mesh(Part::Blossom, ball(0.08))
                .at([r * a.cos(), y, r * a.sin()])
                .fixed(0xf9a8d4)
                .no_shadow()
                .into(),
        );
    }
    group(Part::Body, tree).into()
}

fn birch(jitter: &mut Jitter) -> SceneNode {
    let mut tree: Vec<SceneNode> = vec![
        mesh(Part::Stem, cylinder(0.11, 0.16, 2.6)).at([0.0, -0.2, 0.0]).fixed(BIRCH_BARK).into(),
        mesh(Part::Foliage, sphere(0.7, 16, 12)).at([0.0, 1.35, 0.0]).scaled([0.85, 1.3, 0.85]).into(),
    ];
    for i in 0..8 {
        let y = -1.3 + i as f32 * 0.3 + jitter.spot_offset();
        let a = i as f32 * 2.1;
        tree.push(
            mesh(Part::Stripe, cuboid(0.1, 0.03, 0.06))
                .at([0.14 * a.cos(), y, 0.14 * a.sin()])
                .rotated([0.0, -a, 0.0])
                .fixed(0x1c1917)
                .no_shadow()
                .into(),
        );
    }
    group(Part::Body, tree).into()
}

fn bonsai(_jitter: &mut Jitter) -> SceneNode {
    let (low, bend) = strut(Part::Stem, 0.14, 0.11, 0.7, Vec3::new(0.0, -0.7, 0.0), 1.2);
    let (mid, crook) = strut(Part::Stem, 0.11, 0.09, 0.6, bend, 2.1);
    let (top, apex) = strut(Part::Stem, 0.09, 0.06, 0.5, crook, 1.1);
    let pads = [(apex, 0.45), (crook + Vec3::new(-0.25, 0.05, 0.1), 0.35), (bend + Vec3::new(0.3, 0.0, -0.1), 0.3)];

    let mut tree: Vec<SceneNode> = vec![
        mesh(Part::Pot, prism(0.6, 0.45, 0.4, 24)).at([0.0, -0.95, 0.0]).fixed(TERRACOTTA).into(),
        mesh(Part::Pot, disc(0.56)).at([0.0, -0.74, 0.0]).rotated([-FRAC_PI_2, 0.0, 0.0]).fixed(0x292524).into(),
        low.fixed(BARK).into(),
        mid.fixed(BARK).into(),
        top.fixed(BARK).into(),
    ];
    for (at, r) in pads {
        tree.push(mesh(Part::Foliage, sphere(r, 14, 10)).at(at).scaled([1.3, 0.55, 1.1]).into());
    }
    group(Part::Body, tree).into()
}

const FERN_FRONDS: usize = 9;
const FERN_LEAFLETS: usize = 6;

fn fern(jitter: &mut Jitter) -> SceneNode {
    let mut plant = group(Part::Body, []).at([0.0, -0.8, 0.0]);
    for i in 0..FERN_FRONDS {
        let (rachis, _) = strut(Part::Stem, 0.025, 0.01, 1.3, Vec3::ZERO, 0.7 + jitter.limb_angle());
        let mut frond = group(Part::Branch, [rachis.into()]).rotated([0.0, i as f32 / FERN_FRONDS as f32 * TAU, 0.0]);
        for k in 0..FERN_LEAFLETS {
            let t = (k as f32 + 1.0) / (FERN_LEAFLETS as f32 + 1.0);
            let along = Vec3::new(0.7f32.cos(), 0.7f32.sin(), 0.0) * (t * 1.3);
            let size = 0.16 * (1.0 - t * 0.6);
            for side in [1.0f32, -1.0] {
                frond.push(
                    mesh(Part::Foliage, ball(size))
                        .at(along + Vec3::z(side * size))
                        .scaled([0.5, 0.2, 1.4])
                        .no_shadow(),
                );
            }
        }
        plant.push(frond);
    }
    plant.into()
}
