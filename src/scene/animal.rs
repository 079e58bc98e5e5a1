//! Animal table - anatomical composites built from primitive solids
//!
//! Axis convention: +X is forward (the head), +Y is up, ±Z are the flanks.
//! Parts that follow the fur color use the base paint; markings, eyes,
//! beaks and claws are hardcoded per species.

use std::f32::consts::{FRAC_PI_2, PI};

use super::resolve::{Construct, lookup};
use super::*;
use crate::catalog::AnimalKind;

const INK: u32 = 0x111111;
const BLACK: u32 = 0x000000;
const WHITE: u32 = 0xffffff;
const CREAM: u32 = 0xfde68a;
const AMBER: u32 = 0xd97706;
const EMBER: u32 = 0x78350f;
const BEAK: u32 = 0xf59e0b;
const IVORY: u32 = 0xfffbeb;
const PINK: u32 = 0xfca5a5;

const DETAILED: &[(AnimalKind, Construct)] = &[
    (AnimalKind::Tiger, tiger),
    (AnimalKind::Panda, panda),
    (AnimalKind::Penguin, penguin),
    (AnimalKind::Whale, whale),
    (AnimalKind::Giraffe, giraffe),
    (AnimalKind::Eagle, eagle),
    (AnimalKind::Lion, lion),
    (AnimalKind::Elephant, elephant),
    (AnimalKind::Rabbit, rabbit),
    (AnimalKind::Snake, snake),
    (AnimalKind::Spider, spider),
    (AnimalKind::Shark, shark),
    (AnimalKind::Butterfly, butterfly),
    (AnimalKind::Horse, horse),
    (AnimalKind::Fox, fox),
    (AnimalKind::Owl, owl),
    (AnimalKind::Crocodile, crocodile),
    (AnimalKind::Crab, crab),
];

pub fn build(kind: AnimalKind, jitter: &mut Jitter) -> SceneNode {
    match lookup(DETAILED, kind) {
        Some(construct) => construct(jitter),
        None => generic(jitter),
    }
}

pub fn is_detailed(kind: AnimalKind) -> bool {
    lookup(DETAILED, kind).is_some()
}

// ── Shared pieces ───────────────────────────────────────────────────────

/// Left/right pair mirrored across the XY plane.
fn pair(z: f32, mut make: impl FnMut(f32) -> SceneNode) -> [SceneNode; 2] {
    [make(z), make(-z)]
}

fn eyes(x: f32, y: f32, z: f32, radius: f32) -> [SceneNode; 2] {
    pair(z, |z| mesh(Part::Eye, ball(radius)).at([x, y, z]).fixed(INK).into())
}

/// Two-segment jointed leg in its group's local frame, reaching along +X.
fn jointed_leg(radius: f32, upper: f32, lower: f32, knee_lift: f32, foot_lift: f32) -> Vec<SceneNode> {
    let (thigh, knee) = strut(Part::LimbSegment, radius, radius * 0.85, upper, Vec3::ZERO, knee_lift);
    let (shin, _) = strut(Part::LimbSegment, radius * 0.85, radius * 0.5, lower, knee, foot_lift);
    vec![thigh.into(), shin.into()]
}

/// Capsule-bodied four-legged frame shared by the mammals.
struct Quadruped {
    body_radius: f32,
    body_length: f32,
    leg_length: f32,
    leg_radius: f32,
    head_radius: f32,
    neck_length: f32,
    tail_segments: usize,
    tail_radius: f32,
}

impl Quadruped {
    fn shoulder(&self) -> Vec3 {
        Vec3::new(self.body_length / 2.0, self.body_radius * 0.5, 0.0)
    }

    fn head_position(&self) -> Vec3 {
        self.shoulder()
            + Vec3::new(
                self.body_radius * 0.4 + self.neck_length * 0.45,
                self.head_radius * 0.5 + self.neck_length * 0.85,
                0.0,
            )
    }

    fn torso(&self) -> SceneNode {
        mesh(Part::Torso, capsule(self.body_radius, self.body_length))
            .rotated([0.0, 0.0, FRAC_PI_2])
            .into()
    }

    /// Neck placement: center and Z rotation of a Y-axis cylinder joining
    /// shoulder and head.
    fn neck_frame(&self) -> (Vec3, f32) {
        let from = self.shoulder();
        let to = self.head_position();
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        (from + Vec3::new(dx / 2.0, dy / 2.0, 0.0), -dx.atan2(dy))
    }

    fn neck(&self) -> Option<SceneNode> {
        if self.neck_length <= 0.0 {
            return None;
        }
        let (center, tilt) = self.neck_frame();
        let length = self.neck_length + self.head_radius;
        let neck = mesh(Part::Neck, cylinder(self.head_radius * 0.5, self.body_radius * 0.55, length))
            .at(center)
            .rotated([0.0, 0.0, tilt]);
        Some(neck.into())
    }

    /// Head sphere with eyes; species details are placed in head-local space.
    fn head(&self, details: impl IntoIterator<Item = SceneNode>) -> Group {
        let r = self.head_radius;
        let mut children = vec![mesh(Part::Head, ball(r)).into()];
        children.extend(eyes(r * 0.75, r * 0.3, r * 0.45, r * 0.13));
        children.extend(details);
        group(Part::Head, children).at(self.head_position())
    }

    fn legs(&self, jitter: &mut Jitter) -> Vec<SceneNode> {
        let (len, r) = (self.leg_length, self.leg_radius);
        let hip_y = -self.body_radius * 0.5;
        let mut legs = Vec::with_capacity(4);
        for x in [self.body_length * 0.35, -self.body_length * 0.35] {
            for z in [self.body_radius * 0.55, -self.body_radius * 0.55] {
                let upper = mesh(Part::LimbSegment, cylinder(r, r * 0.85, len * 0.55)).at([0.0, -len * 0.275, 0.0]);
                let lower = mesh(Part::LimbSegment, cylinder(r * 0.85, r * 0.7, len * 0.45)).at([0.0, -len * 0.775, 0.0]);
                let leg = group(Part::Limb, [upper.into(), lower.into()])
                    .at([x, hip_y, z])
                    .rotated([0.0, 0.0, jitter.limb_angle() * 0.5]);
                legs.push(leg.into());
            }
        }
        legs
    }

    fn tail_root(&self) -> Vec3 {
        Vec3::new(-(self.body_length / 2.0 + self.body_radius * 0.7), self.body_radius * 0.3, 0.0)
    }

    fn segment_length(&self) -> f32 {
        self.body_length * 0.18
    }

    /// Local position of the tip of the segmented tail
    fn tail_tip(&self) -> Vec3 {
        Vec3::x(-(self.tail_segments as f32) * self.segment_length() * 0.9)
    }

    /// Chain of tapering cylinders; `tilt` swings it about Z.
    fn tail(&self, tilt: f32) -> Option<Group> {
        let n = self.tail_segments;
        if n == 0 {
            return None;
        }
        let seg = self.segment_length();
        let radius = |i: usize| self.tail_radius * (1.0 - 0.7 * i as f32 / n as f32);
        let segments = (0..n).map(|i| {
            mesh(Part::TailSegment, cylinder(radius(i), radius(i + 1), seg))
                .at([-(i as f32) * seg * 0.9 - seg / 2.0, 0.0, 0.0])
                .rotated([0.0, 0.0, FRAC_PI_2])
                .into()
        });
        Some(group(Part::Tail, segments).at(self.tail_root()).rotated([0.0, 0.0, tilt]))
    }

    /// Torso, optional neck, four legs, optional tail.
    fn frame(&self, jitter: &mut Jitter, tail_tilt: f32) -> Vec<SceneNode> {
        let mut parts: Vec<SceneNode> = vec![self.torso()];
        parts.extend(self.neck());
        parts.extend(self.legs(jitter));
        parts.extend(self.tail(tail_tilt).map(SceneNode::from));
        parts
    }
}

// ── Generic fallback ────────────────────────────────────────────────────

/// Box torso, box head, four cylinder legs.
fn generic(_jitter: &mut Jitter) -> SceneNode {
    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, cuboid(1.5, 0.8, 0.8)).into(),
        mesh(Part::Head, cuboid(0.6, 0.6, 0.5)).at([0.8, 0.4, 0.0]).into(),
    ];
    for i in 0..4 {
        let x = if i < 2 { 0.5 } else { -0.5 };
        let z = if i % 2 == 0 { 0.3 } else { -0.3 };
        parts.push(mesh(Part::Limb, cylinder(0.1, 0.1, 0.5)).at([x, -0.6, z]).into());
    }
    group(Part::Body, parts).into()
}

// ── Tiger ───────────────────────────────────────────────────────────────

const TIGER_STRIPES: usize = 10;

fn tiger(jitter: &mut Jitter) -> SceneNode {
    let stripes = (0..TIGER_STRIPES).map(|i| {
        let x = (i as f32 - (TIGER_STRIPES as f32 / 2.0 - 0.5)) * 0.22;
        mesh(Part::Stripe, cuboid(0.08, 1.25, 1.55))
            .at([x, 0.05, 0.0])
            .rotated([0.0, 0.0, jitter.stripe_angle()])
            .fixed_material(Material::plain(HexColor::from_rgb(INK)).with_opacity(Coefficient::new(0.9)))
            .no_shadow()
            .into()
    });
    let mut torso = vec![
        mesh(Part::Torso, cuboid(2.5, 1.2, 1.5)).into(),
        mesh(Part::Belly, cuboid(2.52, 0.4, 1.3))
            .at([0.0, -0.42, 0.0])
            .painted(Paint::Tinted { color: HexColor::WHITE, roughness: Some(Coefficient::new(0.8)) })
            .into(),
    ];
    torso.extend(stripes);

    let ears = pair(0.4, |z| {
        group(
            Part::Ear,
            [
                mesh(Part::Ear, cuboid(0.15, 0.3, 0.3)).fixed(INK).into(),
                mesh(Part::EarPatch, plane(0.25, 0.25))
                    .at([0.08, 0.0, 0.0])
                    .rotated([0.0, FRAC_PI_2, 0.0])
                    .fixed(WHITE)
                    .into(),
            ],
        )
        .at([-0.2, 0.5, z])
        .rotated([0.0, 0.0, -0.2])
        .into()
    });
    let muzzle = group(
        Part::Muzzle,
        [
            mesh(Part::Muzzle, cone(0.25, 0.5, 8)).into(),
            mesh(Part::Nose, ball(0.08)).at([0.0, -0.26, 0.0]).fixed(PINK).into(),
        ],
    )
    .at([0.5, -0.1, 0.0])
    .rotated([0.0, 0.0, -FRAC_PI_2]);
    let amber = Material::plain(HexColor::from_rgb(AMBER)).with_emissive(HexColor::from_rgb(EMBER), 0.5);
    let tiger_eyes = pair(0.25, |z| {
        mesh(Part::Eye, ball(0.08)).at([0.45, 0.15, z]).fixed_material(amber).into()
    });

    let mut head = group(Part::Head, [mesh(Part::Head, sphere(0.6, 24, 24)).into()]).at([1.4, 0.5, 0.0]);
    head.children.extend(ears);
    head.push(muzzle);
    head.children.extend(tiger_eyes);

    let limbs = [[0.8, -0.5, 0.5], [0.8, -0.5, -0.5], [-0.8, -0.5, 0.5], [-0.8, -0.5, -0.5]]
        .map(|p| SceneNode::from(tiger_limb(p)));

    let tail_segments = (0..5).map(|i| {
        let i_f = i as f32;
        let m = mesh(Part::TailSegment, cylinder(0.2 - i_f * 0.03, 0.2 - (i_f + 1.0) * 0.03, 0.25))
            .at([-i_f * 0.2, 0.0, 0.0])
            .rotated([0.0, 0.0, FRAC_PI_2]);
        if i == 4 { m.fixed(BLACK).into() } else { m.into() }
    });
    let tail = group(Part::Tail, tail_segments).at([-1.25, 0.2, 0.0]).rotated([0.0, 0.0, -PI / 4.0]);

    let mut parts: Vec<SceneNode> = vec![group(Part::Body, torso).into(), head.into()];
    parts.extend(limbs);
    parts.push(tail.into());
    group(Part::Body, parts).into()
}

/// Three tapering segments with a claw at the foot.
fn tiger_limb(position: [f32; 3]) -> Group {
    let foot = group(
        Part::LimbSegment,
        [
            mesh(Part::LimbSegment, cylinder(0.2, 0.18, 0.4)).into(),
            mesh(Part::Claw, cone(0.05, 0.15, 4))
                .at([0.15, -0.2, 0.0])
                .rotated([0.0, 0.0, -FRAC_PI_2])
                .fixed(0xeeeeee)
                .into(),
        ],
    )
    .at([0.0, -1.05, 0.0]);
    group(
        Part::Limb,
        [
            mesh(Part::LimbSegment, cylinder(0.3, 0.25, 0.6)).at([0.0, -0.1, 0.0]).into(),
            mesh(Part::LimbSegment, cylinder(0.25, 0.2, 0.5)).at([0.0, -0.6, 0.0]).into(),
            foot.into(),
        ],
    )
    .at(position)
}

// ── Panda ───────────────────────────────────────────────────────────────

fn panda(_jitter: &mut Jitter) -> SceneNode {
    let fur = Material::plain(HexColor::WHITE).with_roughness(Coefficient::new(0.9));
    let mut head = group(
        Part::Head,
        [
            mesh(Part::Head, sphere(0.65, 24, 24)).fixed(WHITE).into(),
            mesh(Part::Nose, ball(0.07)).at([0.63, -0.05, 0.0]).fixed(BLACK).into(),
        ],
    )
    .at([0.8, 0.5, 0.0]);
    head.children.extend(pair(0.25, |z| mesh(Part::Eye, ball(0.15)).at([0.3, 0.15, z]).fixed(BLACK).into()));
    head.children.extend(pair(0.38, |z| mesh(Part::Ear, ball(0.18)).at([-0.1, 0.55, z]).fixed(BLACK).into()));

    let mut parts: Vec<SceneNode> = vec![mesh(Part::Torso, sphere(1.0, 32, 32)).fixed_material(fur).into(), head.into()];
    for [x, y, z] in [[0.5, -0.6, 0.6], [0.5, -0.6, -0.6], [-0.5, -0.6, 0.6], [-0.5, -0.6, -0.6]] {
        let leg = group(Part::Limb, [mesh(Part::LimbSegment, capsule(0.25, 0.6)).fixed(BLACK).into()]).at([x, y, z]);
        parts.push(leg.into());
    }
    group(Part::Body, parts).into()
}

// ── Penguin ─────────────────────────────────────────────────────────────

fn penguin(_jitter: &mut Jitter) -> SceneNode {
    let mut head = group(
        Part::Head,
        [
            mesh(Part::Head, ball(0.42)).into(),
            mesh(Part::Beak, cone(0.08, 0.25, 8))
                .at([0.45, -0.05, 0.0])
                .rotated([0.0, 0.0, -FRAC_PI_2])
                .fixed(BEAK)
                .into(),
        ],
    )
    .at([0.0, 0.95, 0.0]);
    head.children.extend(pair(0.16, |z| mesh(Part::Eye, ball(0.07)).at([0.33, 0.1, z]).fixed(WHITE).into()));
    head.children.extend(pair(0.17, |z| mesh(Part::Pupil, ball(0.035)).at([0.39, 0.1, z]).fixed(INK).into()));

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, capsule(0.55, 0.8)).into(),
        mesh(Part::Belly, ball(0.5))
            .at([0.22, -0.05, 0.0])
            .scaled([0.6, 1.1, 0.85])
            .fixed(WHITE)
            .into(),
        head.into(),
    ];
    parts.extend(pair(0.55, |z| {
        mesh(Part::Wing, capsule(0.1, 0.6))
            .at([0.0, 0.1, z])
            .rotated([z.signum() * 0.35, 0.0, 0.0])
            .into()
    }));
    parts.extend(pair(0.2, |z| {
        group(Part::Limb, [mesh(Part::LimbSegment, cuboid(0.3, 0.06, 0.18)).fixed(BEAK).into()])
            .at([0.15, -0.95, z])
            .into()
    }));
    group(Part::Body, parts).into()
}

// ── Whale / Shark ───────────────────────────────────────────────────────

fn whale(_jitter: &mut Jitter) -> SceneNode {
    let flukes = pair(0.4, |z| {
        mesh(Part::Fin, cuboid(0.5, 0.06, 0.9))
            .at([-0.35, 0.0, z])
            .rotated([0.0, z.signum() * 0.5, 0.0])
            .into()
    });
    let mut tail = group(
        Part::Tail,
        [mesh(Part::TailSegment, cylinder(0.3, 0.12, 0.9)).at([0.2, 0.0, 0.0]).rotated([0.0, 0.0, FRAC_PI_2]).into()],
    )
    .at([-2.3, 0.15, 0.0]);
    tail.children.extend(flukes);

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, sphere(1.0, 32, 32)).scaled([2.4, 0.9, 1.0]).into(),
        mesh(Part::Belly, sphere(1.0, 32, 16))
            .at([0.1, -0.28, 0.0])
            .scaled([2.1, 0.6, 0.85])
            .tinted(0xe5e7eb)
            .into(),
        tail.into(),
    ];
    parts.extend(pair(0.9, |z| {
        mesh(Part::Fin, cuboid(0.9, 0.06, 0.3))
            .at([0.6, -0.45, z])
            .rotated([0.0, z.signum() * 0.7, -0.3])
            .into()
    }));
    parts.extend(eyes(1.3, -0.05, 0.72, 0.06));
    group(Part::Body, parts).into()
}

fn shark(_jitter: &mut Jitter) -> SceneNode {
    let tail = group(
        Part::Tail,
        [
            mesh(Part::Fin, cone(0.22, 1.0, 3)).at([-0.25, 0.4, 0.0]).rotated([0.0, 0.0, 0.7]).scaled([1.0, 1.0, 0.3]).into(),
            mesh(Part::Fin, cone(0.18, 0.6, 3)).at([-0.2, -0.25, 0.0]).rotated([0.0, 0.0, 2.4]).scaled([1.0, 1.0, 0.3]).into(),
        ],
    )
    .at([-1.9, 0.0, 0.0]);

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, sphere(1.0, 32, 24)).scaled([2.0, 0.6, 0.6]).into(),
        mesh(Part::Belly, sphere(1.0, 32, 16))
            .at([0.1, -0.18, 0.0])
            .scaled([1.8, 0.38, 0.5])
            .tinted(WHITE)
            .into(),
        mesh(Part::Fin, cone(0.3, 0.8, 3)).at([0.1, 0.75, 0.0]).rotated([0.0, 0.0, 0.35]).scaled([1.0, 1.0, 0.25]).into(),
        tail.into(),
    ];
    parts.extend(pair(0.55, |z| {
        mesh(Part::Fin, cone(0.2, 0.8, 3))
            .at([0.6, -0.4, z])
            .rotated([z.signum() * 1.2, 0.0, -0.6])
            .scaled([1.0, 1.0, 0.3])
            .into()
    }));
    for i in 0..3 {
        let x = 1.1 - i as f32 * 0.12;
        parts.extend(pair(0.52, |z| {
            mesh(Part::Stripe, cuboid(0.02, 0.22, 0.02)).at([x, 0.0, z]).fixed(0x374151).no_shadow().into()
        }));
    }
    parts.extend(eyes(1.45, 0.15, 0.4, 0.05));
    group(Part::Body, parts).into()
}

// ── Long-necked and maned mammals ───────────────────────────────────────

fn giraffe(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.42,
        body_length: 1.3,
        leg_length: 1.6,
        leg_radius: 0.09,
        head_radius: 0.22,
        neck_length: 1.8,
        tail_segments: 3,
        tail_radius: 0.04,
    };
    let mut details: Vec<SceneNode> = vec![
        mesh(Part::Muzzle, capsule(0.12, 0.2)).at([0.22, -0.06, 0.0]).rotated([0.0, 0.0, FRAC_PI_2]).tinted(CREAM).into(),
    ];
    details.extend(pair(0.08, |z| {
        mesh(Part::Horn, cylinder(0.03, 0.04, 0.18)).at([-0.05, 0.24, z]).fixed(0x7c2d12).into()
    }));
    details.extend(pair(0.16, |z| mesh(Part::Ear, cone(0.05, 0.14, 6)).at([-0.1, 0.16, z]).rotated([z.signum() * 0.9, 0.0, 0.0]).into()));

    let mut parts = q.frame(jitter, -0.3);
    parts.push(q.head(details).into());
    // Patches around the upper flanks
    for ring in 0..3 {
        for k in 0..4 {
            let phi = -1.2 + k as f32 * 0.8;
            let x = -0.45 + ring as f32 * 0.45 + jitter.spot_offset();
            let spot = mesh(Part::Spot, sphere(0.12, 8, 8))
                .at([x, q.body_radius * phi.cos(), q.body_radius * phi.sin()])
                .rotated([phi, 0.0, 0.0])
                .scaled([1.0, 0.35, 1.0])
                .fixed(0x7c2d12)
                .no_shadow();
            parts.push(spot.into());
        }
    }
    group(Part::Body, parts).into()
}

fn lion(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.5,
        body_length: 1.5,
        leg_length: 0.9,
        leg_radius: 0.15,
        head_radius: 0.45,
        neck_length: 0.0,
        tail_segments: 5,
        tail_radius: 0.07,
    };
    let mut details: Vec<SceneNode> = vec![
        mesh(Part::Mane, torus(0.42, 0.2)).at([-0.1, 0.0, 0.0]).rotated([0.0, FRAC_PI_2, 0.0]).fixed(0x92400e).into(),
        mesh(Part::Muzzle, ball(0.2)).at([0.38, -0.12, 0.0]).tinted(CREAM).into(),
        mesh(Part::Nose, ball(0.07)).at([0.56, -0.05, 0.0]).fixed(0x3f2305).into(),
    ];
    details.extend(pair(0.25, |z| mesh(Part::Ear, ball(0.1)).at([-0.05, 0.4, z]).into()));

    let mut parts = q.frame(jitter, -0.6);
    if let Some(SceneNode::Group(tail)) = parts.iter_mut().find(|n| n.part() == Part::Tail) {
        tail.push(mesh(Part::TailSegment, ball(0.09)).at(q.tail_tip()).fixed(0x92400e));
    }
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

fn horse(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.42,
        body_length: 1.7,
        leg_length: 1.3,
        leg_radius: 0.11,
        head_radius: 0.28,
        neck_length: 0.9,
        tail_segments: 0,
        tail_radius: 0.0,
    };
    let hair = 0x1c1917;
    let mut details: Vec<SceneNode> = vec![
        mesh(Part::Muzzle, capsule(0.16, 0.35)).at([0.3, -0.08, 0.0]).rotated([0.0, 0.0, FRAC_PI_2]).into(),
    ];
    details.extend(pair(0.12, |z| mesh(Part::Ear, cone(0.06, 0.2, 6)).at([-0.05, 0.28, z]).into()));

    let (neck_center, neck_tilt) = q.neck_frame();
    let mut parts = q.frame(jitter, 0.0);
    parts.push(
        mesh(Part::Mane, cuboid(0.12, q.neck_length * 1.1, 0.08))
            .at(neck_center + Vec3::new(-0.12, 0.1, 0.0))
            .rotated([0.0, 0.0, neck_tilt])
            .fixed(hair)
            .into(),
    );
    parts.push(
        group(Part::Tail, [mesh(Part::TailSegment, capsule(0.09, 0.8)).at([-0.15, -0.35, 0.0]).rotated([0.0, 0.0, -0.4]).fixed(hair).into()])
            .at(q.tail_root())
            .into(),
    );
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

fn fox(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.28,
        body_length: 1.0,
        leg_length: 0.5,
        leg_radius: 0.07,
        head_radius: 0.26,
        neck_length: 0.15,
        tail_segments: 0,
        tail_radius: 0.0,
    };
    let mut details: Vec<SceneNode> = vec![
        mesh(Part::Muzzle, cone(0.12, 0.32, 8)).at([0.3, -0.06, 0.0]).rotated([0.0, 0.0, -FRAC_PI_2]).into(),
        mesh(Part::Nose, ball(0.04)).at([0.47, -0.06, 0.0]).fixed(INK).into(),
    ];
    details.extend(pair(0.13, |z| mesh(Part::Ear, cone(0.09, 0.25, 4)).at([-0.02, 0.26, z]).into()));

    let mut parts = q.frame(jitter, 0.0);
    parts.push(mesh(Part::Belly, ball(0.22)).at([0.42, 0.02, 0.0]).scaled([1.0, 1.0, 0.9]).tinted(WHITE).into());
    parts.push(
        group(
            Part::Tail,
            [
                mesh(Part::TailSegment, capsule(0.15, 0.55)).at([-0.3, 0.0, 0.0]).rotated([0.0, 0.0, FRAC_PI_2]).into(),
                mesh(Part::TailSegment, ball(0.14)).at([-0.68, 0.0, 0.0]).tinted(WHITE).into(),
            ],
        )
        .at(q.tail_root())
        .rotated([0.0, 0.0, 0.5])
        .into(),
    );
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

fn rabbit(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.4,
        body_length: 0.35,
        leg_length: 0.22,
        leg_radius: 0.1,
        head_radius: 0.3,
        neck_length: 0.1,
        tail_segments: 0,
        tail_radius: 0.0,
    };
    let mut details: Vec<SceneNode> = vec![mesh(Part::Nose, ball(0.04)).at([0.3, 0.0, 0.0]).fixed(0xf9a8d4).into()];
    details.extend(pair(0.1, |z| {
        group(
            Part::Ear,
            [
                mesh(Part::Ear, capsule(0.07, 0.45)).at([0.0, 0.25, 0.0]).into(),
                mesh(Part::EarPatch, capsule(0.04, 0.38)).at([0.04, 0.25, 0.0]).tinted(0xfbcfe8).into(),
            ],
        )
        .at([-0.05, 0.3, z])
        .rotated([z.signum() * 0.15, 0.0, 0.0])
        .into()
    }));

    let mut parts = q.frame(jitter, 0.0);
    parts.push(group(Part::Tail, [mesh(Part::TailSegment, ball(0.13)).fixed(WHITE).into()]).at([-0.55, 0.1, 0.0]).into());
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

fn elephant(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.75,
        body_length: 1.4,
        leg_length: 1.0,
        leg_radius: 0.26,
        head_radius: 0.55,
        neck_length: 0.0,
        tail_segments: 4,
        tail_radius: 0.05,
    };
    let trunk = group(
        Part::Trunk,
        (0..5).map(|i| {
            let i_f = i as f32;
            let r = 0.18 - i_f * 0.02;
            mesh(Part::Trunk, cylinder(r - 0.02, r, 0.28))
                .at([0.02 * i_f * i_f, -i_f * 0.26 - 0.14, 0.0])
                .rotated([0.0, 0.0, 0.12 * i_f])
                .into()
        }),
    )
    .at([0.45, -0.15, 0.0]);
    let mut details: Vec<SceneNode> = vec![trunk.into()];
    details.extend(pair(0.5, |z| {
        mesh(Part::Ear, disc(0.55))
            .at([-0.15, 0.05, z])
            .rotated([0.0, z.signum() * 0.3, 0.0])
            .scaled([0.8, 1.0, 1.0])
            .into()
    }));
    details.extend(pair(0.2, |z| {
        mesh(Part::Tusk, cone(0.05, 0.4, 8)).at([0.35, -0.3, z]).rotated([0.0, 0.0, -2.2]).fixed(IVORY).into()
    }));

    let mut parts = q.frame(jitter, -0.9);
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

fn crocodile(jitter: &mut Jitter) -> SceneNode {
    let q = Quadruped {
        body_radius: 0.28,
        body_length: 1.8,
        leg_length: 0.3,
        leg_radius: 0.09,
        head_radius: 0.24,
        neck_length: 0.0,
        tail_segments: 6,
        tail_radius: 0.22,
    };
    let mut details: Vec<SceneNode> = vec![mesh(Part::Muzzle, cuboid(0.8, 0.16, 0.32)).at([0.5, -0.06, 0.0]).into()];
    for k in 0..4 {
        let x = 0.25 + k as f32 * 0.16;
        details.extend(pair(0.15, |z| {
            mesh(Part::Tusk, cone(0.025, 0.07, 4)).at([x, -0.16, z]).rotated([PI, 0.0, 0.0]).fixed(IVORY).no_shadow().into()
        }));
    }

    let mut parts = q.frame(jitter, 0.0);
    for k in 0..7 {
        let scute = mesh(Part::Spot, cone(0.06, 0.12, 4))
            .at([-0.8 + k as f32 * 0.27, q.body_radius, 0.0])
            .fixed(0x14532d);
        parts.push(scute.into());
    }
    parts.push(q.head(details).into());
    group(Part::Body, parts).into()
}

// ── Birds ───────────────────────────────────────────────────────────────

fn eagle(jitter: &mut Jitter) -> SceneNode {
    let mut head = group(
        Part::Head,
        [
            mesh(Part::Head, ball(0.25)).fixed(WHITE).into(),
            mesh(Part::Beak, cone(0.08, 0.25, 6))
                .at([0.25, -0.05, 0.0])
                .rotated([0.0, 0.0, -FRAC_PI_2 - 0.4])
                .fixed(BEAK)
                .into(),
        ],
    )
    .at([0.75, 0.25, 0.0]);
    head.children.extend(eyes(0.17, 0.08, 0.13, 0.035));

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, capsule(0.3, 0.8)).rotated([0.0, 0.0, FRAC_PI_2]).into(),
        head.into(),
        group(Part::Tail, [mesh(Part::TailSegment, cuboid(0.5, 0.05, 0.4)).at([-0.2, 0.0, 0.0]).tinted(WHITE).into()])
            .at([-0.6, 0.0, 0.0])
            .rotated([0.0, 0.0, 0.15])
            .into(),
    ];
    for side in [1.0f32, -1.0] {
        let mut wing = group(Part::Wing, [mesh(Part::Wing, cuboid(0.7, 1.6, 0.06)).at([0.0, 0.8, 0.0]).into()])
            .at([0.05, 0.15, side * 0.25])
            .rotated([side * (FRAC_PI_2 - 0.2), 0.0, 0.0]);
        for k in 0..3 {
            let feather = mesh(Part::Wing, cuboid(0.14, 0.4, 0.04))
                .at([-0.2 + k as f32 * 0.2, 1.75, 0.0])
                .rotated([0.0, 0.0, jitter.limb_angle()])
                .fixed(0x292524);
            wing.push(feather);
        }
        parts.push(wing.into());
        let leg = group(Part::Limb, [mesh(Part::LimbSegment, cylinder(0.04, 0.04, 0.35)).fixed(BEAK).into()])
            .at([0.1, -0.4, side * 0.12]);
        parts.push(leg.into());
    }
    group(Part::Body, parts).into()
}

fn owl(_jitter: &mut Jitter) -> SceneNode {
    let amber = Material::plain(HexColor::from_rgb(BEAK)).with_emissive(HexColor::from_rgb(EMBER), 0.3);
    let mut head = group(
        Part::Head,
        [
            mesh(Part::Head, ball(0.45)).into(),
            mesh(Part::Beak, cone(0.05, 0.14, 4)).at([0.45, -0.08, 0.0]).rotated([PI, 0.0, 0.0]).fixed(0x57534e).into(),
        ],
    )
    .at([0.0, 0.85, 0.0]);
    head.children.extend(pair(0.16, |z| {
        mesh(Part::EarPatch, disc(0.17)).at([0.4, 0.05, z]).rotated([0.0, FRAC_PI_2, 0.0]).fixed(0xfafaf9).into()
    }));
    head.children.extend(pair(0.16, |z| mesh(Part::Eye, ball(0.09)).at([0.43, 0.05, z]).fixed_material(amber).into()));
    head.children.extend(pair(0.16, |z| mesh(Part::Pupil, ball(0.045)).at([0.5, 0.05, z]).fixed(INK).into()));
    head.children.extend(pair(0.22, |z| {
        mesh(Part::Ear, cone(0.07, 0.22, 4)).at([0.0, 0.4, z]).rotated([z.signum() * 0.3, 0.0, 0.0]).into()
    }));

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, ball(0.6)).scaled([0.9, 1.1, 0.9]).into(),
        mesh(Part::Belly, ball(0.45)).at([0.2, -0.05, 0.0]).scaled([0.6, 1.1, 0.9]).tinted(0xf5f5f4).into(),
        head.into(),
    ];
    parts.extend(pair(0.55, |z| {
        mesh(Part::Wing, ball(0.35))
            .at([-0.05, 0.05, z])
            .rotated([z.signum() * 0.15, 0.0, 0.0])
            .scaled([0.9, 1.3, 0.35])
            .into()
    }));
    parts.extend(pair(0.18, |z| {
        let claws = (0..3).map(|k| {
            mesh(Part::Claw, cone(0.03, 0.12, 4))
                .at([0.06, 0.0, (k as f32 - 1.0) * 0.06])
                .rotated([0.0, 0.0, -FRAC_PI_2])
                .fixed(0x57534e)
                .into()
        });
        group(Part::Limb, claws).at([0.05, -0.68, z]).into()
    }));
    group(Part::Body, parts).into()
}

// ── Snake ───────────────────────────────────────────────────────────────

const SNAKE_SEGMENTS: usize = 14;

fn snake(_jitter: &mut Jitter) -> SceneNode {
    let radius = |i: usize| 0.22 * (1.0 - 0.6 * i as f32 / SNAKE_SEGMENTS as f32);
    let center = |i: usize| Vec3::new(1.8 - i as f32 * 0.28, -0.5, 0.35 * (i as f32 * 0.7).sin());

    let mut parts: Vec<SceneNode> = Vec::new();
    for i in 0..SNAKE_SEGMENTS {
        parts.push(mesh(Part::Torso, ball(radius(i))).at(center(i)).scaled([1.3, 1.0, 1.0]).into());
        if i % 3 == 2 {
            let band = mesh(Part::Stripe, torus(radius(i) * 0.92, 0.035))
                .at(center(i))
                .rotated([0.0, FRAC_PI_2, 0.0])
                .fixed(0x3f2305)
                .no_shadow();
            parts.push(band.into());
        }
    }

    let mut head = group(
        Part::Head,
        [mesh(Part::Head, ball(0.26)).scaled([1.4, 0.7, 1.0]).into()],
    )
    .at(center(0) + Vec3::new(0.35, 0.15, 0.0));
    head.children.extend(eyes(0.2, 0.1, 0.13, 0.04));
    head.children.extend(pair(0.03, |z| {
        mesh(Part::Tongue, cuboid(0.25, 0.015, 0.02))
            .at([0.45, -0.05, z])
            .rotated([0.0, z.signum() * 0.3, 0.0])
            .fixed(0xdc2626)
            .no_shadow()
            .into()
    }));
    parts.push(head.into());

    let last = center(SNAKE_SEGMENTS - 1);
    let rattle = (0..3).map(|k| {
        mesh(Part::TailSegment, ball(0.07 - k as f32 * 0.015))
            .at([-(k as f32) * 0.09, 0.0, 0.0])
            .tinted(0xd6d3d1)
            .into()
    });
    parts.push(group(Part::Tail, rattle).at(last + Vec3::x(-0.2)).into());
    group(Part::Body, parts).into()
}

// ── Arthropods ──────────────────────────────────────────────────────────

fn spider(jitter: &mut Jitter) -> SceneNode {
    let mut head = group(Part::Head, [mesh(Part::Head, ball(0.35)).into()]).at([0.3, 0.05, 0.0]);
    for (y, z) in [(0.12, 0.08), (0.2, 0.05)] {
        head.children.extend(pair(z, |z| mesh(Part::Eye, ball(0.04)).at([0.32, y, z]).fixed(0x7f1d1d).into()));
    }

    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, ball(0.55)).at([-0.55, 0.2, 0.0]).scaled([1.2, 0.9, 1.0]).into(),
        head.into(),
    ];
    for side in [1.0f32, -1.0] {
        for k in 0..4 {
            let yaw = side * (-FRAC_PI_2 + (1.5 - k as f32) * 0.45) + jitter.limb_angle();
            let leg = group(Part::Limb, jointed_leg(0.05, 0.6, 0.8, 0.6, -1.1))
                .at([0.25 - k as f32 * 0.12, 0.05, side * 0.2])
                .rotated([0.0, yaw, 0.0]);
            parts.push(leg.into());
        }
    }
    group(Part::Body, parts).into()
}

fn crab(jitter: &mut Jitter) -> SceneNode {
    let mut parts: Vec<SceneNode> = vec![mesh(Part::Torso, sphere(0.7, 24, 16)).scaled([0.9, 0.4, 1.3]).into()];
    for side in [1.0f32, -1.0] {
        let z = side * 0.18;
        parts.push(mesh(Part::Antenna, cylinder(0.03, 0.03, 0.25)).at([0.55, 0.3, z]).into());
        parts.push(mesh(Part::Eye, ball(0.06)).at([0.55, 0.45, z]).fixed(INK).into());

        for k in 0..4 {
            let yaw = side * (-FRAC_PI_2 + (1.5 - k as f32) * 0.25) + jitter.limb_angle();
            let leg = group(Part::Limb, jointed_leg(0.06, 0.5, 0.55, 0.5, -1.2))
                .at([0.3 - k as f32 * 0.22, -0.05, side * 0.7])
                .rotated([0.0, yaw, 0.0]);
            parts.push(leg.into());
        }

        let (arm, wrist) = strut(Part::LimbSegment, 0.08, 0.07, 0.5, Vec3::ZERO, 0.3);
        let claw = group(
            Part::Pincer,
            [
                arm.into(),
                mesh(Part::Pincer, ball(0.2)).at(wrist).scaled([1.4, 0.8, 0.8]).into(),
                mesh(Part::Claw, cone(0.06, 0.3, 6))
                    .at(wrist + Vec3::new(0.3, 0.06, 0.0))
                    .rotated([0.0, 0.0, -FRAC_PI_2 + 0.2])
                    .into(),
                mesh(Part::Claw, cone(0.05, 0.25, 6))
                    .at(wrist + Vec3::new(0.28, -0.07, 0.0))
                    .rotated([0.0, 0.0, -FRAC_PI_2 - 0.2])
                    .into(),
            ],
        )
        .at([0.6, 0.0, side * 0.55])
        .rotated([0.0, side * -0.6, 0.0]);
        parts.push(claw.into());
    }
    group(Part::Body, parts).into()
}

fn butterfly(_jitter: &mut Jitter) -> SceneNode {
    let dark = 0x1f2937;
    let mut parts: Vec<SceneNode> = vec![
        mesh(Part::Torso, capsule(0.06, 0.9)).rotated([0.0, 0.0, FRAC_PI_2]).fixed(dark).into(),
        mesh(Part::Head, ball(0.09)).at([0.55, 0.0, 0.0]).fixed(dark).into(),
    ];
    for side in [1.0f32, -1.0] {
        let (antenna, tip) = strut(Part::Antenna, 0.012, 0.008, 0.45, Vec3::new(0.58, 0.05, side * 0.03), 1.0);
        parts.push(antenna.fixed(dark).no_shadow().into());
        parts.push(mesh(Part::Antenna, ball(0.025)).at(tip).fixed(dark).into());

        let wing = group(
            Part::Wing,
            [
                mesh(Part::Wing, disc(0.55)).at([0.18, 0.55, 0.0]).scaled([0.75, 1.0, 1.0]).into(),
                mesh(Part::Wing, disc(0.4)).at([-0.22, 0.4, 0.0]).into(),
                mesh(Part::Spot, disc(0.1)).at([0.22, 0.8, 0.01]).fixed(WHITE).into(),
                mesh(Part::Spot, disc(0.07)).at([-0.25, 0.5, 0.01]).fixed(dark).into(),
            ],
        )
        .rotated([side * (FRAC_PI_2 - 0.35), 0.0, 0.0]);
        parts.push(wing.into());
    }
    group(Part::Body, parts).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::jitter::STRIPE_JITTER;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn build_seeded(kind: AnimalKind, seed: u64) -> SceneNode {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut jitter = Jitter::new(&mut rng);
        build(kind, &mut jitter)
    }

    fn count(node: &SceneNode, part: Part) -> usize {
        let mut n = 0;
        node.walk(&mut |x| {
            if x.part() == part {
                n += 1;
            }
        });
        n
    }

    #[test]
    fn tiger_anatomy() {
        let tiger = build_seeded(AnimalKind::Tiger, 1);
        assert_eq!(count(&tiger, Part::Torso), 1);
        assert_eq!(count(&tiger, Part::Limb), 4);
        assert_eq!(count(&tiger, Part::Tail), 1);
        assert_eq!(count(&tiger, Part::TailSegment), 5);
        assert_eq!(count(&tiger, Part::Stripe), TIGER_STRIPES);
        assert_eq!(count(&tiger, Part::Eye), 2);
        assert_eq!(count(&tiger, Part::Claw), 4);
    }

    #[test]
    fn tiger_stripe_jitter_is_bounded() {
        let tiger = build_seeded(AnimalKind::Tiger, 99);
        tiger.walk(&mut |n| {
            if let SceneNode::Mesh(m) = n {
                if m.part == Part::Stripe {
                    assert!(m.transform.rotation.z.abs() <= STRIPE_JITTER);
                }
            }
        });
    }

    #[test]
    fn undetailed_kinds_use_generic_quadruped() {
        for kind in [AnimalKind::Kangaroo, AnimalKind::Monkey] {
            assert!(!is_detailed(kind));
            let node = build_seeded(kind, 3);
            assert_eq!(count(&node, Part::Limb), 4);
            assert_eq!(count(&node, Part::Head), 1);
        }
    }

    #[test]
    fn legged_species_have_expected_limbs() {
        assert_eq!(count(&build_seeded(AnimalKind::Spider, 5), Part::Limb), 8);
        assert_eq!(count(&build_seeded(AnimalKind::Crab, 5), Part::Limb), 8);
        assert_eq!(count(&build_seeded(AnimalKind::Crab, 5), Part::Pincer), 2 * 2);
        for kind in [AnimalKind::Lion, AnimalKind::Horse, AnimalKind::Giraffe, AnimalKind::Elephant, AnimalKind::Fox] {
            assert_eq!(count(&build_seeded(kind, 5), Part::Limb), 4, "{kind}");
        }
    }

    #[test]
    fn quadruped_neck_points_at_head() {
        let q = Quadruped {
            body_radius: 0.4,
            body_length: 1.0,
            leg_length: 1.0,
            leg_radius: 0.1,
            head_radius: 0.2,
            neck_length: 1.0,
            tail_segments: 0,
            tail_radius: 0.0,
        };
        let (center, tilt) = q.neck_frame();
        let shoulder = q.shoulder();
        let head = q.head_position();
        // Y axis rotated by tilt about Z
        let axis = Vec3::new(-tilt.sin(), tilt.cos(), 0.0);
        let to_head = Vec3::new(head.x - shoulder.x, head.y - shoulder.y, 0.0);
        let cross = axis.x * to_head.y - axis.y * to_head.x;
        assert!(cross.abs() < 1e-4);
        assert!(center.x > shoulder.x && center.x < head.x);
    }

    #[test]
    fn strut_end_follows_lift() {
        let (m, end) = strut(Part::LimbSegment, 0.1, 0.05, 2.0, Vec3::ZERO, 0.0);
        assert!((end.x - 2.0).abs() < 1e-6);
        assert!(end.y.abs() < 1e-6);
        assert!((m.transform.position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn markings_ignore_base_color() {
        let tiger = build_seeded(AnimalKind::Tiger, 2);
        tiger.walk(&mut |n| {
            if let SceneNode::Mesh(m) = n {
                if matches!(m.part, Part::Stripe | Part::Eye | Part::Claw) {
                    assert_ne!(m.paint, Paint::Base, "{:?}", m.part);
                }
                if m.part == Part::Torso {
                    assert_eq!(m.paint, Paint::Base);
                }
            }
        });
    }
}
