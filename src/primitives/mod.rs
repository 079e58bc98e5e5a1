//! Value primitives shared by the catalog, the resolver and the viewer
//!
//! - `Coefficient` → clamped [0, 1] material channel
//! - `HexColor` → validated `#rrggbb` color
//! - `Vec3` → offsets, rotations and scales
//! - `IdleMotion` → per-frame float/sway curve

#[macro_use]
pub mod bounded;
pub mod coefficient;
pub mod color;
pub mod motion;
pub mod vec3;

pub use coefficient::Coefficient;
pub use color::HexColor;
pub use motion::{IdleMotion, MotionRole, Pose};
pub use vec3::Vec3;
