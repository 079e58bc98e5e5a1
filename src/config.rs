//! Viewer and timing constants
//!
//! Everything the rendering surface needs besides the scene itself travels
//! in [`ViewerConfig`], serialized with each push.

use std::f32::consts::PI;

use crate::primitives::HexColor;

pub const CAMERA_POSITION: [f32; 3] = [9.0, 6.0, 9.0];
pub const CAMERA_FOV: f32 = 24.0;
pub const MIN_POLAR_ANGLE: f32 = PI / 4.0;
pub const MAX_POLAR_ANGLE: f32 = PI / 1.7;
pub const STAGE_INTENSITY: f32 = 0.5;
pub const CONTACT_SHADOW_Y: f32 = -1.8;

pub const DEFAULT_BACKGROUND: HexColor = HexColor::from_rgb(0xe0e5ec);

/// Preset backgrounds offered next to the color picker
pub const BACKGROUND_SWATCHES: [HexColor; 4] = [
    DEFAULT_BACKGROUND,
    HexColor::from_rgb(0xf8fafc),
    HexColor::from_rgb(0xfef3c7),
    HexColor::from_rgb(0x1e293b),
];

/// How long the "copied" acknowledgment stays up
pub const COPY_ACK_MS: u32 = 2000;
/// Delay between idle-motion pose updates
pub const FRAME_STEP_MS: u32 = 16;

/// Camera, controls and stage settings for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    pub camera_position: [f32; 3],
    pub fov: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub enable_pan: bool,
    pub stage_intensity: f32,
    pub contact_shadow_y: f32,
}

impl ViewerConfig {
    pub const GALLERY: Self = Self {
        camera_position: CAMERA_POSITION,
        fov: CAMERA_FOV,
        min_polar_angle: MIN_POLAR_ANGLE,
        max_polar_angle: MAX_POLAR_ANGLE,
        enable_pan: false,
        stage_intensity: STAGE_INTENSITY,
        contact_shadow_y: CONTACT_SHADOW_Y,
    };
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::GALLERY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_limits_are_ordered() {
        assert!(MIN_POLAR_ANGLE < MAX_POLAR_ANGLE);
        // Camera may dip below the horizon but never flip under the model
        assert!(MAX_POLAR_ANGLE > PI / 2.0);
        assert!(MAX_POLAR_ANGLE < PI);
        assert_eq!(MAX_POLAR_ANGLE, PI / 1.7);
    }

    #[test]
    fn swatches_start_with_default() {
        assert_eq!(BACKGROUND_SWATCHES[0], DEFAULT_BACKGROUND);
        assert_eq!(DEFAULT_BACKGROUND.to_string(), "#e0e5ec");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ViewerConfig::GALLERY).unwrap();
        assert_eq!(json["fov"], 24.0);
        assert_eq!(json["enablePan"], false);
        assert_eq!(json["cameraPosition"][0], 9.0);
    }
}
