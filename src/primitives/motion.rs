//! Motion - idle float/sway applied by the rendering surface per frame
//!
//! The resolver only ever produces a rest pose. Nodes tagged with a
//! [`MotionRole`] get a [`Pose`] layered on top each frame, computed here
//! from elapsed time so the curve stays testable outside the browser.

use super::vec3::Vec3;

/// Which oscillation a node follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionRole {
    /// Whole-model bob and sway
    IdleFloat,
}

/// Offset added to a node's rest transform for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Pose {
    pub offset: Vec3,
    pub rotation: Vec3,
}

/// Gentle vertical oscillation plus slight rotational sway
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Half-height of the vertical travel before `float_intensity`
    pub float_range: f32,
}

impl IdleMotion {
    pub const GALLERY: Self = Self {
        speed: 1.6,
        rotation_intensity: 0.2,
        float_intensity: 0.2,
        float_range: 0.1,
    };

    pub fn pose_at(&self, elapsed_secs: f32) -> Pose {
        let phase = elapsed_secs / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();
        Pose {
            offset: Vec3::y(sin * self.float_range * self.float_intensity),
            rotation: Vec3::new(
                cos / 8.0 * self.rotation_intensity,
                sin / 8.0 * self.rotation_intensity,
                sin / 20.0 * self.rotation_intensity,
            ),
        }
    }

    pub fn role_pose(&self, role: MotionRole, elapsed_secs: f32) -> Pose {
        match role {
            MotionRole::IdleFloat => self.pose_at(elapsed_secs),
        }
    }
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self::GALLERY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Largest |offset| or |rotation| component any frame can produce
    fn envelope(motion: &IdleMotion) -> f32 {
        (motion.float_range * motion.float_intensity).max(motion.rotation_intensity / 8.0)
    }

    fn max_abs(v: Vec3) -> f32 {
        v.x.abs().max(v.y.abs()).max(v.z.abs())
    }

    #[test]
    fn rest_pose_at_time_zero() {
        let pose = IdleMotion::GALLERY.pose_at(0.0);
        assert_eq!(pose.offset, Vec3::ZERO);
        // cos(0) = 1 so the x sway starts at its extreme
        assert!((pose.rotation.x - 0.025).abs() < 1e-6);
    }

    #[test]
    fn motion_stays_inside_envelope() {
        let motion = IdleMotion::GALLERY;
        let bound = envelope(&motion) + 1e-6;
        for frame in 0..2000 {
            let pose = motion.pose_at(frame as f32 * 0.016);
            assert!(max_abs(pose.offset) <= bound);
            assert!(max_abs(pose.rotation) <= bound);
        }
    }

    #[test]
    fn period_matches_speed() {
        let motion = IdleMotion::GALLERY;
        let period = 4.0 * std::f32::consts::TAU / motion.speed;
        let a = motion.pose_at(1.0);
        let b = motion.pose_at(1.0 + period);
        assert!((a.offset.y - b.offset.y).abs() < 1e-4);
    }
}
