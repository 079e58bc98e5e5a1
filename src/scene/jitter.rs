//! Jitter - bounded cosmetic randomness for organic variation
//!
//! Every random draw goes through here so the bound is enforced in one
//! place. Nothing structural (node counts, geometry kinds) may depend on it.

use rand::{Rng, RngCore};

/// Max |rotation| added to a stripe, radians
pub const STRIPE_JITTER: f32 = 0.05;
/// Max |offset| added to spots and leaves, scene units
pub const SPOT_JITTER: f32 = 0.06;
/// Max |rotation| added to legs, leaves and fronds, radians
pub const LIMB_JITTER: f32 = 0.08;

pub struct Jitter<'a> {
    rng: &'a mut dyn RngCore,
}

impl<'a> Jitter<'a> {
    pub fn new(rng: &'a mut dyn RngCore) -> Self {
        Self { rng }
    }

    /// Uniform in [-max, max]
    pub fn signed(&mut self, max: f32) -> f32 {
        let max = max.abs();
        if max == 0.0 {
            return 0.0;
        }
        self.rng.random_range(-max..=max)
    }

    pub fn stripe_angle(&mut self) -> f32 {
        self.signed(STRIPE_JITTER)
    }

    pub fn limb_angle(&mut self) -> f32 {
        self.signed(LIMB_JITTER)
    }

    pub fn spot_offset(&mut self) -> f32 {
        self.signed(SPOT_JITTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut jitter = Jitter::new(&mut rng);
        for _ in 0..1000 {
            assert!(jitter.stripe_angle().abs() <= STRIPE_JITTER);
            assert!(jitter.spot_offset().abs() <= SPOT_JITTER);
            assert!(jitter.limb_angle().abs() <= LIMB_JITTER);
        }
    }

    #[test]
    fn zero_bound_is_exact() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut jitter = Jitter::new(&mut rng);
        assert_eq!(jitter.signed(0.0), 0.0);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        let xs: Vec<f32> = {
            let mut j = Jitter::new(&mut a);
            (0..8).map(|_| j.limb_angle()).collect()
        };
        let ys: Vec<f32> = {
            let mut j = Jitter::new(&mut b);
            (0..8).map(|_| j.limb_angle()).collect()
        };
        assert_eq!(xs, ys);
    }
}
