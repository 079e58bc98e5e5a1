//! Coefficient - a material channel in [0, 1] (metalness, roughness, opacity)

bounded_f32!(Coefficient, 0.0, 1.0);

impl Coefficient {
    pub const ZERO: Self = Self::new(0.0);
    pub const ONE: Self = Self::new(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_clamps_slider_overshoot() {
        assert_eq!(Coefficient::clamped(5.0), Coefficient::ONE);
        assert_eq!(Coefficient::clamped(-0.3), Coefficient::ZERO);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn coefficient_rejects_above_one() {
        let _ = Coefficient::new(1.5);
    }
}
