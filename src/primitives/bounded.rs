//! Bounded - macro for range-constrained material coefficients
//!
//! `new` validates in const contexts (catalog tables), `clamped` is what
//! live UI input goes through. Operators clamp to bounds instead of panicking.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Coefficient, 0.0, 1.0);
/// let c = Coefficient::new(0.5);
/// let c2 = c + 0.7;  // Coefficient(1.0) - clamped to max
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// Clamp into range. NaN maps to the lower bound.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            /// True when `value` is already inside the range.
            pub fn accepts(value: f32) -> bool {
                value >= Self::MIN && value <= Self::MAX
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_f32(self.0)
            }
        }

        impl std::ops::Add<f32> for $name {
            type Output = Self;
            fn add(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 + rhs)
            }
        }

        impl std::ops::Sub<f32> for $name {
            type Output = Self;
            fn sub(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 - rhs)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestPercent, 0.0, 100.0);

    const FIFTY: TestPercent = TestPercent::new(50.0);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(FIFTY.value(), 50.0);
    }

    #[test]
    fn bounded_clamps_on_overflow() {
        let p = TestPercent::new(90.0);
        assert_eq!((p + 20.0).value(), 100.0);
    }

    #[test]
    fn bounded_clamps_on_underflow() {
        let p = TestPercent::new(10.0);
        assert_eq!((p - 20.0).value(), 0.0);
    }

    #[test]
    fn bounded_nan_goes_to_min() {
        assert_eq!(TestPercent::clamped(f32::NAN).value(), 0.0);
    }

    #[test]
    fn bounded_display_is_plain_number() {
        assert_eq!(TestPercent::new(12.5).to_string(), "12.5");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestPercent::new(101.0);
    }
}
