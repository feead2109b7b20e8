use std::fmt::Debug;
use std::num::{Saturating, Wrapping};

use num_bigint::BigInt;

/// Numeric element type a [`Matrix`](crate::Matrix) can be multiplied over.
///
/// The overflow policy of the product is the policy of the element type:
///
/// | type                     | on overflow                          |
/// |--------------------------|--------------------------------------|
/// | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | error (`NumericOverflow`) |
/// | `Wrapping<int>`          | wraps (two's complement)             |
/// | `Saturating<int>`        | clamps to the type bounds            |
/// | `f32`, `f64`             | IEEE-754 (may reach infinity)        |
/// | `BigInt`                 | never overflows                      |
pub trait Element: Clone + PartialEq + Debug + Send + Sync {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Returns `acc + a * b`, or `None` if the result is not representable.
    fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self>;
}

macro_rules! impl_checked_int {
    ($($t:ty)*) => {$(
        impl Element for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self> {
                acc.checked_add(a.checked_mul(*b)?)
            }
        }

        impl Element for Wrapping<$t> {
            fn zero() -> Self {
                Wrapping(0)
            }

            fn one() -> Self {
                Wrapping(1)
            }

            fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self> {
                Some(Wrapping(acc.0.wrapping_add(a.0.wrapping_mul(b.0))))
            }
        }

        impl Element for Saturating<$t> {
            fn zero() -> Self {
                Saturating(0)
            }

            fn one() -> Self {
                Saturating(1)
            }

            fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self> {
                Some(Saturating(acc.0.saturating_add(a.0.saturating_mul(b.0))))
            }
        }
    )*};
}

impl_checked_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! impl_float {
    ($($t:ty)*) => {$(
        impl Element for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self> {
                Some(acc + a * b)
            }
        }
    )*};
}

impl_float!(f32 f64);

impl Element for BigInt {
    fn zero() -> Self {
        BigInt::from(0u8)
    }

    fn one() -> Self {
        BigInt::from(1u8)
    }

    fn checked_mul_add(acc: &Self, a: &Self, b: &Self) -> Option<Self> {
        Some(acc + a * b)
    }
}
