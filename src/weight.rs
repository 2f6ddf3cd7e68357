//! Numeric edge weights.
//!
//! Graph algorithms in this crate are generic over the edge weight type.
//! [`Weight`] is implemented for every primitive integer and for `f32`/`f64`.
//!
//! Floating-point weights only form a total order once NaN is excluded, so
//! every algorithm validates weights with [`Weight::is_valid`] before it
//! sorts or heap-orders them, and then compares with [`cmp_weights`].

use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric edge weight.
pub trait Weight: Copy + PartialOrd + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds two weights, returning `None` on overflow (integers) or on a
    /// non-finite result (floats).
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns `false` for weights that cannot be ordered or summed
    /// meaningfully (NaN and infinities).
    fn is_valid(&self) -> bool;

    /// Returns `true` if the weight is strictly below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn is_valid(&self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }

            #[inline]
            fn is_valid(&self) -> bool {
                self.is_finite()
            }
        }
    )*};
}

impl_weight_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_float!(f32, f64);

/// Total order over valid weights.
///
/// Only meaningful after [`Weight::is_valid`] has been checked; incomparable
/// values compare as equal.
#[inline]
pub fn cmp_weights<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Checks that `w` is valid, returning [`Error::InvalidWeight`](crate::Error::InvalidWeight)
/// otherwise.
pub(crate) fn ensure_valid<W: Weight>(w: W) -> crate::Result<W> {
    if w.is_valid() {
        Ok(w)
    } else {
        Err(crate::Error::InvalidWeight(format!("{w:?}")))
    }
}

/// Like [`ensure_valid`], additionally rejecting negative weights.
pub(crate) fn ensure_non_negative<W: Weight>(w: W) -> crate::Result<W> {
    let w = ensure_valid(w)?;
    if w.is_negative() {
        Err(crate::Error::NegativeWeight(format!("{w:?}")))
    } else {
        Ok(w)
    }
}
