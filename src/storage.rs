// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Storage-type contract for bounded values - see [`BoundedStorage`].

/// Classification of a primitive numeric type as integral or floating-point.
///
/// The category decides which input types a bounded value accepts (see
/// [`ClampInto`]): same-category assignments are always legal, integral
/// inputs may widen into floating-point storage, and floating-point inputs
/// may never flow into integral storage.
///
/// [`ClampInto`]: crate::ClampInto
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NumericCategory {
    Integral,
    FloatingPoint,
}

impl NumericCategory {
    /// Whether two types belong to the same category (both integral, or both
    /// floating-point). Mixed pairs are not same-category.
    #[must_use]
    pub const fn same_as(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Integral, Self::Integral)
                | (Self::FloatingPoint, Self::FloatingPoint)
        )
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type that can back a [`Bounded`] value.
///
/// Each implementing type reports its [`NumericCategory`] and its
/// representable range widened into the bound domain (`i128`). The widened
/// range is what makes bound feasibility checks exact: every supported
/// storage type's entire range embeds in `i128` order-exactly, so comparing
/// bounds against `WIDE_MIN`/`WIDE_MAX` can never truncate or wrap.
///
/// `f32` and `f64` report the full `i128` range because their magnitude
/// exceeds any expressible bound (`f32::MAX` ≈ 3.4e38 > `i128::MAX` ≈
/// 1.7e38). `i128` and `u128` storage is deliberately unsupported: their
/// ranges cannot be checked inside the bound domain, and rejecting an
/// instantiation is always preferred over silently accepting an unsafe one.
///
/// This trait is sealed; it is implemented for `i8`..`i64`, `u8`..`u64`,
/// `isize`, `usize`, `f32`, and `f64`, and cannot be implemented outside
/// this crate.
///
/// [`Bounded`]: crate::Bounded
pub trait BoundedStorage: Copy + PartialOrd + sealed::Sealed {
    /// Integral or floating-point.
    const CATEGORY: NumericCategory;

    /// Smallest representable value, widened into the bound domain.
    const WIDE_MIN: i128;

    /// Largest representable value, widened into the bound domain.
    const WIDE_MAX: i128;
}

/// Whether `T`'s representable range covers the closed interval
/// `[min, max]`, and the interval itself is well-formed.
///
/// This is the feasibility predicate behind every [`Bounded`] instantiation
/// and behind the clamp algorithm's choice of domain (see
/// [`ClampInto::clamp_into`]). The comparisons are non-strict: a degenerate
/// `min == max` interval is legal, and so are bounds equal to `T`'s own
/// extremes.
///
/// [`Bounded`]: crate::Bounded
/// [`ClampInto::clamp_into`]: crate::ClampInto::clamp_into
#[must_use]
pub const fn bounds_fit_in<T: BoundedStorage>(min: i128, max: i128) -> bool {
    T::WIDE_MIN <= min && max <= T::WIDE_MAX && min <= max
}

macro_rules! impl_integral_storage {
    ($($t:ty),* $(,)?) => { $(
        impl sealed::Sealed for $t {}

        impl BoundedStorage for $t {
            const CATEGORY: NumericCategory = NumericCategory::Integral;
            const WIDE_MIN: i128 = <$t>::MIN as i128;
            const WIDE_MAX: i128 = <$t>::MAX as i128;
        }
    )* };
}

macro_rules! impl_float_storage {
    ($($t:ty),* $(,)?) => { $(
        impl sealed::Sealed for $t {}

        impl BoundedStorage for $t {
            const CATEGORY: NumericCategory = NumericCategory::FloatingPoint;
            // Float range exceeds the entire bound domain.
            const WIDE_MIN: i128 = i128::MIN;
            const WIDE_MAX: i128 = i128::MAX;
        }
    )* };
}

impl_integral_storage!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_storage!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_categories() {
        assert_eq!(i32::CATEGORY, NumericCategory::Integral);
        assert_eq!(u64::CATEGORY, NumericCategory::Integral);
        assert_eq!(usize::CATEGORY, NumericCategory::Integral);
        assert_eq!(f32::CATEGORY, NumericCategory::FloatingPoint);
        assert_eq!(f64::CATEGORY, NumericCategory::FloatingPoint);
    }

    #[test]
    fn test_same_category_is_symmetric_and_rejects_mixed() {
        use NumericCategory::{FloatingPoint, Integral};
        assert!(Integral.same_as(Integral));
        assert!(FloatingPoint.same_as(FloatingPoint));
        assert!(!Integral.same_as(FloatingPoint));
        assert!(!FloatingPoint.same_as(Integral));
    }

    #[test]
    fn test_widened_ranges_are_order_exact() {
        assert_eq!(u8::WIDE_MIN, 0);
        assert_eq!(u8::WIDE_MAX, 255);
        assert_eq!(i64::WIDE_MIN, i128::from(i64::MIN));
        assert_eq!(u64::WIDE_MAX, i128::from(u64::MAX));
        assert_eq!(f64::WIDE_MIN, i128::MIN);
        assert_eq!(f64::WIDE_MAX, i128::MAX);
    }

    #[test]
    fn test_bounds_fit_in_accepts_covered_intervals() {
        assert!(bounds_fit_in::<i32>(0, 1000));
        assert!(bounds_fit_in::<f64>(-100, 0));
        // Degenerate single-valued interval is legal.
        assert!(bounds_fit_in::<u8>(7, 7));
        // Bounds equal to the type's own extremes are legal.
        assert!(bounds_fit_in::<i8>(-128, 127));
    }

    #[test]
    fn test_bounds_fit_in_rejects_uncovered_intervals() {
        // Negative lower bound does not fit unsigned storage.
        assert!(!bounds_fit_in::<u8>(-128, 127));
        // Upper bound above the type's maximum.
        assert!(!bounds_fit_in::<i8>(0, 1000));
        // Inverted interval.
        assert!(!bounds_fit_in::<i32>(10, 0));
        // u64::MAX exceeds i64's range.
        assert!(!bounds_fit_in::<i64>(0, i128::from(u64::MAX)));
    }
}
