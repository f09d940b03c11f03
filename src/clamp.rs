// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Saturating conversion into bounded storage - see [`ClampInto`].

use crate::{BoundedStorage, NumericCategory, bounds_fit_in};

/// Saturating conversion of a numeric input into bounded storage `T`.
///
/// This trait is the assignment gate for [`Bounded`]: an input type is
/// assignable if and only if an impl exists here. The impl grid below encodes
/// the category rules from [`NumericCategory`]:
///
/// - every integral type converts into every integral storage type,
/// - every floating-point type converts into every floating-point storage
///   type,
/// - every integral type converts into every floating-point storage type,
/// - **no** floating-point type converts into integral storage. There is no
///   impl to find, so such an assignment fails to type-check. This asymmetry
///   keeps fractional values from being silently truncated into an
///   integer-backed bounded value.
///
/// ## Order of operations
///
/// [`clamp_into`] picks the domain to clamp in, and the choice matters:
///
/// 1. When the input type can itself represent `[MIN, MAX]` (per
///    [`bounds_fit_in`]), the input is clamped in its own domain **first**
///    and only then narrowed to `T`. Narrowing after the clamp keeps a huge
///    out-of-range input from wrapping into storage before the bounds are
///    applied.
/// 2. Otherwise the bounds exceed the input type's range, and the conversion
///    goes through storage's domain: convert first, then clamp with the
///    bounds expressed in `T`.
///
/// Either way the result is total and deterministic: every accepted input
/// yields a value of type `T` inside `[MIN, MAX]`, with no runtime error
/// path. A NaN input to floating-point storage propagates unchanged,
/// matching [`f64::clamp`].
///
/// [`Bounded`]: crate::Bounded
/// [`NumericCategory`]: crate::NumericCategory
/// [`clamp_into`]: Self::clamp_into
pub trait ClampInto<T: BoundedStorage>: Copy {
    /// Fold `self` into `[MIN, MAX]` and convert to `T`, per the order of
    /// operations described on the trait.
    fn clamp_into<const MIN: i128, const MAX: i128>(self) -> T;
}

/// Whether an input of category `input` may flow into storage of category
/// `storage`: same category, or integral input into floating-point storage.
const fn category_legal(storage: NumericCategory, input: NumericCategory) -> bool {
    storage.same_as(input)
        || matches!(
            (storage, input),
            (NumericCategory::FloatingPoint, NumericCategory::Integral)
        )
}

/// Generates [`ClampInto`] impls for one storage type and a list of input
/// types. The pairs that are never generated (float input, integral storage)
/// are exactly the pairs the category rules forbid; each generated pair is
/// checked against [`category_legal`] at compile time.
macro_rules! impl_clamp_into {
    ($t:ty => [$($u:ty),* $(,)?]) => { $(
        const _: () = assert!(
            category_legal(<$t>::CATEGORY, <$u>::CATEGORY),
            "impl grid contains a category-illegal pair"
        );

        impl ClampInto<$t> for $u {
            #[allow(clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast)]
            fn clamp_into<const MIN: i128, const MAX: i128>(self) -> $t {
                if bounds_fit_in::<$u>(MIN, MAX) {
                    // Clamp in the input's own domain, then narrow.
                    self.clamp(MIN as $u, MAX as $u) as $t
                } else {
                    // Bounds exceed the input type's range: clamp in
                    // storage's domain instead.
                    (self as $t).clamp(MIN as $t, MAX as $t)
                }
            }
        }
    )* };
}

impl_clamp_into!(i8 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(i16 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(i32 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(i64 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(isize => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(u8 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(u16 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(u32 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(u64 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(usize => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(f32 => [f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
impl_clamp_into!(f64 => [f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_in_input_domain_before_narrowing() {
        // u64 can represent [0, 1000], so the clamp happens in u64 and only
        // the already-clamped value is narrowed to i32.
        let it: i32 = <u64 as ClampInto<i32>>::clamp_into::<0, 1000>(u64::MAX);
        assert_eq!(it, 1000);

        let it: i32 = <i64 as ClampInto<i32>>::clamp_into::<0, 1000>(i64::MIN);
        assert_eq!(it, 0);

        // Narrow unsigned storage, wide signed input. Without the
        // clamp-before-narrow ordering, 300 would wrap into u8 first.
        let it: u8 = <i64 as ClampInto<u8>>::clamp_into::<0, 200>(300);
        assert_eq!(it, 200);
        let it: u8 = <i64 as ClampInto<u8>>::clamp_into::<0, 200>(i64::MIN);
        assert_eq!(it, 0);
    }

    #[test]
    fn test_clamp_in_storage_domain_when_bounds_exceed_input() {
        // u8 cannot represent -100, so the conversion goes through i32.
        let it: i32 = <u8 as ClampInto<i32>>::clamp_into::<-100, 1000>(5);
        assert_eq!(it, 5);
        let it: i32 = <u8 as ClampInto<i32>>::clamp_into::<-100, 50>(200);
        assert_eq!(it, 50);
    }

    #[test]
    fn test_in_range_values_pass_through_unchanged() {
        let it: i32 = <i32 as ClampInto<i32>>::clamp_into::<0, 1000>(10);
        assert_eq!(it, 10);
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(-10.5);
        assert_eq!(it, -10.5);
    }

    #[test]
    fn test_integral_input_into_float_storage() {
        // i32 can represent [-100, 0]: clamp in i32, then convert.
        let it: f64 = <i32 as ClampInto<f64>>::clamp_into::<-100, 0>(-10);
        assert_eq!(it, -10.0);

        // u64 cannot represent -100: convert to f64, then clamp.
        let it: f64 = <u64 as ClampInto<f64>>::clamp_into::<-100, 0>(5);
        assert_eq!(it, 0.0);
    }

    #[test]
    fn test_float_extremes_saturate() {
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(f64::MAX);
        assert_eq!(it, 0.0);
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(f64::MIN);
        assert_eq!(it, -100.0);
    }

    #[test]
    fn test_wide_float_into_narrow_float_storage() {
        // The clamp happens in f64, so a value far beyond f32's range never
        // reaches the narrowing conversion un-clamped.
        let it: f32 = <f64 as ClampInto<f32>>::clamp_into::<0, 10>(1.0e300);
        assert_eq!(it, 10.0);
        let it: f32 = <f64 as ClampInto<f32>>::clamp_into::<0, 10>(-1.0e300);
        assert_eq!(it, 0.0);
    }

    #[test]
    fn test_boundary_values_are_exact() {
        let it: i32 = <i32 as ClampInto<i32>>::clamp_into::<0, 1000>(1000);
        assert_eq!(it, 1000);
        let it: i32 = <i32 as ClampInto<i32>>::clamp_into::<0, 1000>(0);
        assert_eq!(it, 0);
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(-100.0);
        assert_eq!(it, -100.0);
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(0.0);
        assert_eq!(it, 0.0);
    }

    #[test]
    fn test_degenerate_interval() {
        let it: i32 = <i32 as ClampInto<i32>>::clamp_into::<7, 7>(100);
        assert_eq!(it, 7);
        let it: i32 = <i32 as ClampInto<i32>>::clamp_into::<7, 7>(-100);
        assert_eq!(it, 7);
    }

    #[test]
    fn test_nan_propagates() {
        let it: f64 = <f64 as ClampInto<f64>>::clamp_into::<-100, 0>(f64::NAN);
        assert!(it.is_nan());
    }
}
