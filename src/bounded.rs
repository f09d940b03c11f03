// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range-invariant numeric wrapper - see [`Bounded`] type.

use std::{fmt::{Debug, Display},
          ops::Deref};

use crate::{BoundedStorage, ClampInto, bounds_fit_in};

/// A numeric value guaranteed to lie within `[MIN, MAX]`.
///
/// `Bounded` wraps a single field of the storage type `T` and enforces the
/// closed interval on every construction and assignment by saturating clamp.
/// The bounds are carried in the type itself, so two instantiations with
/// different `(T, MIN, MAX)` triples are unrelated types, and an instance can
/// never be observed out of range. There is no default/empty state and no
/// runtime error path: every type-checked operation succeeds.
///
/// Instantiation is gated by a feasibility check evaluated at compile time:
/// `T` must be able to represent both bounds, and `MIN <= MAX` must hold. An
/// infeasible triple fails to compile before a single instance exists (see
/// [`bounds_fit_in`]). Which input types [`new`] and [`set`] accept is
/// decided by the [`ClampInto`] impl grid.
///
/// # Examples
///
/// ```
/// use r3bl_bounded::Bounded;
///
/// // Decibel level restricted to [-100 dB, 0 dB].
/// type Db = Bounded<f64, -100, 0>;
///
/// let level = Db::new(-10.5);
/// assert_eq!(level.value(), -10.5);
///
/// // Out-of-range input saturates to the nearest bound, silently.
/// let muted = Db::new(f64::MIN);
/// assert_eq!(muted.value(), -100.0);
///
/// // Integers may always widen into float-backed storage.
/// let level = Db::new(-10);
/// assert_eq!(level.value(), -10.0);
/// ```
///
/// Bounds the storage type cannot represent are rejected at compile time:
///
/// ```compile_fail
/// use r3bl_bounded::Bounded;
///
/// // u8 cannot represent -128.
/// let it = Bounded::<u8, -128, 127>::new(0_u8);
/// ```
///
/// So is an inverted interval:
///
/// ```compile_fail
/// use r3bl_bounded::Bounded;
///
/// let it = Bounded::<i32, 10, 0>::new(5);
/// ```
///
/// So is a floating-point input into integer-backed storage:
///
/// ```compile_fail
/// use r3bl_bounded::Bounded;
///
/// type Steps = Bounded<i32, 0, 1000>;
/// let it = Steps::new(10.0_f64);
/// ```
///
/// And so is a fractional literal passed to an integral `of`, by
/// literal-type dispatch:
///
/// ```compile_fail
/// use r3bl_bounded::Bounded;
///
/// type Steps = Bounded<i32, 0, 1000>;
/// const IT: Steps = Steps::of(10.5);
/// ```
///
/// [`new`]: Bounded::new
/// [`set`]: Bounded::set
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Bounded<T: BoundedStorage, const MIN: i128, const MAX: i128> {
    value: T,
}

impl<T: BoundedStorage + Debug, const MIN: i128, const MAX: i128> Debug
    for Bounded<T, MIN, MAX>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bounded({:?})", self.value)
    }
}

impl<T: BoundedStorage + Display, const MIN: i128, const MAX: i128> Display
    for Bounded<T, MIN, MAX>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<T: BoundedStorage, const MIN: i128, const MAX: i128> Bounded<T, MIN, MAX> {
        /// Feasibility check for the `(T, MIN, MAX)` triple, evaluated once
        /// per instantiation. Every construction path forces this, so an
        /// infeasible triple is a compile error at monomorphization, never a
        /// runtime condition.
        pub(super) const BOUNDS_VALID: () = assert!(
            bounds_fit_in::<T>(MIN, MAX),
            "storage type cannot represent the requested bounds"
        );

        /// Inclusive lower bound, in the bound domain.
        pub const LOWER: i128 = MIN;

        /// Inclusive upper bound, in the bound domain.
        pub const UPPER: i128 = MAX;

        /// Creates a bounded value by clamping `value` into `[MIN, MAX]`.
        ///
        /// Accepts any input type with a [`ClampInto`] impl for `T`: the
        /// same numeric category as `T`, or any integral type when `T` is
        /// floating-point. Anything else fails to type-check.
        #[must_use]
        pub fn new(value: impl ClampInto<T>) -> Self {
            let () = Self::BOUNDS_VALID;
            Self { value: value.clamp_into::<MIN, MAX>() }
        }

        /// Replaces the current value, re-clamping into `[MIN, MAX]`.
        /// Accepts the same input types as [`Bounded::new`].
        pub fn set(&mut self, value: impl ClampInto<T>) {
            let () = Self::BOUNDS_VALID;
            self.value = value.clamp_into::<MIN, MAX>();
        }

        /// The current value. Always satisfies `MIN <= value <= MAX`.
        #[must_use]
        pub fn value(&self) -> T { self.value }
    }
}

mod impl_const_construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Generates a `const fn` constructor per integral storage primitive.
    /// Clamping runs in the bound domain (`i128`), so the whole storage
    /// range is handled without overflow.
    macro_rules! impl_const_construct_integral {
        ($($t:ty),* $(,)?) => { $(
            impl<const MIN: i128, const MAX: i128> Bounded<$t, MIN, MAX> {
                /// Builds a bounded value from an integer in const context,
                /// clamped exactly like [`Bounded::new`]. A fractional
                /// literal fails to compile by literal-type dispatch.
                #[must_use]
                #[allow(clippy::cast_possible_truncation,
                        clippy::cast_possible_wrap,
                        clippy::cast_sign_loss,
                        clippy::cast_lossless,
                        clippy::manual_clamp)]
                pub const fn of(value: $t) -> Self {
                    let () = Self::BOUNDS_VALID;
                    let wide = value as i128;
                    let clamped = if wide < MIN {
                        MIN
                    } else if wide > MAX {
                        MAX
                    } else {
                        wide
                    };
                    Self { value: clamped as $t }
                }
            }
        )* };
    }

    /// Generates a `const fn` constructor per floating-point storage
    /// primitive. Clamping runs in the storage type; a NaN input propagates
    /// unchanged, matching [`f64::clamp`].
    macro_rules! impl_const_construct_float {
        ($($t:ty),* $(,)?) => { $(
            impl<const MIN: i128, const MAX: i128> Bounded<$t, MIN, MAX> {
                /// Builds a bounded value in const context, clamped exactly
                /// like [`Bounded::new`].
                #[must_use]
                #[allow(clippy::cast_precision_loss, clippy::manual_clamp)]
                pub const fn of(value: $t) -> Self {
                    let () = Self::BOUNDS_VALID;
                    let lower = MIN as $t;
                    let upper = MAX as $t;
                    let value = if value < lower {
                        lower
                    } else if value > upper {
                        upper
                    } else {
                        value
                    };
                    Self { value }
                }
            }
        )* };
    }

    impl_const_construct_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    impl_const_construct_float!(f32, f64);
}

mod impl_deref {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Read-only. There is deliberately no `DerefMut`: writing through a
    /// mutable reference would bypass the clamp. Mutation goes through
    /// [`Bounded::set`].
    impl<T: BoundedStorage, const MIN: i128, const MAX: i128> Deref
        for Bounded<T, MIN, MAX>
    {
        type Target = T;

        fn deref(&self) -> &Self::Target { &self.value }
    }
}

mod serde_support {
    #[allow(clippy::wildcard_imports)]
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes as the bare storage value.
    impl<T, const MIN: i128, const MAX: i128> Serialize for Bounded<T, MIN, MAX>
    where
        T: BoundedStorage + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.value.serialize(serializer)
        }
    }

    /// Deserializes a storage value and re-clamps it, so a hand-edited or
    /// stale payload can never produce an out-of-bounds instance.
    impl<'de, T, const MIN: i128, const MAX: i128> Deserialize<'de>
        for Bounded<T, MIN, MAX>
    where
        T: BoundedStorage + Deserialize<'de> + ClampInto<T>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = T::deserialize(deserializer)?;
            Ok(Self::new(raw))
        }
    }
}
