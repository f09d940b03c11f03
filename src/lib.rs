// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Bounded numeric values
//!
//! This crate provides [`Bounded`], a wrapper around a primitive numeric
//! storage type that guarantees, by construction, that its value always lies
//! within a closed interval `[MIN, MAX]` fixed at compile time. It lets you
//! define semantically constrained quantities as distinct types, so an
//! out-of-range decibel level or percentage is structurally impossible
//! rather than merely checked at runtime.
//!
//! ```
//! use r3bl_bounded::Bounded;
//!
//! /// Decibel level, clamped to [-100 dB, 0 dB].
//! type Db = Bounded<f64, -100, 0>;
//! /// Volume steps, clamped to [0, 1000].
//! type Steps = Bounded<i32, 0, 1000>;
//!
//! // In-range values pass through exactly.
//! assert_eq!(Db::new(-10.5).value(), -10.5);
//!
//! // Out-of-range values saturate to the nearest bound.
//! assert_eq!(Steps::new(u64::MAX).value(), 1000);
//! assert_eq!(Steps::new(i64::MIN).value(), 0);
//!
//! // Const construction works in const contexts.
//! const DEFAULT_STEPS: Steps = Steps::of(10);
//! assert_eq!(DEFAULT_STEPS.value(), 10);
//! ```
//!
//! ## Two tiers, one contract
//!
//! Everything that can go wrong with a bounded value is rejected at compile
//! time: a storage type that cannot represent the requested bounds, an
//! inverted interval, a floating-point input into integer-backed storage, or
//! a fractional literal passed to an integral `Bounded::of`. None of these
//! has a runtime error channel.
//!
//! Out-of-range *values* (as opposed to incompatible *types*) are not errors
//! at all: they are silently clamped. Every type-checked construction and
//! assignment succeeds.
//!
//! ## Which input types are accepted
//!
//! Assignment is gated by numeric category (see [`NumericCategory`] and
//! [`ClampInto`]): inputs of the same category as the storage type are
//! always legal, integers may widen into float-backed storage, and floats
//! may never flow into integer-backed storage.
//!
//! ```compile_fail
//! use r3bl_bounded::Bounded;
//!
//! type Steps = Bounded<i32, 0, 1000>;
//! // Fractional values cannot silently truncate into integer storage.
//! let it = Steps::new(10.0_f64);
//! ```
//!
//! ## Clamp ordering
//!
//! Clamping happens in the widest safe domain: when the input type can
//! itself represent the bounds, the clamp runs there and only the clamped
//! result is narrowed into storage. See [`ClampInto`] for the exact order of
//! operations and why it matters.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod bounded;
pub mod clamp;
pub mod storage;

// Re-export.
pub use bounded::*;
pub use clamp::*;
pub use storage::*;
