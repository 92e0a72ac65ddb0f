//! Injectable randomness.
//!
//! Everything random in the feed (throttle gate, kind selection, payload
//! sampling, id disambiguators, connectivity draws) goes through the
//! [`RandomSource`] trait: a source of values in `[0, 1)`.
//!
//! ## Contents
//! - [`RandomSource`]  the trait
//! - [`ThreadRandom`]  thread-local `rand` generator (default)
//! - [`SeededRandom`]  reproducible `StdRng` seeded from a `u64`
//! - [`ScriptedRandom`] plays back a fixed sequence (tests, demos)
//! - [`RandomFn`]      closure adapter

mod scripted;
mod source;

pub use scripted::ScriptedRandom;
pub use source::{RandomFn, RandomSource, SeededRandom, ThreadRandom};

/// Maps one draw onto an index in `0..len`.
///
/// Out-of-range draws are clamped so a misbehaving source can never index out
/// of bounds. `len` must be non-zero.
#[inline]
pub(crate) fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    debug_assert!(len > 0, "pick_index on empty collection");
    let draw = unit(rng.next_f64());
    ((draw * len as f64) as usize).min(len.saturating_sub(1))
}

/// Maps one draw onto an integer in `0..upper`.
#[inline]
pub(crate) fn pick_below(rng: &mut dyn RandomSource, upper: u32) -> u32 {
    pick_index(rng, upper.max(1) as usize) as u32
}

/// Clamps a draw into `[0, 1)`; NaN maps to 0.
#[inline]
pub(crate) fn unit(draw: f64) -> f64 {
    if draw.is_nan() {
        0.0
    } else {
        draw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
