//! # Throttle policy for the event generator.
//!
//! [`ThrottlePolicy`] gates how often a generator tick actually produces an event.
//! A tick draws `u` in `[0, 1)` and emits only when `u > emit_threshold`, so the
//! emit probability per tick is `1 - emit_threshold`.
//!
//! # Example
//! ```rust
//! use crisisfeed::ThrottlePolicy;
//!
//! let throttle = ThrottlePolicy::default();
//! assert!(!throttle.admits(0.7));
//! assert!(throttle.admits(0.71));
//! assert!((throttle.emit_probability() - 0.3).abs() < 1e-9);
//! ```

use crate::error::FeedError;

/// Probability gate applied once per generator tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrottlePolicy {
    /// Draws strictly above this value emit an event (`0.0..=1.0`).
    pub emit_threshold: f64,
}

impl Default for ThrottlePolicy {
    /// Returns a gate with `emit_threshold = 0.7` (~30% emit probability).
    fn default() -> Self {
        Self {
            emit_threshold: 0.7,
        }
    }
}

impl ThrottlePolicy {
    /// Creates a gate from the desired per-tick emit probability.
    ///
    /// The probability is clamped to `[0, 1]`.
    pub fn with_emit_probability(p: f64) -> Self {
        Self {
            emit_threshold: 1.0 - p.clamp(0.0, 1.0),
        }
    }

    /// Returns `true` if the draw passes the gate.
    #[inline]
    pub fn admits(&self, draw: f64) -> bool {
        draw > self.emit_threshold
    }

    /// Expected share of ticks that emit.
    #[inline]
    pub fn emit_probability(&self) -> f64 {
        1.0 - self.emit_threshold
    }

    pub(crate) fn validate(&self) -> Result<(), FeedError> {
        if !(0.0..=1.0).contains(&self.emit_threshold) {
            return Err(FeedError::invalid(
                "throttle.emit_threshold",
                format!("{} is outside [0, 1]", self.emit_threshold),
            ));
        }
        Ok(())
    }
}
