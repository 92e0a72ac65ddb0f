//! # Uptime policy for the simulated connectivity signal.
//!
//! Every connectivity tick is a fresh, independent draw: the feed reports
//! connected when the draw exceeds `outage_probability`. The current state is
//! not an input, so there is no transition matrix to tune.

use crate::error::FeedError;

/// Bernoulli trial deciding the connectivity flag on each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UptimePolicy {
    /// Chance that a tick reports the feed as disconnected (`0.0..=1.0`).
    pub outage_probability: f64,
}

impl Default for UptimePolicy {
    /// Returns `outage_probability = 0.05` (~95% uptime).
    fn default() -> Self {
        Self {
            outage_probability: 0.05,
        }
    }
}

impl UptimePolicy {
    /// Maps one draw in `[0, 1)` to the connectivity flag.
    #[inline]
    pub fn is_up(&self, draw: f64) -> bool {
        draw > self.outage_probability
    }

    pub(crate) fn validate(&self) -> Result<(), FeedError> {
        if !(0.0..=1.0).contains(&self.outage_probability) {
            return Err(FeedError::invalid(
                "uptime.outage_probability",
                format!("{} is outside [0, 1]", self.outage_probability),
            ));
        }
        Ok(())
    }
}
