//! # Feed configuration.
//!
//! Provides [`FeedConfig`] centralized settings for a [`Feed`](crate::Feed).
//!
//! Config is used in two places:
//! 1. **Feed creation**: `Feed::builder(config)` validates it in `build()`
//! 2. **Timer wiring**: tick periods are read when the first subscriber attaches
//!
//! ## Constraints
//! - periods must be non-zero
//! - `history_capacity` must be at least 1
//! - policy probabilities must lie in `[0, 1]`

use std::time::Duration;

use crate::error::FeedError;
use crate::policies::{ThrottlePolicy, UptimePolicy};

/// Configuration for a feed instance.
///
/// ## Field semantics
/// - `generator_period`: how often the generator gets a chance to emit
/// - `connectivity_period`: how often the connectivity flag is redrawn
/// - `history_capacity`: maximum number of retained events (oldest evicted)
/// - `throttle`: per-tick emission gate
/// - `uptime`: per-tick connectivity draw
///
/// ## Notes
/// All fields are public for flexibility; [`FeedConfig::validate`] runs when
/// the feed is built.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Generator tick period.
    pub generator_period: Duration,

    /// Connectivity tick period.
    pub connectivity_period: Duration,

    /// Hard cap on history length.
    pub history_capacity: usize,

    /// Emission gate applied on each generator tick.
    pub throttle: ThrottlePolicy,

    /// Connectivity draw applied on each connectivity tick.
    pub uptime: UptimePolicy,
}

impl FeedConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.generator_period.is_zero() {
            return Err(FeedError::invalid("generator_period", "must be non-zero"));
        }
        if self.connectivity_period.is_zero() {
            return Err(FeedError::invalid("connectivity_period", "must be non-zero"));
        }
        if self.history_capacity == 0 {
            return Err(FeedError::invalid("history_capacity", "must be at least 1"));
        }
        self.throttle.validate()?;
        self.uptime.validate()
    }
}

impl Default for FeedConfig {
    /// Default configuration:
    ///
    /// - `generator_period = 3s`
    /// - `connectivity_period = 10s`
    /// - `history_capacity = 50`
    /// - `throttle = ThrottlePolicy::default()` (~30% of ticks emit)
    /// - `uptime = UptimePolicy::default()` (~95% connected)
    fn default() -> Self {
        Self {
            generator_period: Duration::from_secs(3),
            connectivity_period: Duration::from_secs(10),
            history_capacity: 50,
            throttle: ThrottlePolicy::default(),
            uptime: UptimePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = FeedConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.history_capacity, 50);
    }

    #[test]
    fn test_rejects_zero_values() {
        let cfg = FeedConfig {
            history_capacity: 0,
            ..FeedConfig::default()
        };
        match cfg.validate() {
            Err(FeedError::InvalidConfig { field, .. }) => assert_eq!(field, "history_capacity"),
            other => panic!("unexpected {other:?}"),
        }

        let cfg = FeedConfig {
            generator_period: Duration::ZERO,
            ..FeedConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = FeedConfig {
            connectivity_period: Duration::ZERO,
            ..FeedConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_policies() {
        let cfg = FeedConfig {
            uptime: UptimePolicy {
                outage_probability: 2.0,
            },
            ..FeedConfig::default()
        };
        match cfg.validate() {
            Err(FeedError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "uptime.outage_probability")
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
