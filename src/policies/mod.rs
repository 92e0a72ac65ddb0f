//! Emission and connectivity policies.
//!
//! This module groups the knobs that turn a raw random draw in `[0, 1)` into a
//! decision:
//!
//! ## Contents
//! - [`ThrottlePolicy`] whether a generator tick emits an event
//! - [`UptimePolicy`]   whether a connectivity tick reports the feed as connected
//!
//! ## Quick wiring
//! ```text
//! FeedConfig { throttle: ThrottlePolicy, uptime: UptimePolicy, .. }
//!      ├─► generator::EventGenerator uses throttle.admits(draw) once per tick
//!      └─► core::Feed::connectivity_tick uses uptime.is_up(draw)
//! ```
//!
//! ## Defaults
//! - `ThrottlePolicy::default()` → emit_threshold=0.7 (~30% of ticks emit).
//! - `UptimePolicy::default()`   → outage_probability=0.05 (~95% uptime).

mod throttle;
mod uptime;

pub use throttle::ThrottlePolicy;
pub use uptime::UptimePolicy;
