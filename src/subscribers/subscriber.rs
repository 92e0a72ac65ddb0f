//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for consuming feed updates. Delivery is
//! synchronous and in append order: the publisher that starts a fan-out calls
//! `on_update` on every subscriber, for its own update and for any update
//! appended meanwhile, before [`Feed::publish`](crate::Feed::publish) returns.
//!
//! ## Contract
//! - Implementations should be quick. A slow subscriber delays the publisher
//!   and every update queued behind it.
//! - A subscriber may call back into the feed (acknowledge, subscribe,
//!   unsubscribe, publish); no feed lock is held during delivery. A publish
//!   from inside `on_update` is delivered after the current update.
//! - Hold a [`WeakFeed`](crate::WeakFeed) (from [`Feed::downgrade`](crate::Feed::downgrade)),
//!   not a `Feed` clone. The feed owns its subscribers, so a strong clone
//!   forms a cycle: the feed and its timers then live until the subscriber
//!   is unsubscribed.
//! - Panics are caught and logged; other subscribers still receive the update.

use crate::events::UpdateEvent;

/// Contract for feed subscribers.
pub trait Subscribe: Send + Sync + 'static {
    /// Handle one newly published update.
    fn on_update(&self, update: &UpdateEvent);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
