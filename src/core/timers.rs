//! # Feed timers.
//!
//! While a feed is active it runs two periodic tasks:
//!
//! ```text
//! activate(token)
//!   ├─► generator loop    : every generator_period    → Feed::generator_tick()
//!   └─► connectivity loop : every connectivity_period → Feed::connectivity_tick()
//!
//! loop:
//!   select! (biased)
//!     ├─ token.cancelled()  → exit
//!     └─ interval.tick()    → upgrade Weak<FeedInner>; gone → exit; else tick
//! ```
//!
//! The first tick of each loop fires one full period after activation. Both
//! loops hold only a weak reference, so dropping the last `Feed` clone ends
//! them even if nobody cancels the token.

use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use super::feed::{Feed, FeedInner};

/// Spawns both loops on the current runtime.
///
/// Returns `false` if called outside a tokio runtime; the feed then stays
/// active but only advances through manual ticks.
pub(crate) fn spawn(
    feed: Weak<FeedInner>,
    token: &CancellationToken,
    generator_period: Duration,
    connectivity_period: Duration,
) -> bool {
    let Ok(handle) = Handle::try_current() else {
        return false;
    };
    handle.spawn(tick_loop(
        feed.clone(),
        token.clone(),
        generator_period,
        |feed| {
            feed.generator_tick();
        },
    ));
    handle.spawn(tick_loop(
        feed,
        token.clone(),
        connectivity_period,
        |feed| {
            feed.connectivity_tick();
        },
    ));
    true
}

async fn tick_loop(
    feed: Weak<FeedInner>,
    token: CancellationToken,
    period: Duration,
    tick: fn(&Feed),
) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                let Some(inner) = feed.upgrade() else {
                    break;
                };
                tick(&Feed::from_inner(inner));
            }
        }
    }
}
