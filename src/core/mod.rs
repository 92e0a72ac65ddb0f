//! Feed core: state, lifecycle and timers.
//!
//! The only public entry point from this module is [`Feed`], built through
//! [`FeedBuilder`]. It owns the history, fans updates out to subscribers and
//! drives the generator and connectivity timers while anyone is subscribed.
//!
//! Internal modules:
//! - [`state`]: bounded newest-first history, connectivity flag, counters;
//! - [`feed`]: the context object and its operations;
//! - [`delivery`]: append-ordered fan-out queue with a single drainer;
//! - [`timers`]: generator and connectivity loops bound to a cancellation token;
//! - [`subscription`]: idempotent removal handles;
//! - [`snapshot`]: serializable point-in-time view.

mod builder;
mod delivery;
mod feed;
mod snapshot;
mod state;
mod subscription;
mod timers;

pub use builder::FeedBuilder;
pub use feed::{Feed, WeakFeed};
pub use snapshot::FeedSnapshot;
pub use state::FeedStats;
pub use subscription::Subscription;
