//! # Feed subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for consuming updates published by a [`Feed`](crate::Feed).
//!
//! ## Architecture
//! ```text
//! Feed::publish(ev)
//!   ├─► history.push_front(ev)            (under the state lock)
//!   ├─► snapshot = subscribers.snapshot() (under the state lock)
//!   ├─► deliveries.push(ev, snapshot)     (under the state lock)
//!   └─► drain: fan_out(&snapshot, &ev)    (lock released, one drainer)
//!          ├──► S1.on_update(&ev)
//!          ├──► S2.on_update(&ev)
//!          └──► SN.on_update(&ev)         (registration order)
//! ```
//!
//! ## Built-in subscribers
//! - [`Collector`]: records every delivered update
//! - [`LogWriter`]: renders updates as `tracing` records (feature `logging`)
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use crisisfeed::{EventKind, Subscribe, UpdateEvent};
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct CriticalCounter(AtomicU64);
//!
//! impl Subscribe for CriticalCounter {
//!     fn on_update(&self, update: &UpdateEvent) {
//!         if update.kind() == EventKind::NewReport {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "critical-counter"
//!     }
//! }
//! ```

mod collector;
#[cfg(feature = "logging")]
mod log;
mod set;
mod subscriber;
mod subscriber_fn;

pub use collector::Collector;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use subscriber_fn::SubscriberFn;

pub(crate) use set::{SubscriberId, SubscriberSet, fan_out};
