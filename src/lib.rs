//! # crisisfeed
//!
//! **crisisfeed** is the real-time update feed behind a disaster-response
//! dashboard.
//!
//! It produces synthetic field updates (social media posts, resource status
//! changes, official statements, new reports), keeps a bounded newest-first
//! history of them, tracks which ones the operator has acknowledged, and
//! pushes every new update to subscribers the moment it is published.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────────────┐          ┌──────────────────────┐
//!  │    EventGenerator    │          │  connectivity draw   │
//!  │ ThrottlePolicy gate  │          │    UptimePolicy      │
//!  │ Sampler + Reference  │          │                      │
//!  └──────────┬───────────┘          └──────────┬───────────┘
//!    every 3s │ Option<UpdateEvent>    every 10s │ bool
//!             ▼                                 ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Feed (context object, cheap to clone)                            │
//! │  - history: newest first, capacity 50                             │
//! │  - connected / last_update_at / FeedStats                         │
//! │  - SubscriberSet (registration order)                             │
//! │  - CancellationToken for both timers (present while active)       │
//! └───────────────────────────────┬───────────────────────────────────┘
//!                                 │ publish(ev): append + enqueue, one drainer
//!                                 │ fans out in append order to a snapshot
//!                   ┌─────────────┼─────────────┐
//!                   ▼             ▼             ▼
//!              sub1.on_update sub2.on_update subN.on_update
//! ```
//!
//! ### Lifecycle
//! ```text
//! Feed::builder(cfg).build() ──► Dormant (no timers)
//!
//! subscribe()   0 → 1  ──► Active: generator + connectivity timers spawned
//! unsubscribe() 1 → 0  ──► Dormant: timers cancelled, history kept
//! subscribe()   0 → 1  ──► Active again: history cleared, connected = true
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Feed**          | Bounded history, acknowledgment, subscriptions, timers.       | [`Feed`], [`FeedBuilder`], [`Subscription`] |
//! | **Subscriber API**| Receive updates synchronously, in publish order.              | [`Subscribe`], [`SubscriberFn`]             |
//! | **Generation**    | Throttled synthetic updates over reference data.              | [`EventGenerator`], [`Sampler`]             |
//! | **Randomness**    | Injectable, scriptable sources for every draw.                | [`RandomSource`], [`ScriptedRandom`]        |
//! | **Policies**      | Emission gate and connectivity probability.                   | [`ThrottlePolicy`], [`UptimePolicy`]        |
//! | **Errors**        | Typed construction errors.                                    | [`FeedError`]                               |
//! | **Configuration** | Centralize periods, capacity and policies.                    | [`FeedConfig`]                              |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use crisisfeed::{Collector, Feed, FeedConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = FeedConfig {
//!         generator_period: Duration::from_millis(20),
//!         ..FeedConfig::default()
//!     };
//!     let feed = Feed::builder(cfg).with_seed(7).build()?;
//!
//!     let seen = Arc::new(Collector::new());
//!     let sub = feed.subscribe(seen.clone());
//!
//!     tokio::time::sleep(Duration::from_millis(500)).await;
//!     sub.unsubscribe();
//!
//!     assert_eq!(seen.len(), feed.len());
//!     println!("{} updates, {} unread", feed.len(), feed.unread_count());
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod events;
mod generator;
mod policies;
mod random;
mod reference;
mod subscribers;

// ---- Public re-exports ----

pub use config::FeedConfig;
pub use core::{Feed, FeedBuilder, FeedSnapshot, FeedStats, Subscription, WeakFeed};
pub use error::FeedError;
pub use events::{
    ChangeKind, EventKind, NewReport, OfficialUpdate, Payload, Platform, Priority,
    ResourceStatus, SocialMedia, UpdateEvent,
};
pub use generator::{EventGenerator, ReferenceSampler, Sampler};
pub use policies::{ThrottlePolicy, UptimePolicy};
pub use random::{RandomFn, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use reference::{DisasterRef, ReferenceData, ResourceRef};
pub use subscribers::{Collector, Subscribe, SubscriberFn};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
