//! # Feed: the subscription context object.
//!
//! A [`Feed`] owns the bounded history, the connectivity flag, the subscriber
//! registrations and the generator. It is cheap to clone; clones share state.
//!
//! ## Lifecycle
//! ```text
//!             subscribe (0 → 1)                 unsubscribe (1 → 0)
//!   Dormant ───────────────────────► Active ───────────────────────► Dormant
//!     │  history kept as-is            │  generator + connectivity      │
//!     │  no timers                     │  timers running                │
//!     │                                │                                │
//!     └──── re-attach after a full detach: history cleared, connected ◄─┘
//! ```
//!
//! ## Locking
//! All mutable state sits behind one mutex. It is released before subscriber
//! callbacks run, so callbacks may call back into the feed. The generator and
//! the connectivity source have their own locks and are never held while
//! publishing.
//!
//! ## Delivery order
//! Appends enqueue a fan-out under the state lock and a single publisher
//! drains the queue, so every subscriber sees updates in append order even
//! with publishers on several threads or publishing from callbacks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::events::UpdateEvent;
use crate::generator::EventGenerator;
use crate::random::RandomSource;
use crate::subscribers::{Subscribe, SubscriberFn, SubscriberId, fan_out};

use super::builder::FeedBuilder;
use super::delivery::Delivery;
use super::snapshot::FeedSnapshot;
use super::state::{FeedState, FeedStats};
use super::subscription::Subscription;
use super::timers;

/// Shared feed internals. Timer tasks and subscription handles hold it weakly.
pub(crate) struct FeedInner {
    cfg: FeedConfig,
    state: Mutex<FeedState>,
    generator: Mutex<EventGenerator>,
    uplink: Mutex<Box<dyn RandomSource>>,
}

impl Drop for FeedInner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = state.timers.take() {
            token.cancel();
        }
    }
}

/// Real-time update feed.
///
/// Build one with [`Feed::builder`] (or [`Feed::new`] for the built-in
/// reference data), then attach subscribers.
///
/// ## Example
/// ```rust
/// use crisisfeed::{Feed, FeedConfig};
///
/// # fn main() -> Result<(), crisisfeed::FeedError> {
/// let feed = Feed::new(FeedConfig::default())?;
/// let sub = feed.subscribe_fn("printer", |ev| println!("{} {}", ev.kind(), ev.id));
///
/// assert_eq!(feed.unread_count(), 0);
/// sub.unsubscribe();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Feed {
    inner: Arc<FeedInner>,
}

impl Feed {
    /// Starts building a feed with `cfg`.
    pub fn builder(cfg: FeedConfig) -> FeedBuilder {
        FeedBuilder::new(cfg)
    }

    /// Builds a feed over the built-in reference data with thread-local randomness.
    pub fn new(cfg: FeedConfig) -> Result<Self, FeedError> {
        FeedBuilder::new(cfg).build()
    }

    pub(crate) fn assemble(
        cfg: FeedConfig,
        generator: EventGenerator,
        uplink: Box<dyn RandomSource>,
    ) -> Self {
        let state = FeedState::new(cfg.history_capacity);
        Self {
            inner: Arc::new(FeedInner {
                cfg,
                state: Mutex::new(state),
                generator: Mutex::new(generator),
                uplink: Mutex::new(uplink),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<FeedInner>) -> Self {
        Self { inner }
    }

    /// Non-owning handle to this feed.
    ///
    /// Subscribers that need to call back into the feed should hold one of
    /// these rather than a `Feed` clone: the feed owns its subscribers, so a
    /// strong clone inside a subscriber keeps the feed (and its timers) alive
    /// until that subscriber is unsubscribed.
    pub fn downgrade(&self) -> WeakFeed {
        WeakFeed {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `subscriber` and returns its removal handle.
    ///
    /// The first subscriber activates the feed and starts both timers on the
    /// current tokio runtime.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscribe>) -> Subscription {
        let name = subscriber.name();
        let (id, started) = {
            let mut state = self.state();
            let started = if state.timers.is_none() {
                if state.stats.activations > 0 {
                    state.restart();
                }
                state.stats.activations += 1;
                let token = CancellationToken::new();
                state.timers = Some(token.clone());
                Some(token)
            } else {
                None
            };
            (state.subscribers.insert(subscriber), started)
        };

        if let Some(token) = started {
            self.activate(&token);
        }
        tracing::debug!(subscriber = name, "subscribed");
        Subscription::new(id, name, Arc::downgrade(&self.inner))
    }

    /// Registers a closure under `name`.
    pub fn subscribe_fn<F>(&self, name: &'static str, f: F) -> Subscription
    where
        F: Fn(&UpdateEvent) + Send + Sync + 'static,
    {
        self.subscribe(SubscriberFn::arc(name, f))
    }

    fn activate(&self, token: &CancellationToken) {
        let spawned = timers::spawn(
            Arc::downgrade(&self.inner),
            token,
            self.inner.cfg.generator_period,
            self.inner.cfg.connectivity_period,
        );
        if spawned {
            tracing::info!(
                generator_period = ?self.inner.cfg.generator_period,
                connectivity_period = ?self.inner.cfg.connectivity_period,
                "feed activated"
            );
        } else {
            tracing::warn!("no tokio runtime; feed timers not started, drive ticks manually");
        }
    }

    pub(crate) fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut state = self.state();
        if !state.subscribers.remove(id) {
            return false;
        }
        if !state.subscribers.is_empty() {
            return true;
        }
        if let Some(token) = state.timers.take() {
            token.cancel();
            tracing::info!(history = state.len(), "feed dormant");
        }
        true
    }

    /// Appends `event` to history and delivers it to every current subscriber.
    ///
    /// The event is stored and delivered unread. Returns `false` without
    /// storing or delivering anything if an event with the same id is
    /// already in history.
    ///
    /// Delivery follows append order across all publishers. If a fan-out is
    /// already running (this call comes from inside a callback, or from
    /// another thread), the event is queued and the running publisher
    /// delivers it once its current fan-out completes; this call then
    /// returns without waiting.
    pub fn publish(&self, mut event: UpdateEvent) -> bool {
        event.read = false;
        let drain = {
            let mut state = self.state();
            if !state.append(event.clone()) {
                tracing::debug!(update = %event.id, "duplicate update dropped");
                return false;
            }
            let targets = state.subscribers.snapshot();
            state.deliveries.push(event, targets);
            let drain = state.deliveries.claim();
            if !drain {
                tracing::debug!(
                    queued = state.deliveries.len(),
                    "update queued behind running fan-out"
                );
            }
            drain
        };

        if drain {
            self.drain();
        }
        true
    }

    fn drain(&self) {
        loop {
            let next = self.state().deliveries.next();
            let Some(Delivery { event, targets }) = next else {
                break;
            };
            let delivered = fan_out(&targets, &event);
            tracing::debug!(
                update = %event.id,
                kind = %event.kind(),
                delivered,
                "update published"
            );
        }
    }

    /// Empties history and unsets `last_update_at`.
    ///
    /// Subscriptions, connectivity and counters are untouched.
    pub fn clear(&self) {
        self.state().clear();
        tracing::debug!("history cleared");
    }

    /// Marks the update `id` as read. Returns `false` if absent or already read.
    pub fn acknowledge(&self, id: &str) -> bool {
        self.state().acknowledge(id)
    }

    /// Number of unread updates in history.
    pub fn unread_count(&self) -> usize {
        self.state().unread_count()
    }

    /// Copy of the history, newest first.
    pub fn history(&self) -> Vec<UpdateEvent> {
        self.state().history()
    }

    /// Number of updates currently retained.
    pub fn len(&self) -> usize {
        self.state().len()
    }

    /// True if history is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Simulated connectivity flag.
    pub fn is_connected(&self) -> bool {
        self.state().connected
    }

    /// Timestamp of the most recent append, unset after `clear`.
    pub fn last_update_at(&self) -> Option<DateTime<Utc>> {
        self.state().last_update_at()
    }

    /// Number of active registrations.
    pub fn subscriber_count(&self) -> usize {
        self.state().subscribers.len()
    }

    /// True while at least one subscriber is attached.
    pub fn is_active(&self) -> bool {
        self.state().timers.is_some()
    }

    /// Counters accumulated since the feed was built.
    pub fn stats(&self) -> FeedStats {
        self.state().stats
    }

    /// Consistent view of history, connectivity and unread count.
    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.state();
        FeedSnapshot {
            history: state.history(),
            connected: state.connected,
            last_update_at: state.last_update_at(),
            unread: state.unread_count(),
            subscribers: state.subscribers.len(),
        }
    }

    /// Configuration this feed was built with.
    pub fn config(&self) -> &FeedConfig {
        &self.inner.cfg
    }

    /// Runs one generator tick and publishes the result, if any.
    ///
    /// Returns the event only if it was stored. A generated id that collides
    /// with one already in history is dropped as a duplicate and yields `None`.
    ///
    /// Timers call this on every `generator_period`; hosts without a runtime
    /// may call it directly.
    pub fn generator_tick(&self) -> Option<UpdateEvent> {
        self.state().stats.generator_ticks += 1;
        let event = self
            .inner
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .maybe_generate()?;

        if !self.publish(event.clone()) {
            return None;
        }
        self.state().stats.generated += 1;
        Some(event)
    }

    /// Redraws the connectivity flag and returns the new value.
    pub fn connectivity_tick(&self) -> bool {
        let draw = self
            .inner
            .uplink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_f64();
        let up = self.inner.cfg.uptime.is_up(draw);

        let mut state = self.state();
        state.stats.connectivity_checks += 1;
        if state.connected != up {
            tracing::debug!(connected = up, "connectivity changed");
        }
        state.connected = up;
        up
    }
}

/// Weak counterpart of [`Feed`], obtained from [`Feed::downgrade`].
#[derive(Clone, Debug)]
pub struct WeakFeed {
    inner: Weak<FeedInner>,
}

impl WeakFeed {
    /// Returns the feed if it is still alive.
    pub fn upgrade(&self) -> Option<Feed> {
        self.inner.upgrade().map(Feed::from_inner)
    }
}

impl std::fmt::Debug for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("Feed")
            .field("history", &state.len())
            .field("subscribers", &state.subscribers.len())
            .field("connected", &state.connected)
            .field("active", &state.timers.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::events::{NewReport, Payload, Priority};
    use crate::random::ScriptedRandom;
    use crate::subscribers::Collector;

    fn update(id: &str) -> UpdateEvent {
        UpdateEvent::new(
            id,
            Payload::NewReport(NewReport {
                reporter_id: "responder_1".into(),
                priority: Priority::Medium,
                related_disaster_id: "1".into(),
            }),
        )
    }

    fn quiet_feed() -> Feed {
        Feed::builder(FeedConfig::default())
            .with_random(ScriptedRandom::new([]))
            .with_connectivity_random(ScriptedRandom::new([]).with_fallback(0.5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_publish_delivers_in_order() {
        let feed = quiet_feed();
        let seen = Arc::new(Collector::new());
        let _sub = feed.subscribe(seen.clone());

        assert!(feed.publish(update("e1")));
        assert!(feed.publish(update("e2")));

        assert_eq!(seen.ids(), vec!["e1", "e2"]);
        let history: Vec<_> = feed.history().into_iter().map(|e| e.id).collect();
        assert_eq!(history, vec!["e2", "e1"]);
        assert!(feed.last_update_at().is_some());
    }

    #[test]
    fn test_duplicate_not_stored_or_delivered() {
        let feed = quiet_feed();
        let seen = Arc::new(Collector::new());
        let _sub = feed.subscribe(seen.clone());

        assert!(feed.publish(update("same")));
        assert!(!feed.publish(update("same")));
        assert_eq!(seen.len(), 1);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.stats().duplicates, 1);
    }

    #[test]
    fn test_unsubscribe_is_idempotent_and_targeted() {
        let feed = quiet_feed();
        let a = Arc::new(Collector::new());
        let b = Arc::new(Collector::new());
        let sub_a = feed.subscribe(a.clone());
        let _sub_b = feed.subscribe(b.clone());
        assert_eq!(feed.subscriber_count(), 2);

        assert!(sub_a.unsubscribe());
        assert!(!sub_a.unsubscribe());
        assert!(!sub_a.is_active());
        assert_eq!(feed.subscriber_count(), 1);
        assert!(feed.is_active());

        feed.publish(update("e1"));
        assert!(a.is_empty());
        assert_eq!(b.ids(), vec!["e1"]);
    }

    #[test]
    fn test_dormant_without_runtime_still_registers() {
        let feed = quiet_feed();
        assert!(!feed.is_active());
        let sub = feed.subscribe_fn("noop", |_| {});
        assert!(feed.is_active());
        sub.unsubscribe();
        assert!(!feed.is_active());
        assert_eq!(feed.stats().activations, 1);
    }

    #[test]
    fn test_reattach_restarts_history() {
        let feed = Feed::builder(FeedConfig::default())
            .with_connectivity_random(ScriptedRandom::new([0.0]))
            .build()
            .unwrap();
        let sub = feed.subscribe_fn("first", |_| {});
        feed.publish(update("old"));
        feed.connectivity_tick();
        sub.unsubscribe();

        // dormant: history left as it was
        assert_eq!(feed.len(), 1);
        assert!(!feed.is_connected());

        let _sub = feed.subscribe_fn("second", |_| {});
        assert!(feed.is_empty());
        assert!(feed.is_connected());
        assert!(feed.last_update_at().is_none());
        assert_eq!(feed.stats().activations, 2);
    }

    #[test]
    fn test_clear_keeps_subscriptions() {
        let feed = quiet_feed();
        let seen = Arc::new(Collector::new());
        let _sub = feed.subscribe(seen.clone());
        feed.publish(update("e1"));
        feed.clear();

        assert!(feed.is_empty());
        assert_eq!(feed.unread_count(), 0);
        assert!(feed.last_update_at().is_none());
        assert_eq!(feed.subscriber_count(), 1);
        assert!(feed.is_connected());

        feed.publish(update("e2"));
        assert_eq!(seen.ids(), vec!["e1", "e2"]);
    }

    #[test]
    fn test_acknowledge_and_unread() {
        let feed = quiet_feed();
        for i in 0..60 {
            feed.publish(update(&format!("e{i}")));
        }
        assert_eq!(feed.unread_count(), 50);
        assert!(feed.acknowledge("e59"));
        assert!(feed.acknowledge("e30"));
        assert!(!feed.acknowledge("e59"));
        assert!(!feed.acknowledge("e0"));
        assert_eq!(feed.unread_count(), 48);
    }

    struct Republisher {
        feed: WeakFeed,
        fired: AtomicBool,
    }

    impl Subscribe for Republisher {
        fn on_update(&self, _update: &UpdateEvent) {
            if self.fired.swap(true, Ordering::SeqCst) {
                return;
            }
            if let Some(feed) = self.feed.upgrade() {
                feed.publish(update("nested"));
            }
        }
    }

    #[test]
    fn test_nested_publish_delivered_after_outer() {
        let feed = quiet_feed();
        let _first = feed.subscribe(Arc::new(Republisher {
            feed: feed.downgrade(),
            fired: AtomicBool::new(false),
        }));
        let seen = Arc::new(Collector::new());
        let _second = feed.subscribe(seen.clone());

        assert!(feed.publish(update("outer")));

        assert_eq!(seen.ids(), vec!["outer", "nested"]);
        let history: Vec<_> = feed.history().into_iter().map(|e| e.id).collect();
        assert_eq!(history, vec!["nested", "outer"]);
    }

    #[test]
    fn test_cross_thread_delivery_follows_append_order() {
        let feed = quiet_feed();
        let (entered_tx, entered_rx) = mpsc::channel::<()>();
        let (resume_tx, resume_rx) = mpsc::channel::<()>();
        let resume_rx = Mutex::new(resume_rx);

        let _gate = feed.subscribe_fn("gate", move |ev| {
            if ev.id == "e1" {
                entered_tx.send(()).unwrap();
                resume_rx.lock().unwrap().recv().unwrap();
            }
        });
        let seen = Arc::new(Collector::new());
        let _seen = feed.subscribe(seen.clone());

        let first = {
            let feed = feed.clone();
            thread::spawn(move || feed.publish(update("e1")))
        };
        entered_rx.recv().unwrap();

        // e1 is appended and its fan-out is stalled in `gate`
        assert!(feed.publish(update("e2")));
        assert!(seen.is_empty());

        resume_tx.send(()).unwrap();
        assert!(first.join().unwrap());

        assert_eq!(seen.ids(), vec!["e1", "e2"]);
        let history: Vec<_> = feed.history().into_iter().map(|e| e.id).collect();
        assert_eq!(history, vec!["e2", "e1"]);
    }

    #[test]
    fn test_unsubscribing_another_mid_publish() {
        let feed = quiet_feed();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let _remover = {
            let slot = Arc::clone(&slot);
            feed.subscribe_fn("remover", move |_| {
                if let Some(sub) = slot.lock().unwrap().take() {
                    assert!(sub.unsubscribe());
                }
            })
        };
        let victim = Arc::new(Collector::new());
        *slot.lock().unwrap() = Some(feed.subscribe(victim.clone()));

        feed.publish(update("e1"));
        feed.publish(update("e2"));

        // snapshot taken at append time still includes the victim for e1
        assert_eq!(victim.ids(), vec!["e1"]);
        assert_eq!(feed.subscriber_count(), 1);
    }

    #[test]
    fn test_subscribing_mid_publish() {
        let feed = quiet_feed();
        let late = Arc::new(Collector::new());
        let handles: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));
        let _adder = {
            let weak = feed.downgrade();
            let late = Arc::clone(&late);
            let handles = Arc::clone(&handles);
            feed.subscribe_fn("adder", move |_| {
                let mut handles = handles.lock().unwrap();
                if handles.is_empty() {
                    if let Some(feed) = weak.upgrade() {
                        handles.push(feed.subscribe(late.clone()));
                    }
                }
            })
        };

        feed.publish(update("e1"));
        assert!(late.is_empty());
        assert_eq!(feed.subscriber_count(), 2);

        feed.publish(update("e2"));
        assert_eq!(late.ids(), vec!["e2"]);
    }

    #[test]
    fn test_weak_handle_does_not_keep_feed_alive() {
        let feed = quiet_feed();
        let weak = feed.downgrade();
        let _sub = feed.subscribe(Arc::new(Republisher {
            feed: feed.downgrade(),
            fired: AtomicBool::new(false),
        }));
        assert!(weak.upgrade().is_some());

        drop(feed);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_colliding_generated_id_is_not_reported() {
        // every tick emits the same new_report with disambiguator 0xe666, so
        // ticks within the same millisecond collide
        let feed = Feed::builder(FeedConfig::default())
            .with_random(ScriptedRandom::new([]).with_fallback(0.9))
            .build()
            .unwrap();

        let ticks = 200;
        let returned: Vec<UpdateEvent> =
            (0..ticks).filter_map(|_| feed.generator_tick()).collect();
        let stats = feed.stats();

        assert!(stats.duplicates > 0);
        assert_eq!(stats.generator_ticks, ticks);
        assert_eq!(stats.generated, returned.len() as u64);
        assert_eq!(stats.published, returned.len() as u64);
        assert_eq!(stats.duplicates, ticks - returned.len() as u64);

        let stored: Vec<String> = feed.history().into_iter().map(|e| e.id).collect();
        for ev in returned.iter().rev().take(stored.len()) {
            assert!(stored.contains(&ev.id), "returned {} was not stored", ev.id);
        }
    }

    #[test]
    fn test_unsubscribe_from_inside_callback() {
        let feed = quiet_feed();
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let sub = {
            let calls = Arc::clone(&calls);
            let slot = Arc::clone(&slot);
            feed.subscribe_fn("once", move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                if let Some(sub) = slot.lock().unwrap().take() {
                    sub.unsubscribe();
                }
            })
        };
        *slot.lock().unwrap() = Some(sub);

        feed.publish(update("e1"));
        feed.publish(update("e2"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(feed.subscriber_count(), 0);
        assert!(!feed.is_active());
    }

    #[test]
    fn test_panicking_subscriber_is_isolated() {
        let feed = quiet_feed();
        let _bad = feed.subscribe_fn("bad", |_| panic!("boom"));
        let seen = Arc::new(Collector::new());
        let _good = feed.subscribe(seen.clone());

        assert!(feed.publish(update("e1")));
        assert!(feed.publish(update("e2")));
        assert_eq!(seen.len(), 2);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_connectivity_tick_draws() {
        let feed = Feed::builder(FeedConfig::default())
            .with_connectivity_random(ScriptedRandom::new([0.5, 0.01, 0.05, 0.06]))
            .build()
            .unwrap();
        let states: Vec<bool> = (0..4).map(|_| feed.connectivity_tick()).collect();
        assert_eq!(states, vec![true, false, false, true]);
        assert!(feed.is_connected());
        assert_eq!(feed.stats().connectivity_checks, 4);
    }

    #[test]
    fn test_disconnected_feed_still_publishes() {
        let feed = Feed::builder(FeedConfig::default())
            .with_connectivity_random(ScriptedRandom::new([0.0]))
            .build()
            .unwrap();
        assert!(!feed.connectivity_tick());
        assert!(feed.publish(update("e1")));
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let feed = quiet_feed();
        let _sub = feed.subscribe_fn("noop", |_| {});
        feed.publish(update("e1"));
        feed.publish(update("e2"));
        feed.acknowledge("e1");

        let snap = feed.snapshot();
        assert_eq!(snap.history.len(), 2);
        assert_eq!(snap.unread, 1);
        assert_eq!(snap.subscribers, 1);
        assert!(snap.connected);

        let v: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(v["history"][0]["id"], "e2");
        assert_eq!(v["history"][1]["read"], true);
        assert!(v["last_update_at"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_stop_when_feed_dropped() {
        let tap = ScriptedRandom::new([]);
        let feed = Feed::builder(FeedConfig::default())
            .with_random(tap.clone())
            .build()
            .unwrap();
        let _sub = feed.subscribe_fn("noop", |_| {});

        tokio::time::sleep(Duration::from_millis(6_500)).await;
        assert_eq!(tap.draws(), 2);

        drop(feed);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(tap.draws(), 2);
    }
}
