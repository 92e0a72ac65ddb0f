//! Update events: the data model carried by the feed.
//!
//! ## Contents
//! - [`UpdateEvent`] one feed entry (id, sequence, timestamp, read flag, payload)
//! - [`Payload`] closed set of payload shapes, one per [`EventKind`]
//! - [`Priority`], [`Platform`], [`ChangeKind`] small vocabularies used by payloads
//!
//! ## Quick reference
//! - **Producers**: `generator::EventGenerator` (synthetic events) and any host
//!   calling `Feed::publish` directly.
//! - **Consumers**: `Feed` (history, read state) and every registered subscriber.

mod event;
mod payload;

pub use event::UpdateEvent;
pub use payload::{
    ChangeKind, EventKind, NewReport, OfficialUpdate, Payload, Platform, Priority,
    ResourceStatus, SocialMedia,
};

pub(crate) use event::iso_millis_opt;
