//! Static reference data the generator samples from.
//!
//! The host supplies a [`ReferenceData`] (or uses [`ReferenceData::builtin`]);
//! the feed treats it as read-only. Every cross-reference a generated event
//! carries (`related_disaster_id`, `resource_id`) is drawn from here, so a
//! validated reference set guarantees generated events never dangle.

mod builtin;
mod data;

pub use data::{DisasterRef, ReferenceData, ResourceRef};
