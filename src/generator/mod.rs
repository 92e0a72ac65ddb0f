//! Synthetic update generation.
//!
//! ## Contents
//! - [`EventGenerator`] throttled producer, one call per generator tick
//! - [`Sampler`] pluggable payload sampler
//! - [`ReferenceSampler`] default sampler backed by [`ReferenceData`](crate::ReferenceData)
//!
//! ## Per-tick flow
//! ```text
//! maybe_generate()
//!   ├─► draw u; u <= emit_threshold ─► None (throttled)
//!   ├─► kind    = EventKind::ALL[pick(4)]
//!   ├─► payload = sampler.sample(kind, rng)
//!   ├─► id      = update_<millis>_<pick(0x10000) as hex>
//!   └─► Some(UpdateEvent { id, timestamp: now, read: false, payload })
//! ```

mod generator;
mod id;
mod sampler;

pub use generator::EventGenerator;
pub use sampler::{ReferenceSampler, Sampler};
