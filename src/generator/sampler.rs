//! # Payload samplers
//!
//! A [`Sampler`] builds the payload for a chosen [`EventKind`] using draws from
//! the generator's random source. Swapping the sampler changes *what* is
//! generated without touching throttling or id assignment.
//!
//! ## Draw budget of [`ReferenceSampler`]
//! ```text
//! social_media    : platform, handle number (0..1000), snippet, disaster   (4 draws)
//! resource_status : resource, new available count (0..100)                 (2 draws)
//! official_update : source, title, disaster                                (3 draws)
//! new_report      : reporter number (0..100), priority, disaster           (3 draws)
//! ```

use std::sync::Arc;

use crate::error::FeedError;
use crate::events::{
    ChangeKind, EventKind, NewReport, OfficialUpdate, Payload, ResourceStatus, SocialMedia,
};
use crate::random::{RandomSource, pick_below, pick_index};
use crate::reference::ReferenceData;

const HANDLE_SPACE: u32 = 1000;
const REPORTER_SPACE: u32 = 100;
const AVAILABLE_SPACE: u32 = 100;

/// Builds kind-specific payloads.
pub trait Sampler: Send + 'static {
    /// Returns a payload of the given kind.
    ///
    /// Implementations must return the variant matching `kind`.
    fn sample(&mut self, kind: EventKind, rng: &mut dyn RandomSource) -> Payload;
}

/// Samples uniformly from a validated [`ReferenceData`].
#[derive(Debug, Clone)]
pub struct ReferenceSampler {
    data: Arc<ReferenceData>,
}

impl ReferenceSampler {
    /// Validates `data` and wraps it.
    ///
    /// Fails if any collection is empty or a resource dangles, since sampling
    /// from such data could not honor the no-dangling-reference invariant.
    pub fn new(data: Arc<ReferenceData>) -> Result<Self, FeedError> {
        data.validate()?;
        Ok(Self { data })
    }

    /// The reference data being sampled.
    pub fn data(&self) -> &Arc<ReferenceData> {
        &self.data
    }

    fn disaster_id(&self, rng: &mut dyn RandomSource) -> String {
        let d = &self.data.disasters;
        d[pick_index(rng, d.len())].id.clone()
    }

    fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> &'a T {
        &items[pick_index(rng, items.len())]
    }
}

impl Sampler for ReferenceSampler {
    fn sample(&mut self, kind: EventKind, rng: &mut dyn RandomSource) -> Payload {
        let data = Arc::clone(&self.data);
        match kind {
            EventKind::SocialMedia => {
                let platform = *Self::pick(&data.platforms, rng);
                let user_handle = format!("@emergency_{}", pick_below(rng, HANDLE_SPACE));
                let content_snippet = Self::pick(&data.social_snippets, rng).clone();
                Payload::SocialMedia(SocialMedia {
                    platform,
                    user_handle,
                    content_snippet,
                    related_disaster_id: self.disaster_id(rng),
                })
            }
            EventKind::ResourceStatus => {
                let resource_id = Self::pick(&data.resources, rng).id.clone();
                Payload::ResourceStatus(ResourceStatus {
                    resource_id,
                    change_kind: ChangeKind::CapacityUpdated,
                    new_available_count: pick_below(rng, AVAILABLE_SPACE),
                })
            }
            EventKind::OfficialUpdate => {
                let source_name = Self::pick(&data.official_sources, rng).clone();
                let title = Self::pick(&data.official_titles, rng).clone();
                Payload::OfficialUpdate(OfficialUpdate {
                    source_name,
                    title,
                    related_disaster_id: self.disaster_id(rng),
                })
            }
            EventKind::NewReport => {
                let reporter_id = format!("responder_{}", pick_below(rng, REPORTER_SPACE));
                let priority = *Self::pick(&data.priorities, rng);
                Payload::NewReport(NewReport {
                    reporter_id,
                    priority,
                    related_disaster_id: self.disaster_id(rng),
                })
            }
        }
    }
}
