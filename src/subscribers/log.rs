//! # LogWriter: render updates as log records
//!
//! A minimal subscriber that writes each [`UpdateEvent`] as one `tracing`
//! record at `INFO` level under the `crisisfeed::updates` target.
//! Use it for demos or while wiring a new consumer.
//!
//! ## Example output
//! ```text
//! [social-media] id=update_1705336200123_00ab platform=twitter user=@emergency_412 disaster=2
//! [resource-status] id=update_1705336203121_3f10 resource=r3 available=42
//! [official-update] id=update_1705336209125_9c01 source="Emergency Services" title="Situation Update" disaster=4
//! [new-report] id=update_1705336212130_0042 reporter=responder_7 priority=critical disaster=6
//! ```

use crate::events::{Payload, UpdateEvent};
use crate::subscribers::Subscribe;

/// Update writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe for LogWriter {
    fn on_update(&self, e: &UpdateEvent) {
        match &e.payload {
            Payload::SocialMedia(p) => {
                tracing::info!(
                    target: "crisisfeed::updates",
                    "[social-media] id={} platform={} user={} disaster={}",
                    e.id, p.platform, p.user_handle, p.related_disaster_id
                );
            }
            Payload::ResourceStatus(p) => {
                tracing::info!(
                    target: "crisisfeed::updates",
                    "[resource-status] id={} resource={} available={}",
                    e.id, p.resource_id, p.new_available_count
                );
            }
            Payload::OfficialUpdate(p) => {
                tracing::info!(
                    target: "crisisfeed::updates",
                    "[official-update] id={} source={:?} title={:?} disaster={}",
                    e.id, p.source_name, p.title, p.related_disaster_id
                );
            }
            Payload::NewReport(p) => {
                tracing::info!(
                    target: "crisisfeed::updates",
                    "[new-report] id={} reporter={} priority={} disaster={}",
                    e.id, p.reporter_id, p.priority, p.related_disaster_id
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
