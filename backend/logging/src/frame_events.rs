//! Frame Analysis Event Logger
//!
//! One structured event per analyzed frame (described, failed, skipped),
//! written through the tracing pipeline as NDJSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    Described {
        frame_index: usize,
        provider: String,
        /// Length of the returned description, not its content.
        description_chars: usize,
    },
    Failed {
        frame_index: usize,
        provider: String,
        error_msg: String,
    },
    BatchReduced {
        frame_count: usize,
        visible_groups: usize,
        action_count: usize,
    },
}

#[derive(Debug, Serialize)]
pub struct FrameEventEntry {
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: FrameEvent,
}

pub struct FrameEventLogger;

impl FrameEventLogger {
    /// Log one analysis event, stamped with the owning session.
    pub fn log_event(session_id: Uuid, event: FrameEvent) {
        let entry = FrameEventEntry {
            session_id,
            timestamp: Utc::now(),
            event,
        };
        info!(target: "frame_events", event = ?entry, "Frame analysis event");
    }
}
