//! Telemetry and structured logging components for RoomLens.
//!
//! Handles JSON output generation, file rotation, and per-frame analysis
//! event logging.

pub mod frame_events;
pub mod logger;

pub use frame_events::{FrameEvent, FrameEventEntry, FrameEventLogger};
pub use logger::init_logger;
