use async_trait::async_trait;

use crate::error::RoomLensError;
use crate::types::AmenityFinding;

/// Trait for vision backends that turn one room image into a
/// natural-language description.
///
/// The pipeline treats the backend as opaque: image bytes in, free text
/// out, `RoomLensError::Model` on failure.
#[async_trait]
pub trait FrameDescriber: Send + Sync {
    /// Backend name (e.g., "openai", "gemini").
    fn name(&self) -> &str;

    /// Describe a single image. `mime_type` labels the payload;
    /// `prompt` carries the inspection instructions.
    async fn describe(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, RoomLensError>;
}

/// Trait for turning a flattened batch of description lines into per-key
/// findings.
///
/// This is the seam between the free-text heuristics and the report
/// logic: a future implementation can consume structured model output
/// without touching group synthesis. Implementations must be pure:
/// identical lines in, identical findings out.
pub trait AmenityClassifier: Send + Sync {
    fn classify(&self, lines: &[&str]) -> Vec<AmenityFinding>;
}
