use thiserror::Error;

/// Top-level error type for the RoomLens pipeline.
#[derive(Debug, Error)]
pub enum RoomLensError {
    #[error("vision model error ({provider}): {message}")]
    Model { provider: String, message: String },

    #[error("frame extraction failed: {0}")]
    FrameExtraction(String),

    #[error("unsupported media: {0}")]
    UnsupportedMedia(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
