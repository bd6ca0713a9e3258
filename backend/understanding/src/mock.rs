use async_trait::async_trait;
use roomlens_core::{FrameDescriber, RoomLensError};

/// A mock frame describer that returns canned descriptions.
///
/// Useful for exercising the full analysis pipeline without a network or
/// an API key: descriptions are served in order, repeating the last one
/// when the batch is longer than the canned list.
pub struct MockDescriber {
    name: String,
    responses: Vec<String>,
    cursor: std::sync::atomic::AtomicUsize,
}

impl MockDescriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Vec::new(),
            cursor: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.responses.push(response.into());
        self
    }
}

#[async_trait]
impl FrameDescriber for MockDescriber {
    fn name(&self) -> &str {
        &self.name
    }

    async fn describe(
        &self,
        _image_bytes: &[u8],
        _mime_type: &str,
        _prompt: &str,
    ) -> Result<String, RoomLensError> {
        let index = self
            .cursor
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_else(|| "Mock description".to_string()))
    }
}
