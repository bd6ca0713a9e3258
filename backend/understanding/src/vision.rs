/// Vision understanding — describe room images using a vision LLM.
///
/// The model call is opaque to the rest of the pipeline: image bytes and a
/// prompt go in, free text comes out, and any transport or API failure
/// surfaces as `RoomLensError::Model` before the reducer ever runs.
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use roomlens_core::{FrameDescriber, RoomLensError};
use tracing::info;

/// Supported vision providers.
pub enum VisionProvider {
    OpenAi { api_key: String, model: String },
    Gemini { api_key: String, model: String },
}

impl VisionProvider {
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::OpenAi {
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
        }
    }

    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self::Gemini {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
        }
    }

    /// Override the default model id.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        match &mut self {
            Self::OpenAi { model, .. } | Self::Gemini { model, .. } => *model = model_id.into(),
        }
        self
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi { .. } => "openai",
            Self::Gemini { .. } => "gemini",
        }
    }

    fn model_error(&self, message: impl Into<String>) -> RoomLensError {
        RoomLensError::Model {
            provider: self.provider_name().to_string(),
            message: message.into(),
        }
    }
}

/// Describe an image from raw bytes using a vision LLM.
pub async fn describe_image(
    provider: &VisionProvider,
    image_bytes: &[u8],
    mime_type: &str,
    prompt: &str,
) -> Result<String, RoomLensError> {
    let b64 = STANDARD.encode(image_bytes);
    match provider {
        VisionProvider::OpenAi { api_key, model } => {
            describe_via_openai(provider, api_key, model, &b64, mime_type, prompt).await
        }
        VisionProvider::Gemini { api_key, model } => {
            describe_via_gemini(provider, api_key, model, &b64, mime_type, prompt).await
        }
    }
}

async fn describe_via_openai(
    provider: &VisionProvider,
    api_key: &str,
    model: &str,
    b64: &str,
    mime_type: &str,
    prompt: &str,
) -> Result<String, RoomLensError> {
    info!("[Vision] Describing room image via OpenAI {}", model);
    let client = reqwest::Client::new();
    let body = serde_json::json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": prompt },
                { "type": "image_url",
                  "image_url": { "url": format!("data:{};base64,{}", mime_type, b64) } }
            ]
        }],
        "max_tokens": 512
    });
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| provider.model_error(e.to_string()))?;
    if !resp.status().is_success() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(provider.model_error(detail));
    }
    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| provider.model_error(e.to_string()))?;
    Ok(json["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string())
}

async fn describe_via_gemini(
    provider: &VisionProvider,
    api_key: &str,
    model: &str,
    b64: &str,
    mime_type: &str,
    prompt: &str,
) -> Result<String, RoomLensError> {
    info!("[Vision] Describing room image via Gemini {}", model);
    let client = reqwest::Client::new();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, api_key
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}]
    });
    let resp = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| provider.model_error(e.to_string()))?;
    if !resp.status().is_success() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(provider.model_error(detail));
    }
    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| provider.model_error(e.to_string()))?;
    Ok(json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string())
}

#[async_trait]
impl FrameDescriber for VisionProvider {
    fn name(&self) -> &str {
        self.provider_name()
    }

    async fn describe(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, RoomLensError> {
        describe_image(self, image_bytes, mime_type, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models() {
        match VisionProvider::openai("key") {
            VisionProvider::OpenAi { model, .. } => assert_eq!(model, "gpt-4o"),
            _ => panic!("wrong provider"),
        }
        match VisionProvider::gemini("key") {
            VisionProvider::Gemini { model, .. } => assert_eq!(model, "gemini-2.0-flash"),
            _ => panic!("wrong provider"),
        }
    }

    #[test]
    fn model_override() {
        match VisionProvider::gemini("key").with_model("gemini-1.5-pro") {
            VisionProvider::Gemini { model, .. } => assert_eq!(model, "gemini-1.5-pro"),
            _ => panic!("wrong provider"),
        }
    }
}
