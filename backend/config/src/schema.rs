//! RoomLens configuration schema.
//!
//! Typed for serde YAML deserialization. All sections are optional;
//! defaults are applied after loading, so a missing file or an empty
//! mapping is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for RoomLens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLensConfig {
    /// Vision provider selection and credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderConfig>,

    /// Analysis pipeline settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// "gemini" or "openai"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// API key; usually an env reference like "${GEMINI_API_KEY}"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model id override (e.g., "gemini-2.0-flash", "gpt-4o")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Stills ripped per submitted video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_per_video: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level ("trace" .. "error")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for rolling log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_valid() {
        let config: RoomLensConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.provider.is_none());
        assert!(config.analysis.is_none());
    }

    #[test]
    fn parses_provider_section() {
        let yaml = r#"
provider:
  kind: gemini
  apiKey: "${GEMINI_API_KEY}"
analysis:
  framesPerVideo: 12
"#;
        let config: RoomLensConfig = serde_yaml::from_str(yaml).unwrap();
        let provider = config.provider.unwrap();
        assert_eq!(provider.kind.as_deref(), Some("gemini"));
        assert_eq!(provider.api_key.as_deref(), Some("${GEMINI_API_KEY}"));
        assert_eq!(config.analysis.unwrap().frames_per_video, Some(12));
    }
}
