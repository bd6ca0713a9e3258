//! Config defaults: applies sensible default values to parsed config.

use crate::schema::{AnalysisConfig, LoggingConfig, ProviderConfig, RoomLensConfig};

/// Default vision provider.
pub const DEFAULT_PROVIDER_KIND: &str = "gemini";

/// Default stills ripped per submitted video.
pub const DEFAULT_FRAMES_PER_VIDEO: u32 = 20;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default rolling-log directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: RoomLensConfig) -> RoomLensConfig {
    let config = apply_provider_defaults(config);
    let config = apply_analysis_defaults(config);
    apply_logging_defaults(config)
}

fn apply_provider_defaults(mut config: RoomLensConfig) -> RoomLensConfig {
    let provider = config.provider.get_or_insert_with(ProviderConfig::default);
    if provider.kind.is_none() {
        provider.kind = Some(DEFAULT_PROVIDER_KIND.to_string());
    }
    config
}

fn apply_analysis_defaults(mut config: RoomLensConfig) -> RoomLensConfig {
    let analysis = config.analysis.get_or_insert_with(AnalysisConfig::default);
    if analysis.frames_per_video.is_none() {
        analysis.frames_per_video = Some(DEFAULT_FRAMES_PER_VIDEO);
    }
    config
}

fn apply_logging_defaults(mut config: RoomLensConfig) -> RoomLensConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.dir.is_none() {
        logging.dir = Some(DEFAULT_LOG_DIR.to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_all_sections_on_empty_config() {
        let config = apply_all_defaults(RoomLensConfig::default());
        assert_eq!(
            config.provider.unwrap().kind.as_deref(),
            Some(DEFAULT_PROVIDER_KIND)
        );
        assert_eq!(
            config.analysis.unwrap().frames_per_video,
            Some(DEFAULT_FRAMES_PER_VIDEO)
        );
        let logging = config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some(DEFAULT_LOG_LEVEL));
        assert_eq!(logging.dir.as_deref(), Some(DEFAULT_LOG_DIR));
    }

    #[test]
    fn keeps_explicit_values() {
        let mut config = RoomLensConfig::default();
        config.analysis = Some(AnalysisConfig {
            frames_per_video: Some(5),
        });
        let config = apply_all_defaults(config);
        assert_eq!(config.analysis.unwrap().frames_per_video, Some(5));
    }
}
