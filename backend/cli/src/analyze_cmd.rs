//! Analyze command: route inputs, describe each frame, reduce, render.
//!
//! Videos are expanded to stills first; every resulting image goes through
//! the vision provider sequentially in submission order. A failed model
//! call aborts the batch; the reducer is never fed partial output from a
//! failed run.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use logging::{FrameEvent, FrameEventLogger};
use roomlens_config::{RoomLensConfig, DEFAULT_FRAMES_PER_VIDEO};
use roomlens_core::{AnalysisSession, FrameDescriber, RoomLensError};
use roomlens_report::ReportReducer;
use roomlens_understanding::{
    detect_mime_type, full_inspection_prompt, is_image, is_video, FrameExtractor, VisionProvider,
};

use crate::terminal_output::{note_info, note_success, render_report};

pub async fn run(
    config: &RoomLensConfig,
    inputs: &[PathBuf],
    frames_override: Option<u32>,
    json: bool,
) -> Result<()> {
    let provider = provider_from_config(config)?;
    let frames_per_video = frames_override
        .or_else(|| config.analysis.as_ref().and_then(|a| a.frames_per_video))
        .unwrap_or(DEFAULT_FRAMES_PER_VIDEO);

    let mut session = AnalysisSession::start();
    info!(session_id = %session.id(), inputs = inputs.len(), "Starting analysis run");

    let image_paths = collect_images(inputs, frames_per_video, session.id()).await?;
    let prompt = full_inspection_prompt();

    for (index, path) in image_paths.iter().enumerate() {
        note_info(&format!(
            "Analyzing frame {}/{}: {}",
            index + 1,
            image_paths.len(),
            path.display()
        ));
        let bytes = tokio::fs::read(path).await?;
        let mime = detect_mime_type(path);

        match provider.describe(&bytes, mime, &prompt).await {
            Ok(description) => {
                FrameEventLogger::log_event(
                    session.id(),
                    FrameEvent::Described {
                        frame_index: index,
                        provider: provider.name().to_string(),
                        description_chars: description.chars().count(),
                    },
                );
                session.push_description(description);
            }
            Err(e) => {
                FrameEventLogger::log_event(
                    session.id(),
                    FrameEvent::Failed {
                        frame_index: index,
                        provider: provider.name().to_string(),
                        error_msg: e.to_string(),
                    },
                );
                return Err(e.into());
            }
        }
    }

    let report = ReportReducer::new().reduce(session.descriptions());
    FrameEventLogger::log_event(
        session.id(),
        FrameEvent::BatchReduced {
            frame_count: session.descriptions().len(),
            visible_groups: report.visible_groups().count(),
            action_count: report.actions.len(),
        },
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    note_success("Analysis complete");

    session.finish(report);
    Ok(())
}

/// Expand the input list into a flat sequence of image paths, ripping
/// stills for each video input.
async fn collect_images(
    inputs: &[PathBuf],
    frames_per_video: u32,
    session_id: uuid::Uuid,
) -> Result<Vec<PathBuf>> {
    let mut image_paths = Vec::new();
    for input in inputs {
        let mime = detect_mime_type(input);
        if is_image(mime) {
            image_paths.push(input.clone());
        } else if is_video(mime) {
            let out_dir = frame_dir(session_id, input);
            let stills = FrameExtractor::new()
                .with_frame_count(frames_per_video)
                .extract(input, &out_dir)
                .await?;
            note_info(&format!(
                "Extracted {} frames from {}",
                stills.len(),
                input.display()
            ));
            image_paths.extend(stills);
        } else {
            return Err(RoomLensError::UnsupportedMedia(input.display().to_string()).into());
        }
    }
    Ok(image_paths)
}

fn frame_dir(session_id: uuid::Uuid, video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("video");
    std::env::temp_dir().join(format!("roomlens-{session_id}-{stem}"))
}

/// Build the vision provider from the config section, falling back to the
/// conventional env vars for keys.
fn provider_from_config(config: &RoomLensConfig) -> Result<VisionProvider> {
    let section = config.provider.clone().unwrap_or_default();
    let kind = section.kind.as_deref().unwrap_or("gemini");

    let provider = match kind {
        "gemini" => {
            let Some(api_key) = section
                .api_key
                .clone()
                .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            else {
                bail!("No Gemini API key configured; set provider.apiKey or GEMINI_API_KEY");
            };
            VisionProvider::gemini(api_key)
        }
        "openai" => {
            let Some(api_key) = section
                .api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            else {
                bail!("No OpenAI API key configured; set provider.apiKey or OPENAI_API_KEY");
            };
            VisionProvider::openai(api_key)
        }
        other => bail!("Unknown provider kind: {other}"),
    };

    Ok(match section.model {
        Some(model) => provider.with_model(model),
        None => provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomlens_core::AmenityGroup;
    use roomlens_understanding::MockDescriber;

    #[tokio::test]
    async fn mock_pipeline_produces_report_offline() {
        let describer = MockDescriber::new("mock")
            .with_response("The bed is unmade and covers are wrinkled, not pulled taut.")
            .with_response("Room is tidy and free of visible clutter.");
        let prompt = full_inspection_prompt();

        let mut session = AnalysisSession::start();
        for _ in 0..2 {
            let description = describer
                .describe(&[0u8; 4], "image/jpeg", &prompt)
                .await
                .unwrap();
            session.push_description(description);
        }

        let report = ReportReducer::new().reduce(session.descriptions());
        assert!(!report.insufficient_view);
        assert!(report.group(AmenityGroup::BedAndPillows).unwrap().missing);
        assert!(!report.group(AmenityGroup::RoomClutter).unwrap().missing);
    }
}
