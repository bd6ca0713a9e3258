//! Video frame extraction.
//!
//! Pipes videos through native ffmpeg to rip evenly spaced stills for
//! vision-model analysis when a room video is submitted instead of photos.

use std::path::{Path, PathBuf};

use roomlens_core::RoomLensError;
use tokio::process::Command;
use tracing::{debug, info};

/// Stills ripped per video when the caller does not say otherwise.
pub const DEFAULT_FRAME_COUNT: u32 = 20;

/// Extracts representative still frames from a video file.
pub struct FrameExtractor {
    frame_count: u32,
}

impl FrameExtractor {
    pub fn new() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }

    pub fn with_frame_count(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count.max(1);
        self
    }

    /// Rip evenly spaced JPEG stills into `out_dir`, returning their paths
    /// in timeline order.
    pub async fn extract(
        &self,
        video_path: &Path,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, RoomLensError> {
        let duration = probe_duration(video_path).await?;
        info!(
            video = %video_path.display(),
            duration_secs = duration,
            frames = self.frame_count,
            "Extracting frames from video"
        );

        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(|e| RoomLensError::FrameExtraction(e.to_string()))?;

        let mut frames = Vec::with_capacity(self.frame_count as usize);
        for i in 0..self.frame_count {
            let timestamp = duration * f64::from(i) / f64::from(self.frame_count);
            let out_path = out_dir.join(format!("frame_{i:03}.jpg"));
            grab_frame(video_path, timestamp, &out_path).await?;
            debug!(frame = i, timestamp_secs = timestamp, "Frame ripped");
            frames.push(out_path);
        }
        Ok(frames)
    }
}

impl Default for FrameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe the container duration in seconds via ffprobe.
async fn probe_duration(video_path: &Path) -> Result<f64, RoomLensError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(video_path)
        .output()
        .await
        .map_err(|e| RoomLensError::FrameExtraction(format!("ffprobe spawn failed: {e}")))?;

    if !output.status.success() {
        return Err(RoomLensError::FrameExtraction(format!(
            "ffprobe failed for {}: {}",
            video_path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse::<f64>()
        .map_err(|e| RoomLensError::FrameExtraction(format!("unparseable duration: {e}")))
}

/// Grab exactly one frame at the given offset.
async fn grab_frame(
    video_path: &Path,
    timestamp_secs: f64,
    out_path: &Path,
) -> Result<(), RoomLensError> {
    let output = Command::new("ffmpeg")
        .args(["-y", "-ss", &format!("{timestamp_secs:.3}")])
        .arg("-i")
        .arg(video_path)
        .args(["-frames:v", "1"])
        .arg(out_path)
        .output()
        .await
        .map_err(|e| RoomLensError::FrameExtraction(format!("ffmpeg spawn failed: {e}")))?;

    if !output.status.success() {
        return Err(RoomLensError::FrameExtraction(format!(
            "ffmpeg failed at {timestamp_secs:.3}s: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_never_drops_to_zero() {
        let extractor = FrameExtractor::new().with_frame_count(0);
        assert_eq!(extractor.frame_count, 1);
    }

    #[test]
    fn default_frame_count_matches_constant() {
        assert_eq!(FrameExtractor::new().frame_count, DEFAULT_FRAME_COUNT);
    }
}
