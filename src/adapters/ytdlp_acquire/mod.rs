//! Acquisition adapter: yt-dlp download for URLs, passthrough for local
//! files, duration probing via ffprobe

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::adapters::run_tool;
use crate::domain::errors::DomainError;
use crate::domain::model::{MediaHandle, TimeSpec};
use crate::ports::AcquirePort;

/// Resolves sources to local media files with a probed duration
pub struct YtDlpAcquirer;

impl YtDlpAcquirer {
    pub fn new() -> Self {
        Self
    }

    async fn download(&self, url: &str, workdir: &Path) -> Result<PathBuf, DomainError> {
        info!(url, "downloading source with yt-dlp");
        tokio::fs::create_dir_all(workdir)
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;

        let template = workdir.join("%(title)s.%(ext)s");
        run_tool(
            "yt-dlp",
            [
                "-f".as_ref(),
                "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".as_ref(),
                "--merge-output-format".as_ref(),
                "mp4".as_ref(),
                "-o".as_ref(),
                template.as_os_str(),
                url.as_ref(),
            ],
        )
        .await?;

        // yt-dlp names the file after the video title, so take the most
        // recently modified mp4 in the work directory
        newest_mp4(workdir).ok_or_else(|| DomainError::ToolFailed {
            tool: "yt-dlp".to_string(),
            message: "download reported success but no mp4 file was found".to_string(),
        })
    }
}

impl Default for YtDlpAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AcquirePort for YtDlpAcquirer {
    async fn resolve(&self, source: &str, workdir: &Path) -> Result<MediaHandle, DomainError> {
        let path = if source.starts_with("http://") || source.starts_with("https://") {
            self.download(source, workdir).await?
        } else {
            let path = PathBuf::from(source);
            if !path.is_file() {
                return Err(DomainError::FsFail(format!(
                    "input file not found: {}",
                    path.display()
                )));
            }
            path
        };

        let duration = probe_duration(&path).await?;
        info!(path = %path.display(), duration = %duration, "media resolved");
        Ok(MediaHandle { path, duration })
    }
}

/// Probe a media file's duration in seconds via ffprobe
pub async fn probe_duration(path: &Path) -> Result<TimeSpec, DomainError> {
    let output = run_tool(
        "ffprobe",
        [
            "-v".as_ref(),
            "error".as_ref(),
            "-show_entries".as_ref(),
            "format=duration".as_ref(),
            "-of".as_ref(),
            "default=noprint_wrappers=1:nokey=1".as_ref(),
            path.as_os_str(),
        ],
    )
    .await?;

    let text = String::from_utf8_lossy(&output.stdout);
    let seconds: f64 = text.trim().parse().map_err(|_| DomainError::MissingDuration)?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(DomainError::MissingDuration);
    }
    Ok(TimeSpec::from_seconds(seconds))
}

fn newest_mp4(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "mp4"))
        .max_by_key(|path| {
            path.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::UNIX_EPOCH)
        })
}
