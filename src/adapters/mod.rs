// Adapters - concrete implementations of the ports

use std::ffi::OsStr;

use tracing::debug;

use crate::domain::errors::DomainError;

pub mod ffmpeg_exec;
pub mod openrouter;
pub mod whisper_exec;
pub mod ytdlp_acquire;

pub use ffmpeg_exec::FfmpegRenderer;
pub use openrouter::OpenRouterClient;
pub use whisper_exec::WhisperCliTranscriber;
pub use ytdlp_acquire::YtDlpAcquirer;

/// Run an external tool to completion, capturing output.
///
/// The tool is located on PATH first so a missing installation reports
/// `ToolMissing` instead of a spawn error; a non-zero exit becomes
/// `ToolFailed` with the tool's stderr.
pub(crate) async fn run_tool<I, S>(tool: &str, args: I) -> Result<std::process::Output, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = which::which(tool).map_err(|_| DomainError::ToolMissing(tool.to_string()))?;
    debug!(tool, "running external tool");

    let output = tokio::process::Command::new(binary)
        .args(args)
        .output()
        .await
        .map_err(|e| DomainError::ToolFailed {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(DomainError::ToolFailed {
            tool: tool.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}
