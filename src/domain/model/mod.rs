// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::domain::errors::DomainError;

/// Time offset in seconds with fractional precision.
///
/// Built only by parsing timestamp text; unparseable or negative input
/// yields an error, never a silent zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpec {
    seconds: f64,
}

impl TimeSpec {
    /// Create a TimeSpec from a non-negative number of seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: seconds.max(0.0),
        }
    }

    /// Total seconds
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Parse `hh:mm:ss[.fff]` or the lenient `mm:ss[.fff]` form.
    ///
    /// The three-part form requires `minutes < 60` and `seconds < 60`;
    /// the two-part form allows minutes of any size (`90:00` is ninety
    /// minutes) but still requires `seconds < 60`. Anything else is
    /// rejected with a typed failure.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();

        let fail = || DomainError::InvalidTimestamp {
            text: text.to_string(),
        };

        match parts.as_slice() {
            [mm, ss] => {
                let minutes = parse_uint(mm).ok_or_else(fail)?;
                let seconds = parse_sec(ss).ok_or_else(fail)?;
                if seconds >= 60.0 {
                    return Err(fail());
                }
                Ok(Self::from_seconds(minutes as f64 * 60.0 + seconds))
            }
            [hh, mm, ss] => {
                let hours = parse_uint(hh).ok_or_else(fail)?;
                let minutes = parse_uint(mm).ok_or_else(fail)?;
                let seconds = parse_sec(ss).ok_or_else(fail)?;
                if minutes >= 60 || seconds >= 60.0 {
                    return Err(fail());
                }
                Ok(Self::from_seconds(
                    hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds,
                ))
            }
            _ => Err(fail()),
        }
    }

    /// Parse the SRT timing form `hh:mm:ss,mmm`
    pub fn parse_srt(text: &str) -> Result<Self, DomainError> {
        Self::parse(&text.trim().replace(',', "."))
    }

    /// Canonical `hh:mm:ss` format, with `.fff` appended only when the
    /// offset has a fractional part
    pub fn format_hms(&self) -> String {
        let (hours, minutes, seconds, millis) = self.split_components();
        if millis == 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
        }
    }

    /// SRT timing format `hh:mm:ss,mmm`
    pub fn format_srt(&self) -> String {
        let (hours, minutes, seconds, millis) = self.split_components();
        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    fn split_components(&self) -> (u64, u64, u64, u64) {
        // Work in whole milliseconds so 59.9995 rounds cleanly upward
        let mut millis = (self.seconds * 1000.0).round() as u64;
        let hours = millis / 3_600_000;
        millis %= 3_600_000;
        let minutes = millis / 60_000;
        millis %= 60_000;
        let seconds = millis / 1_000;
        millis %= 1_000;
        (hours, minutes, seconds, millis)
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

impl Serialize for TimeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.seconds)
    }
}

/// Unsigned integer component: digits only, no sign, no whitespace
fn parse_uint(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Seconds component: digits with at most one decimal point
fn parse_sec(text: &str) -> Option<f64> {
    if text.is_empty()
        || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        || text.bytes().filter(|&b| b == b'.').count() > 1
        || text == "."
    {
        return None;
    }
    text.parse().ok()
}

/// Candidate highlight moment as parsed from raw model text.
///
/// Timestamps carry both the raw text and the parse result so that
/// validation can report `UnparseableTimestamp` with the offending input.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMoment {
    pub title: String,
    pub start_raw: String,
    pub end_raw: String,
    pub start: Option<TimeSpec>,
    pub end: Option<TimeSpec>,
    pub rationale: String,
}

/// Candidate cut point suggested by the model
#[derive(Debug, Clone, Serialize)]
pub struct CandidateCutPoint {
    pub timestamp_raw: String,
    pub timestamp: Option<TimeSpec>,
    pub reason: String,
}

/// Segment that survived validation: `0 <= start < end <= media duration`
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedSegment {
    pub start: TimeSpec,
    pub end: TimeSpec,
    pub title: String,
}

impl ValidatedSegment {
    /// Segment length in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.end.as_seconds() - self.start.as_seconds()
    }
}

/// Final executable cut plan: sorted, pairwise non-overlapping segments.
///
/// The sole contract between the assembly engine and the renderer;
/// created once per run and not mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct CutPlan {
    pub segments: Vec<ValidatedSegment>,
    pub total_duration: f64,
}

impl CutPlan {
    /// Empty plan, the "no highlights found" outcome
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            total_duration: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Machine-readable reason a candidate was rejected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    UnparseableTimestamp,
    ZeroOrNegativeDuration,
    OutOfBounds,
    MissingField,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            RejectReason::UnparseableTimestamp => "UnparseableTimestamp",
            RejectReason::ZeroOrNegativeDuration => "ZeroOrNegativeDuration",
            RejectReason::OutOfBounds => "OutOfBounds",
            RejectReason::MissingField => "MissingField",
        };
        write!(f, "{}", code)
    }
}

/// Rejected candidate retained for diagnostics, not control flow
#[derive(Debug, Clone, Serialize)]
pub struct RejectedMoment {
    pub candidate: CandidateMoment,
    pub reason: RejectReason,
}

/// Non-fatal problem encountered while parsing raw model text.
///
/// Warnings about a discarded record carry the matching reject code
/// (`MissingField` for incomplete groups) so telemetry consumers see
/// the same machine-readable taxonomy as validation rejections.
#[derive(Debug, Clone, Serialize)]
pub struct ParseWarning {
    pub line: Option<usize>,
    pub message: String,
    pub reason: Option<RejectReason>,
}

/// Resolved media source: local path plus probed duration
#[derive(Debug, Clone)]
pub struct MediaHandle {
    pub path: PathBuf,
    pub duration: TimeSpec,
}

/// One transcribed speech segment
#[derive(Debug, Clone)]
pub struct TranscriptSegment {
    pub start: TimeSpec,
    pub end: TimeSpec,
    pub text: String,
}

/// Full transcript of the source media
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Format for the moment-extraction prompt: `[hh:mm:ss] text` per line
    pub fn format_for_prompt(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("[{}] {}\n", s.start.format_hms(), s.text.trim()))
            .collect()
    }

    /// SRT caption rendering
    pub fn to_srt(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                i + 1,
                segment.start.format_srt(),
                segment.end.format_srt(),
                segment.text.trim()
            ));
        }
        out
    }

    /// Parse SRT caption text back into a transcript.
    ///
    /// Blocks with malformed timing lines are skipped; an input with no
    /// usable blocks yields an empty transcript, not an error.
    pub fn from_srt(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut lines = text.lines().peekable();

        while let Some(line) = lines.next() {
            let Some((start_text, end_text)) = line.split_once("-->") else {
                continue;
            };
            let (Ok(start), Ok(end)) = (
                TimeSpec::parse_srt(start_text),
                TimeSpec::parse_srt(end_text),
            ) else {
                continue;
            };

            let mut body = String::new();
            while let Some(text_line) = lines.peek() {
                if text_line.trim().is_empty() {
                    break;
                }
                if !body.is_empty() {
                    body.push(' ');
                }
                body.push_str(text_line.trim());
                lines.next();
            }
            segments.push(TranscriptSegment { start, end, text: body });
        }

        Self { segments }
    }
}
