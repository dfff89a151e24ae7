//! ReelCut CLI Library
//!
//! Turns long videos into highlight reels: speech is transcribed, a
//! language model proposes interesting moments, and the segment assembly
//! engine converts that free-text answer into a validated, non-overlapping
//! cut plan executed by ffmpeg.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use config::AppConfig;
pub use domain::errors::DomainError;
pub use domain::model::{
    CandidateCutPoint, CandidateMoment, CutPlan, MediaHandle, ParseWarning, RejectReason,
    RejectedMoment, TimeSpec, Transcript, TranscriptSegment, ValidatedSegment,
};
pub use domain::parser::{HighlightsParser, ParseOutcome};
pub use domain::rules::{
    assemble_plan, AssemblyOutcome, CutPlanBuilder, IntervalResolver, PlanOptions,
    SegmentValidator, ValidationReport,
};
pub use error::{ReelError, ReelResult};
