// Domain rules - segment validation, interval resolution, cut plan assembly

use crate::domain::errors::DomainError;
use crate::domain::model::{
    CandidateCutPoint, CandidateMoment, CutPlan, ParseWarning, RejectReason, RejectedMoment,
    TimeSpec, ValidatedSegment,
};
use crate::domain::parser::HighlightsParser;

/// Result of validating candidate moments against the media duration.
///
/// Rejected candidates are retained with machine-readable reason codes;
/// model output is the least trustworthy input in the pipeline and the
/// caller is expected to log what was dropped.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub valid: Vec<ValidatedSegment>,
    pub rejected: Vec<RejectedMoment>,
}

/// Validates and normalizes candidate moments against media bounds
pub struct SegmentValidator;

impl SegmentValidator {
    /// Apply the per-candidate rules in order:
    /// 1. timestamps that failed to parse upstream -> `UnparseableTimestamp`
    /// 2. `start >= duration` -> `OutOfBounds`
    /// 3. clamp `end` to the duration, `start` to zero
    /// 4. `start >= end` after clamping -> `ZeroOrNegativeDuration`
    ///
    /// Bounds are checked before clamping, so a record lying wholly past
    /// the media end reports `OutOfBounds`, not `ZeroOrNegativeDuration`.
    ///
    /// A missing or zero duration is a precondition failure, not a
    /// per-record rejection: nothing can be validated without it.
    pub fn validate(
        candidates: Vec<CandidateMoment>,
        media_duration: TimeSpec,
    ) -> Result<ValidationReport, DomainError> {
        let duration = media_duration.as_seconds();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(DomainError::MissingDuration);
        }

        let mut report = ValidationReport::default();

        for candidate in candidates {
            let (Some(start), Some(end)) = (candidate.start, candidate.end) else {
                report.rejected.push(RejectedMoment {
                    candidate,
                    reason: RejectReason::UnparseableTimestamp,
                });
                continue;
            };

            let start = start.as_seconds().max(0.0);
            if start >= duration {
                report.rejected.push(RejectedMoment {
                    candidate,
                    reason: RejectReason::OutOfBounds,
                });
                continue;
            }

            let end = end.as_seconds().min(duration);
            // Dropped, not fixed by swapping
            if start >= end {
                report.rejected.push(RejectedMoment {
                    candidate,
                    reason: RejectReason::ZeroOrNegativeDuration,
                });
                continue;
            }

            report.valid.push(ValidatedSegment {
                start: TimeSpec::from_seconds(start),
                end: TimeSpec::from_seconds(end),
                title: candidate.title,
            });
        }

        Ok(report)
    }
}

/// Orders validated segments and merges overlaps
pub struct IntervalResolver;

impl IntervalResolver {
    /// Sort by start ascending, then sweep left to right merging any
    /// segment whose start lies before the previous segment's end.
    ///
    /// Merges keep the earlier segment's title (first-wins). Segments
    /// that merely touch (`end == next.start`) are left unmerged. The
    /// operation is idempotent and never increases the segment count.
    pub fn resolve(mut segments: Vec<ValidatedSegment>) -> Vec<ValidatedSegment> {
        segments.sort_by(|a, b| {
            a.start
                .partial_cmp(&b.start)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut resolved: Vec<ValidatedSegment> = Vec::with_capacity(segments.len());
        for segment in segments {
            match resolved.last_mut() {
                Some(previous) if segment.start < previous.end => {
                    if segment.end > previous.end {
                        previous.end = segment.end;
                    }
                }
                _ => resolved.push(segment),
            }
        }
        resolved
    }
}

/// Options controlling final plan construction.
///
/// `padding_seconds` extends each segment symmetrically before a final
/// re-clamp to media bounds and a re-merge of any overlap the padding
/// reintroduced. Default is 0.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub padding_seconds: f64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            padding_seconds: 0.0,
        }
    }
}

/// Builds the final immutable cut plan handed to the renderer
pub struct CutPlanBuilder;

impl CutPlanBuilder {
    pub fn build(
        resolved: Vec<ValidatedSegment>,
        media_duration: TimeSpec,
        options: &PlanOptions,
    ) -> CutPlan {
        let duration = media_duration.as_seconds();
        let padding = options.padding_seconds.max(0.0);

        let padded: Vec<ValidatedSegment> = resolved
            .into_iter()
            .filter_map(|segment| {
                let start = (segment.start.as_seconds() - padding).max(0.0);
                let end = (segment.end.as_seconds() + padding).min(duration);
                (start < end).then(|| ValidatedSegment {
                    start: TimeSpec::from_seconds(start),
                    end: TimeSpec::from_seconds(end),
                    title: segment.title,
                })
            })
            .collect();

        // Padding can make neighbours overlap again
        let segments = IntervalResolver::resolve(padded);
        let total_duration = segments.iter().map(|s| s.duration_seconds()).sum();

        CutPlan {
            segments,
            total_duration,
        }
    }
}

/// Everything the assembly produced for one model response: the plan
/// plus the diagnostics the caller should surface
#[derive(Debug)]
pub struct AssemblyOutcome {
    pub plan: CutPlan,
    pub rejected: Vec<RejectedMoment>,
    pub warnings: Vec<ParseWarning>,
    pub cut_points: Vec<CandidateCutPoint>,
}

impl AssemblyOutcome {
    /// Distinct "no highlights found" outcome, not an error
    pub fn no_highlights(&self) -> bool {
        self.plan.is_empty()
    }
}

/// Run the full assembly engine over one raw model response:
/// parse -> validate -> resolve -> build.
///
/// Pure and deterministic; the only failure is a missing media duration.
pub fn assemble_plan(
    raw_text: &str,
    media_duration: TimeSpec,
    options: &PlanOptions,
) -> Result<AssemblyOutcome, DomainError> {
    let parsed = HighlightsParser::parse(raw_text);
    let report = SegmentValidator::validate(parsed.moments, media_duration)?;
    let resolved = IntervalResolver::resolve(report.valid);
    let plan = CutPlanBuilder::build(resolved, media_duration, options);

    Ok(AssemblyOutcome {
        plan,
        rejected: report.rejected,
        warnings: parsed.warnings,
        cut_points: parsed.cut_points,
    })
}
