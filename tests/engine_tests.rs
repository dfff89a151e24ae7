//! Integration tests for the segment assembly engine

use reelcut_cli::{
    assemble_plan, HighlightsParser, IntervalResolver, PlanOptions, RejectReason,
    SegmentValidator, TimeSpec,
};

/// Realistic model response: markdown headings, code fences, preamble,
/// one malformed record, and overlapping moments
const MODEL_RESPONSE: &str = "\
Here is the structured analysis of the transcript you provided.

#### Interesting_Moments:
```
1.
Title: Cold open banter
Start_Time: 00:00:08
End_Time: 00:00:42
Why_Interesting: The hosts riff on last week's predictions.

2.
Title: Heated disagreement
Start_Time: 00:00:35
End_Time: 00:01:20
Why_Interesting: Overlaps the banter and escalates quickly.

3.
Title: Broken clock
Start_Time: around the middle
End_Time: 00:02:00
Why_Interesting: Timestamp the model failed to format.

4.
Title: Finale
Start_Time: 00:02:30
End_Time: 00:03:30
Why_Interesting: Runs past the end of the media.
```

#### Suggested_Cut_Points:
```
1.
Cut_Timestamp: 00:01:30
Reason: Natural topic shift.
```

Let me know if you need a different format!
";

const MEDIA_SECONDS: f64 = 180.0;

fn media_duration() -> TimeSpec {
    TimeSpec::from_seconds(MEDIA_SECONDS)
}

#[test]
fn full_engine_pass_over_realistic_response() {
    let outcome = assemble_plan(MODEL_RESPONSE, media_duration(), &PlanOptions::default()).unwrap();

    // Moments 1+2 merge, moment 3 is rejected, moment 4 is clamped
    assert_eq!(outcome.plan.segments.len(), 2);
    assert_eq!(outcome.plan.segments[0].start.as_seconds(), 8.0);
    assert_eq!(outcome.plan.segments[0].end.as_seconds(), 80.0);
    assert_eq!(outcome.plan.segments[0].title, "Cold open banter");
    assert_eq!(outcome.plan.segments[1].start.as_seconds(), 150.0);
    assert_eq!(outcome.plan.segments[1].end.as_seconds(), 180.0);

    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].reason, RejectReason::UnparseableTimestamp);

    assert_eq!(outcome.cut_points.len(), 1);
    assert_eq!(outcome.cut_points[0].timestamp.unwrap().as_seconds(), 90.0);
}

#[test]
fn plan_invariants_hold_for_any_surviving_segment() {
    let outcome = assemble_plan(MODEL_RESPONSE, media_duration(), &PlanOptions::default()).unwrap();

    let segments = &outcome.plan.segments;
    for segment in segments {
        assert!(segment.start.as_seconds() >= 0.0);
        assert!(segment.start < segment.end);
        assert!(segment.end.as_seconds() <= MEDIA_SECONDS);
    }
    for pair in segments.windows(2) {
        assert!(pair[0].end <= pair[1].start, "segments overlap or unsorted");
    }
    let total: f64 = segments.iter().map(|s| s.duration_seconds()).sum();
    assert!((total - outcome.plan.total_duration).abs() < 1e-9);
}

#[test]
fn padding_extends_and_reclamps_segments() {
    let options = PlanOptions {
        padding_seconds: 40.0,
    };
    let outcome = assemble_plan(MODEL_RESPONSE, media_duration(), &options).unwrap();

    // Generous padding swallows the gap between the two segments
    assert_eq!(outcome.plan.segments.len(), 1);
    assert_eq!(outcome.plan.segments[0].start.as_seconds(), 0.0);
    assert_eq!(outcome.plan.segments[0].end.as_seconds(), MEDIA_SECONDS);
}

#[test]
fn resolving_an_already_resolved_plan_changes_nothing() {
    let parsed = HighlightsParser::parse(MODEL_RESPONSE);
    let report = SegmentValidator::validate(parsed.moments, media_duration()).unwrap();

    let once = IntervalResolver::resolve(report.valid);
    let twice = IntervalResolver::resolve(once.clone());

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
    }
}

#[test]
fn whole_document_garbage_is_a_no_highlights_outcome() {
    let outcome = assemble_plan(
        "```\nTotally unrelated prose with no headings at all.\n```",
        media_duration(),
        &PlanOptions::default(),
    )
    .unwrap();
    assert!(outcome.no_highlights());
    assert!(outcome.rejected.is_empty());
}

#[test]
fn missing_duration_refuses_to_assemble() {
    let result = assemble_plan(
        MODEL_RESPONSE,
        TimeSpec::from_seconds(0.0),
        &PlanOptions::default(),
    );
    assert!(result.is_err());
}
