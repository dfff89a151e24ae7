// Unit tests for the moment record parser

use super::*;

const WELL_FORMED: &str = "\
#### Interesting_Moments:
```
1.
Title: Opening banter
Start_Time: 00:00:10
End_Time: 00:00:45
Why_Interesting: High-energy introduction.

2.
Title: Hot take
Start_Time: 00:05:00
End_Time: 00:06:30
Why_Interesting: Contrarian opinion sparks debate.
```

#### Suggested_Cut_Points:
```
1.
Cut_Timestamp: 00:02:00
Reason: Topic shift.
```
";

#[test]
fn parses_well_formed_output() {
    let outcome = HighlightsParser::parse(WELL_FORMED);

    assert_eq!(outcome.moments.len(), 2);
    assert_eq!(outcome.cut_points.len(), 1);
    assert!(outcome.warnings.is_empty());

    let first = &outcome.moments[0];
    assert_eq!(first.title, "Opening banter");
    assert_eq!(first.start.unwrap().as_seconds(), 10.0);
    assert_eq!(first.end.unwrap().as_seconds(), 45.0);
    assert_eq!(first.rationale, "High-energy introduction.");

    let cut = &outcome.cut_points[0];
    assert_eq!(cut.timestamp.unwrap().as_seconds(), 120.0);
    assert_eq!(cut.reason, "Topic shift.");
}

#[test]
fn tolerates_preamble_and_postscript() {
    let raw = format!(
        "Sure! Here is the analysis you asked for.\n\n{}\nHope this helps, let me know!",
        WELL_FORMED
    );
    let outcome = HighlightsParser::parse(&raw);
    assert_eq!(outcome.moments.len(), 2);
    assert_eq!(outcome.cut_points.len(), 1);
}

#[test]
fn accepts_out_of_order_keys() {
    let raw = "\
Interesting_Moments:
1.
End_Time: 00:01:00
Why_Interesting: reversed keys
Start_Time: 00:00:30
Title: Backwards
";
    let outcome = HighlightsParser::parse(raw);
    assert_eq!(outcome.moments.len(), 1);
    assert_eq!(outcome.moments[0].title, "Backwards");
    assert_eq!(outcome.moments[0].start.unwrap().as_seconds(), 30.0);
}

#[test]
fn discards_moment_missing_required_key_with_warning() {
    let raw = "\
Interesting_Moments:
1.
Title: No end
Start_Time: 00:00:10
Why_Interesting: missing End_Time

2.
Title: Complete
Start_Time: 00:01:00
End_Time: 00:01:30
";
    let outcome = HighlightsParser::parse(raw);
    assert_eq!(outcome.moments.len(), 1);
    assert_eq!(outcome.moments[0].title, "Complete");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].message.contains("End_Time"));
    assert_eq!(outcome.warnings[0].reason, Some(RejectReason::MissingField));
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = "\
Interesting_Moments:
1.
Title: Known
Confidence: very high
Start_Time: 00:00:05
End_Time: 00:00:15
";
    let outcome = HighlightsParser::parse(raw);
    assert_eq!(outcome.moments.len(), 1);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn repeated_key_without_marker_starts_new_group() {
    let raw = "\
Interesting_Moments:
Title: First
Start_Time: 00:00:05
End_Time: 00:00:15
Title: Second
Start_Time: 00:01:00
End_Time: 00:01:30
";
    let outcome = HighlightsParser::parse(raw);
    assert_eq!(outcome.moments.len(), 2);
    assert_eq!(outcome.moments[1].title, "Second");
}

#[test]
fn unparseable_timestamp_is_kept_for_validation() {
    let raw = "\
Interesting_Moments:
1.
Title: Bad clock
Start_Time: around ten seconds
End_Time: 00:00:20
";
    let outcome = HighlightsParser::parse(raw);
    assert_eq!(outcome.moments.len(), 1);
    assert!(outcome.moments[0].start.is_none());
    assert_eq!(outcome.moments[0].start_raw, "around ten seconds");
    assert!(outcome.moments[0].end.is_some());
}

#[test]
fn preamble_only_input_yields_empty_lists_with_warning() {
    let outcome = HighlightsParser::parse("I could not find anything interesting, sorry.");
    assert!(outcome.moments.is_empty());
    assert!(outcome.cut_points.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    // Not a discarded record, so no reject code
    assert_eq!(outcome.warnings[0].reason, None);
}

#[test]
fn empty_input_is_quietly_empty() {
    let outcome = HighlightsParser::parse("");
    assert!(outcome.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn heading_variants_are_recognized() {
    for heading in [
        "Interesting_Moments:",
        "#### Interesting_Moments",
        "**Interesting Moments**",
        "interesting_moments",
    ] {
        let raw = format!(
            "{}\nTitle: T\nStart_Time: 00:00:01\nEnd_Time: 00:00:02\n",
            heading
        );
        let outcome = HighlightsParser::parse(&raw);
        assert_eq!(outcome.moments.len(), 1, "heading not detected: {}", heading);
    }
}

#[test]
fn cut_point_missing_timestamp_is_discarded() {
    let raw = "\
Suggested_Cut_Points:
1.
Reason: orphaned reason
";
    let outcome = HighlightsParser::parse(raw);
    assert!(outcome.cut_points.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].reason, Some(RejectReason::MissingField));
}
