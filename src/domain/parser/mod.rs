// Moment record parser - turns raw model text into candidate records
//
// The model output is a semi-structured text block with two labeled
// sections (interesting moments, suggested cut points), each holding
// repeated key-value groups. The grammar is strictly line-oriented:
// headings select a section, `Key: value` lines fill the current group,
// numbered markers (`1.`) separate groups. Everything else is ignored,
// so preamble, postscript, and markdown decoration never abort a parse.

use crate::domain::model::{
    CandidateCutPoint, CandidateMoment, ParseWarning, RejectReason, TimeSpec,
};

/// Result of parsing one raw model response
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub moments: Vec<CandidateMoment>,
    pub cut_points: Vec<CandidateCutPoint>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty() && self.cut_points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Moments,
    CutPoints,
}

/// Parser for the versioned two-section highlights format.
///
/// The heading text and key names form a documented contract with the
/// prompt template in the OpenRouter adapter; changing one requires
/// updating the other in lockstep.
pub struct HighlightsParser;

impl HighlightsParser {
    /// Parse raw model text. Never fails: worst case is an outcome with
    /// empty lists and warnings describing what was dropped.
    pub fn parse(raw_text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut section = Section::None;
        let mut saw_section = false;
        let mut moment = MomentDraft::default();
        let mut cut_point = CutPointDraft::default();

        for (index, line) in raw_text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("```") {
                continue;
            }

            if let Some(heading) = detect_heading(trimmed) {
                moment.flush(&mut outcome);
                cut_point.flush(&mut outcome);
                section = heading;
                saw_section = true;
                continue;
            }

            if section == Section::None {
                continue;
            }

            // A bare numbered marker starts the next group
            if is_group_marker(trimmed) {
                moment.flush(&mut outcome);
                cut_point.flush(&mut outcome);
                continue;
            }

            let Some((key, value)) = split_key_value(trimmed) else {
                continue;
            };

            match section {
                Section::Moments => moment.set(&key, value, line_no, &mut outcome),
                Section::CutPoints => cut_point.set(&key, value, line_no, &mut outcome),
                Section::None => unreachable!(),
            }
        }

        moment.flush(&mut outcome);
        cut_point.flush(&mut outcome);

        if !saw_section && !raw_text.trim().is_empty() {
            outcome.warnings.push(ParseWarning {
                line: None,
                message: "no recognized section headings in model output".to_string(),
                reason: None,
            });
        }

        outcome
    }
}

/// Match a section heading, tolerating markdown `#`/`*` decoration,
/// trailing colons, and spaces instead of underscores
fn detect_heading(line: &str) -> Option<Section> {
    let normalized: String = line
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`' | ':'))
        .collect::<String>()
        .trim()
        .to_lowercase()
        .replace(' ', "_");

    match normalized.as_str() {
        "interesting_moments" => Some(Section::Moments),
        "suggested_cut_points" => Some(Section::CutPoints),
        _ => None,
    }
}

/// `N.` or `N)` on its own line
fn is_group_marker(line: &str) -> bool {
    let Some(rest) = line.strip_suffix('.').or_else(|| line.strip_suffix(')')) else {
        return false;
    };
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Split `Key: value`, normalizing the key to lowercase without
/// markdown decoration. Returns None for lines without a colon.
fn split_key_value(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key
        .trim()
        .trim_start_matches(['-', '*', ' '])
        .trim_end_matches('*')
        .to_lowercase();
    if key.is_empty() {
        return None;
    }
    Some((key.replace(' ', "_"), value.trim()))
}

#[derive(Debug, Default)]
struct MomentDraft {
    title: Option<String>,
    start_raw: Option<String>,
    end_raw: Option<String>,
    rationale: Option<String>,
    first_line: Option<usize>,
}

impl MomentDraft {
    fn started(&self) -> bool {
        self.title.is_some() || self.start_raw.is_some() || self.end_raw.is_some()
    }

    fn set(&mut self, key: &str, value: &str, line: usize, outcome: &mut ParseOutcome) {
        let occupied = match key {
            "title" => self.title.is_some(),
            "start_time" => self.start_raw.is_some(),
            "end_time" => self.end_raw.is_some(),
            "why_interesting" => self.rationale.is_some(),
            _ => return, // unknown keys are ignored
        };
        // A repeated key means the model omitted the group marker
        if occupied {
            self.flush(outcome);
        }
        let slot = match key {
            "title" => &mut self.title,
            "start_time" => &mut self.start_raw,
            "end_time" => &mut self.end_raw,
            _ => &mut self.rationale,
        };
        *slot = Some(value.to_string());
        self.first_line.get_or_insert(line);
    }

    fn flush(&mut self, outcome: &mut ParseOutcome) {
        if !self.started() {
            *self = Self::default();
            return;
        }
        let draft = std::mem::take(self);

        let missing: Vec<&str> = [
            ("Title", draft.title.is_none()),
            ("Start_Time", draft.start_raw.is_none()),
            ("End_Time", draft.end_raw.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            outcome.warnings.push(ParseWarning {
                line: draft.first_line,
                message: format!("moment discarded, missing {}", missing.join(", ")),
                reason: Some(RejectReason::MissingField),
            });
            return;
        }

        let start_raw = draft.start_raw.unwrap_or_default();
        let end_raw = draft.end_raw.unwrap_or_default();
        outcome.moments.push(CandidateMoment {
            title: draft.title.unwrap_or_default(),
            start: TimeSpec::parse(&start_raw).ok(),
            end: TimeSpec::parse(&end_raw).ok(),
            start_raw,
            end_raw,
            rationale: draft.rationale.unwrap_or_default(),
        });
    }
}

#[derive(Debug, Default)]
struct CutPointDraft {
    timestamp_raw: Option<String>,
    reason: Option<String>,
    first_line: Option<usize>,
}

impl CutPointDraft {
    fn set(&mut self, key: &str, value: &str, line: usize, outcome: &mut ParseOutcome) {
        let occupied = match key {
            "cut_timestamp" => self.timestamp_raw.is_some(),
            "reason" => self.reason.is_some(),
            _ => return,
        };
        if occupied {
            self.flush(outcome);
        }
        let slot = match key {
            "cut_timestamp" => &mut self.timestamp_raw,
            _ => &mut self.reason,
        };
        *slot = Some(value.to_string());
        self.first_line.get_or_insert(line);
    }

    fn flush(&mut self, outcome: &mut ParseOutcome) {
        if self.timestamp_raw.is_none() && self.reason.is_none() {
            *self = Self::default();
            return;
        }
        let draft = std::mem::take(self);

        let Some(timestamp_raw) = draft.timestamp_raw else {
            outcome.warnings.push(ParseWarning {
                line: draft.first_line,
                message: "cut point discarded, missing Cut_Timestamp".to_string(),
                reason: Some(RejectReason::MissingField),
            });
            return;
        };

        outcome.cut_points.push(CandidateCutPoint {
            timestamp: TimeSpec::parse(&timestamp_raw).ok(),
            timestamp_raw,
            reason: draft.reason.unwrap_or_default(),
        });
    }
}

#[cfg(test)]
mod tests;
