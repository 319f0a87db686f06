use crate::enums::analysis_section::AnalysisSection;
use crate::structs::analysis_result::AnalysisResult;

const MAX_SCORE: u32 = 100;

/// Splits a completion into the four report sections by their header lines.
pub struct AnalysisParser {
    lines: Vec<String>,
}

impl AnalysisParser {
    pub fn new(input: &str) -> Self {
        Self {
            lines: input.lines().map(ToString::to_string).collect(),
        }
    }

    /// Convenience for `AnalysisParser::new(completion).parse(completion)`.
    pub fn split(completion: &str) -> AnalysisResult {
        Self::new(completion).parse(completion)
    }

    /// Never fails: a missing marker leaves that section empty.
    pub fn parse(&self, raw: &str) -> AnalysisResult {
        let mut result = AnalysisResult {
            raw: raw.to_string(),
            ..AnalysisResult::default()
        };

        let markers = self.locate_markers();

        for (index, (section, start, inline)) in markers.iter().enumerate() {
            let end = markers.get(index + 1).map_or(self.lines.len(), |(_, next, _)| *next);
            let mut body = inline.clone();
            for line in &self.lines[start + 1..end] {
                body.push('\n');
                body.push_str(line);
            }
            *result.section_mut(*section) = body.trim().to_string();
        }

        result.score_value = extract_score(&result.score);
        result
    }

    /// Line index and inline value of each marker found, searching in section order after the previous hit.
    fn locate_markers(&self) -> Vec<(AnalysisSection, usize, String)> {
        let mut found = Vec::new();
        let mut cursor = 0;

        for section in AnalysisSection::ALL {
            let hit = self.lines[cursor..]
                .iter()
                .enumerate()
                .find_map(|(offset, line)| marker_value(line, section).map(|value| (cursor + offset, value)));

            if let Some((line_index, value)) = hit {
                found.push((section, line_index, value.to_string()));
                cursor = line_index + 1;
            }
        }

        found
    }
}

/// Accepts `### SCORE`, `## Score:`, `**SCORE**` and similar header drift.
/// Returns whatever follows `TITLE:` on the same line, e.g. `72/100` for `**Score:** 72/100`.
fn marker_value(line: &str, section: AnalysisSection) -> Option<&str> {
    let title = section.title();
    let stripped = line.trim().trim_start_matches(['#', '*', ' ']);

    let head = stripped.get(..title.len())?;
    if !head.eq_ignore_ascii_case(title) {
        return None;
    }

    let rest = &stripped[title.len()..];
    if rest.trim_end_matches(['*', ':', ' ']).is_empty() {
        return Some("");
    }

    rest.trim_start_matches('*')
        .trim_start()
        .strip_prefix(':')
        .map(|value| value.trim_matches(['*', ' ']))
}

/// First number in the section that is a plausible grade, e.g. `72/100` or `Score: 72`.
fn extract_score(score_section: &str) -> Option<u8> {
    let mut digits = String::new();

    for ch in score_section.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty() {
            if let Ok(value) = digits.parse::<u32>() {
                if value <= MAX_SCORE {
                    return u8::try_from(value).ok();
                }
            }
            digits.clear();
        }
    }

    None
}
