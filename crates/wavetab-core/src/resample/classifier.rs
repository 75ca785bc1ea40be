//! Three-state line classifier for header files.
//!
//! A header is split into the lines before the sample array (preamble), the
//! lines holding its numbers (data) and everything from the closing token on
//! (postamble). Only the data lines are ever inspected for numbers.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{PrepError, PrepResult};
use crate::sample::Sample;

/// Marker of a 16-bit sample array declaration.
pub const DECLARATION_MARKER: &str = "const int16_t";

/// Marker of an unsized array opened with a brace initializer.
pub const ARRAY_OPEN_MARKER: &str = "[] = {";

/// Token that closes the array initializer.
pub const ARRAY_CLOSE_MARKER: &str = "};";

/// Optional minus sign followed by one or more ASCII digits.
const SAMPLE_LITERAL_PATTERN: &str = r"-?[0-9]+";

static SAMPLE_LITERAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn sample_literal_regex() -> &'static Regex {
    SAMPLE_LITERAL_REGEX
        .get_or_init(|| Regex::new(SAMPLE_LITERAL_PATTERN).expect("invalid regex pattern"))
}

/// Position of the classifier within the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    /// Before the declaration header, including the header line itself.
    #[default]
    Preamble,
    /// Inside the array body.
    Data,
    /// The closing line and everything after it.
    Postamble,
}

/// What to do with the line that was just classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Write the line to the output unchanged.
    Copy,
    /// Collect the line's sample literals; the line itself is not written.
    Collect,
    /// Emit the resampled block, then write the line unchanged.
    Close,
}

/// Returns true if `line` opens a `const int16_t name[] = {` declaration.
pub fn is_declaration_header(line: &str) -> bool {
    line.contains(DECLARATION_MARKER) && line.contains(ARRAY_OPEN_MARKER)
}

/// Returns true if `line` closes the array initializer.
pub fn is_array_close(line: &str) -> bool {
    line.contains(ARRAY_CLOSE_MARKER)
}

/// Classifies one line and returns the next state together with the action
/// for this line.
///
/// The header line is copied while still in [`LineState::Preamble`]; the
/// switch to [`LineState::Data`] applies from the following line. A file
/// that never opens or never closes its array simply stays in the
/// corresponding state.
pub fn transition(state: LineState, line: &str) -> (LineState, LineAction) {
    match state {
        LineState::Preamble if is_declaration_header(line) => (LineState::Data, LineAction::Copy),
        LineState::Preamble => (LineState::Preamble, LineAction::Copy),
        LineState::Data if is_array_close(line) => (LineState::Postamble, LineAction::Close),
        LineState::Data => (LineState::Data, LineAction::Collect),
        LineState::Postamble => (LineState::Postamble, LineAction::Copy),
    }
}

/// Extracts every signed integer literal on a data line, left to right.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn extract_samples(line: &str, line_number: usize) -> PrepResult<Vec<Sample>> {
    sample_literal_regex()
        .find_iter(line)
        .map(|m| {
            m.as_str()
                .parse::<Sample>()
                .map_err(|_| PrepError::SampleOutOfRange {
                    literal: m.as_str().to_string(),
                    line: line_number,
                })
        })
        .collect()
}
