//! 2:1 resampling of `int16_t` sample arrays embedded in C headers.
//!
//! The header is read line by line through a three-state classifier. Lines
//! before and after the array are copied byte for byte; the numbers inside
//! the array are collected, decimated by [`average_pairs`] and written back
//! in a fixed layout just before the original closing line.

mod average;
mod classifier;
mod format;

#[cfg(test)]
mod tests;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{PrepError, PrepResult};
use crate::sample::Sample;

// Re-export public API
pub use average::{average_pairs, GROUP_LEN};
pub use classifier::{
    extract_samples, is_array_close, is_declaration_header, transition, LineAction, LineState,
    ARRAY_CLOSE_MARKER, ARRAY_OPEN_MARKER, DECLARATION_MARKER,
};
pub use format::{
    format_block, RESAMPLED_FIELD_WIDTH, RESAMPLED_INDENT, RESAMPLED_VALUES_PER_LINE,
};

/// Summary of one resampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResampleReport {
    /// Samples collected from the array body.
    pub original_samples: usize,
    /// Samples written back after decimation.
    pub resampled_samples: usize,
    /// Whether a declaration header line was seen.
    pub header_found: bool,
    /// Whether the array was closed, i.e. the resampled body was written.
    pub block_closed: bool,
    /// Classifier state after the last line.
    pub final_state: LineState,
}

/// Rewritten header text together with its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resampled {
    /// Complete output text.
    pub text: String,
    /// Counts and classifier outcome.
    pub report: ResampleReport,
}

/// Resamples the first sample array found in `input`.
///
/// Line endings are kept exactly as they appear in the input, including a
/// missing newline on the last line. A header that never appears or an
/// array that is never closed is not an error: the output then holds only
/// the copied lines and the report says how far the classifier got.
pub fn resample_text(input: &str) -> PrepResult<Resampled> {
    let mut state = LineState::default();
    let mut collected: Vec<Sample> = Vec::new();
    let mut text = String::with_capacity(input.len());
    let mut report = ResampleReport::default();

    for (index, line) in input.split_inclusive('\n').enumerate() {
        let (next, action) = transition(state, line);
        match action {
            LineAction::Copy => text.push_str(line),
            LineAction::Collect => collected.extend(extract_samples(line, index + 1)?),
            LineAction::Close => {
                let resampled = average_pairs(&collected);
                text.push_str(&format_block(&resampled));
                text.push_str(line);
                report.resampled_samples = resampled.len();
                report.block_closed = true;
            }
        }
        if state == LineState::Preamble && next == LineState::Data {
            report.header_found = true;
        }
        state = next;
    }

    report.original_samples = collected.len();
    report.final_state = state;
    Ok(Resampled { text, report })
}

/// Resamples the header at `input` and writes the result to `output`.
///
/// The input is read in full before `output` is created, so a missing or
/// unreadable input leaves `output` untouched.
pub fn resample_file(input: &Path, output: &Path) -> PrepResult<ResampleReport> {
    let source = fs::read_to_string(input).map_err(|e| PrepError::from_read(input, e))?;
    let resampled = resample_text(&source)?;

    let file = File::create(output).map_err(|e| PrepError::from_write(output, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(resampled.text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| PrepError::from_write(output, e))?;

    Ok(resampled.report)
}
