//! Text layout of a resampled array body.

use std::fmt::Write as _;

use crate::sample::Sample;

/// Values written per line of a resampled body (six stereo frames).
pub const RESAMPLED_VALUES_PER_LINE: usize = 12;

/// Indentation starting every body line.
pub const RESAMPLED_INDENT: &str = "    ";

/// Width each value is right-aligned to.
pub const RESAMPLED_FIELD_WIDTH: usize = 7;

/// Formats resampled values as the body of a C array initializer.
///
/// Every group of twelve values is preceded by a newline and the indent, each
/// value is followed by a comma (the last one too) and the body ends with a
/// newline so the original closing line can be appended directly.
pub fn format_block(values: &[Sample]) -> String {
    let per_value = RESAMPLED_FIELD_WIDTH + 1;
    let mut out = String::with_capacity(values.len() * per_value + values.len() / 2 + 1);
    for (i, value) in values.iter().enumerate() {
        if i % RESAMPLED_VALUES_PER_LINE == 0 {
            out.push('\n');
            out.push_str(RESAMPLED_INDENT);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:>width$},", value, width = RESAMPLED_FIELD_WIDTH);
    }
    out.push('\n');
    out
}
