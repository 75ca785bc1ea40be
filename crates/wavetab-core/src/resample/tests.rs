//! Tests for the header resampler.

use pretty_assertions::assert_eq;

use super::*;

const KICK_HEADER: &str = "\
#ifndef KICK_H
#define KICK_H
#include <stdint.h>

static const int16_t kick[] = {
  1, 2, 3, 4,
  5, 6, 7, 8,
};
#endif
";

// =========================================================================
// Whole-text rewriting
// =========================================================================

#[test]
fn test_kick_header_is_rewritten() {
    let resampled = resample_text(KICK_HEADER).unwrap();
    let expected = "\
#ifndef KICK_H
#define KICK_H
#include <stdint.h>

static const int16_t kick[] = {

          2,      3,      6,      7,
};
#endif
";
    assert_eq!(resampled.text, expected);
    assert_eq!(
        resampled.report,
        ResampleReport {
            original_samples: 8,
            resampled_samples: 4,
            header_found: true,
            block_closed: true,
            final_state: LineState::Postamble,
        }
    );
}

#[test]
fn test_trailing_leftover_sample_is_dropped() {
    let input = "const int16_t s[] = {\n10, 20, 30, 40, 999\n};\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(
        resampled.text,
        "const int16_t s[] = {\n\n         20,     30,\n};\n"
    );
    assert_eq!(resampled.report.original_samples, 5);
    assert_eq!(resampled.report.resampled_samples, 2);
}

#[test]
fn test_negative_samples_round_down() {
    let input = "const int16_t s[] = {\n  -1, 3, -2, -6,\n};\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(resampled.text, "const int16_t s[] = {\n\n         -2,     -2,\n};\n");
}

#[test]
fn test_literals_on_closing_line_are_ignored() {
    let input = "const int16_t s[] = {\n1, 2, 3, 4,\n5, 6, 7, 8 };\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(resampled.report.original_samples, 4);
    assert_eq!(resampled.text, "const int16_t s[] = {\n\n          2,      3,\n5, 6, 7, 8 };\n");
}

#[test]
fn test_empty_array_body() {
    let input = "const int16_t s[] = {\n};\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(resampled.text, "const int16_t s[] = {\n\n};\n");
    assert!(resampled.report.block_closed);
    assert_eq!(resampled.report.resampled_samples, 0);
}

#[test]
fn test_long_body_wraps_at_twelve_values() {
    let body: Vec<String> = (0..48).map(|v| v.to_string()).collect();
    let input = format!("const int16_t s[] = {{\n{}\n}};\n", body.join(", "));
    let resampled = resample_text(&input).unwrap();
    assert_eq!(resampled.report.resampled_samples, 24);

    let lines: Vec<&str> = resampled.text.lines().collect();
    // header, blank, two full rows, closing line
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with(RESAMPLED_INDENT));
    assert_eq!(lines[2].matches(',').count(), RESAMPLED_VALUES_PER_LINE);
    assert_eq!(lines[3].matches(',').count(), RESAMPLED_VALUES_PER_LINE);
    assert_eq!(lines[4], "};");
}

// =========================================================================
// Verbatim copying
// =========================================================================

#[test]
fn test_preamble_and_postamble_copied_verbatim() {
    let preamble = "/* 44.1 kHz, 16 bit, stereo */\r\n#pragma once\r\n\tstatic const int16_t pad[] = {\r\n";
    let postamble = "}; // end\r\nconst int16_t other[] = {\r\n  9, 9, 9, 9,\r\n};\r\n#endif";
    let input = format!("{preamble}  1, 1, 3, 3,\r\n{postamble}");

    let resampled = resample_text(&input).unwrap();
    assert!(resampled.text.starts_with(preamble));
    assert!(resampled.text.ends_with(postamble));
    assert_eq!(resampled.report.resampled_samples, 2);
}

#[test]
fn test_only_first_array_is_resampled() {
    let input = "\
const int16_t a[] = {
1, 2, 3, 4,
};
const int16_t b[] = {
5, 6, 7, 8,
};
";
    let resampled = resample_text(input).unwrap();
    assert!(resampled.text.ends_with("};\nconst int16_t b[] = {\n5, 6, 7, 8,\n};\n"));
    assert_eq!(resampled.report.original_samples, 4);
}

#[test]
fn test_missing_final_newline_is_preserved() {
    let input = "const int16_t s[] = {\n1, 2, 3, 4,\n};";
    let resampled = resample_text(input).unwrap();
    assert!(resampled.text.ends_with("      3,\n};"));
}

// =========================================================================
// Malformed input
// =========================================================================

#[test]
fn test_no_header_copies_everything() {
    let input = "#include <stdint.h>\nstatic const uint8_t t[4] = {\n1, 2, 3, 4,\n};\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(resampled.text, input);
    assert!(!resampled.report.header_found);
    assert!(!resampled.report.block_closed);
    assert_eq!(resampled.report.final_state, LineState::Preamble);
}

#[test]
fn test_unclosed_array_drops_body() {
    let input = "const int16_t s[] = {\n1, 2, 3, 4,\n5, 6,\n";
    let resampled = resample_text(input).unwrap();
    assert_eq!(resampled.text, "const int16_t s[] = {\n");
    assert!(resampled.report.header_found);
    assert!(!resampled.report.block_closed);
    assert_eq!(resampled.report.original_samples, 6);
    assert_eq!(resampled.report.resampled_samples, 0);
    assert_eq!(resampled.report.final_state, LineState::Data);
}

#[test]
fn test_out_of_range_literal_reports_line() {
    let input = "// header\nconst int16_t s[] = {\n1, 2,\n3, 4000000000,\n};\n";
    let err = resample_text(input).unwrap_err();
    assert!(matches!(
        err,
        PrepError::SampleOutOfRange { line: 4, .. }
    ));
}

#[test]
fn test_empty_input() {
    let resampled = resample_text("").unwrap();
    assert_eq!(resampled.text, "");
    assert_eq!(resampled.report, ResampleReport::default());
}
