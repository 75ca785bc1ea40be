//! Resample command implementation
//!
//! Halves the sample rate of an `int16_t` stereo array stored in a C header.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use wavetab_core::resample::{ARRAY_CLOSE_MARKER, ARRAY_OPEN_MARKER, DECLARATION_MARKER};
use wavetab_core::{resample_file, ResampleReport};

/// Machine-readable result of the resample command.
#[derive(Debug, Serialize)]
struct ResampleOutput<'a> {
    input: &'a str,
    output: &'a str,
    #[serde(flatten)]
    report: ResampleReport,
}

/// Run the resample command
///
/// # Arguments
/// * `input` - Header holding the original sample array
/// * `output` - Path the rewritten header is written to
/// * `json` - Print a JSON report instead of colored diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 error. A missing input is an error and leaves
/// `output` untouched.
pub fn run(input: &str, output: &str, json: bool) -> Result<ExitCode> {
    if !json {
        println!("{} {}", "Resampling:".cyan().bold(), input);
    }

    let report = resample_file(Path::new(input), Path::new(output))?;

    if json {
        let out = ResampleOutput {
            input,
            output,
            report,
        };
        let text = serde_json::to_string_pretty(&out).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        print_report(&report, output);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &ResampleReport, output: &str) {
    println!(
        "  {}: {}",
        "Original samples (L/R)".dimmed(),
        report.original_samples
    );
    println!(
        "  {}: {}",
        "Resampled samples (L/R)".dimmed(),
        report.resampled_samples
    );

    if !report.header_found {
        println!(
            "  {} No '{} ...{}' declaration found; input copied unchanged",
            "!".yellow(),
            DECLARATION_MARKER,
            ARRAY_OPEN_MARKER
        );
    } else if !report.block_closed {
        println!(
            "  {} Array never closed with '{}'; its body was not written",
            "!".yellow(),
            ARRAY_CLOSE_MARKER
        );
    }

    println!(
        "{} Resampled header written to: {}",
        "SUCCESS".green().bold(),
        output
    );
}
