//! Sine-table command implementation
//!
//! Prints (or writes) a `static const uint8_t` sine lookup table.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use wavetab_core::SineTableParams;

/// Run the sine-table command
///
/// # Arguments
/// * `params` - Table size, amplitude and array name
/// * `output` - Output file path (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(params: &SineTableParams, output: Option<&str>) -> Result<ExitCode> {
    if !is_c_identifier(&params.name) {
        bail!("'{}' is not a valid C identifier", params.name);
    }

    let rendered = params.render();

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write to: {}", path))?;
            println!(
                "{} Wrote {}-entry table '{}' to: {}",
                "SUCCESS".green().bold(),
                params.size,
                params.name,
                path
            );
        }
        None => {
            // Table only; stdout is meant to be redirected into a header.
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write table to stdout")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
