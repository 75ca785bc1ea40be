//! wavetab CLI - offline audio data preparation for firmware
//!
//! This binary generates sine lookup tables and resamples `int16_t` sample
//! arrays stored in C headers.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavetab_cli::commands;
use wavetab_core::sine_table::{DEFAULT_AMPLITUDE, DEFAULT_TABLE_NAME, DEFAULT_TABLE_SIZE};
use wavetab_core::SineTableParams;

/// wavetab - Audio data preparation for embedded firmware
#[derive(Parser)]
#[command(name = "wavetab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one period of a sine wave as a uint8_t C lookup table
    SineTable {
        /// Number of table entries
        #[arg(long, default_value_t = DEFAULT_TABLE_SIZE as u32, value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,

        /// Largest table value (0-255)
        #[arg(long, default_value_t = DEFAULT_AMPLITUDE)]
        amplitude: u8,

        /// C identifier of the generated array
        #[arg(long, default_value = DEFAULT_TABLE_NAME)]
        name: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Halve the sample rate of a stereo int16_t array in a C header
    Resample {
        /// Header holding the original `const int16_t name[] = {` array
        input: String,

        /// Path the resampled header is written to
        output: String,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::SineTable {
            size,
            amplitude,
            name,
            output,
        } => {
            let params = SineTableParams {
                size: size as usize,
                amplitude,
                name,
            };
            commands::sine_table::run(&params, output.as_deref())
        }
        Commands::Resample {
            input,
            output,
            json,
        } => commands::resample::run(&input, &output, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
