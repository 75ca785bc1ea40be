//! Sine lookup table generation.
//!
//! Produces one period of a sine wave shifted into the unsigned range
//! `[0, amplitude]` and renders it as a `static const uint8_t` C array for the
//! firmware DAC.

use std::f64::consts::PI;
use std::fmt::Write as _;

/// Number of table entries produced by default.
pub const DEFAULT_TABLE_SIZE: usize = 100;

/// Amplitude ceiling used by default.
pub const DEFAULT_AMPLITUDE: u8 = 127;

/// Default C identifier of the rendered array.
pub const DEFAULT_TABLE_NAME: &str = "sine_table";

/// Table values rendered per output line.
pub const VALUES_PER_LINE: usize = 10;

/// Parameters of a rendered sine table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTableParams {
    /// Number of entries (phase steps in one period).
    pub size: usize,
    /// Largest value any entry may take.
    pub amplitude: u8,
    /// C identifier of the array.
    pub name: String,
}

impl Default for SineTableParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_TABLE_SIZE,
            amplitude: DEFAULT_AMPLITUDE,
            name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl SineTableParams {
    /// Generates the table values for these parameters.
    pub fn generate(&self) -> Vec<u8> {
        generate(self.size, self.amplitude)
    }

    /// Generates and renders the table as a C declaration.
    pub fn render(&self) -> String {
        render(self, &self.generate())
    }
}

/// Computes `size` evenly spaced phase samples of one sine period.
///
/// Entry `i` is `trunc((sin(2*pi*i/size) * 0.5 + 0.5) * amplitude)`. The
/// scaled value is never negative, so the `as` cast truncates toward zero,
/// which reference tables depend on.
pub fn generate(size: usize, amplitude: u8) -> Vec<u8> {
    let scale = f64::from(amplitude);
    (0..size)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / size as f64;
            ((theta.sin() * 0.5 + 0.5) * scale) as u8
        })
        .collect()
}

/// Renders `values` as a `static const uint8_t` array declaration.
///
/// Values are right-aligned in three columns, ten per line, comma separated
/// with no comma after the last one. A table whose length is not a multiple
/// of ten closes on the same line as its last value.
pub fn render(params: &SineTableParams, values: &[u8]) -> String {
    let mut out = String::with_capacity(values.len() * 5 + 64);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "static const uint8_t {}[{}] = {{",
        params.name,
        values.len()
    );

    for (i, value) in values.iter().enumerate() {
        let sep = if i + 1 < values.len() { "," } else { "" };
        let _ = write!(out, " {:3}{}", value, sep);
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push('\n');
        }
    }

    out.push_str("};\n");
    out
}
