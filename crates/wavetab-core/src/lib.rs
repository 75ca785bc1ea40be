//! Offline data preparation for embedded audio firmware.
//!
//! Two independent tools live here:
//!
//! - [`sine_table`] computes one period of a sine wave quantized to 8-bit
//!   unsigned amplitude and renders it as a C array declaration.
//! - [`resample`] rewrites a C header holding an `int16_t` stereo sample
//!   array at half its sample rate, copying every surrounding line verbatim.
//!
//! Neither tool prints; console output belongs to the CLI.

pub mod error;
pub mod resample;
pub mod sample;
pub mod sine_table;

pub use error::{PrepError, PrepResult};
pub use resample::{resample_file, resample_text, ResampleReport, Resampled};
pub use sample::{Sample, StereoFrame};
pub use sine_table::SineTableParams;
