//! wavetab CLI library.
//!
//! Command implementations behind the `wavetab` binary. All console output
//! lives here; the data preparation itself is in `wavetab_core`.

pub mod commands;
