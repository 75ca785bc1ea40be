//! CLI command implementations

pub mod resample;
pub mod sine_table;
