//! Finance AI ROI calculator.
//!
//! `calculator` holds the arithmetic. Everything else either feeds it
//! (`inputs`, `presets`, `config`) or presents its output
//! (`benchmarks`, `chart`, `report`).

pub mod benchmarks;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod inputs;
pub mod presets;
pub mod report;
pub mod types;
