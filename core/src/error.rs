use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Division by zero: {quantity} is zero")]
    DivisionByZero { quantity: Denominator },

    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("Unknown use case '{name}'")]
    UnknownUseCase { name: String },

    #[error("{which} multiplier {value} outside [{min}, {max}]")]
    MultiplierOutOfRange {
        which: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The denominator that was zero when a ratio could not be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    /// Zero total cost makes every ROI percentage undefined.
    TotalCost,
    /// Zero base-case benefit makes the payback period undefined.
    BaseBenefit,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denominator::TotalCost => f.write_str("total cost"),
            Denominator::BaseBenefit => f.write_str("base-case benefit"),
        }
    }
}

pub type CalcResult<T> = Result<T, RoiError>;
