//! Shared primitive types used across the calculator.

/// A monetary amount in currency units (USD in the default presets).
pub type Money = f64;

/// A percentage, e.g. `102.7` for 102.7%.
pub type Percent = f64;

/// A duration in years.
pub type Years = f64;

/// A scalar applied to the base-case benefit.
pub type Multiplier = f64;
