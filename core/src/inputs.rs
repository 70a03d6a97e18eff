//! Calculator inputs — the cost set, benefit drivers and scenario multipliers.
//!
//! These are plain value records. They are built once per calculation
//! by the presentation layer (CLI flags, config file, preset table)
//! and passed by value into `calculator::compute`.

use crate::{
    error::{CalcResult, RoiError},
    types::{Money, Multiplier},
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const BEST_MULTIPLIER_RANGE: RangeInclusive<Multiplier> = 1.0..=2.0;
pub const WORST_MULTIPLIER_RANGE: RangeInclusive<Multiplier> = 0.5..=1.0;

/// Slider granularity for both multipliers.
pub const MULTIPLIER_STEP: Multiplier = 0.05;

pub const DEFAULT_BEST_MULTIPLIER: Multiplier = 1.2;
pub const DEFAULT_WORST_MULTIPLIER: Multiplier = 0.8;

/// One-off and running costs of adopting an AI tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    pub software_cost: Money,
    pub implementation_cost: Money,
    pub training_cost: Money,
    pub maintenance_cost: Money,
    pub other_costs: Money,
}

impl CostInputs {
    pub fn fields(&self) -> [(&'static str, Money); 5] {
        [
            ("software_cost", self.software_cost),
            ("implementation_cost", self.implementation_cost),
            ("training_cost", self.training_cost),
            ("maintenance_cost", self.maintenance_cost),
            ("other_costs", self.other_costs),
        ]
    }

    pub fn ensure_finite(&self) -> CalcResult<()> {
        self.fields()
            .into_iter()
            .try_for_each(|(field, value)| ensure_finite(field, value))
    }
}

/// Annual benefit drivers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitInputs {
    /// Hours saved per automated task.
    pub time_saved_hours: f64,
    /// Tasks automated per year.
    pub tasks_automated: u64,
    /// Loaded hourly cost of finance staff.
    pub hourly_cost: Money,
    pub error_reduction: Money,
    pub revenue_uplift: Money,
}

impl BenefitInputs {
    /// The floating-point drivers; `tasks_automated` is integral.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("time_saved_hours", self.time_saved_hours),
            ("hourly_cost", self.hourly_cost),
            ("error_reduction", self.error_reduction),
            ("revenue_uplift", self.revenue_uplift),
        ]
    }

    pub fn ensure_finite(&self) -> CalcResult<()> {
        self.fields()
            .into_iter()
            .try_for_each(|(field, value)| ensure_finite(field, value))
    }

    /// Value of staff time freed per year.
    pub fn labour_savings(&self) -> Money {
        self.time_saved_hours * self.tasks_automated as f64 * self.hourly_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    pub best_multiplier: Multiplier,
    pub worst_multiplier: Multiplier,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self {
            best_multiplier: DEFAULT_BEST_MULTIPLIER,
            worst_multiplier: DEFAULT_WORST_MULTIPLIER,
        }
    }
}

impl ScenarioMultipliers {
    pub fn new(best_multiplier: Multiplier, worst_multiplier: Multiplier) -> Self {
        Self {
            best_multiplier,
            worst_multiplier,
        }
    }

    /// Both multipliers at 1.0: every scenario equals the base case.
    pub fn flat() -> Self {
        Self::new(1.0, 1.0)
    }

    pub fn ensure_finite(&self) -> CalcResult<()> {
        ensure_finite("best_multiplier", self.best_multiplier)?;
        ensure_finite("worst_multiplier", self.worst_multiplier)
    }

    pub fn within_bounds(&self) -> bool {
        self.validate().is_ok()
    }

    /// Range check for input collection. The calculator itself
    /// accepts any multiplier.
    pub fn validate(&self) -> CalcResult<()> {
        check_range("best", self.best_multiplier, &BEST_MULTIPLIER_RANGE)?;
        check_range("worst", self.worst_multiplier, &WORST_MULTIPLIER_RANGE)
    }
}

/// NaN and the infinities are rejected.
pub fn ensure_finite(quantity: &'static str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RoiError::NonFinite { quantity, value })
    }
}

fn check_range(
    which: &'static str,
    value: Multiplier,
    range: &RangeInclusive<Multiplier>,
) -> CalcResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RoiError::MultiplierOutOfRange {
            which,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// A complete cost + benefit record, as stored in the preset table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    pub costs: CostInputs,
    pub benefits: BenefitInputs,
}
