//! ROI calculator — the arithmetic core.
//!
//! Stateless. Every function here is a pure transform of its
//! arguments; `compute` is called fresh for each input snapshot.
//!
//! Zero denominators are reported as `RoiError::DivisionByZero`.
//! Non-finite inputs, and finite inputs whose sums or products
//! overflow, are reported as `RoiError::NonFinite`. A `RoiResult`
//! therefore never carries an infinite or NaN field.

use crate::{
    error::{CalcResult, Denominator, RoiError},
    inputs::{ensure_finite, BenefitInputs, CostInputs, ScenarioMultipliers},
    types::{Money, Multiplier, Percent, Years},
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_MULTIPLIER: Multiplier = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Worst,
    Base,
    Best,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Worst => "Worst Case",
            Scenario::Base => "Base Case",
            Scenario::Best => "Best Case",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived outputs of one calculation. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    total_cost: Money,
    benefit_base: Money,
    benefit_best: Money,
    benefit_worst: Money,
    roi_base: Percent,
    roi_best: Percent,
    roi_worst: Percent,
    payback_period_years: Years,
}

impl RoiResult {
    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn benefit_base(&self) -> Money {
        self.benefit_base
    }

    pub fn benefit_best(&self) -> Money {
        self.benefit_best
    }

    pub fn benefit_worst(&self) -> Money {
        self.benefit_worst
    }

    pub fn roi_base(&self) -> Percent {
        self.roi_base
    }

    pub fn roi_best(&self) -> Percent {
        self.roi_best
    }

    pub fn roi_worst(&self) -> Percent {
        self.roi_worst
    }

    pub fn payback_period_years(&self) -> Years {
        self.payback_period_years
    }

    pub fn benefit(&self, scenario: Scenario) -> Money {
        match scenario {
            Scenario::Worst => self.benefit_worst,
            Scenario::Base => self.benefit_base,
            Scenario::Best => self.benefit_best,
        }
    }

    pub fn roi(&self, scenario: Scenario) -> Percent {
        match scenario {
            Scenario::Worst => self.roi_worst,
            Scenario::Base => self.roi_base,
            Scenario::Best => self.roi_best,
        }
    }

    fn ensure_finite(&self) -> CalcResult<()> {
        ensure_finite("total_cost", self.total_cost)?;
        ensure_finite("benefit_base", self.benefit_base)?;
        ensure_finite("benefit_best", self.benefit_best)?;
        ensure_finite("benefit_worst", self.benefit_worst)?;
        ensure_finite("roi_base", self.roi_base)?;
        ensure_finite("roi_best", self.roi_best)?;
        ensure_finite("roi_worst", self.roi_worst)?;
        ensure_finite("payback_period_years", self.payback_period_years)
    }

    /// `(scenario, benefit, roi)` rows, worst to best.
    pub fn scenarios(&self) -> [(Scenario, Money, Percent); 3] {
        [Scenario::Worst, Scenario::Base, Scenario::Best]
            .map(|s| (s, self.benefit(s), self.roi(s)))
    }
}

pub fn total_cost(costs: &CostInputs) -> Money {
    costs.software_cost
        + costs.implementation_cost
        + costs.training_cost
        + costs.maintenance_cost
        + costs.other_costs
}

/// `((hours * tasks * rate) + error_reduction + revenue_uplift) * multiplier`
pub fn benefit(benefits: &BenefitInputs, multiplier: Multiplier) -> Money {
    (benefits.labour_savings() + benefits.error_reduction + benefits.revenue_uplift) * multiplier
}

pub fn roi_percent(benefit: Money, total_cost: Money) -> CalcResult<Percent> {
    if total_cost == 0.0 {
        return Err(RoiError::DivisionByZero {
            quantity: Denominator::TotalCost,
        });
    }
    Ok(((benefit - total_cost) / total_cost) * 100.0)
}

/// Years of base-case benefit needed to recover the total cost.
pub fn payback_period_years(total_cost: Money, benefit_base: Money) -> CalcResult<Years> {
    if benefit_base == 0.0 {
        return Err(RoiError::DivisionByZero {
            quantity: Denominator::BaseBenefit,
        });
    }
    Ok(total_cost / benefit_base)
}

pub fn compute(
    costs: &CostInputs,
    benefits: &BenefitInputs,
    multipliers: &ScenarioMultipliers,
) -> CalcResult<RoiResult> {
    costs.ensure_finite()?;
    benefits.ensure_finite()?;
    multipliers.ensure_finite()?;

    for (field, value) in costs.fields() {
        if value < 0.0 {
            log::warn!("negative cost input {field}={value}");
        }
    }

    let total_cost = total_cost(costs);
    let benefit_base = benefit(benefits, BASE_MULTIPLIER);
    let benefit_best = benefit(benefits, multipliers.best_multiplier);
    let benefit_worst = benefit(benefits, multipliers.worst_multiplier);

    let result = RoiResult {
        total_cost,
        benefit_base,
        benefit_best,
        benefit_worst,
        roi_base: roi_percent(benefit_base, total_cost)?,
        roi_best: roi_percent(benefit_best, total_cost)?,
        roi_worst: roi_percent(benefit_worst, total_cost)?,
        payback_period_years: payback_period_years(total_cost, benefit_base)?,
    };
    result.ensure_finite()?;

    log::debug!(
        "roi computed: cost={:.2} base={:.2} roi_base={:.2}% payback={:.3}y",
        result.total_cost,
        result.benefit_base,
        result.roi_base,
        result.payback_period_years
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> CostInputs {
        CostInputs {
            software_cost: 40000.0,
            implementation_cost: 20000.0,
            training_cost: 8000.0,
            maintenance_cost: 4000.0,
            other_costs: 2000.0,
        }
    }

    fn benefits() -> BenefitInputs {
        BenefitInputs {
            time_saved_hours: 2.5,
            tasks_automated: 1200,
            hourly_cost: 45.0,
            error_reduction: 10000.0,
            revenue_uplift: 5000.0,
        }
    }

    #[test]
    fn scenarios_are_ordered_worst_to_best() {
        let r = compute(&costs(), &benefits(), &ScenarioMultipliers::default()).unwrap();
        let rows = r.scenarios();
        assert_eq!(rows[0].0, Scenario::Worst);
        assert_eq!(rows[1].0, Scenario::Base);
        assert_eq!(rows[2].0, Scenario::Best);
        assert!((rows[0].1 - 120_000.0).abs() < 1e-6);
        assert!((rows[2].1 - 180_000.0).abs() < 1e-6);
    }

    #[test]
    fn negative_roi_when_benefit_below_cost() {
        let roi = roi_percent(50.0, 100.0).unwrap();
        assert_eq!(roi, -50.0);
    }

    #[test]
    fn zero_benefit_roi_is_minus_one_hundred() {
        assert_eq!(roi_percent(0.0, 74000.0).unwrap(), -100.0);
    }

    #[test]
    fn serializes_all_eight_fields() {
        let r = compute(&costs(), &benefits(), &ScenarioMultipliers::default()).unwrap();
        let v = serde_json::to_value(r).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(obj["total_cost"], 74000.0);
        assert_eq!(obj["benefit_base"], 150000.0);
    }
}
