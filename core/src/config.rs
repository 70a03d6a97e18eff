//! Calculation configuration — which use case, which inputs, which multipliers.
//!
//! Inputs are layered: the use-case preset supplies every field, then
//! each `InputOverrides` layer (config file, command-line flags, a
//! session request) replaces the fields it names, in order.

use crate::{
    error::CalcResult,
    inputs::{BenefitInputs, CostInputs, InputSet, ScenarioMultipliers},
    presets::UseCase,
    types::{Money, Multiplier},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOverrides {
    pub software_cost: Option<Money>,
    pub implementation_cost: Option<Money>,
    pub training_cost: Option<Money>,
    pub maintenance_cost: Option<Money>,
    pub other_costs: Option<Money>,
}

impl CostOverrides {
    fn apply(&self, costs: &mut CostInputs) {
        set(&mut costs.software_cost, self.software_cost);
        set(&mut costs.implementation_cost, self.implementation_cost);
        set(&mut costs.training_cost, self.training_cost);
        set(&mut costs.maintenance_cost, self.maintenance_cost);
        set(&mut costs.other_costs, self.other_costs);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitOverrides {
    pub time_saved_hours: Option<f64>,
    pub tasks_automated: Option<u64>,
    pub hourly_cost: Option<Money>,
    pub error_reduction: Option<Money>,
    pub revenue_uplift: Option<Money>,
}

impl BenefitOverrides {
    fn apply(&self, benefits: &mut BenefitInputs) {
        set(&mut benefits.time_saved_hours, self.time_saved_hours);
        set(&mut benefits.tasks_automated, self.tasks_automated);
        set(&mut benefits.hourly_cost, self.hourly_cost);
        set(&mut benefits.error_reduction, self.error_reduction);
        set(&mut benefits.revenue_uplift, self.revenue_uplift);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplierOverrides {
    pub best_multiplier: Option<Multiplier>,
    pub worst_multiplier: Option<Multiplier>,
}

impl MultiplierOverrides {
    fn apply(&self, multipliers: &mut ScenarioMultipliers) {
        set(&mut multipliers.best_multiplier, self.best_multiplier);
        set(&mut multipliers.worst_multiplier, self.worst_multiplier);
    }
}

/// One layer of user-supplied values. Every field is optional.
///
/// This is also the on-disk format of a config file:
///
/// ```json
/// { "use_case": "forecasting-ai", "costs": { "other_costs": 2500 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOverrides {
    /// Slug or display label, see `UseCase::from_str`.
    pub use_case: Option<String>,
    pub costs: CostOverrides,
    pub benefits: BenefitOverrides,
    pub multipliers: MultiplierOverrides,
}

impl InputOverrides {
    /// Read a JSON layer from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let layer: InputOverrides = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        Ok(layer)
    }
}

/// A fully resolved input snapshot, ready for `calculator::compute`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiConfig {
    pub use_case: UseCase,
    pub costs: CostInputs,
    pub benefits: BenefitInputs,
    pub multipliers: ScenarioMultipliers,
}

impl RoiConfig {
    pub fn from_use_case(use_case: UseCase) -> Self {
        let InputSet { costs, benefits } = use_case.inputs();
        Self {
            use_case,
            costs,
            benefits,
            multipliers: ScenarioMultipliers::default(),
        }
    }

    /// Load a single config file over its named preset.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let layer = InputOverrides::load(path)?;
        Ok(Self::resolve(&[layer])?)
    }

    /// The use case named by the last layer that names one selects the
    /// preset; field overrides are then applied layer by layer.
    /// Fails if any resolved value is NaN or infinite.
    pub fn resolve(layers: &[InputOverrides]) -> CalcResult<Self> {
        let use_case = match layers.iter().rev().find_map(|l| l.use_case.as_deref()) {
            Some(name) => name.parse()?,
            None => UseCase::Custom,
        };

        let mut config = Self::from_use_case(use_case);
        for layer in layers {
            config.apply(layer);
        }
        config.costs.ensure_finite()?;
        config.benefits.ensure_finite()?;
        config.multipliers.ensure_finite()?;
        log::debug!("resolved inputs for '{}' from {} layer(s)", use_case, layers.len());
        Ok(config)
    }

    fn apply(&mut self, layer: &InputOverrides) {
        layer.costs.apply(&mut self.costs);
        layer.benefits.apply(&mut self.benefits);
        layer.multipliers.apply(&mut self.multipliers);
    }

    /// Accounts-payable preset with default multipliers.
    /// Use in tests instead of building inputs by hand.
    pub fn default_test() -> Self {
        Self::from_use_case(UseCase::AccountsPayableAutomation)
    }
}

fn set<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
