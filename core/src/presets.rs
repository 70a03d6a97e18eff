//! Finance use-case presets.
//!
//! Each named use case maps to a fixed `InputSet`. `Custom` maps to
//! the defaults shown on an empty custom form.

use crate::{
    error::RoiError,
    inputs::{BenefitInputs, CostInputs, InputSet},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    #[default]
    Custom,
    AccountsPayableAutomation,
    ForecastingAi,
    ReconciliationAi,
}

impl UseCase {
    /// Menu order.
    pub const ALL: [UseCase; 4] = [
        UseCase::Custom,
        UseCase::AccountsPayableAutomation,
        UseCase::ForecastingAi,
        UseCase::ReconciliationAi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UseCase::Custom => "Custom Inputs",
            UseCase::AccountsPayableAutomation => "Accounts Payable Automation",
            UseCase::ForecastingAi => "Forecasting AI",
            UseCase::ReconciliationAi => "Reconciliation AI",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            UseCase::Custom => "custom",
            UseCase::AccountsPayableAutomation => "accounts-payable-automation",
            UseCase::ForecastingAi => "forecasting-ai",
            UseCase::ReconciliationAi => "reconciliation-ai",
        }
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, UseCase::Custom)
    }

    pub fn inputs(&self) -> InputSet {
        match self {
            UseCase::Custom => CUSTOM_DEFAULTS,
            UseCase::AccountsPayableAutomation => ACCOUNTS_PAYABLE,
            UseCase::ForecastingAi => FORECASTING,
            UseCase::ReconciliationAi => RECONCILIATION,
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the slug or the display label, case-insensitively.
impl FromStr for UseCase {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        UseCase::ALL
            .into_iter()
            .find(|u| {
                u.slug().eq_ignore_ascii_case(needle) || u.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| RoiError::UnknownUseCase {
                name: needle.to_string(),
            })
    }
}

const ACCOUNTS_PAYABLE: InputSet = InputSet {
    costs: CostInputs {
        software_cost: 40000.0,
        implementation_cost: 20000.0,
        training_cost: 8000.0,
        maintenance_cost: 4000.0,
        other_costs: 2000.0,
    },
    benefits: BenefitInputs {
        time_saved_hours: 2.5,
        tasks_automated: 1200,
        hourly_cost: 45.0,
        error_reduction: 10000.0,
        revenue_uplift: 5000.0,
    },
};

const FORECASTING: InputSet = InputSet {
    costs: CostInputs {
        software_cost: 50000.0,
        implementation_cost: 30000.0,
        training_cost: 10000.0,
        maintenance_cost: 5000.0,
        other_costs: 0.0,
    },
    benefits: BenefitInputs {
        time_saved_hours: 3.0,
        tasks_automated: 1000,
        hourly_cost: 50.0,
        error_reduction: 15000.0,
        revenue_uplift: 20000.0,
    },
};

const RECONCILIATION: InputSet = InputSet {
    costs: CostInputs {
        software_cost: 35000.0,
        implementation_cost: 15000.0,
        training_cost: 5000.0,
        maintenance_cost: 3000.0,
        other_costs: 1000.0,
    },
    benefits: BenefitInputs {
        time_saved_hours: 4.0,
        tasks_automated: 800,
        hourly_cost: 48.0,
        error_reduction: 12000.0,
        revenue_uplift: 8000.0,
    },
};

const CUSTOM_DEFAULTS: InputSet = InputSet {
    costs: CostInputs {
        software_cost: 50000.0,
        implementation_cost: 30000.0,
        training_cost: 10000.0,
        maintenance_cost: 5000.0,
        other_costs: 0.0,
    },
    benefits: BenefitInputs {
        time_saved_hours: 3.0,
        tasks_automated: 1000,
        hourly_cost: 50.0,
        error_reduction: 15000.0,
        revenue_uplift: 20000.0,
    },
};
