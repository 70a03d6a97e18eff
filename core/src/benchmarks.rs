//! Typical ROI ranges for common finance AI use cases.
//!
//! Used to put a computed ROI next to what enterprises usually see.

use crate::{presets::UseCase, types::Percent};
use serde::Serialize;

pub const BENCHMARK_DISCLAIMER: &str = "These ranges are typical in enterprises. \
Your results may vary based on company size, process complexity, and AI adoption level.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub name: &'static str,
    pub roi_low: Percent,
    pub roi_high: Percent,
    pub key_benefits: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkPosition {
    Below,
    Within,
    Above,
}

impl Benchmark {
    /// Where `roi` falls relative to this range (bounds inclusive).
    pub fn classify(&self, roi: Percent) -> BenchmarkPosition {
        if roi < self.roi_low {
            BenchmarkPosition::Below
        } else if roi > self.roi_high {
            BenchmarkPosition::Above
        } else {
            BenchmarkPosition::Within
        }
    }

    pub fn range_label(&self) -> String {
        format!("{:.0}% – {:.0}%", self.roi_low, self.roi_high)
    }
}

pub static BENCHMARKS: [Benchmark; 5] = [
    Benchmark {
        name: "Accounts Payable Automation",
        roi_low: 70.0,
        roi_high: 120.0,
        key_benefits: "Faster invoice processing, error reduction, staff redeployment",
    },
    Benchmark {
        name: "Forecasting AI",
        roi_low: 80.0,
        roi_high: 150.0,
        key_benefits: "More accurate cash flow and revenue forecasting, strategic insights",
    },
    Benchmark {
        name: "Reconciliation AI",
        roi_low: 60.0,
        roi_high: 110.0,
        key_benefits: "Automated bank/ledger reconciliation, fewer errors, faster close",
    },
    Benchmark {
        name: "Expense Management AI",
        roi_low: 50.0,
        roi_high: 100.0,
        key_benefits: "Fraud detection, policy compliance, faster approvals",
    },
    Benchmark {
        name: "Financial Reporting AI",
        roi_low: 65.0,
        roi_high: 130.0,
        key_benefits: "Automated report generation, improved accuracy, time savings",
    },
];

/// `None` for `Custom`: there is nothing to compare against.
pub fn benchmark_for(use_case: UseCase) -> Option<&'static Benchmark> {
    BENCHMARKS.iter().find(|b| b.name == use_case.label())
}
