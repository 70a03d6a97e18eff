//! Report rendering.
//!
//! A `Report` pairs a `RoiResult` with the use-case label it was
//! computed for. It owns no arithmetic: every figure comes straight
//! from the result.

pub mod format;

use crate::{
    benchmarks::{Benchmark, BenchmarkPosition},
    calculator::{RoiResult, Scenario},
    error::CalcResult,
    types::{Money, Percent, Years},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::{fmt::Write as _, path::Path};

pub const REPORT_TITLE: &str = "AI ROI Calculator Report";
pub const DEFAULT_REPORT_FILE: &str = "AI_ROI_Report.txt";

#[derive(Debug, Clone)]
pub struct Report {
    label: String,
    result: RoiResult,
    generated_on: NaiveDate,
    benchmark: Option<&'static Benchmark>,
}

/// JSON shape of a report.
#[derive(Debug, Clone, Serialize)]
struct ReportDocument<'a> {
    title: &'static str,
    use_case: &'a str,
    generated_on: NaiveDate,
    total_cost: Money,
    benefit_base: Money,
    roi_base: Percent,
    benefit_worst: Money,
    roi_worst: Percent,
    benefit_best: Money,
    roi_best: Percent,
    payback_period_years: Years,
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkComparison>,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkComparison {
    roi_low: Percent,
    roi_high: Percent,
    position: BenchmarkPosition,
}

impl Report {
    pub fn new(label: impl Into<String>, result: &RoiResult) -> Self {
        Self {
            label: label.into(),
            result: *result,
            generated_on: Local::now().date_naive(),
            benchmark: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    pub fn with_benchmark(mut self, benchmark: Option<&'static Benchmark>) -> Self {
        self.benchmark = benchmark;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Headline metrics and scenario summary, for terminal output.
    pub fn metrics_text(&self) -> String {
        let r = &self.result;
        let mut out = String::new();
        let _ = writeln!(out, "Total Cost ($):          {}", format::currency(r.total_cost()));
        let _ = writeln!(out, "Base Case ROI (%):       {}", format::percent(r.roi_base()));
        let _ = writeln!(
            out,
            "Payback Period (Years):  {}",
            format::years(r.payback_period_years())
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Scenario Summary");
        let _ = writeln!(out, "  {}", self.scenario_line(Scenario::Worst));
        let _ = writeln!(out, "  {}", self.scenario_line(Scenario::Best));
        if let Some(line) = self.benchmark_line() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{line}");
        }
        out
    }

    /// The downloadable document.
    pub fn render_text(&self) -> String {
        let r = &self.result;
        let mut out = String::new();
        let _ = writeln!(out, "{REPORT_TITLE}");
        let _ = writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()));
        let _ = writeln!(out, "Generated: {}", self.generated_on.format("%Y-%m-%d"));
        let _ = writeln!(out);
        let _ = writeln!(out, "Use Case: {}", self.label);
        let _ = writeln!(out, "Total Cost: {}", format::currency(r.total_cost()));
        let _ = writeln!(out, "Base Case Benefit: {}", format::currency(r.benefit_base()));
        let _ = writeln!(out, "Base Case ROI: {}", format::percent(r.roi_base()));
        let _ = writeln!(
            out,
            "Payback Period: {} years",
            format::years(r.payback_period_years())
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.scenario_line(Scenario::Worst));
        let _ = writeln!(out, "{}", self.scenario_line(Scenario::Best));
        if let Some(line) = self.benchmark_line() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{line}");
        }
        out
    }

    pub fn to_json(&self) -> CalcResult<String> {
        let r = &self.result;
        let doc = ReportDocument {
            title: REPORT_TITLE,
            use_case: &self.label,
            generated_on: self.generated_on,
            total_cost: r.total_cost(),
            benefit_base: r.benefit_base(),
            roi_base: r.roi_base(),
            benefit_worst: r.benefit_worst(),
            roi_worst: r.roi_worst(),
            benefit_best: r.benefit_best(),
            roi_best: r.roi_best(),
            payback_period_years: r.payback_period_years(),
            benchmark: self.benchmark.map(|b| BenchmarkComparison {
                roi_low: b.roi_low,
                roi_high: b.roi_high,
                position: b.classify(r.roi_base()),
            }),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> CalcResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_text())?;
        log::info!("report for '{}' written to {}", self.label, path.display());
        Ok(())
    }

    fn scenario_line(&self, scenario: Scenario) -> String {
        format!(
            "{} Benefit: {} → ROI: {}",
            scenario,
            format::currency(self.result.benefit(scenario)),
            format::percent(self.result.roi(scenario))
        )
    }

    fn benchmark_line(&self) -> Option<String> {
        let b = self.benchmark?;
        let position = match b.classify(self.result.roi_base()) {
            BenchmarkPosition::Below => "below",
            BenchmarkPosition::Within => "within",
            BenchmarkPosition::Above => "above",
        };
        Some(format!(
            "Typical ROI for {}: {} (base case is {position} range)",
            b.name,
            b.range_label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{benchmarks::benchmark_for, calculator::compute, config::RoiConfig, presets::UseCase};

    fn report() -> Report {
        let c = RoiConfig::default_test();
        let r = compute(&c.costs, &c.benefits, &c.multipliers).unwrap();
        Report::new(c.use_case.label(), &r)
            .with_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn document_contains_required_fields() {
        let text = report().render_text();
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Generated: 2026-10-19"));
        assert!(text.contains("Use Case: Accounts Payable Automation"));
        assert!(text.contains("Total Cost: $74,000.00"));
        assert!(text.contains("Base Case Benefit: $150,000.00"));
        assert!(text.contains("Base Case ROI: 102.70%"));
        assert!(text.contains("Worst Case Benefit: $120,000.00 → ROI: 62.16%"));
        assert!(text.contains("Best Case Benefit: $180,000.00 → ROI: 143.24%"));
    }

    #[test]
    fn benchmark_line_only_when_attached() {
        assert!(!report().render_text().contains("Typical ROI"));

        let text = report()
            .with_benchmark(benchmark_for(UseCase::AccountsPayableAutomation))
            .render_text();
        assert!(text.contains("Typical ROI for Accounts Payable Automation: 70% – 120%"));
        assert!(text.contains("base case is within range"));
    }

    #[test]
    fn metrics_panel_shows_headline_figures() {
        let text = report().metrics_text();
        assert!(text.contains("$74,000.00"));
        assert!(text.contains("102.70%"));
        assert!(text.contains("Payback Period (Years):  0.49"));
    }

    #[test]
    fn json_document_carries_label_and_figures() {
        let json = report().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["use_case"], "Accounts Payable Automation");
        assert_eq!(v["generated_on"], "2026-10-19");
        assert_eq!(v["total_cost"], 74000.0);
        assert!(v.get("benchmark").is_none());
    }
}
