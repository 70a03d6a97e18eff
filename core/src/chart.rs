//! Investment vs benefit bar chart.
//!
//! `BarChart` is a plain data model (labels, values, colours) that any
//! renderer can draw. `render_text` draws it as horizontal bars for
//! terminal output.

use crate::{calculator::RoiResult, report::format, types::Money};
use serde::Serialize;
use std::fmt::Write;

pub const CHART_TITLE: &str = "AI Investment vs Benefit (Scenario Analysis)";
pub const Y_AXIS_LABEL: &str = "USD ($)";

pub const COST_COLOR: &str = "#FF6B6B";
pub const WORST_COLOR: &str = "#FFA500";
pub const BASE_COLOR: &str = "#4ECDC4";
pub const BEST_COLOR: &str = "#1A535C";

const BAR_GLYPH: char = '█';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: Money,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Cost, then worst, base and best benefit.
    pub fn from_result(result: &RoiResult) -> Self {
        let bar = |label, value, color| Bar {
            label,
            value,
            color,
        };
        Self {
            title: CHART_TITLE,
            y_label: Y_AXIS_LABEL,
            bars: vec![
                bar("Cost", result.total_cost(), COST_COLOR),
                bar("Worst Case", result.benefit_worst(), WORST_COLOR),
                bar("Base Case", result.benefit_base(), BASE_COLOR),
                bar("Best Case", result.benefit_best(), BEST_COLOR),
            ],
        }
    }

    fn max_value(&self) -> Money {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Bars are scaled so the largest value spans `width` glyphs.
    /// Non-positive values draw as empty bars.
    pub fn render_text(&self, width: usize) -> String {
        let max = self.max_value();
        let label_width = self.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", self.y_label);
        for bar in &self.bars {
            let len = if max > 0.0 && bar.value > 0.0 {
                ((bar.value / max) * width as f64).round() as usize
            } else {
                0
            };
            let _ = writeln!(
                out,
                "  {:<label_width$} | {} {}",
                bar.label,
                BAR_GLYPH.to_string().repeat(len),
                format::currency(bar.value),
            );
        }
        out
    }
}
