//! roi-calc: command-line front end for the finance AI ROI calculator.
//!
//! Usage:
//!   roi-calc calculate --use-case accounts-payable-automation --chart
//!   roi-calc calculate --config inputs.json --best-multiplier 1.5 --report report.txt
//!   roi-calc presets
//!   roi-calc session < requests.jsonl

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use roi_core::{
    benchmarks::{benchmark_for, BENCHMARKS, BENCHMARK_DISCLAIMER},
    calculator::{self, RoiResult},
    chart::BarChart,
    config::{BenefitOverrides, CostOverrides, InputOverrides, MultiplierOverrides, RoiConfig},
    presets::UseCase,
    inputs::{BEST_MULTIPLIER_RANGE, MULTIPLIER_STEP, WORST_MULTIPLIER_RANGE},
    report::{format, Report, DEFAULT_REPORT_FILE},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const CHART_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "roi-calc")]
#[command(about = "ROI calculator for finance AI adoption", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute ROI for one set of inputs
    Calculate(CalculateArgs),
    /// List use-case presets and typical ROI ranges
    Presets,
    /// Read JSON requests from stdin, one per line, and answer each on stdout
    Session,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Use-case preset (slug or label)
    #[arg(short, long)]
    use_case: Option<String>,

    /// JSON file with inputs, applied over the preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_parser = finite_f64)]
    software_cost: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    implementation_cost: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    training_cost: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    maintenance_cost: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    other_costs: Option<f64>,

    /// Hours saved per task
    #[arg(long, value_parser = finite_f64)]
    time_saved_hours: Option<f64>,
    /// Tasks automated per year
    #[arg(long)]
    tasks_automated: Option<u64>,
    /// Average hourly cost of finance staff
    #[arg(long, value_parser = finite_f64)]
    hourly_cost: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    error_reduction: Option<f64>,
    #[arg(long, value_parser = finite_f64)]
    revenue_uplift: Option<f64>,

    /// Best-case multiplier, 1.0 to 2.0
    #[arg(long, value_parser = finite_f64)]
    best_multiplier: Option<f64>,
    /// Worst-case multiplier, 0.5 to 1.0
    #[arg(long, value_parser = finite_f64)]
    worst_multiplier: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Draw the investment vs benefit chart
    #[arg(long)]
    chart: bool,

    /// Write the report document to this path (AI_ROI_Report.txt if no path is given)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
    report: Option<PathBuf>,
}

impl CalculateArgs {
    fn flag_layer(&self) -> InputOverrides {
        InputOverrides {
            use_case: self.use_case.clone(),
            costs: CostOverrides {
                software_cost: self.software_cost,
                implementation_cost: self.implementation_cost,
                training_cost: self.training_cost,
                maintenance_cost: self.maintenance_cost,
                other_costs: self.other_costs,
            },
            benefits: BenefitOverrides {
                time_saved_hours: self.time_saved_hours,
                tasks_automated: self.tasks_automated,
                hourly_cost: self.hourly_cost,
                error_reduction: self.error_reduction,
                revenue_uplift: self.revenue_uplift,
            },
            multipliers: MultiplierOverrides {
                best_multiplier: self.best_multiplier,
                worst_multiplier: self.worst_multiplier,
            },
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SessionRequest {
    Calculate {
        #[serde(default)]
        use_case: Option<String>,
        #[serde(default)]
        costs: CostOverrides,
        #[serde(default)]
        benefits: BenefitOverrides,
        #[serde(default)]
        multipliers: MultiplierOverrides,
    },
    Presets,
    Quit,
}

#[derive(serde::Serialize)]
struct CalculationResponse {
    use_case: UseCase,
    label: &'static str,
    inputs: RoiConfig,
    result: RoiResult,
}

#[derive(serde::Serialize)]
struct PresetEntry {
    use_case: UseCase,
    label: &'static str,
    inputs: roi_core::inputs::InputSet,
    benchmark: Option<&'static roi_core::benchmarks::Benchmark>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Calculate(args) => run_calculate(&args),
        Commands::Presets => {
            print_presets();
            Ok(())
        }
        Commands::Session => {
            let stdin = io::stdin();
            run_session(stdin.lock(), io::stdout())
        }
    }
}

fn run_calculate(args: &CalculateArgs) -> Result<()> {
    let mut layers = Vec::new();
    if let Some(path) = &args.config {
        layers.push(InputOverrides::load(path)?);
    }
    layers.push(args.flag_layer());

    let config = RoiConfig::resolve(&layers)?;
    let result = calculate(&config)?;
    let report = Report::new(config.use_case.label(), &result)
        .with_benchmark(benchmark_for(config.use_case));

    match args.format {
        OutputFormat::Text => print_summary(&config, &report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if args.chart {
        println!();
        print!("{}", BarChart::from_result(&result).render_text(CHART_WIDTH));
    }

    if let Some(path) = &args.report {
        report
            .write_to(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        if args.format == OutputFormat::Text {
            println!();
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Range-check multipliers, then run the calculator.
fn calculate(config: &RoiConfig) -> Result<RoiResult> {
    config.multipliers.validate()?;
    let result = calculator::compute(&config.costs, &config.benefits, &config.multipliers)?;
    Ok(result)
}

/// Answer one JSON request per input line until EOF or `quit`.
/// Bad requests get an `{"error": ..}` line; the session continues.
fn run_session(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: SessionRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut output, &e)?;
                continue;
            }
        };

        match request {
            SessionRequest::Quit => break,
            SessionRequest::Presets => {
                writeln!(output, "{}", serde_json::to_string(&preset_entries())?)?;
            }
            SessionRequest::Calculate {
                use_case,
                costs,
                benefits,
                multipliers,
            } => match session_calculate(InputOverrides {
                use_case,
                costs,
                benefits,
                multipliers,
            }) {
                Ok(response) => writeln!(output, "{}", serde_json::to_string(&response)?)?,
                Err(e) => write_error(&mut output, &e)?,
            },
        }
        output.flush()?;
    }
    Ok(())
}

fn session_calculate(inputs: InputOverrides) -> Result<CalculationResponse> {
    let config = RoiConfig::resolve(&[inputs])?;
    let result = calculate(&config)?;
    Ok(CalculationResponse {
        use_case: config.use_case,
        label: config.use_case.label(),
        inputs: config,
        result,
    })
}

fn write_error(out: &mut impl Write, err: &dyn std::fmt::Display) -> Result<()> {
    log::warn!("session request failed: {err}");
    let err_json = serde_json::json!({ "error": err.to_string() });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn preset_entries() -> Vec<PresetEntry> {
    UseCase::ALL
        .into_iter()
        .map(|u| PresetEntry {
            use_case: u,
            label: u.label(),
            inputs: u.inputs(),
            benchmark: benchmark_for(u),
        })
        .collect()
}

fn print_summary(config: &RoiConfig, report: &Report) {
    let c = &config.costs;
    let b = &config.benefits;
    let m = &config.multipliers;

    println!("=== AI ROI CALCULATOR ===");
    println!("  use case:         {}", report.label());
    println!();
    println!("=== COSTS ===");
    println!("  software:         {}", format::currency(c.software_cost));
    println!("  implementation:   {}", format::currency(c.implementation_cost));
    println!("  training:         {}", format::currency(c.training_cost));
    println!("  maintenance:      {}", format::currency(c.maintenance_cost));
    println!("  other:            {}", format::currency(c.other_costs));
    println!();
    println!("=== BENEFITS ===");
    println!("  hours per task:   {:.2}", b.time_saved_hours);
    println!("  tasks per year:   {}", b.tasks_automated);
    println!("  hourly cost:      {}", format::currency(b.hourly_cost));
    println!("  error reduction:  {}", format::currency(b.error_reduction));
    println!("  revenue uplift:   {}", format::currency(b.revenue_uplift));
    println!("  multipliers:      best {:.2} / worst {:.2}", m.best_multiplier, m.worst_multiplier);
    println!();
    println!("=== RESULTS ===");
    print!("{}", report.metrics_text());
}

fn print_presets() {
    println!("=== USE CASE PRESETS ===");
    for u in UseCase::ALL {
        let inputs = u.inputs();
        let cost = calculator::total_cost(&inputs.costs);
        let benefit = calculator::benefit(&inputs.benefits, calculator::BASE_MULTIPLIER);
        println!(
            "  {:<30} {:<30} cost {:>12}  base benefit {:>12}",
            u.label(),
            u.slug(),
            format::currency(cost),
            format::currency(benefit)
        );
    }

    println!();
    println!("=== TYPICAL ROI RANGES ===");
    for b in &BENCHMARKS {
        println!("  {:<30} {:<12} {}", b.name, b.range_label(), b.key_benefits);
    }
    println!();
    println!("{BENCHMARK_DISCLAIMER}");
    println!();
    println!(
        "Scenario multipliers: best {:.2}-{:.2}, worst {:.2}-{:.2}, in steps of {:.2}",
        BEST_MULTIPLIER_RANGE.start(),
        BEST_MULTIPLIER_RANGE.end(),
        WORST_MULTIPLIER_RANGE.start(),
        WORST_MULTIPLIER_RANGE.end(),
        MULTIPLIER_STEP
    );
}

/// Clap parses "NaN" and "inf" as f64; the calculator has no use for them.
fn finite_f64(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn session_replies(input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        run_session(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn calculate_args(argv: &[&str]) -> CalculateArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Commands::Calculate(args) => args,
            other => panic!("expected calculate, got {other:?}"),
        }
    }

    #[test]
    fn session_answers_each_line_until_quit() {
        let input = [
            "not json",
            r#"{"type":"calculate","use_case":"accounts-payable-automation","multipliers":{"best_multiplier":2.5}}"#,
            r#"{"type":"calculate","costs":{"software_cost":0,"implementation_cost":0,"training_cost":0,"maintenance_cost":0,"other_costs":0}}"#,
            "",
            r#"{"type":"calculate","use_case":"accounts-payable-automation"}"#,
            r#"{"type":"presets"}"#,
            r#"{"type":"quit"}"#,
            r#"{"type":"presets"}"#,
        ]
        .join("\n");

        let replies = session_replies(&input);
        assert_eq!(replies.len(), 5, "one reply per request before quit");

        assert!(replies[0]["error"].is_string());
        assert_eq!(
            replies[1]["error"],
            "best multiplier 2.5 outside [1, 2]"
        );
        assert_eq!(replies[2]["error"], "Division by zero: total cost is zero");

        let ok = &replies[3];
        assert!(ok.get("error").is_none());
        assert_eq!(ok["use_case"], "accounts-payable-automation");
        assert_eq!(ok["label"], "Accounts Payable Automation");
        assert_eq!(ok["result"]["total_cost"], 74000.0);
        assert_eq!(ok["result"]["benefit_base"], 150000.0);

        assert_eq!(replies[4].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn session_ends_cleanly_at_eof() {
        let replies = session_replies(r#"{"type":"calculate","use_case":"forecasting-ai"}"#);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["result"]["total_cost"], 95000.0);
    }

    #[test]
    fn out_of_range_multiplier_is_rejected_before_calculation() {
        let args = calculate_args(&["roi-calc", "calculate", "--worst-multiplier", "0.3"]);
        let config = RoiConfig::resolve(&[args.flag_layer()]).unwrap();
        let err = calculate(&config).unwrap_err();
        assert_eq!(err.to_string(), "worst multiplier 0.3 outside [0.5, 1]");
    }

    #[test]
    fn non_finite_flags_are_rejected_by_the_parser() {
        for bad in ["NaN", "inf", "-inf"] {
            let parsed = Cli::try_parse_from(["roi-calc", "calculate", "--software-cost", bad]);
            assert!(parsed.is_err(), "{bad} should not parse");
        }
        let args = calculate_args(&["roi-calc", "calculate", "--software-cost", "1e3"]);
        assert_eq!(args.software_cost, Some(1000.0));
    }

    #[test]
    fn bare_report_flag_uses_default_file_name() {
        let args = calculate_args(&["roi-calc", "calculate", "--report"]);
        assert_eq!(args.report, Some(PathBuf::from(DEFAULT_REPORT_FILE)));

        let args = calculate_args(&["roi-calc", "calculate", "--report", "q3.txt"]);
        assert_eq!(args.report, Some(PathBuf::from("q3.txt")));

        let args = calculate_args(&["roi-calc", "calculate"]);
        assert_eq!(args.report, None);
    }
}
