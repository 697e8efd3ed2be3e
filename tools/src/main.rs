//! wfm-runner: headless runner around the wfm-core calculator.
//!
//! One-shot mode evaluates a plan file and prints a text summary.
//! IPC mode speaks JSON-lines over stdin/stdout so an external UI can
//! drive the calculator interactively: one request per line in, one
//! response per line out.
//!
//! Usage:
//!   wfm-runner --plan data/capacity_plan.json
//!   wfm-runner --plan data/capacity_plan.json --year 2026 --start-week 20 --weeks 6
//!   wfm-runner --ipc-mode

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use wfm_core::{
    config::CapacityPlan,
    report::{self, HourChartRow, MetricValue, WeeklyRequirement},
    result::{self, StaffingSnapshot},
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    /// Return the current plan's evaluation.
    GetResult,
    /// Replace the plan, re-evaluate, and return the new state.
    SetPlan { plan: CapacityPlan },
    Quit,
}

/// Everything a dashboard needs for one render, in one message.
#[derive(serde::Serialize)]
struct DashboardState {
    snapshot: StaffingSnapshot,
    weekly: Vec<WeeklyRequirement>,
    metrics: Vec<MetricValue>,
    chart: Vec<HourChartRow>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let plan_path = arg_value(&args, "--plan").map(str::to_string);
    let year: Option<i32> = arg_value(&args, "--year").and_then(|v| v.parse().ok());
    let start_week: Option<u32> = arg_value(&args, "--start-week").and_then(|v| v.parse().ok());
    let num_weeks: Option<u32> = arg_value(&args, "--weeks").and_then(|v| v.parse().ok());
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let mut plan = match &plan_path {
        Some(path) => CapacityPlan::load(path)?,
        None => {
            log::info!("no --plan given, using built-in defaults");
            CapacityPlan::default_test()
        }
    };
    if let Some(week) = start_week {
        plan.week_window.start_week = week;
    }
    if let Some(count) = num_weeks {
        plan.week_window.num_weeks = count;
    }
    plan.validate()?;

    if ipc_mode {
        run_ipc_loop(plan)
    } else {
        println!("wfm-runner: weekly capacity calculator");
        println!(
            "  plan: {}",
            plan_path.as_deref().unwrap_or("(built-in defaults)")
        );
        let snapshot = result::compute(&plan)?;
        print_summary(&plan, &snapshot, year);
        Ok(())
    }
}

/// Value following `flag` in the argument list, if any.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
}

fn run_ipc_loop(mut plan: CapacityPlan) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    let mut snapshot = result::compute(&plan)?;
    log::info!("IPC mode ready");

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF, UI went away
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                let err = serde_json::json!({ "error": format!("bad request: {e}") });
                writeln!(stdout, "{err}")?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetResult => {
                let state = build_state(&plan, &snapshot);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            // A rejected plan leaves the previous one in force.
            IpcRequest::SetPlan { plan: new_plan } => match result::compute(&new_plan) {
                Ok(new_snapshot) => {
                    plan = new_plan;
                    snapshot = new_snapshot;
                    let state = build_state(&plan, &snapshot);
                    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                }
                Err(e) => {
                    let err = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{err}")?;
                }
            },
        }
        stdout.flush()?;
    }

    Ok(())
}

fn build_state(plan: &CapacityPlan, snapshot: &StaffingSnapshot) -> DashboardState {
    DashboardState {
        weekly: report::weekly_requirement(snapshot, &plan.week_window),
        metrics: report::headline_metrics(snapshot),
        chart: report::hour_chart_rows(snapshot),
        snapshot: snapshot.clone(),
    }
}

fn print_summary(plan: &CapacityPlan, snapshot: &StaffingSnapshot, year: Option<i32>) {
    println!();
    println!("=== HEADLINE METRICS ===");
    for metric in report::headline_metrics(snapshot) {
        let rendered = match (metric.name.as_str(), metric.value) {
            ("occupancy", Some(value)) => format!("{:.2}%", value * 100.0),
            (_, value) => fmt_value(value),
        };
        println!("  {:<24} {rendered}", metric.name);
    }

    println!();
    println!("=== WEEKLY REQUIREMENT (same figure each week) ===");
    for row in report::weekly_requirement(snapshot, &plan.week_window) {
        println!(
            "  {:<18} {} agents",
            week_label(row.week, year),
            fmt_value(row.required_agents)
        );
    }

    println!();
    println!("=== HOURS PER AGENT ===");
    for row in report::hour_chart_rows(snapshot) {
        println!(
            "  {:<12} {:<12} {:>8.1} h",
            row.class_label,
            row.bucket.name(),
            row.hours
        );
    }

    if let Some(inverse) = &snapshot.inverse {
        println!();
        println!("=== INVERSE CONVERSION ===");
        println!(
            "  {:.1} {} hours need {} agents",
            inverse.target_hours,
            inverse.category.name(),
            fmt_value(inverse.agents)
        );
    }
}

/// Undefined metrics render as "n/a", never as a number.
fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".into(),
    }
}

/// "W20 (2026-05-11)" when a year is given, plain "W20" otherwise.
/// Weeks past the ISO year's end roll into the next year by plain date
/// arithmetic.
fn week_label(week: u32, year: Option<i32>) -> String {
    match year.and_then(|y| monday_of_week(y, week)) {
        Some(monday) => format!("W{week} ({monday})"),
        None => format!("W{week}"),
    }
}

fn monday_of_week(year: i32, week: u32) -> Option<chrono::NaiveDate> {
    use chrono::{Days, NaiveDate, Weekday};
    let first_monday = NaiveDate::from_isoywd_opt(year, 1, Weekday::Mon)?;
    first_monday.checked_add_days(Days::new(7 * u64::from(week.saturating_sub(1))))
}
