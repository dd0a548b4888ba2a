//! Generic CLI for running algorithms.
//!
//! Usage:
//!   algo-bench                         # Run every algorithm on its sample input
//!   algo-bench --list                  # List available algorithms
//!   algo-bench merge-sort --input '[3,1,2]'
//!   algo-bench merge-sort --sizes 100,1000
//!   algo-bench --help                  # Show help

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use algo_workbench::harness::{execute, BudgetPolicy, HarnessConfig};
use algo_workbench::registry::{build_registry, AlgorithmRegistry, AlgorithmUnit, Category};
use algo_workbench::report::History;
use algo_workbench::tui;
use algo_workbench::utils::{export_csv, sweep, PinStrategy, SweepConfig};
use anyhow::{bail, Context, Result};
use serde_json::Value;

#[derive(Default)]
struct Args {
    show_list: bool,
    show_help: bool,
    category: Option<Category>,
    input: Option<String>,
    file: Option<String>,
    budget: Option<u64>,
    factor: Option<u64>,
    sizes: Option<Vec<usize>>,
    seed: Option<u64>,
    csv_path: Option<String>,
    json: bool,
    no_pin: bool,
    algorithm: Option<String>,
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .with_context(|| format!("{} expects a value", flag))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => parsed.show_list = true,
            "--help" | "-h" => parsed.show_help = true,
            "--json" => parsed.json = true,
            "--no-pin" => parsed.no_pin = true,
            flag @ ("--category" | "--input" | "--file" | "--budget" | "--factor" | "--sizes"
            | "--seed" | "--csv") => {
                i += 1;
                let value = value_of(args, i, flag)?;
                match flag {
                    "--category" => {
                        parsed.category = Some(
                            Category::parse(value)
                                .with_context(|| format!("unknown category '{}'", value))?,
                        )
                    }
                    "--input" => parsed.input = Some(value.to_string()),
                    "--file" => parsed.file = Some(value.to_string()),
                    "--budget" => parsed.budget = Some(value.parse().context("--budget")?),
                    "--factor" => parsed.factor = Some(value.parse().context("--factor")?),
                    "--seed" => parsed.seed = Some(value.parse().context("--seed")?),
                    "--csv" => parsed.csv_path = Some(value.to_string()),
                    "--sizes" => {
                        let sizes = value
                            .split(',')
                            .map(|s| s.trim().parse::<usize>())
                            .collect::<Result<Vec<_>, _>>()
                            .context("--sizes")?;
                        parsed.sizes = Some(sizes);
                    }
                    _ => bail!("unknown option: {}", flag),
                }
            }
            arg if !arg.starts_with('-') => {
                parsed.algorithm = Some(arg.to_string());
            }
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    Ok(parsed)
}

fn harness_config(args: &Args) -> HarnessConfig {
    let budget = match (args.budget, args.factor) {
        (Some(limit), _) => BudgetPolicy::Fixed(limit),
        (None, Some(factor)) => BudgetPolicy::Scaled(factor),
        (None, None) => BudgetPolicy::default(),
    };
    let pin_strategy = if args.no_pin {
        PinStrategy::None
    } else {
        PinStrategy::PerRun
    };
    HarnessConfig {
        budget,
        pin_strategy,
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn raw_input(args: &Args, unit: &dyn AlgorithmUnit) -> Result<Value> {
    if let Some(text) = &args.input {
        return serde_json::from_str(text).context("--input is not valid JSON");
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        return serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path));
    }
    Ok(unit.sample_input())
}

fn run_single(
    args: &Args,
    unit: &dyn AlgorithmUnit,
    config: &HarnessConfig,
    history: &mut History,
) -> Result<()> {
    let raw = raw_input(args, unit)?;
    let result = execute(unit, &raw, config);
    let report = history.record(&result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        tui::print_unit_info_box(unit);
        println!("  Input: {}", raw);
        tui::print_result(&result);
    }
    Ok(())
}

fn run_sweep(
    args: &Args,
    registry: &AlgorithmRegistry,
    unit: &dyn AlgorithmUnit,
    sizes: &[usize],
    config: &HarnessConfig,
    history: &mut History,
) -> Result<()> {
    let sweep_config = SweepConfig {
        sizes: sizes.to_vec(),
        seed: args.seed.unwrap_or_else(time_seed),
    };
    let points = sweep(registry, unit.id(), &sweep_config, config)?;
    let first = history.len();
    for point in &points {
        history.record(&point.result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&history.reports()[first..])?);
    } else {
        tui::print_unit_info_box(unit);
        println!("  Seed: {}", sweep_config.seed);
        tui::print_sweep_table(&points);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let argv: Vec<String> = env::args().collect();
    let args = parse_args(&argv)?;
    let registry = build_registry()?;

    if args.show_help {
        tui::print_help();
        return Ok(());
    }

    if args.show_list {
        tui::print_available_algorithms(&registry, args.category);
        return Ok(());
    }

    let config = harness_config(&args);

    let units: Vec<&dyn AlgorithmUnit> = match &args.algorithm {
        Some(id) => match registry.lookup(id) {
            Ok(unit) => vec![unit],
            Err(e) => {
                eprintln!("Available: {:?}", registry.list_ids());
                return Err(e.into());
            }
        },
        None => registry
            .all()
            .iter()
            .map(|u| u.as_ref())
            .filter(|u| args.category.map_or(true, |c| c == u.category()))
            .collect(),
    };

    if !args.json {
        tui::print_header();
    }

    let mut history = History::default();
    for unit in units {
        match &args.sizes {
            Some(sizes) => run_sweep(&args, &registry, unit, sizes, &config, &mut history)?,
            None => run_single(&args, unit, &config, &mut history)?,
        }
    }

    if !args.json && history.len() > 1 {
        tui::print_history(&history);
    }

    if let Some(path) = &args.csv_path {
        export_csv(path, history.reports()).with_context(|| format!("writing {}", path))?;
        if !args.json {
            println!("  Report exported to: {}", path);
        }
    }

    Ok(())
}
