//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - loads (or generates) curves
//! - runs the chart pipeline
//! - prints reports/plots and writes optional exports

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{ChartArgs, Command, DemoArgs, SpreadArgs, ViewArgs};
use crate::domain::{ChartConfig, NamedCurve, TenorLabels};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cspread` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Chart(args) => handle_chart(args),
        Command::Spread(args) => handle_spread(args),
        Command::Demo(args) => handle_demo(args),
    }
}

/// Install the stderr subscriber; stdout stays reserved for reports/JSON.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "curve_spread=debug"
    } else {
        "curve_spread=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_chart(args: ChartArgs) -> Result<(), AppError> {
    let set = crate::io::curve::read_curve_set(&args.input, args.unit)?;
    info!(path = %args.input.display(), curves = set.curves.len(), "loaded curve set");
    present(set.curves, set.labels, &args.view)
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let curves = crate::data::generate_demo_curves(args.seed)?;
    info!(seed = args.seed, curves = curves.len(), "generated demo curves");
    present(curves, TenorLabels::default(), &args.view)
}

fn handle_spread(args: SpreadArgs) -> Result<(), AppError> {
    let set = crate::io::curve::read_curve_set(&args.input, args.unit)?;
    let a = find_curve(&set.curves, &args.a)?;
    let b = find_curve(&set.curves, &args.b)?;

    let calc = crate::engine::compute_spread(&a.points, &b.points);
    if !calc.overlap_valid {
        warn!(a = %a.key, b = %b.key, "curves do not overlap");
    }

    let label = format!("{} - {}", a.label, b.label);
    print!("{}", crate::report::format_spread_calc(&label, &calc, &set.labels));
    Ok(())
}

fn find_curve<'a>(curves: &'a [NamedCurve], key: &str) -> Result<&'a NamedCurve, AppError> {
    curves
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| AppError::new(2, format!("Unknown curve key '{key}'.")))
}

/// Run the pipeline and emit the configured outputs.
fn present(curves: Vec<NamedCurve>, labels: TenorLabels, view: &ViewArgs) -> Result<(), AppError> {
    let config = chart_config(labels, view);
    let run = pipeline::run_chart(curves, &config);

    if view.json {
        println!("{}", crate::io::chart::chart_json(&run, &config.labels)?);
    } else {
        print!("{}", crate::report::format_chart_report(&run, &config.labels));
        if view.plot {
            println!();
            print!(
                "{}",
                crate::plot::render_ascii_chart(&run, &config.labels, view.width, view.height)
            );
        }
    }

    if let Some(path) = &view.export_json {
        crate::io::chart::write_chart_json(path, &run, &config.labels)?;
        info!(path = %path.display(), "wrote chart JSON");
    }

    Ok(())
}

pub fn chart_config(labels: TenorLabels, view: &ViewArgs) -> ChartConfig {
    ChartConfig {
        labels,
        show: view.show.clone(),
        hide: view.hide.clone(),
    }
}

/// Flags accepted before the subcommand on every command.
const GLOBAL_FLAGS: [&str; 2] = ["-v", "--verbose"];

/// Rewrite argv so `cspread` defaults to `cspread demo`.
///
/// Leading global flags are skipped before deciding. Rules:
/// - `cspread`                      -> `cspread demo`
/// - `cspread -v`                   -> `cspread -v demo`
/// - `cspread -i FILE ...`          -> `cspread chart -i FILE ...`
/// - `cspread --plot ...`           -> `cspread demo --plot ...`
/// - `cspread -v spread ...`        -> unchanged
/// - `cspread --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let first = argv
        .iter()
        .skip(1)
        .position(|a| !GLOBAL_FLAGS.contains(&a.as_str()))
        .map(|i| i + 1);
    let Some(pos) = first else {
        argv.push("demo".to_string());
        return argv;
    };
    let arg = argv[pos].as_str();

    let is_top_level_help_or_version = matches!(arg, "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg, "chart" | "spread" | "demo");
    if is_subcommand {
        return argv;
    }

    // A leading flag means "default command flags"; an input file selects `chart`.
    if arg.starts_with('-') {
        let has_input = argv[pos..]
            .iter()
            .any(|a| a == "-i" || a == "--input" || a.starts_with("--input="));
        let command = if has_input { "chart" } else { "demo" };
        argv.insert(pos, command.to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_demo() {
        assert_eq!(rewrite_args(argv(&["cspread"])), argv(&["cspread", "demo"]));
    }

    #[test]
    fn leading_flags_pick_default_command() {
        assert_eq!(
            rewrite_args(argv(&["cspread", "--plot"])),
            argv(&["cspread", "demo", "--plot"])
        );
        assert_eq!(
            rewrite_args(argv(&["cspread", "--hide", "b", "-i", "x.json"])),
            argv(&["cspread", "chart", "--hide", "b", "-i", "x.json"])
        );
        assert_eq!(
            rewrite_args(argv(&["cspread", "--input=x.json"])),
            argv(&["cspread", "chart", "--input=x.json"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for args in [
            argv(&["cspread", "--help"]),
            argv(&["cspread", "-V"]),
            argv(&["cspread", "spread", "-i", "x.json", "-a", "a", "-b", "b"]),
        ] {
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }

    #[test]
    fn global_flag_before_subcommand_is_kept() {
        let spread = argv(&["cspread", "-v", "spread", "-i", "x.json", "-a", "a", "-b", "b"]);
        assert_eq!(rewrite_args(spread.clone()), spread);
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(spread)).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Spread(_)));

        let chart = argv(&["cspread", "--verbose", "chart", "-i", "x.json"]);
        assert_eq!(rewrite_args(chart.clone()), chart);
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(chart)).unwrap();
        assert!(matches!(cli.command, Command::Chart(_)));
    }

    #[test]
    fn global_flag_then_default_command() {
        assert_eq!(rewrite_args(argv(&["cspread", "-v"])), argv(&["cspread", "-v", "demo"]));
        assert_eq!(
            rewrite_args(argv(&["cspread", "-v", "--plot"])),
            argv(&["cspread", "-v", "demo", "--plot"])
        );
        assert_eq!(
            rewrite_args(argv(&["cspread", "-v", "-i", "x.json"])),
            argv(&["cspread", "-v", "chart", "-i", "x.json"])
        );

        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&["cspread", "-v", "--plot"]))).unwrap();
        assert!(cli.verbose);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert!(args.view.plot);
    }

    #[test]
    fn config_carries_toggles() {
        let cli = crate::cli::Cli::parse_from(["cspread", "demo", "--show", "corp", "--hide", "swap"]);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        let config = chart_config(TenorLabels::default(), &args.view);
        assert_eq!(config.show, vec!["corp".to_string()]);
        assert_eq!(config.hide, vec!["swap".to_string()]);

        let curves = crate::data::generate_demo_curves(args.seed).unwrap();
        let run = pipeline::run_chart(curves, &config);
        assert_eq!(run.visible_keys, vec!["govt".to_string(), "corp".to_string()]);
        assert!(run.spread.result().is_some());
    }
}
