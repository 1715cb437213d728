// Command-line front-end for the slope lab.
// For the interactive HTTP API run:
//   cargo run --bin studio
use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use log::info;
use serde::Serialize;
use serde_json::json;

use slope_lab::{
    best_fit_slope, compute_loss_curve, Dataset, LabConfig, LossCurve, Result, Snapshot,
};

#[derive(Debug, Parser)]
#[command(
    name = "slope-lab",
    about = "Fitted line and MSE loss curve for a single-slope linear regression",
    version,
    disable_help_subcommand = true
)]
struct Cli {
    /// JSON config file; classroom defaults are used when omitted
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, global = true)]
    config: Option<String>,

    /// Override the dataset seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the generated dataset
    Dataset,

    /// Print predictions, MSE and loss curve for one slope
    Snapshot {
        /// Slope to evaluate; defaults to the configured initial slope
        #[arg(long, allow_negative_numbers = true)]
        slope: Option<f64>,

        /// Pin an out-of-range slope to the nearest bound instead of failing
        #[arg(long)]
        clamp: bool,
    },

    /// Print the loss curve with its sampled minimum and the exact best slope
    Curve,

    /// Write the default config to PATH
    InitConfig {
        #[arg(value_hint = ValueHint::FilePath)]
        path: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::InitConfig { path } => {
            LabConfig::default().save_json(path)?;
            info!("wrote default config to {path}");
            writeln!(out, "Wrote default config to {path}")?;
        }
        Command::Dataset => {
            let config = load_config(cli)?;
            let dataset = config.dataset()?;
            match cli.format {
                Format::Json => write_json(out, &dataset)?,
                Format::Table => write_dataset_table(out, &dataset)?,
            }
        }
        Command::Snapshot { slope, clamp } => {
            let config = load_config(cli)?;
            let requested = slope.unwrap_or(config.initial_slope);
            let slope = if *clamp && !requested.is_nan() {
                config.slopes.clamp(requested)
            } else {
                config.slopes.validate(requested)?
            };
            let dataset = config.dataset()?;
            let snapshot = Snapshot::compute(&dataset, slope, &config.grid()?)?;
            match cli.format {
                Format::Json => write_json(out, &snapshot)?,
                Format::Table => write_snapshot_table(out, &dataset, &snapshot)?,
            }
        }
        Command::Curve => {
            let config = load_config(cli)?;
            let dataset = config.dataset()?;
            let grid = config.grid()?;
            let curve = compute_loss_curve(dataset.x(), dataset.y(), grid.slopes())?;
            // All-zero x has a flat curve but no closed-form slope.
            let exact = best_fit_slope(dataset.x(), dataset.y()).ok();
            match cli.format {
                Format::Json => write_json(out, &json!({
                    "curve": curve,
                    "minimum": curve.minimum(),
                    "best_fit_slope": exact,
                }))?,
                Format::Table => write_curve_table(out, &curve, exact)?,
            }
        }
    }
    Ok(())
}

/// Reads the config file if one was given, then applies command-line
/// overrides on top.
fn load_config(cli: &Cli) -> Result<LabConfig> {
    let mut config = match &cli.config {
        Some(path) => LabConfig::load_json(path)?,
        None => LabConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.dataset.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_dataset_table<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "{:>10} {:>12}", "x", "y")?;
    for (x, y) in dataset.points() {
        writeln!(out, "{:>10.4} {:>12.4}", x, y)?;
    }
    Ok(())
}

fn write_snapshot_table<W: Write>(out: &mut W, dataset: &Dataset, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "slope = {:.4}", snapshot.slope)?;
    writeln!(out, "{:>10} {:>12} {:>12}", "x", "y", "predicted")?;
    for ((x, y), p) in dataset.points().zip(snapshot.predictions.iter()) {
        writeln!(out, "{:>10.4} {:>12.4} {:>12.4}", x, y, p)?;
    }
    writeln!(out, "mse   = {:.6}", snapshot.mse)
}

fn write_curve_table<W: Write>(out: &mut W, curve: &LossCurve, exact: Option<f64>) -> io::Result<()> {
    writeln!(out, "{:>10} {:>14}", "slope", "mse")?;
    for p in curve.points() {
        writeln!(out, "{:>10.4} {:>14.6}", p.slope, p.mse)?;
    }
    if let Some(best) = curve.minimum() {
        writeln!(out, "grid minimum: slope = {:.4}, mse = {:.6}", best.slope, best.mse)?;
    }
    match exact {
        Some(slope) => writeln!(out, "best-fit slope: {:.6}", slope),
        None => writeln!(out, "best-fit slope: n/a"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use slope_lab::LabError;

    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("slope-lab").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    fn run_json(args: &[&str]) -> Value {
        serde_json::from_str(&run_args(args).unwrap()).unwrap()
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("slope-lab-cli-{}-{name}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn snapshot_defaults_to_initial_slope() {
        let v = run_json(&["snapshot"]);
        assert_eq!(v["slope"], 1.0);
        assert_eq!(v["predictions"].as_array().unwrap().len(), 10);
        assert_eq!(v["curve"].as_array().unwrap().len(), 100);
    }

    #[test]
    fn snapshot_rejects_out_of_range_slope() {
        let err = run_args(&["snapshot", "--slope", "5"]).unwrap_err();
        assert!(matches!(err, LabError::SlopeOutOfRange { .. }));
    }

    #[test]
    fn snapshot_clamp_pins_to_bound() {
        let v = run_json(&["snapshot", "--slope", "-7", "--clamp"]);
        assert_eq!(v["slope"], -2.0);
    }

    #[test]
    fn seed_override_changes_dataset() {
        let default = run_json(&["dataset"]);
        let reseeded = run_json(&["--seed", "7", "dataset"]);
        assert_eq!(default["x"], reseeded["x"]);
        assert_ne!(default["y"], reseeded["y"]);
    }

    #[test]
    fn table_format_prints_rows() {
        let text = run_args(&["--format", "table", "snapshot", "--slope", "2"]).unwrap();
        assert!(text.starts_with("slope = 2.0000"));
        assert!(text.contains("predicted"));
        assert!(text.trim_end().lines().last().unwrap().starts_with("mse"));
        // header + slope line + 10 rows + mse line
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn init_config_writes_loadable_defaults() {
        let path = temp_path("init.json");
        run_args(&["init-config", &path]).unwrap();
        let loaded = LabConfig::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, LabConfig::default());
    }

    #[test]
    fn curve_survives_all_zero_x() {
        let path = temp_path("zero.json");
        std::fs::write(&path, r#"{"dataset": {"x_min": 0.0, "x_max": 0.0}}"#).unwrap();

        let v = run_json(&["--config", &path, "curve"]);
        let text = run_args(&["--config", &path, "--format", "table", "curve"]).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(v["curve"].as_array().unwrap().len(), 100);
        assert!(v["minimum"].is_object());
        assert!(v["best_fit_slope"].is_null());
        assert!(text.contains("best-fit slope: n/a"));
    }

    #[test]
    fn curve_reports_exact_slope_for_default_data() {
        let v = run_json(&["curve"]);
        let exact = v["best_fit_slope"].as_f64().unwrap();
        let grid_best = v["minimum"]["slope"].as_f64().unwrap();
        assert!((exact - grid_best).abs() <= 6.0 / 99.0);
    }
}
