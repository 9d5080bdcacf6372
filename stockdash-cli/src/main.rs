//! StockDash CLI — headless access to the dashboard views.
//!
//! Commands:
//! - `summary` — print the summary line for a date range
//! - `project` — print every view payload as JSON
//! - `export` — write the prepared rows of a date range as CSV
//! - `info` — dataset size, date bounds, sentiment totals

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stockdash_core::data::csv_loader::parse_date;
use stockdash_core::{
    load_dataset, project, write_rows_csv, ChartType, DashboardConfig, Dataset, ViewSelection,
};

#[derive(Parser)]
#[command(
    name = "stockdash-cli",
    about = "StockDash CLI — price summaries, view JSON and CSV export"
)]
struct Cli {
    /// TOML config file (defaults to ./stockdash.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV price file. Overrides `data_path` from the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Inclusive date range; either end defaults to the dataset bound.
#[derive(clap::Args)]
struct RangeArgs {
    /// Start date (YYYY-MM-DD). Defaults to the first row.
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to the last row.
    #[arg(long)]
    end: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary statistics line.
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Print all six view payloads as JSON.
    Project {
        #[command(flatten)]
        range: RangeArgs,

        /// Price chart type: line or candlestick. Defaults to the config value.
        #[arg(long)]
        chart_type: Option<ChartType>,

        /// Pretty-print the JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Write prepared rows (OHLCV, MAs, sentiment) as CSV.
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Output file. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show dataset size, date bounds and sentiment totals.
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DashboardConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_data_path(cli.data);

    let data = load_dataset(&config.data_path, config.seed)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!(rows = data.len(), path = %config.data_path.display(), "dataset ready");

    match cli.command {
        Commands::Summary { range } => {
            let selection = resolve(&data, &range, config.chart_type)?;
            println!("{}", project(&data, &selection).summary_text);
        }
        Commands::Project {
            range,
            chart_type,
            pretty,
        } => {
            let selection = resolve(&data, &range, chart_type.unwrap_or(config.chart_type))?;
            let bundle = project(&data, &selection);
            let json = if pretty {
                serde_json::to_string_pretty(&bundle)
            } else {
                serde_json::to_string(&bundle)
            }
            .context("failed to serialize view bundle")?;
            println!("{json}");
        }
        Commands::Export { range, output } => {
            let selection = resolve(&data, &range, config.chart_type)?;
            run_export(&data, &selection, output)?;
        }
        Commands::Info => print_info(&data),
    }

    Ok(())
}

/// Build a selection, filling missing ends from the dataset bounds.
fn resolve(data: &Dataset, range: &RangeArgs, chart_type: ChartType) -> Result<ViewSelection> {
    let (first, last) = data
        .date_bounds()
        .context("dataset has no rows")?;
    let start = parse_arg(range.start.as_deref(), "--start")?.unwrap_or(first);
    let end = parse_arg(range.end.as_deref(), "--end")?.unwrap_or(last);
    debug!(%start, %end, %chart_type, "resolved selection");
    Ok(ViewSelection::new(chart_type, start, end))
}

fn parse_arg(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            parse_date(s)
                .with_context(|| format!("invalid {flag} date '{s}' (expected YYYY-MM-DD)"))
        })
        .transpose()
}

fn run_export(data: &Dataset, selection: &ViewSelection, output: Option<PathBuf>) -> Result<()> {
    let rows = data.filter(selection.start, selection.end);
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_rows_csv(rows, file).context("failed to write CSV")?;
            eprintln!("Exported {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_rows_csv(rows, &mut lock).context("failed to write CSV")?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn print_info(data: &Dataset) {
    println!();
    println!("=== Dataset ===");
    println!("Rows:           {}", data.len());
    if let Some((first, last)) = data.date_bounds() {
        println!("Period:         {first} to {last}");
    }
    println!();
    println!("--- Sentiment ---");
    for (sentiment, count) in data.sentiment_totals() {
        println!("{:<15} {count}", format!("{sentiment}:"));
    }
    println!();
}
