//! StockDash TUI — six-panel terminal dashboard.
//!
//! Panels:
//! 1. Price — close or candles with moving averages
//! 2. Summary — average / max close and total volume
//! 3. Volume — per-day volume colored by sentiment
//! 4. Scatter — volume against close
//! 5. Heatmap — correlation of the numeric columns
//! 6. Sentiment — label counts

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockdash_core::{load_dataset, DashboardConfig};
use stockdash_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(name = "stockdash", about = "Interactive stock price dashboard")]
struct Args {
    /// TOML config file (defaults to ./stockdash.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file with Date, Open, High, Low, Close, Volume columns
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = DashboardConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_data_path(args.data);

    init_logging(&config)?;
    info!(data = %config.data_path.display(), seed = config.seed, "starting dashboard");

    let data = load_dataset(&config.data_path, config.seed)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    let mut app = AppState::new(Arc::new(data), config.title.clone(), config.chart_type);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(projections = app.projections, "dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive to resizes
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to a file so the alternate screen stays clean.
fn init_logging(config: &DashboardConfig) -> Result<()> {
    let path = config.log_file.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stockdash")
            .join("stockdash.log")
    });
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
