use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, Opponent, ThemeKind};
use connect_four::game::Side;
use connect_four::ui::App;

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    First,
    Second,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::First => Side::First,
            SideArg::Second => Side::Second,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Heuristic,
    Random,
}

impl From<OpponentArg> for Opponent {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Heuristic => Opponent::Heuristic,
            OpponentArg::Random => Opponent::Random,
        }
    }
}

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Play against the computer
    #[arg(long)]
    vs_computer: bool,

    /// Side the computer plays
    #[arg(long, value_enum)]
    ai_side: Option<SideArg>,

    /// Computer opponent to use
    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Logging first, so config warnings land in the log file too
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.vs_computer {
        config.game.vs_computer = true;
    }
    if let Some(side) = cli.ai_side {
        config.game.ai_side = side.into();
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent.into();
    }
    if cli.dark {
        config.ui.theme = ThemeKind::Dark;
    }
    if cli.log_file.is_none() {
        if let Some(path) = &config.ui.log_file {
            init_logging(path)?;
        }
    }

    tracing::info!(
        vs_computer = config.game.vs_computer,
        ai_side = %config.game.ai_side,
        "starting"
    );

    run(&config).context("terminal UI failed")
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
