use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glimmering::build_info;
use glimmering::character::save::SaveManager;
use glimmering::core::config::GameConfig;
use glimmering::core::constants::TICK_INTERVAL_MS;
use glimmering::core::game_state::{GameState, LogKind};
use glimmering::input::{handle_game_input, InputResult};
use glimmering::ui::draw_ui;

#[derive(Parser)]
#[command(name = "glimmering")]
#[command(about = "Glimmering Depths - a terminal dungeon crawler")]
#[command(disable_version_flag = true)]
struct Cli {
    /// World config (TOML) layered over the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save file location (defaults to the platform config dir)
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("cannot open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glimmering=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    // stdout belongs to the TUI, so diagnostics only go to a file
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig::load(cli.config.as_deref()).context("failed to load game config")?;
    let saves = match cli.save_path {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new().context("failed to locate save directory")?,
    };

    let mut state = GameState::new(config).context("invalid game config")?;
    state.start_new_game();
    if saves.save_exists() {
        state.add_log_entry("A saved game was found. Press [L] to load it.", LogKind::System);
    }
    info!(save = %saves.save_path().display(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &saves);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Goodbye!");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut GameState,
    saves: &SaveManager,
) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, state))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press
                    && handle_game_input(key_event, state, saves, &mut rng) == InputResult::Quit
                {
                    return Ok(());
                }
            }
        }

        // Game tick every 100ms
        let elapsed = last_tick.elapsed();
        if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
            state.tick(elapsed.as_millis() as u64, &mut rng);
            last_tick = Instant::now();
        }
    }
}
