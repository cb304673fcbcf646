use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_n::ai::opponent_for;
use connect_n::arena::{self, MatchStats};
use connect_n::config::{AppConfig, BoardConfig, GameMode};
use connect_n::game::Player;
use connect_n::ui::App;

/// Play Connect N in the terminal.
#[derive(Parser)]
#[command(name = "connect_n", about = "Connect N against a friend or the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board side length
    #[arg(long)]
    size: Option<usize>,

    /// Override pieces in a row needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Override game mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Seed for the computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Play computer against computer and print the tally (no TUI)
    #[arg(long)]
    headless: bool,

    /// Number of games to play in headless mode
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Computer that plays Red in headless mode
    #[arg(long, value_enum, default_value = "easy")]
    red: GameMode,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.size.is_some() || cli.connect.is_some() {
        let side = cli.size.unwrap_or(app_config.board.side_length());
        let connect = cli.connect.unwrap_or(app_config.board.connect_length());
        app_config.board = BoardConfig::new(side, connect).context("invalid board override")?;
    }
    if let Some(mode) = cli.mode {
        app_config.game.mode = mode;
    }
    if cli.seed.is_some() {
        app_config.ai.seed = cli.seed;
    }
    app_config.validate()?;

    if cli.headless {
        run_headless(&app_config, cli.red, cli.games)
    } else {
        run_tui(&app_config).context("terminal UI failed")
    }
}

/// The TUI owns stdout, so logs only ever go to a file.
fn init_logging(path: &Path, level: tracing::Level) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn run_headless(config: &AppConfig, red_mode: GameMode, games: usize) -> Result<()> {
    let seed = config.ai.seed;
    let Some(mut red) = opponent_for(red_mode, seed) else {
        bail!("--red must be 'easy' or 'hard'");
    };
    let Some(mut yellow) = opponent_for(config.game.mode, seed.map(|s| s.wrapping_add(1)))
    else {
        bail!("headless mode needs a computer opponent (mode 'easy' or 'hard')");
    };

    tracing::info!(
        games,
        red = red.name(),
        yellow = yellow.name(),
        side_length = config.board.side_length(),
        connect_length = config.board.connect_length(),
        "starting headless match"
    );

    let mut stats = MatchStats::new();
    for _ in 0..games {
        let summary = arena::play_game(config.board, red.as_mut(), yellow.as_mut())?;
        stats.record(&summary);
    }

    println!(
        "Connect {} on {}x{}: {} ({}) vs {} ({}), {} games",
        config.board.connect_length(),
        config.board.side_length(),
        config.board.side_length(),
        Player::Red.name(),
        red.name(),
        Player::Yellow.name(),
        yellow.name(),
        stats.games()
    );
    for player in [Player::Red, Player::Yellow] {
        println!(
            "  {:<6} wins: {:>5} ({:.1}%)",
            player.name(),
            stats.wins(player),
            stats.win_rate(player) * 100.0
        );
    }
    println!(
        "  Draws:       {:>5} ({:.1}%)",
        stats.draws(),
        stats.draw_rate() * 100.0
    );
    println!("  Average game length: {:.1} moves", stats.average_game_length());

    tracing::info!(
        red_wins = stats.wins(Player::Red),
        yellow_wins = stats.wins(Player::Yellow),
        draws = stats.draws(),
        "headless match finished"
    );
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore the terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
