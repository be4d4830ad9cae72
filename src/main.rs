mod app;
mod input;
mod ui;

use app::App;
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::{GameConfig, LOG_FILE};
use flappy::game::{Collaborators, Difficulty, Session};
use flappy::interfaces::{FileHighScoreStore, QueuedInput, TerminalBell};
use flappy::simulator::{run_simulation, Policy, SimConfig};
use flappy::utils::{build_info, logging, persistence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "flappy")]
#[command(about = "Flappy Bird in the terminal", disable_version_flag = true)]
struct Cli {
    /// Skip the menus and start at this difficulty (easy, medium, hard)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
    /// Seed the pipe generator for a reproducible course
    #[arg(long)]
    seed: Option<u64>,
    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run headless sessions and report score statistics
    Simulate {
        #[arg(short = 'n', long, default_value_t = 100)]
        runs: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = Policy::Autopilot)]
        policy: Policy,
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    if let Some(Commands::Simulate {
        runs,
        seed,
        difficulty,
        policy,
        max_ticks,
        json,
    }) = cli.command
    {
        logging::init_stderr_logging()?;
        let config = SimConfig {
            num_runs: runs,
            seed,
            difficulty,
            policy,
            max_ticks_per_run: max_ticks,
            ..Default::default()
        };
        let report = run_simulation(&config, &GameConfig::load()?)?;
        if json {
            println!("{}", report.to_json());
        } else {
            println!("{}", report.to_text());
        }
        return Ok(());
    }

    logging::init_file_logging(&persistence::save_path(LOG_FILE)?)?;
    tracing::info!(version = %build_info::version_line(), "starting");

    let config = GameConfig::load()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let input = QueuedInput::new();
    let session = Session::new(
        config.clone(),
        cli.difficulty.unwrap_or(Difficulty::Easy),
        rng,
        Collaborators::new(
            input.clone(),
            TerminalBell::new(config.bell),
            FileHighScoreStore::in_data_dir()?,
        ),
    )?;
    let mut app = App::new(session, input);
    if let Some(difficulty) = cli.difficulty {
        app = app.with_difficulty(difficulty)?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("terminal loop failed: {}", e);
    }
    tracing::info!("exiting");
    result
}

/// Draw, poll input until the next tick deadline, then tick.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &GameConfig,
) -> io::Result<()> {
    let tick_interval = config.tick_interval();
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
