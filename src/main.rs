use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use menuboard::app::{handle_key, poll_key, App};
use menuboard::catalog;
use menuboard::config;
use menuboard::logging;
use menuboard::store::{Course, MenuStore};
use menuboard::terminal::TerminalSession;
use menuboard::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal menu board: add, browse, filter and remove dishes by course
#[derive(Parser, Debug)]
#[command(name = "menuboard", version, about)]
struct Args {
    /// Configuration file (default: <config dir>/menuboard/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write diagnostic logs to a file
    #[arg(short, long)]
    debug: bool,

    /// Log file used with --debug (default: <temp dir>/menuboard-debug.log)
    #[arg(long, value_name = "FILE", requires = "debug")]
    log_file: Option<PathBuf>,

    /// Start with every catalog dish already on the menu
    #[arg(long)]
    seed: bool,

    /// Course preselected on the Create form, e.g. "desserts" or "Main Courses"
    #[arg(long, value_name = "COURSE")]
    course: Option<Course>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(args.debug, &log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let mut config = match args.config {
        Some(ref path) => config::load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => config::load_config().with_context(|| {
            format!(
                "failed to load config from {}",
                config::get_config_path().display()
            )
        })?,
    };
    if let Some(course) = args.course {
        config.form.default_course = course;
    }

    let mut store = MenuStore::new();
    if args.seed {
        let added = catalog::seed(&mut store);
        info!(added, "seeded menu from catalog");
    }
    let mut app = App::with_store(config, store);

    let mut session = TerminalSession::enter().context("failed to set up terminal")?;
    let result = run(session.terminal_mut(), &mut app);
    let restored = session.restore();

    info!(items = app.store().total_items(), "session ended");
    result.context("menuboard event loop failed")?;
    restored.context("failed to restore terminal")
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    info!("event loop started");

    while !app.should_quit {
        terminal.draw(|f| ui::render(f, app))?;

        if let Some(key) = poll_key(POLL_INTERVAL)? {
            handle_key(app, key);
        }

        app.tick(Instant::now());
    }

    Ok(())
}
