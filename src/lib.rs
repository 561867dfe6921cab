pub mod analog;
pub mod clock;
pub mod commands;
pub mod display;
pub mod narration;
pub mod scheduler;
pub mod settings;
pub mod stopwatch;

use std::{fs::File, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};
use tokio::sync::mpsc;

use clock::{ClockController, ClockFrame, LocalTimeSource, TimeSource};
use commands::{dispatch, Command, Flow};
use display::{terminal::TerminalSession, Display, TerminalDisplay};
use scheduler::Scheduler;
use settings::SettingsStore;
use stopwatch::StopwatchController;

const SETTINGS_ENV: &str = "WORD_CLOCK_SETTINGS";
const LOG_ENV: &str = "WORD_CLOCK_LOG";
const DEBUG_ENV: &str = "WORD_CLOCK_DEBUG";

const INPUT_POLL: Duration = Duration::from_millis(100);

pub struct AppState {
    pub(crate) settings: SettingsStore,
    pub(crate) stopwatch: StopwatchController,
    pub(crate) display: Arc<dyn Display>,
    pub(crate) scheduler: Scheduler,
}

fn debug_mode() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Logs go to a file so they never scribble over the full-screen display.
fn init_logging() -> Result<PathBuf> {
    let path = std::env::var_os(LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("word-clock.log"));
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = if debug_mode() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Reads RUST_LOG on top of the default level.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(path)
}

fn load_settings() -> Result<SettingsStore> {
    let path = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
    SettingsStore::load(path.as_deref())
}

/// Print the current clock frame as JSON and exit.
fn print_once() -> Result<()> {
    let frame = ClockFrame::compose(LocalTimeSource.now());
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

/// Forward key presses from a blocking reader thread until the receiver goes away.
fn spawn_input_reader(tx: mpsc::Sender<Command>) {
    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                warn!("Terminal input failed: {err}");
                break;
            }
        }
        match event::read() {
            Ok(Event::Key(key)) => {
                if let Some(command) = Command::from_key(key) {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!("Terminal input failed: {err}");
                break;
            }
        }
    });
}

async fn run_interactive() -> Result<()> {
    let settings = load_settings()?;
    let display: Arc<dyn Display> = Arc::new(TerminalDisplay::new(settings.get()));
    let scheduler = Scheduler::new();

    let state = AppState {
        settings,
        stopwatch: StopwatchController::new(display.clone(), scheduler.clone()),
        display: display.clone(),
        scheduler: scheduler.clone(),
    };

    let _session = TerminalSession::enter()?;

    let clock = Arc::new(ClockController::new(
        Arc::new(LocalTimeSource),
        display,
        scheduler.clone(),
    ));
    let clock_task = clock.spawn();
    state.stopwatch.publish().await;

    let (tx, mut rx) = mpsc::channel(16);
    spawn_input_reader(tx);

    while let Some(command) = rx.recv().await {
        if dispatch(&state, command).await? == Flow::Exit {
            break;
        }
    }

    info!("Shutting down");
    state.scheduler.shutdown();
    clock_task.stop().await?;
    Ok(())
}

pub fn run() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("once") {
        return print_once();
    }

    let log_path = init_logging()?;
    info!("Word clock starting up, logging to {}", log_path.display());

    // One thread: the clock, stopwatch and fades all cooperate on it.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    runtime.block_on(run_interactive())
}
