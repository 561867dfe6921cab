use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};

use crate::AppState;

/// Everything a user can ask the clock to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleStopwatch,
    StartStopwatch,
    PauseStopwatch,
    ResetStopwatch,
    CycleTheme,
    CycleClockMode,
    Quit,
}

/// Whether the input loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::ToggleStopwatch => "toggle",
            Command::StartStopwatch => "start",
            Command::PauseStopwatch => "pause",
            Command::ResetStopwatch => "reset",
            Command::CycleTheme => "theme",
            Command::CycleClockMode => "mode",
            Command::Quit => "quit",
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<Self> {
        // Only presses; releases and repeats arrive on some platforms.
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.code == KeyCode::Char('c')).then_some(Command::Quit);
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::ToggleStopwatch),
            KeyCode::Char('s') => Some(Command::StartStopwatch),
            KeyCode::Char('p') => Some(Command::PauseStopwatch),
            KeyCode::Char('r') => Some(Command::ResetStopwatch),
            KeyCode::Char('t') => Some(Command::CycleTheme),
            KeyCode::Char('m') => Some(Command::CycleClockMode),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(Command::ToggleStopwatch),
            "start" => Ok(Command::StartStopwatch),
            "pause" => Ok(Command::PauseStopwatch),
            "reset" => Ok(Command::ResetStopwatch),
            "theme" => Ok(Command::CycleTheme),
            "mode" => Ok(Command::CycleClockMode),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(anyhow!("unknown command {other:?}")),
        }
    }
}

/// Apply a command. Rejected stopwatch transitions are logged, not returned.
pub async fn dispatch(state: &AppState, command: Command) -> Result<Flow> {
    let outcome = match command {
        Command::ToggleStopwatch => state.stopwatch.toggle().await.map(drop),
        Command::StartStopwatch => state.stopwatch.start().await.map(drop),
        Command::PauseStopwatch => state.stopwatch.pause().await.map(drop),
        Command::ResetStopwatch => state.stopwatch.reset().await.map(drop),
        Command::CycleTheme => {
            let settings = state
                .settings
                .update(|settings| settings.theme = settings.theme.toggled());
            info!("Theme switched to {}", settings.theme);
            state.display.apply_settings(&settings);
            Ok(())
        }
        Command::CycleClockMode => {
            let settings = state
                .settings
                .update(|settings| settings.clock_mode = settings.clock_mode.next());
            info!("Clock mode switched to {}", settings.clock_mode.as_str());
            state.display.apply_settings(&settings);
            Ok(())
        }
        Command::Quit => return Ok(Flow::Exit),
    };

    if let Err(err) = outcome {
        warn!("Ignoring {command}: {err}");
    }
    Ok(Flow::Continue)
}
