use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

pub const FONT_ENV: &str = "WORD_CLOCK_FONT";
pub const THEME_ENV: &str = "WORD_CLOCK_THEME";
pub const CLOCK_MODE_ENV: &str = "WORD_CLOCK_CLOCK_MODE";

/// Colour theme. Only the exact name "Light" selects the light theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from(value.as_str())
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        if value == "Light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("Light"),
            Theme::Dark => f.write_str("Dark"),
        }
    }
}

/// How the analog face is drawn behind the words.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    #[default]
    None,
    Background,
    Solid,
}

impl ClockMode {
    pub fn next(self) -> Self {
        match self {
            ClockMode::None => ClockMode::Background,
            ClockMode::Background => ClockMode::Solid,
            ClockMode::Solid => ClockMode::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockMode::None => "none",
            ClockMode::Background => "background",
            ClockMode::Solid => "solid",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(ClockMode::None),
            "background" => Some(ClockMode::Background),
            "solid" => Some(ClockMode::Solid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub font: String,
    pub theme: Theme,
    pub clock_mode: ClockMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: "Monospace".into(),
            theme: Theme::Dark,
            clock_mode: ClockMode::None,
        }
    }
}

impl Settings {
    /// Apply overrides from a variable lookup (normally the process environment).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(font) = lookup(FONT_ENV).filter(|font| !font.trim().is_empty()) {
            self.font = font;
        }
        if let Some(theme) = lookup(THEME_ENV) {
            self.theme = Theme::from(theme.trim());
        }
        if let Some(mode) = lookup(CLOCK_MODE_ENV) {
            match ClockMode::parse(&mode) {
                Some(mode) => self.clock_mode = mode,
                None => warn!("Ignoring unknown clock mode {mode:?} from {CLOCK_MODE_ENV}"),
            }
        }
    }
}

/// In-memory settings. Loaded once at startup, changed at runtime, never saved.
pub struct SettingsStore {
    data: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            data: RwLock::new(settings),
        }
    }

    /// Load settings from an optional JSON file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => read_settings(path)?,
            None => Settings::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(Self::new(settings))
    }

    pub fn get(&self) -> Settings {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change settings in place and return the result.
    pub fn update(&self, change: impl FnOnce(&mut Settings)) -> Settings {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut guard);
        guard.clone()
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        warn!("Settings file {} not found, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    Ok(serde_json::from_str(&contents).unwrap_or_else(|err| {
        warn!(
            "Settings file {} is not valid JSON ({err}), using defaults",
            path.display()
        );
        Settings::default()
    }))
}
