//! Full-screen terminal rendering of the clock and stopwatch.

use std::{
    io::{self, Stdout, Write},
    sync::{Mutex, PoisonError},
};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};

use crate::{
    analog::{Dial, Hands},
    clock::ClockReading,
    settings::{Settings, Theme},
    stopwatch::{StopwatchView, PRESS_START},
};

use super::{Display, Label};

/// Rows used by labels, bar, stopwatch and help line.
const TEXT_ROWS: u16 = 10;
const BAR_WIDTH: usize = 40;

struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    accent: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGrey,
                accent: Color::DarkBlue,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Grey,
                accent: Color::Cyan,
            },
        }
    }
}

#[derive(Default)]
struct LabelCell {
    text: String,
    faded: bool,
}

struct Screen {
    labels: [LabelCell; 3],
    seconds_percent: f64,
    stopwatch: StopwatchView,
    reading: Option<ClockReading>,
    settings: Settings,
}

impl Screen {
    fn cell(&mut self, label: Label) -> &mut LabelCell {
        let index = match label {
            Label::Time => 0,
            Label::Date => 1,
            Label::Week => 2,
        };
        &mut self.labels[index]
    }
}

/// Draws onto stdout using crossterm. Every published change redraws the screen.
pub struct TerminalDisplay {
    screen: Mutex<Screen>,
}

impl TerminalDisplay {
    pub fn new(settings: Settings) -> Self {
        info!(
            "Terminal display using theme {} and clock mode {} (font preference {:?} is up to the terminal)",
            settings.theme,
            settings.clock_mode.as_str(),
            settings.font
        );
        Self {
            screen: Mutex::new(Screen {
                labels: Default::default(),
                seconds_percent: 0.0,
                stopwatch: StopwatchView {
                    text: PRESS_START.to_string(),
                    running: false,
                    can_reset: false,
                },
                reading: None,
                settings,
            }),
        }
    }

    fn with_screen(&self, change: impl FnOnce(&mut Screen)) {
        let mut screen = self.screen.lock().unwrap_or_else(PoisonError::into_inner);
        change(&mut screen);
        if let Err(err) = draw(&mut io::stdout(), &screen) {
            error!("Failed to draw clock: {err}");
        }
    }
}

impl Display for TerminalDisplay {
    fn fade_out(&self, label: Label) {
        self.with_screen(|screen| screen.cell(label).faded = true);
    }

    fn show_label(&self, label: Label, text: &str) {
        self.with_screen(|screen| {
            let cell = screen.cell(label);
            cell.text = text.to_string();
            cell.faded = false;
        });
    }

    fn show_seconds(&self, percent: f64) {
        self.with_screen(|screen| screen.seconds_percent = percent.clamp(0.0, 100.0));
    }

    fn show_stopwatch(&self, view: &StopwatchView) {
        self.with_screen(|screen| screen.stopwatch = view.clone());
    }

    fn show_reading(&self, reading: ClockReading) {
        self.with_screen(|screen| screen.reading = Some(reading));
    }

    fn apply_settings(&self, settings: &Settings) {
        self.with_screen(|screen| screen.settings = settings.clone());
    }
}

fn seconds_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn stopwatch_line(view: &StopwatchView) -> String {
    format!(
        "{}    [Space] {}    [R] Reset",
        view.text,
        view.toggle_caption()
    )
}

fn centred_column(cols: u16, text: &str) -> u16 {
    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    cols.saturating_sub(width) / 2
}

fn draw(out: &mut Stdout, screen: &Screen) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let palette = Palette::for_theme(screen.settings.theme);

    queue!(
        out,
        SetBackgroundColor(palette.background),
        SetForegroundColor(palette.text),
        Clear(ClearType::All)
    )?;

    let mut row: u16 = 1;

    if let (Some(dial), Some(reading)) = (
        Dial::fit((cols, rows), TEXT_ROWS, screen.settings.clock_mode),
        screen.reading,
    ) {
        let colour = if dial.dimmed { palette.muted } else { palette.accent };
        queue!(out, SetForegroundColor(colour))?;
        if dial.dimmed {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        for line in dial.rasterize(Hands::at(reading)) {
            queue!(out, MoveTo(centred_column(cols, &line), row), Print(&line))?;
            row = row.saturating_add(1);
        }
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(palette.background)
        )?;
        row = row.saturating_add(1);
    }

    for (index, cell) in screen.labels.iter().enumerate() {
        let colour = if cell.faded { palette.muted } else { palette.text };
        queue!(out, SetForegroundColor(colour))?;
        if cell.faded {
            queue!(out, SetAttribute(Attribute::Dim))?;
        } else if index == 0 {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            MoveTo(centred_column(cols, &cell.text), row),
            Print(&cell.text),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(palette.background)
        )?;
        row = row.saturating_add(1);
    }

    row = row.saturating_add(1);
    let bar = seconds_bar(screen.seconds_percent);
    queue!(
        out,
        SetForegroundColor(palette.accent),
        MoveTo(centred_column(cols, &bar), row),
        Print(&bar)
    )?;

    row = row.saturating_add(2);
    let stopwatch = stopwatch_line(&screen.stopwatch);
    let reset_colour = if screen.stopwatch.can_reset {
        palette.text
    } else {
        palette.muted
    };
    queue!(
        out,
        SetForegroundColor(reset_colour),
        MoveTo(centred_column(cols, &stopwatch), row),
        Print(&stopwatch)
    )?;

    let help = "[T] Theme    [M] Clock face    [Q] Quit";
    queue!(
        out,
        SetForegroundColor(palette.muted),
        MoveTo(centred_column(cols, help), rows.saturating_sub(1)),
        Print(help),
        ResetColor
    )?;

    out.flush()
}

/// Raw mode plus alternate screen for the lifetime of the value.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_bar_fills_proportionally() {
        assert_eq!(seconds_bar(0.0), format!("[{}]", " ".repeat(BAR_WIDTH)));
        assert_eq!(seconds_bar(100.0), format!("[{}]", "=".repeat(BAR_WIDTH)));
        assert_eq!(seconds_bar(50.0).matches('=').count(), BAR_WIDTH / 2);
        assert_eq!(seconds_bar(250.0).matches('=').count(), BAR_WIDTH);
    }

    #[test]
    fn stopwatch_line_shows_button_captions() {
        let view = StopwatchView {
            text: "00:01:02".into(),
            running: true,
            can_reset: false,
        };
        assert_eq!(stopwatch_line(&view), "00:01:02    [Space] Pause    [R] Reset");
    }

    #[test]
    fn centring_never_underflows() {
        assert_eq!(centred_column(10, "abcd"), 3);
        assert_eq!(centred_column(2, "a long line"), 0);
    }
}
