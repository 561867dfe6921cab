//! Analog clock face: hand angles, sizing and a character-grid rasterizer.

use std::f64::consts::TAU;

use crate::{clock::ClockReading, settings::ClockMode};

/// Smallest dial worth drawing.
const MIN_RADIUS: u16 = 3;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

const HOUR_LENGTH: f64 = 0.5;
const MINUTE_LENGTH: f64 = 0.8;
const SECOND_LENGTH: f64 = 0.9;

/// Hand angles in radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hands {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl Hands {
    pub fn at(reading: ClockReading) -> Self {
        let second = f64::from(reading.second);
        let minute = f64::from(reading.minute) + second / 60.0;
        let hour = f64::from(reading.hour % 12) + minute / 60.0;

        Self {
            hour: hour / 12.0 * TAU,
            minute: minute / 60.0 * TAU,
            second: second / 60.0 * TAU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    /// Radius in rows.
    pub radius: u16,
    pub dimmed: bool,
}

impl Dial {
    /// Largest dial that fits in `viewport` (columns, rows) after `reserved_rows`
    /// are set aside for the labels. `None` when the face is switched off or
    /// there is no room.
    pub fn fit(viewport: (u16, u16), reserved_rows: u16, mode: ClockMode) -> Option<Self> {
        let dimmed = match mode {
            ClockMode::None => return None,
            ClockMode::Background => true,
            ClockMode::Solid => false,
        };

        let (cols, rows) = viewport;
        let rows_free = rows.saturating_sub(reserved_rows);
        let by_rows = rows_free.saturating_sub(1) / 2;
        let by_cols = cols.saturating_sub(1) / 4;
        let radius = by_rows.min(by_cols);

        (radius >= MIN_RADIUS).then_some(Self { radius, dimmed })
    }

    pub fn width(&self) -> usize {
        usize::from(self.radius) * 4 + 1
    }

    pub fn height(&self) -> usize {
        usize::from(self.radius) * 2 + 1
    }

    /// Draw the face as rows of characters.
    pub fn rasterize(&self, hands: Hands) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width()]; self.height()];

        for mark in 0..12 {
            let glyph = if mark % 3 == 0 { 'o' } else { '.' };
            self.plot(&mut grid, f64::from(mark) / 12.0 * TAU, 1.0, glyph);
        }

        self.hand(&mut grid, hands.second, SECOND_LENGTH, '+');
        self.hand(&mut grid, hands.minute, MINUTE_LENGTH, '*');
        self.hand(&mut grid, hands.hour, HOUR_LENGTH, '#');

        let (cx, cy) = self.centre();
        grid[cy][cx] = 'O';

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    fn centre(&self) -> (usize, usize) {
        let r = usize::from(self.radius);
        (r * 2, r)
    }

    fn hand(&self, grid: &mut [Vec<char>], angle: f64, length: f64, glyph: char) {
        let steps = usize::from(self.radius) * 4;
        for step in 1..=steps {
            let fraction = step as f64 / steps as f64 * length;
            self.plot(grid, angle, fraction, glyph);
        }
    }

    fn plot(&self, grid: &mut [Vec<char>], angle: f64, fraction: f64, glyph: char) {
        let r = f64::from(self.radius);
        let (cx, cy) = self.centre();
        let dx = (angle.sin() * r * fraction * CELL_ASPECT).round() as isize;
        let dy = (angle.cos() * r * fraction).round() as isize;

        let x = cx as isize + dx;
        let y = cy as isize - dy;
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = glyph;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn reading(hour: u32, minute: u32, second: u32) -> ClockReading {
        ClockReading {
            hour,
            minute,
            second,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hands_point_where_expected() {
        let hands = Hands::at(reading(15, 0, 0));
        assert!(close(hands.hour, FRAC_PI_2));
        assert!(close(hands.minute, 0.0));

        let hands = Hands::at(reading(6, 30, 30));
        assert!(close(hands.minute, (30.5 / 60.0) * TAU));
        assert!(close(hands.second, PI));
        // Halfway between six and seven.
        assert!(hands.hour > PI && hands.hour < 7.0 / 12.0 * TAU);
    }

    #[test]
    fn midnight_and_noon_share_an_angle() {
        assert_eq!(Hands::at(reading(0, 0, 0)), Hands::at(reading(12, 0, 0)));
    }

    #[test]
    fn fit_respects_mode_and_viewport() {
        assert_eq!(Dial::fit((200, 60), 8, ClockMode::None), None);
        assert_eq!(Dial::fit((12, 60), 8, ClockMode::Solid), None);

        let dial = Dial::fit((80, 30), 8, ClockMode::Background).unwrap();
        assert!(dial.dimmed);
        assert_eq!(dial.radius, 10);
        assert!(dial.height() <= 22);
        assert!(dial.width() <= 80);

        let dial = Dial::fit((41, 100), 0, ClockMode::Solid).unwrap();
        assert!(!dial.dimmed);
        assert_eq!(dial.radius, 10);
    }

    #[test]
    fn three_oclock_hour_hand_points_right() {
        let dial = Dial {
            radius: 6,
            dimmed: false,
        };
        let rows = dial.rasterize(Hands::at(reading(3, 0, 0)));

        assert_eq!(rows.len(), dial.height());
        assert!(rows.iter().all(|row| row.chars().count() == dial.width()));

        let middle: Vec<char> = rows[6].chars().collect();
        assert_eq!(middle[12], 'O');
        assert_eq!(middle[13], '#');
        assert!(!middle[..12].contains(&'#'));

        // Minute and second hands both point at twelve; the minute hand is drawn on top.
        let above: Vec<char> = rows[5].chars().collect();
        assert_eq!(above[12], '*');
    }
}
