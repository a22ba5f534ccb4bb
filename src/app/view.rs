//! Presentation model for the local display.
//!
//! A [`StatusView`] is a frozen snapshot of what the 16×2 panel shows;
//! the formatting lives here so display adapters stay dumb and the layout
//! is testable without hardware.

use crate::state::{ControllerState, Mode};

/// Number of gauge segments on the second display line.
const GAUGE_SEGMENTS: u16 = 5;

/// What the display shows: climate on the first line, mode + fan speed
/// with a bar gauge on the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusView {
    pub temperature: f32,
    pub humidity: f32,
    pub mode: Mode,
    pub fan_speed: u8,
}

impl StatusView {
    pub fn from_state(state: &ControllerState) -> Self {
        Self {
            temperature: state.temperature.unwrap_or(0.0),
            humidity: state.humidity.unwrap_or(0.0),
            mode: state.mode,
            fan_speed: state.fan_speed,
        }
    }

    /// First line: `T:26.5C H:48%`
    pub fn line1(&self) -> String {
        format!("T:{:.1}C H:{:.0}%", self.temperature, self.humidity)
    }

    /// Second line: `AUTO F:60%***`
    pub fn line2(&self) -> String {
        let mut line = format!("{} F:{}%", self.mode.label(), self.fan_speed);
        for _ in 0..self.gauge_segments() {
            line.push('*');
        }
        line
    }

    /// Lit gauge segments, linear over the speed range (truncating).
    pub fn gauge_segments(&self) -> u8 {
        (u16::from(self.fan_speed.min(100)) * GAUGE_SEGMENTS / 100) as u8
    }
}
