//! Piezo buzzer driver — short feedback chirps via LEDC PWM.
//!
//! Fire-and-forget: a chirp retunes the buzzer's LEDC timer, raises the
//! duty to 50 %, and arms a one-shot hardware timer that silences the
//! channel after the requested duration.  The control loop never waits.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC channel and one-shot timer via hw_init.
//! On host/test: records the last chirp in-memory only.

use crate::drivers::hw_init;

/// A single feedback tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chirp {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

impl Chirp {
    /// Mode toggled (button or command).
    pub const MODE_TOGGLE: Self = Self { freq_hz: 800, duration_ms: 100 };
    /// Manual setpoint raised.
    pub const SPEED_UP: Self = Self { freq_hz: 1200, duration_ms: 50 };
    /// Manual setpoint lowered.
    pub const SPEED_DOWN: Self = Self { freq_hz: 600, duration_ms: 50 };
    /// First note of the power-on melody.
    pub const BOOT_LOW: Self = Self { freq_hz: 1000, duration_ms: 100 };
    /// Second note of the power-on melody.
    pub const BOOT_HIGH: Self = Self { freq_hz: 1500, duration_ms: 100 };
}

pub struct Buzzer {
    last: Option<Chirp>,
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buzzer {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Play a chirp.  Returns immediately; the tone self-terminates.
    pub fn chirp(&mut self, chirp: Chirp) {
        hw_init::tone(chirp.freq_hz, chirp.duration_ms);
        self.last = Some(chirp);
    }

    /// Last chirp played (simulation/test introspection).
    pub fn last_chirp(&self) -> Option<Chirp> {
        self.last
    }
}
