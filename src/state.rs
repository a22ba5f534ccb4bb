//! Shared controller state threaded through every control-loop step.
//!
//! [`ControllerState`] is the single struct that the control loop reads from
//! and writes to — the latest sensor snapshot, the mode machine, and the
//! effective fan command.  It is owned by the
//! [`AppService`](crate::app::service::AppService) and passed by reference;
//! there are no globals.

use serde::{Deserialize, Serialize};

use crate::control::policy;
use crate::sensors::climate::ClimateReading;

// ---------------------------------------------------------------------------
// Mode machine
// ---------------------------------------------------------------------------

/// Control mode: fan speed derives from the sensor policy (AUTO) or from the
/// user-set manual setpoint (MANUAL).
///
/// Transitions are exactly: button toggle flips, `setMode auto` forces
/// `Auto`, `setMode manual` forces `Manual`.  The machine is never terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    Manual,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::Auto,
        }
    }

    /// Lowercase name as carried on the wire (`"auto"` / `"manual"`).
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }

    /// Uppercase label for the display and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Manual => "MANUAL",
        }
    }
}

// ---------------------------------------------------------------------------
// ControllerState
// ---------------------------------------------------------------------------

/// The blackboard every control-loop step reads and writes.
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current control mode.  Starts in [`Mode::Auto`].
    pub mode: Mode,
    /// Manual setpoint, percent.  Always within `[0, 100]`.
    pub manual_speed: u8,
    /// Effective commanded speed, percent — recomputed every tick from the
    /// policy (AUTO) or the setpoint (MANUAL).  Always within `[0, 100]`.
    pub fan_speed: u8,

    /// Last valid temperature (°C).  `None` until the first good sample.
    pub temperature: Option<f32>,
    /// Last valid relative humidity (%).  `None` until the first good sample.
    pub humidity: Option<f32>,
    /// Raw ambient light level (ADC counts).
    pub light_level: u16,
    /// Raw ambient sound level (ADC counts).
    pub sound_level: u16,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Auto,
            manual_speed: 0,
            fan_speed: 0,
            temperature: None,
            humidity: None,
            light_level: 0,
            sound_level: 0,
        }
    }

    // ── Mode transitions ──────────────────────────────────────

    /// Flip AUTO ↔ MANUAL (button toggle).  Returns the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Force a specific mode (host command).
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // ── Setpoint ──────────────────────────────────────────────

    /// Set the manual setpoint, clamping into `[0, 100]`.  Returns the value
    /// actually stored.
    pub fn set_manual_speed(&mut self, speed: i32) -> u8 {
        self.manual_speed = speed.clamp(0, 100) as u8;
        self.manual_speed
    }

    /// Adjust the manual setpoint by a signed step, saturating at the range
    /// ends.  Returns the new value.
    pub fn nudge_manual_speed(&mut self, delta: i16) -> u8 {
        let next = i32::from(self.manual_speed) + i32::from(delta);
        self.set_manual_speed(next)
    }

    // ── Sensor intake ─────────────────────────────────────────

    /// Apply a climate sample.  `None` means the sensor read failed this
    /// tick: the previous pair is retained whole.  A partial update (one
    /// field of the pair) is never applied.
    pub fn apply_climate(&mut self, reading: Option<ClimateReading>) {
        if let Some(r) = reading {
            self.temperature = Some(r.temperature_c);
            self.humidity = Some(r.humidity_pct);
        }
    }

    // ── Control step ──────────────────────────────────────────

    /// Recompute the effective fan speed for this tick.  In AUTO the policy
    /// runs over the last-known climate pair (zeroes before the first valid
    /// sample, so the humidity floor applies from power-on); in MANUAL the
    /// setpoint is used as-is.
    pub fn recompute_fan_speed(&mut self) {
        self.fan_speed = match self.mode {
            Mode::Auto => policy::auto_speed(
                self.temperature.unwrap_or(0.0),
                self.humidity.unwrap_or(0.0),
            ),
            Mode::Manual => self.manual_speed,
        };
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
