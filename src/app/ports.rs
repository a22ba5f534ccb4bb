//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, display, serial link) implement
//! these traits.  The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches hardware directly
//! and the whole control loop runs against mocks on the host.

use crate::app::view::StatusView;
use crate::drivers::buttons::ButtonLevels;
use crate::drivers::buzzer::Chirp;
use crate::protocol::Line;
use crate::sensors::ambient::AmbientReading;
use crate::sensors::climate::ClimateReading;
use crate::state::Mode;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Read the temperature/humidity pair.  `None` signals a failed read;
    /// the pair is all-or-nothing, never half-valid.
    fn read_climate(&mut self) -> Option<ClimateReading>;

    /// Read the ambient light/sound levels.  No validity signal — the raw
    /// counts are the reading.
    fn read_ambient(&mut self) -> AmbientReading;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
/// All operations are best-effort side effects with no failure channel.
pub trait ActuatorPort {
    /// Drive the fan at `percent` (0–100) of full speed.
    fn set_fan(&mut self, percent: u8);

    /// Light the indicator for the given mode (green = AUTO, red = MANUAL).
    fn set_mode_led(&mut self, mode: Mode);

    /// Play a feedback chirp (fire-and-forget).
    fn chirp(&mut self, chirp: Chirp);
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Raw button levels, polled once per control tick.  Debouncing and edge
/// detection happen in the domain, not the adapter.
pub trait InputPort {
    fn read_buttons(&mut self) -> ButtonLevels;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → presentation)
// ───────────────────────────────────────────────────────────────

/// The display collaborator receives a read-only view of the current
/// status on the display cadence.  Presentation only — it never feeds
/// anything back into the control loop.
pub trait DisplayPort {
    fn render(&mut self, view: &StatusView);
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: domain ↔ host link)
// ───────────────────────────────────────────────────────────────

/// The bidirectional host link.  Lines are complete (newline already
/// stripped); the adapter owns byte-level buffering and framing.
pub trait SerialPort {
    /// Take the next pending inbound line, if any.  The control loop calls
    /// this at most once per tick.
    fn poll_line(&mut self) -> Option<Line>;

    /// Queue one outbound line (the adapter appends the newline).
    fn write_line(&mut self, line: &str);
}
