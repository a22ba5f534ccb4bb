//! Host serial protocol — newline-delimited JSON, one object per line.
//!
//! Both directions share one channel:
//!
//! - **Telemetry (device → host)**: a full status frame, pushed on the
//!   telemetry cadence and on request.
//! - **Commands (host → device)**: `setMode`, `setSpeed`, `getStatus`.
//!
//! Error asymmetry, kept on purpose: a line that is not valid JSON gets a
//! plain-text [`ERR_INVALID_JSON`] reply; a well-formed object whose
//! `command` is unrecognized is dropped silently.  Recognized commands are
//! echoed with a human-readable confirmation line.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::state::Mode;

/// Longest accepted line, bytes.  Inbound lines beyond this are discarded
/// by the transport before they reach the parser.
pub const MAX_LINE_LEN: usize = 192;

/// A bounded wire line.
pub type Line = heapless::String<MAX_LINE_LEN>;

/// Reply sent when an inbound line fails to parse as JSON.
pub const ERR_INVALID_JSON: &str = "Invalid JSON command";

// ───────────────────────────────────────────────────────────────
// Telemetry (device → host)
// ───────────────────────────────────────────────────────────────

/// One status frame as carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// Monotonic milliseconds at emission time.
    pub timestamp: u32,
    pub temperature: f32,
    pub humidity: f32,
    pub light: u16,
    pub sound: u16,
    #[serde(rename = "fanSpeed")]
    pub fan_speed: u8,
    pub mode: Mode,
    #[serde(rename = "manualSpeed")]
    pub manual_speed: u8,
}

/// Serialize a telemetry frame to its wire line (no trailing newline —
/// the transport appends it).
pub fn encode_telemetry(frame: &TelemetryFrame) -> Result<String, ProtocolError> {
    serde_json::to_string(frame).map_err(|_| ProtocolError::Encode)
}

// ───────────────────────────────────────────────────────────────
// Commands (host → device)
// ───────────────────────────────────────────────────────────────

/// Raw shape of an inbound command line.  Built fresh per line, consumed
/// immediately, discarded.
#[derive(Debug, Deserialize)]
struct CommandFrame {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    speed: Option<i32>,
}

/// A recognized, validated host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Force a mode; `speed` optionally seeds the manual setpoint.
    SetMode { mode: Mode, speed: Option<i32> },
    /// Set the manual setpoint (honoured only while in MANUAL).
    SetSpeed { speed: i32 },
    /// Request an immediate telemetry frame.
    GetStatus,
}

/// Parse one inbound line.
///
/// - `Err(..)` — not valid JSON; the caller reports [`ERR_INVALID_JSON`].
/// - `Ok(None)` — valid JSON but not a recognized command; dropped silently.
/// - `Ok(Some(..))` — a command to apply.
pub fn parse_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let frame: CommandFrame =
        serde_json::from_str(line.trim()).map_err(|_| ProtocolError::InvalidJson)?;

    let command = match frame.command.as_deref() {
        Some("setMode") => match frame.mode.as_deref() {
            Some("auto") => Some(Command::SetMode {
                mode: Mode::Auto,
                speed: frame.speed,
            }),
            Some("manual") => Some(Command::SetMode {
                mode: Mode::Manual,
                speed: frame.speed,
            }),
            // Missing or unknown mode value: nothing to do.
            _ => None,
        },
        Some("setSpeed") => frame.speed.map(|speed| Command::SetSpeed { speed }),
        Some("getStatus") => Some(Command::GetStatus),
        // A JSON object with no `command` member is treated the same as an
        // unrecognized command: dropped without a report.
        _ => None,
    };
    Ok(command)
}

// ───────────────────────────────────────────────────────────────
// Confirmation lines
// ───────────────────────────────────────────────────────────────

pub fn ack_mode(mode: Mode) -> String {
    format!("Mode set to: {}", mode.as_wire())
}

pub fn ack_speed(speed: u8) -> String {
    format!("Manual speed set to: {}", speed)
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
