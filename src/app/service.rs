//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the controller state, the periodic schedule, and the
//! button debouncer.  One call to [`tick`](AppService::tick) is one loop
//! iteration; the caller supplies the clock, so the whole control loop is
//! deterministic under test.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ ActuatorPort
//!  InputPort  ──▶ │       AppService        │ ──▶ DisplayPort
//!  SerialPort ──▶ │  state · policy · sched │ ──▶ SerialPort
//!                 └────────────────────────┘
//! ```
//!
//! Fixed intra-tick order: sample (if due) → recompute effective speed →
//! actuate → buttons → display (if due) → telemetry (if due) → one inbound
//! command.  Later steps observe state already updated by earlier ones;
//! a command's effect on the fan shows up on the *next* tick.

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::drivers::buttons::{ButtonEvent, ButtonPad};
use crate::drivers::buzzer::Chirp;
use crate::protocol::{self, Command, TelemetryFrame};
use crate::scheduler::ScheduleTimers;
use crate::state::{ControllerState, Mode};

use super::ports::{ActuatorPort, DisplayPort, InputPort, SensorPort, SerialPort};
use super::view::StatusView;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    state: ControllerState,
    timers: ScheduleTimers,
    buttons: ButtonPad,
    config: SystemConfig,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            state: ControllerState::new(),
            timers: ScheduleTimers::new(&config),
            buttons: ButtonPad::new(config.button_debounce_ms),
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the actuators to their power-on state (fan stopped, AUTO
    /// indicator lit).  Call once before the first `tick`.
    pub fn start(&mut self, hw: &mut impl ActuatorPort) {
        hw.set_fan(0);
        hw.set_mode_led(self.state.mode);
        info!("controller started in {} mode", self.state.mode.label());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle at monotonic time `now_ms`.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + ActuatorPort + InputPort),
        display: &mut impl DisplayPort,
        serial: &mut impl SerialPort,
    ) {
        // 1. Sensor sampling, at most once per interval.
        if self.timers.sample.poll(now_ms) {
            let climate = hw.read_climate();
            self.state.apply_climate(climate);
            let ambient = hw.read_ambient();
            self.state.light_level = ambient.light_raw;
            self.state.sound_level = ambient.sound_raw;
        }

        // 2. Effective speed for this tick.
        self.state.recompute_fan_speed();

        // 3. Actuation.
        hw.set_fan(self.state.fan_speed);
        hw.set_mode_led(self.state.mode);

        // 4. Buttons.
        let levels = hw.read_buttons();
        for event in self.buttons.scan(levels, now_ms) {
            self.apply_button(event, hw);
        }

        // 5. Display refresh.
        if self.timers.display.poll(now_ms) {
            display.render(&self.status_view());
        }

        // 6. Telemetry push.
        if self.timers.telemetry.poll(now_ms) {
            self.emit_telemetry(now_ms, serial);
        }

        // 7. At most one inbound command line.
        if let Some(line) = serial.poll_line() {
            self.handle_line(&line, now_ms, serial);
        }
    }

    // ── Button handling ───────────────────────────────────────

    fn apply_button(&mut self, event: ButtonEvent, hw: &mut impl ActuatorPort) {
        match event {
            ButtonEvent::ModeToggle => {
                let mode = self.state.toggle_mode();
                hw.chirp(Chirp::MODE_TOGGLE);
                info!("Mode changed to: {}", mode.label());
            }
            // Up/down only act on the setpoint in MANUAL; in AUTO the press
            // is debounce-tracked but otherwise inert.
            ButtonEvent::SpeedUp => {
                if self.state.mode == Mode::Manual {
                    let speed = self
                        .state
                        .nudge_manual_speed(i16::from(self.config.manual_speed_step));
                    hw.chirp(Chirp::SPEED_UP);
                    debug!("manual speed up to {speed}%");
                }
            }
            ButtonEvent::SpeedDown => {
                if self.state.mode == Mode::Manual {
                    let speed = self
                        .state
                        .nudge_manual_speed(-i16::from(self.config.manual_speed_step));
                    hw.chirp(Chirp::SPEED_DOWN);
                    debug!("manual speed down to {speed}%");
                }
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Parse and apply one inbound line.  Malformed JSON gets the
    /// plain-text error reply; unrecognized commands are dropped silently.
    pub fn handle_line(&mut self, line: &str, now_ms: u32, serial: &mut impl SerialPort) {
        match protocol::parse_line(line) {
            Ok(Some(command)) => self.handle_command(command, now_ms, serial),
            Ok(None) => {}
            Err(e) => {
                warn!("rejected inbound line ({e})");
                serial.write_line(protocol::ERR_INVALID_JSON);
            }
        }
    }

    /// Apply a recognized host command.
    pub fn handle_command(&mut self, command: Command, now_ms: u32, serial: &mut impl SerialPort) {
        match command {
            Command::SetMode { mode, speed } => {
                self.state.set_mode(mode);
                if mode == Mode::Manual {
                    if let Some(s) = speed {
                        self.state.set_manual_speed(s);
                    }
                }
                serial.write_line(&protocol::ack_mode(mode));
                info!("host set mode to {}", mode.label());
            }
            Command::SetSpeed { speed } => {
                // Only honoured while in MANUAL; ignored otherwise.
                if self.state.mode == Mode::Manual {
                    let stored = self.state.set_manual_speed(speed);
                    serial.write_line(&protocol::ack_speed(stored));
                }
            }
            Command::GetStatus => self.emit_telemetry(now_ms, serial),
        }
    }

    // ── Telemetry ─────────────────────────────────────────────

    fn emit_telemetry(&self, now_ms: u32, serial: &mut impl SerialPort) {
        match protocol::encode_telemetry(&self.build_telemetry(now_ms)) {
            Ok(line) => serial.write_line(&line),
            Err(e) => warn!("telemetry dropped ({e})"),
        }
    }

    /// Build a telemetry frame from the current state.  Climate fields
    /// report zero until the first valid sample.
    pub fn build_telemetry(&self, now_ms: u32) -> TelemetryFrame {
        TelemetryFrame {
            timestamp: now_ms,
            temperature: self.state.temperature.unwrap_or(0.0),
            humidity: self.state.humidity.unwrap_or(0.0),
            light: self.state.light_level,
            sound: self.state.sound_level,
            fan_speed: self.state.fan_speed,
            mode: self.state.mode,
            manual_speed: self.state.manual_speed,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot for the display adapter.
    pub fn status_view(&self) -> StatusView {
        StatusView::from_state(&self.state)
    }

    /// Read-only view of the controller state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }
}
