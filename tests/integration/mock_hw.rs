//! Mock adapters for integration tests.
//!
//! Record every actuator call and wire line so tests can assert on the
//! full command history without touching real GPIO/PWM registers or a
//! UART.

use std::collections::VecDeque;

use fanctl::app::ports::{ActuatorPort, DisplayPort, InputPort, SensorPort, SerialPort};
use fanctl::app::view::StatusView;
use fanctl::drivers::buttons::ButtonLevels;
use fanctl::drivers::buzzer::Chirp;
use fanctl::protocol::Line;
use fanctl::sensors::ambient::AmbientReading;
use fanctl::sensors::climate::ClimateReading;
use fanctl::state::Mode;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorCall {
    SetFan(u8),
    SetModeLed(Mode),
    Chirp(Chirp),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// What the climate sensor returns next (`None` = failed read).
    pub climate: Option<ClimateReading>,
    /// What the ambient sensors return next.
    pub ambient: AmbientReading,
    /// Raw button levels the pad reads this tick.
    pub buttons: ButtonLevels,
    /// Every actuator call, in order.
    pub calls: Vec<ActuatorCall>,
    /// How many times the climate sensor was read.
    pub climate_reads: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            climate: None,
            ambient: AmbientReading::default(),
            buttons: ButtonLevels::RELEASED,
            calls: Vec::new(),
            climate_reads: 0,
        }
    }

    pub fn set_climate(&mut self, temperature_c: f32, humidity_pct: f32) {
        self.climate = Some(ClimateReading {
            temperature_c,
            humidity_pct,
        });
    }

    pub fn press(&mut self, mode: bool, up: bool, down: bool) {
        self.buttons = ButtonLevels {
            mode: !mode,
            up: !up,
            down: !down,
        };
    }

    pub fn release_all(&mut self) {
        self.buttons = ButtonLevels::RELEASED;
    }

    /// Most recent fan command, if any.
    pub fn last_fan(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetFan(p) => Some(*p),
            _ => None,
        })
    }

    /// Most recent mode LED command, if any.
    pub fn last_led(&self) -> Option<Mode> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetModeLed(m) => Some(*m),
            _ => None,
        })
    }

    /// All chirps played, in order.
    pub fn chirps(&self) -> Vec<Chirp> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Chirp(ch) => Some(*ch),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_climate(&mut self) -> Option<ClimateReading> {
        self.climate_reads += 1;
        self.climate
    }

    fn read_ambient(&mut self) -> AmbientReading {
        self.ambient
    }
}

impl ActuatorPort for MockHardware {
    fn set_fan(&mut self, percent: u8) {
        self.calls.push(ActuatorCall::SetFan(percent));
    }

    fn set_mode_led(&mut self, mode: Mode) {
        self.calls.push(ActuatorCall::SetModeLed(mode));
    }

    fn chirp(&mut self, chirp: Chirp) {
        self.calls.push(ActuatorCall::Chirp(chirp));
    }
}

impl InputPort for MockHardware {
    fn read_buttons(&mut self) -> ButtonLevels {
        self.buttons
    }
}

// ── MockDisplay ───────────────────────────────────────────────

pub struct MockDisplay {
    pub frames: Vec<StatusView>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn render(&mut self, view: &StatusView) {
        self.frames.push(*view);
    }
}

// ── MockSerial ────────────────────────────────────────────────

pub struct MockSerial {
    inbound: VecDeque<Line>,
    pub outbound: Vec<String>,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            outbound: Vec::new(),
        }
    }

    /// Queue a line as if the host had sent it.
    pub fn push_inbound(&mut self, line: &str) {
        self.inbound
            .push_back(Line::try_from(line).expect("test line fits"));
    }
}

impl Default for MockSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialPort for MockSerial {
    fn poll_line(&mut self) -> Option<Line> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.outbound.push(line.to_string());
    }
}
