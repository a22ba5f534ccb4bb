//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and all actuator drivers, exposing them
//! through [`SensorPort`], [`ActuatorPort`], and [`InputPort`].  This is
//! the only module (besides the serial console) that touches actual
//! hardware.  On non-espidf targets, the underlying drivers use
//! cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, InputPort, SensorPort};
use crate::drivers::buttons::ButtonLevels;
use crate::drivers::buzzer::{Buzzer, Chirp};
use crate::drivers::fan::FanDriver;
use crate::drivers::hw_init;
use crate::drivers::status_led::ModeLed;
use crate::pins;
use crate::sensors::ambient::AmbientReading;
use crate::sensors::climate::ClimateReading;
use crate::sensors::SensorHub;
use crate::state::Mode;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensors: SensorHub,
    fan: FanDriver,
    led: ModeLed,
    buzzer: Buzzer,
}

impl HardwareAdapter {
    pub fn new(sensors: SensorHub, fan: FanDriver, led: ModeLed, buzzer: Buzzer) -> Self {
        Self {
            sensors,
            fan,
            led,
            buzzer,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_climate(&mut self) -> Option<ClimateReading> {
        self.sensors.read_climate()
    }

    fn read_ambient(&mut self) -> AmbientReading {
        self.sensors.read_ambient()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_fan(&mut self, percent: u8) {
        self.fan.set(percent);
    }

    fn set_mode_led(&mut self, mode: Mode) {
        self.led.show(mode);
    }

    fn chirp(&mut self, chirp: Chirp) {
        self.buzzer.chirp(chirp);
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn read_buttons(&mut self) -> ButtonLevels {
        ButtonLevels {
            mode: hw_init::gpio_read(pins::BUTTON_MODE_GPIO),
            up: hw_init::gpio_read(pins::BUTTON_UP_GPIO),
            down: hw_init::gpio_read(pins::BUTTON_DOWN_GPIO),
        }
    }
}
