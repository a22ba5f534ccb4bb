//! Fanctl Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single externally-driven control tick.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        UartConsole     LogDisplay             │
//! │  (Sensor+Actuator+Input) (SerialPort)   (DisplayPort)          │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Schedule · Mode machine · Speed policy · Protocol     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  MonotonicClock feeds every tick; no global time access.       │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;
mod protocol;
mod scheduler;
mod state;

pub mod app;
mod adapters;
mod control;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use adapters::display::LogDisplay;
use adapters::hardware::HardwareAdapter;
use adapters::serial::UartConsole;
use adapters::time::MonotonicClock;
use app::ports::ActuatorPort;
use app::service::AppService;
use config::SystemConfig;
use drivers::buzzer::{Buzzer, Chirp};
use drivers::fan::FanDriver;
use drivers::status_led::ModeLed;
use sensors::ambient::AmbientSensors;
use sensors::climate::ClimateSensor;
use sensors::SensorHub;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("fanctl v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = SystemConfig::default();

    // ── 3. Construct adapters ─────────────────────────────────
    let sensors = SensorHub::new(
        ClimateSensor::new(pins::TEMP_ADC_GPIO, pins::HUMIDITY_ADC_GPIO),
        AmbientSensors::new(pins::LIGHT_ADC_GPIO, pins::SOUND_ADC_GPIO),
    );
    let mut hw = HardwareAdapter::new(sensors, FanDriver::new(), ModeLed::new(), Buzzer::new());
    let mut display = LogDisplay::new();
    let mut serial = match UartConsole::install() {
        Ok(s) => s,
        Err(e) => {
            log::error!("serial init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };
    let clock = MonotonicClock::new();

    // ── 4. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut hw);

    // Power-on melody.
    hw.chirp(Chirp::BOOT_LOW);
    thread::sleep(Duration::from_millis(200));
    hw.chirp(Chirp::BOOT_HIGH);

    info!("Fan Control System Started");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        app.tick(clock.now_ms(), &mut hw, &mut display, &mut serial);
        thread::sleep(Duration::from_millis(u64::from(config.loop_interval_ms)));
    }
}
