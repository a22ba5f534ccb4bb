//! Integration tests for the AppService control loop.
//!
//! These drive full ticks with an injected clock and verify the control
//! loop end to end: sampling cadence, mode transitions, clamping,
//! debouncing, and the serial protocol side effects.

use crate::mock_hw::{MockDisplay, MockHardware, MockSerial};

use fanctl::app::service::AppService;
use fanctl::config::SystemConfig;
use fanctl::drivers::buzzer::Chirp;
use fanctl::state::Mode;

struct Rig {
    app: AppService,
    hw: MockHardware,
    display: MockDisplay,
    serial: MockSerial,
}

impl Rig {
    fn new() -> Self {
        let mut app = AppService::new(SystemConfig::default());
        let mut hw = MockHardware::new();
        app.start(&mut hw);
        Self {
            app,
            hw,
            display: MockDisplay::new(),
            serial: MockSerial::new(),
        }
    }

    fn tick(&mut self, now_ms: u32) {
        self.app
            .tick(now_ms, &mut self.hw, &mut self.display, &mut self.serial);
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn starts_in_auto_with_fan_stopped() {
    let rig = Rig::new();
    assert_eq!(rig.app.state().mode, Mode::Auto);
    assert_eq!(rig.hw.last_fan(), Some(0));
    assert_eq!(rig.hw.last_led(), Some(Mode::Auto));
}

// ── Sampling and auto policy ──────────────────────────────────

#[test]
fn warm_room_drives_fan_at_sixty_percent() {
    let mut rig = Rig::new();
    rig.hw.set_climate(30.0, 50.0);

    // Sample interval elapses: read → policy → actuator, same tick.
    rig.tick(1000);
    assert_eq!(rig.app.state().fan_speed, 60);
    assert_eq!(rig.hw.last_fan(), Some(60));
}

#[test]
fn sampling_happens_at_most_once_per_interval() {
    let mut rig = Rig::new();
    rig.hw.set_climate(22.0, 40.0);

    for now in (0..1000).step_by(10) {
        rig.tick(now);
    }
    assert_eq!(rig.hw.climate_reads, 0, "no sample before the interval");

    rig.tick(1000);
    rig.tick(1010);
    rig.tick(1500);
    assert_eq!(rig.hw.climate_reads, 1, "one sample per interval");
}

#[test]
fn failed_sample_keeps_previous_climate_but_updates_ambient() {
    let mut rig = Rig::new();
    rig.hw.set_climate(26.5, 55.0);
    rig.tick(1000);

    rig.hw.climate = None;
    rig.hw.ambient.light_raw = 512;
    rig.hw.ambient.sound_raw = 300;
    rig.tick(2000);

    let state = rig.app.state();
    assert_eq!(state.temperature, Some(26.5));
    assert_eq!(state.humidity, Some(55.0));
    assert_eq!(state.light_level, 512);
    assert_eq!(state.sound_level, 300);

    // The failure never reaches the host as an error line.
    let frame = rig.app.build_telemetry(2000);
    assert!((frame.temperature - 26.5).abs() < f32::EPSILON);
    assert!(!rig
        .serial
        .outbound
        .iter()
        .any(|l| l.contains("Invalid") || l.contains("error")));
}

// ── Host commands ─────────────────────────────────────────────

#[test]
fn set_mode_manual_with_speed_applies_on_next_tick() {
    let mut rig = Rig::new();
    rig.serial
        .push_inbound(r#"{"command":"setMode","mode":"manual","speed":45}"#);

    rig.tick(10);
    // Command lands after this tick's actuation.
    assert_eq!(rig.app.state().mode, Mode::Manual);
    assert_eq!(rig.app.state().manual_speed, 45);
    assert_eq!(rig.serial.outbound, ["Mode set to: manual"]);

    rig.tick(20);
    assert_eq!(rig.app.state().fan_speed, 45);
    assert_eq!(rig.hw.last_fan(), Some(45));
    assert_eq!(rig.hw.last_led(), Some(Mode::Manual));
}

#[test]
fn set_mode_speed_is_clamped_into_range() {
    let mut rig = Rig::new();
    rig.serial
        .push_inbound(r#"{"command":"setMode","mode":"manual","speed":250}"#);
    rig.tick(10);
    assert_eq!(rig.app.state().manual_speed, 100);

    rig.serial
        .push_inbound(r#"{"command":"setSpeed","speed":-30}"#);
    rig.tick(20);
    assert_eq!(rig.app.state().manual_speed, 0);
    assert_eq!(rig.serial.outbound[1], "Manual speed set to: 0");
}

#[test]
fn set_speed_is_ignored_in_auto_mode() {
    let mut rig = Rig::new();
    rig.hw.set_climate(30.0, 50.0);
    rig.tick(1000);

    let lines_before = rig.serial.outbound.len(); // cadence telemetry only
    rig.serial.push_inbound(r#"{"command":"setSpeed","speed":50}"#);
    rig.tick(1010);
    rig.tick(1020);

    assert_eq!(rig.app.state().mode, Mode::Auto);
    assert_eq!(rig.app.state().manual_speed, 0);
    assert_eq!(rig.app.state().fan_speed, 60, "policy output unaffected");
    assert_eq!(
        rig.serial.outbound.len(),
        lines_before,
        "no reply for an ignored command"
    );
}

#[test]
fn set_mode_auto_forces_auto_from_manual() {
    let mut rig = Rig::new();
    rig.serial
        .push_inbound(r#"{"command":"setMode","mode":"manual","speed":80}"#);
    rig.tick(10);
    rig.serial.push_inbound(r#"{"command":"setMode","mode":"auto"}"#);
    rig.tick(20);

    assert_eq!(rig.app.state().mode, Mode::Auto);
    // The setpoint survives the mode change; only the mode moved.
    assert_eq!(rig.app.state().manual_speed, 80);
    assert_eq!(rig.serial.outbound[1], "Mode set to: auto");
}

#[test]
fn malformed_line_reports_error_and_changes_nothing() {
    let mut rig = Rig::new();
    rig.serial.push_inbound("not json");
    rig.tick(10);

    assert_eq!(rig.serial.outbound, ["Invalid JSON command"]);
    assert_eq!(rig.app.state().mode, Mode::Auto);
    assert_eq!(rig.app.state().manual_speed, 0);
}

#[test]
fn unrecognized_command_is_dropped_silently() {
    let mut rig = Rig::new();
    rig.serial.push_inbound(r#"{"command":"selfDestruct"}"#);
    rig.tick(10);
    assert!(rig.serial.outbound.is_empty());
    assert_eq!(rig.app.state().mode, Mode::Auto);
}

#[test]
fn one_command_line_per_tick() {
    let mut rig = Rig::new();
    rig.serial.push_inbound(r#"{"command":"setMode","mode":"manual"}"#);
    rig.serial.push_inbound(r#"{"command":"setMode","mode":"auto"}"#);

    rig.tick(10);
    assert_eq!(rig.app.state().mode, Mode::Manual, "second line still queued");
    rig.tick(20);
    assert_eq!(rig.app.state().mode, Mode::Auto);
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_emits_on_cadence() {
    let mut rig = Rig::new();
    rig.hw.set_climate(26.5, 55.0);

    for now in (0..=990).step_by(10) {
        rig.tick(now);
    }
    assert!(rig.serial.outbound.is_empty(), "nothing before the interval");

    rig.tick(1000);
    assert_eq!(rig.serial.outbound.len(), 1);
    let frame: serde_json::Value = serde_json::from_str(&rig.serial.outbound[0]).unwrap();
    assert_eq!(frame["timestamp"], 1000);
    assert_eq!(frame["mode"], "auto");
    // Sampling runs before telemetry within the tick: the frame already
    // carries this interval's reading and the speed derived from it.
    assert_eq!(frame["temperature"], 26.5);
    assert_eq!(frame["fanSpeed"], 30);
}

#[test]
fn get_status_emits_immediately_between_cadence_pushes() {
    let mut rig = Rig::new();
    rig.serial.push_inbound(r#"{"command":"getStatus"}"#);
    rig.tick(10);

    assert_eq!(rig.serial.outbound.len(), 1);
    let frame: serde_json::Value = serde_json::from_str(&rig.serial.outbound[0]).unwrap();
    assert_eq!(frame["timestamp"], 10);
    // Power-on AUTO output: the humidity tier floor (20) with zeroed climate.
    assert_eq!(frame["fanSpeed"], 20);
    assert_eq!(frame["manualSpeed"], 0);
}

// ── Buttons ───────────────────────────────────────────────────

#[test]
fn mode_button_toggles_and_chirps() {
    let mut rig = Rig::new();
    rig.hw.press(true, false, false);
    rig.tick(300);

    assert_eq!(rig.app.state().mode, Mode::Manual);
    assert_eq!(rig.hw.chirps(), [Chirp::MODE_TOGGLE]);

    rig.hw.release_all();
    rig.tick(310);
    rig.tick(600);
    rig.hw.press(true, false, false);
    rig.tick(610);
    assert_eq!(rig.app.state().mode, Mode::Auto, "second press toggles back");
}

#[test]
fn double_press_within_debounce_window_toggles_once() {
    let mut rig = Rig::new();
    rig.hw.press(true, false, false);
    rig.tick(300);
    rig.hw.release_all();
    rig.tick(350);
    rig.hw.press(true, false, false);
    rig.tick(450); // 150 ms after the accepted press: suppressed

    assert_eq!(rig.app.state().mode, Mode::Manual, "changed at most once");
    assert_eq!(rig.hw.chirps().len(), 1);
}

#[test]
fn speed_buttons_step_and_clamp_in_manual() {
    let mut rig = Rig::new();
    rig.serial
        .push_inbound(r#"{"command":"setMode","mode":"manual","speed":95}"#);
    rig.tick(10);

    rig.hw.press(false, true, false);
    rig.tick(300);
    assert_eq!(rig.app.state().manual_speed, 100, "95 + 10 clamps to 100");
    assert_eq!(rig.hw.chirps().last(), Some(&Chirp::SPEED_UP));

    rig.hw.release_all();
    rig.tick(310);
    rig.hw.press(false, false, true);
    rig.tick(600);
    assert_eq!(rig.app.state().manual_speed, 90);
    assert_eq!(rig.hw.chirps().last(), Some(&Chirp::SPEED_DOWN));
}

#[test]
fn speed_buttons_are_inert_in_auto_mode() {
    let mut rig = Rig::new();
    rig.hw.press(false, true, false);
    rig.tick(300);

    assert_eq!(rig.app.state().manual_speed, 0);
    assert!(rig.hw.chirps().is_empty(), "no feedback for an inert press");

    // The press still armed the shared debounce gate: a mode press right
    // after is suppressed.
    rig.hw.release_all();
    rig.tick(350);
    rig.hw.press(true, false, false);
    rig.tick(400);
    assert_eq!(rig.app.state().mode, Mode::Auto);
}

// ── Display ───────────────────────────────────────────────────

#[test]
fn display_refreshes_on_its_own_cadence() {
    let mut rig = Rig::new();
    rig.hw.set_climate(30.0, 50.0);

    rig.tick(0);
    assert!(rig.display.frames.is_empty());
    rig.tick(500);
    assert_eq!(rig.display.frames.len(), 1);
    // Display fired at 500 but the sample interval (1000) had not: the
    // frame still shows power-on climate and the matching policy floor.
    assert_eq!(rig.display.frames[0].temperature, 0.0);
    assert_eq!(rig.display.frames[0].fan_speed, 20);

    rig.tick(1000);
    assert_eq!(rig.display.frames.len(), 2);
    let frame = rig.display.frames[1];
    assert_eq!(frame.temperature, 30.0);
    assert_eq!(frame.fan_speed, 60);
    assert_eq!(frame.line2(), "AUTO F:60%***");
}
