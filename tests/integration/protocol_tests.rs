//! Wire-level tests for the serial protocol.
//!
//! Verifies the exact line formats a host sees: telemetry schema, command
//! confirmations, and the malformed-vs-unrecognized asymmetry.

use crate::mock_hw::{MockDisplay, MockHardware, MockSerial};

use fanctl::app::service::AppService;
use fanctl::config::SystemConfig;
use fanctl::protocol::{self, TelemetryFrame};
use fanctl::state::Mode;

fn rig() -> (AppService, MockHardware, MockDisplay, MockSerial) {
    let mut app = AppService::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    app.start(&mut hw);
    (app, hw, MockDisplay::new(), MockSerial::new())
}

#[test]
fn telemetry_line_carries_the_full_schema() {
    let (mut app, mut hw, mut display, mut serial) = rig();
    hw.set_climate(26.5, 48.0);
    hw.ambient.light_raw = 512;
    hw.ambient.sound_raw = 87;

    app.tick(1000, &mut hw, &mut display, &mut serial);

    let line = &serial.outbound[0];
    let v: serde_json::Value = serde_json::from_str(line).unwrap();
    for key in [
        "timestamp",
        "temperature",
        "humidity",
        "light",
        "sound",
        "fanSpeed",
        "mode",
        "manualSpeed",
    ] {
        assert!(v.get(key).is_some(), "missing {key} in {line}");
    }
    assert_eq!(v["light"], 512);
    assert_eq!(v["sound"], 87);
}

#[test]
fn emitted_telemetry_parses_back_to_the_same_frame() {
    let (mut app, mut hw, mut display, mut serial) = rig();
    hw.set_climate(31.9, 72.5);
    app.tick(1000, &mut hw, &mut display, &mut serial);

    let sent = app.build_telemetry(1000);
    let parsed: TelemetryFrame = serde_json::from_str(&serial.outbound[0]).unwrap();
    assert_eq!(parsed, sent);
}

#[test]
fn recognized_commands_are_confirmed_in_order() {
    let (mut app, mut hw, mut display, mut serial) = rig();

    serial.push_inbound(r#"{"command":"setMode","mode":"manual"}"#);
    app.tick(10, &mut hw, &mut display, &mut serial);
    serial.push_inbound(r#"{"command":"setSpeed","speed":70}"#);
    app.tick(20, &mut hw, &mut display, &mut serial);

    assert_eq!(
        serial.outbound,
        ["Mode set to: manual", "Manual speed set to: 70"]
    );
}

#[test]
fn malformed_is_reported_unknown_stays_silent() {
    let (mut app, mut hw, mut display, mut serial) = rig();

    // Malformed JSON: reported.
    serial.push_inbound("{{nope");
    app.tick(10, &mut hw, &mut display, &mut serial);
    assert_eq!(serial.outbound, [protocol::ERR_INVALID_JSON]);

    // Valid JSON, unknown command: silent.
    serial.push_inbound(r#"{"command":"calibrate","speed":3}"#);
    app.tick(20, &mut hw, &mut display, &mut serial);
    assert_eq!(serial.outbound.len(), 1);
}

#[test]
fn mode_round_trips_through_wire_casing() {
    let (mut app, mut hw, mut display, mut serial) = rig();
    serial.push_inbound(r#"{"command":"setMode","mode":"manual","speed":33}"#);
    app.tick(10, &mut hw, &mut display, &mut serial);

    serial.push_inbound(r#"{"command":"getStatus"}"#);
    app.tick(20, &mut hw, &mut display, &mut serial);

    let status_line = &serial.outbound[1];
    let parsed: TelemetryFrame = serde_json::from_str(status_line).unwrap();
    assert_eq!(parsed.mode, Mode::Manual);
    assert_eq!(parsed.manual_speed, 33);
}
