//! Fuzz target: `protocol::parse_line`
//!
//! Drives arbitrary byte sequences through the command parser and asserts
//! that it never panics and that any accepted speed survives clamping.
//!
//! cargo fuzz run fuzz_line_parser

#![no_main]

use fanctl::protocol::{parse_line, Command};
use fanctl::state::ControllerState;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(command)) = parse_line(line) {
        // Whatever speed the host sent, the state machine must clamp it.
        let mut state = ControllerState::new();
        match command {
            Command::SetMode { speed: Some(s), .. } | Command::SetSpeed { speed: s } => {
                let stored = state.set_manual_speed(s);
                assert!(stored <= 100, "clamp failed for {s}");
            }
            _ => {}
        }
    }
});
