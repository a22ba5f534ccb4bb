//! Serial console adapter — UART0 line transport for the host protocol.
//!
//! Inbound bytes are assembled into newline-terminated lines by the pure
//! [`LineAssembler`]; outbound lines get a trailing `\n`.  Lines longer
//! than [`MAX_LINE_LEN`](crate::protocol::MAX_LINE_LEN) are discarded up
//! to the next newline rather than truncated — a truncated JSON object
//! would parse as garbage and trip the malformed-line path for no reason.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: non-blocking reads/writes on the UART0 driver.
//! On host/test: the mock serial port in the test suite replaces this
//! adapter entirely; only the assembler is shared.

use log::warn;

use crate::protocol::Line;

// ───────────────────────────────────────────────────────────────
// Line assembly (pure)
// ───────────────────────────────────────────────────────────────

/// Incremental byte-stream → line splitter with a bounded buffer.
pub struct LineAssembler {
    buf: Line,
    overflowed: bool,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self {
            buf: Line::new(),
            overflowed: false,
        }
    }

    /// Feed one byte.  Returns a completed line when `\n` arrives.
    /// Carriage returns are dropped so CRLF hosts just work.
    pub fn push(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\n' => {
                let overflowed = core::mem::replace(&mut self.overflowed, false);
                let line = core::mem::take(&mut self.buf);
                if overflowed {
                    warn!("serial: oversized line discarded");
                    return None;
                }
                Some(line)
            }
            b'\r' => None,
            _ => {
                if !self.overflowed && self.buf.push(byte as char).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// UART0 console (ESP-IDF)
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub use espidf_impl::UartConsole;

#[cfg(target_os = "espidf")]
mod espidf_impl {
    use esp_idf_svc::sys::*;

    use super::LineAssembler;
    use crate::app::ports::SerialPort;
    use crate::error::{Error, Result};
    use crate::protocol::Line;

    const UART_PORT: uart_port_t = 0;
    const RX_BUF_BYTES: i32 = 512;

    /// Non-blocking line transport over the UART0 console.
    pub struct UartConsole {
        assembler: LineAssembler,
        pending: Option<Line>,
    }

    impl UartConsole {
        /// Install the UART driver.  Call once before the control loop.
        pub fn install() -> Result<Self> {
            // SAFETY: One-shot driver install from the main task before
            // the control loop starts; no concurrent UART access exists.
            let ret = unsafe {
                uart_driver_install(UART_PORT, RX_BUF_BYTES, 0, 0, core::ptr::null_mut(), 0)
            };
            if ret != ESP_OK {
                return Err(Error::Init("UART driver install failed"));
            }
            Ok(Self {
                assembler: LineAssembler::new(),
                pending: None,
            })
        }

        /// Drain whatever bytes the driver has buffered (never blocks).
        fn pump(&mut self) {
            let mut byte = 0u8;
            while self.pending.is_none() {
                // SAFETY: driver installed in install(); zero timeout makes
                // this a non-blocking FIFO read from the main task.
                let n = unsafe { uart_read_bytes(UART_PORT, (&raw mut byte).cast(), 1, 0) };
                if n != 1 {
                    break;
                }
                self.pending = self.assembler.push(byte);
            }
        }
    }

    impl SerialPort for UartConsole {
        fn poll_line(&mut self) -> Option<Line> {
            self.pump();
            self.pending.take()
        }

        fn write_line(&mut self, line: &str) {
            // SAFETY: driver installed in install(); blocking TX of a short
            // line completes within the tick budget.
            unsafe {
                uart_write_bytes(UART_PORT, line.as_ptr().cast(), line.len());
                uart_write_bytes(UART_PORT, b"\n".as_ptr().cast(), 1);
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
