//! Mode indicator LEDs.
//!
//! Two discrete LEDs: green lit in AUTO, red lit in MANUAL.  Exactly one
//! is on at any time once the controller has started.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives two GPIO outputs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;
use crate::state::Mode;

pub struct ModeLed {
    shown: Option<Mode>,
}

impl Default for ModeLed {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeLed {
    pub fn new() -> Self {
        Self { shown: None }
    }

    pub fn show(&mut self, mode: Mode) {
        hw_init::gpio_write(pins::LED_AUTO_GPIO, mode == Mode::Auto);
        hw_init::gpio_write(pins::LED_MANUAL_GPIO, mode == Mode::Manual);
        self.shown = Some(mode);
    }

    pub fn shown(&self) -> Option<Mode> {
        self.shown
    }
}
