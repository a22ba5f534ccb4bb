//! Debounced three-button input pad.
//!
//! ## Hardware
//!
//! Three momentary switches (mode / up / down), active-low with internal
//! pull-ups.  The pad is polled from the main loop each tick; no ISRs.
//!
//! ## Debounce policy
//!
//! One shared window gates all three buttons: once any press is accepted,
//! no further press — same button or a different one — is accepted until
//! the window elapses.  The gate is evaluated once per scan, so edges that
//! arrive together in a single scan all fire.  Raw levels are recorded on
//! every scan, even while the gate is closed, so a press held through the
//! window does not fire a stale edge when the gate reopens.

use heapless::Vec;

/// Events emitted after edge detection and debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ModeToggle,
    SpeedUp,
    SpeedDown,
}

/// Raw logic levels of the three buttons.  `true` = high = released
/// (pull-up idle); `false` = low = pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLevels {
    pub mode: bool,
    pub up: bool,
    pub down: bool,
}

impl ButtonLevels {
    /// All buttons released — the power-on idle state.
    pub const RELEASED: Self = Self {
        mode: true,
        up: true,
        down: true,
    };
}

pub struct ButtonPad {
    prev: ButtonLevels,
    debounce_ms: u32,
    last_accept_ms: u32,
    /// The gate only engages after the first accepted press; otherwise a
    /// press in the first `debounce_ms` after boot would be swallowed.
    gate_armed: bool,
}

impl ButtonPad {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            prev: ButtonLevels::RELEASED,
            debounce_ms,
            last_accept_ms: 0,
            gate_armed: false,
        }
    }

    /// Scan the pad once.  `levels` are the raw levels read this tick and
    /// `now_ms` the current monotonic time.  Returns the accepted events,
    /// in mode / up / down order.
    pub fn scan(&mut self, levels: ButtonLevels, now_ms: u32) -> Vec<ButtonEvent, 3> {
        let mut events = Vec::new();

        if self.gate_armed && now_ms.wrapping_sub(self.last_accept_ms) < self.debounce_ms {
            // Gate closed: suppress events but keep tracking levels.
            self.prev = levels;
            return events;
        }

        if !levels.mode && self.prev.mode {
            let _ = events.push(ButtonEvent::ModeToggle);
        }
        if !levels.up && self.prev.up {
            let _ = events.push(ButtonEvent::SpeedUp);
        }
        if !levels.down && self.prev.down {
            let _ = events.push(ButtonEvent::SpeedDown);
        }

        if !events.is_empty() {
            self.last_accept_ms = now_ms;
            self.gate_armed = true;
        }
        self.prev = levels;
        events
    }
}
