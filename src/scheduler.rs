//! Periodic task scheduling for the control loop.
//!
//! Each periodic task (sensor sample, display refresh, telemetry push) owns
//! an independent [`IntervalTimer`]; the timers are never forced into phase
//! with each other.  Firing resets a timer's reference point to *now* — the
//! interval measures wall-clock cadence and does not try to repay drift.
//!
//! Time is a `u32` millisecond counter supplied by the caller (hardware
//! timer on target, plain values in tests).  All comparisons use wrapping
//! arithmetic so the 49-day rollover is harmless.

use crate::config::SystemConfig;

// ═══════════════════════════════════════════════════════════════
//  IntervalTimer
// ═══════════════════════════════════════════════════════════════

/// A single periodic task's cadence tracker.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: u32,
    last_fired_ms: u32,
}

impl IntervalTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_fired_ms: 0,
        }
    }

    /// Check whether the task is due at `now_ms`.  If so, the reference
    /// point moves to `now_ms` and the call returns `true`.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_fired_ms) >= self.interval_ms {
            self.last_fired_ms = now_ms;
            true
        } else {
            false
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

// ═══════════════════════════════════════════════════════════════
//  ScheduleTimers
// ═══════════════════════════════════════════════════════════════

/// The three periodic tasks of the control loop, each on its own clock.
#[derive(Debug, Clone)]
pub struct ScheduleTimers {
    pub sample: IntervalTimer,
    pub display: IntervalTimer,
    pub telemetry: IntervalTimer,
}

impl ScheduleTimers {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            sample: IntervalTimer::new(config.sensor_interval_ms),
            display: IntervalTimer::new(config.display_interval_ms),
            telemetry: IntervalTimer::new(config.telemetry_interval_ms),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
