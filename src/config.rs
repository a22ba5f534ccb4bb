//! System configuration parameters
//!
//! All tunable parameters for the fanctl controller.  The defaults carry the
//! cadences the board was characterised with; a host can push a replacement
//! config over the serial channel in a future protocol revision.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Periodic task cadences ---
    /// Climate/ambient sensor sampling interval (milliseconds)
    pub sensor_interval_ms: u32,
    /// Display refresh interval (milliseconds)
    pub display_interval_ms: u32,
    /// Telemetry push interval (milliseconds)
    pub telemetry_interval_ms: u32,

    // --- Input handling ---
    /// Shared debounce window for all three buttons (milliseconds)
    pub button_debounce_ms: u32,
    /// Manual setpoint change per up/down button press (percent)
    pub manual_speed_step: u8,

    // --- Main loop ---
    /// Control loop poll interval (milliseconds)
    pub loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Cadences
            sensor_interval_ms: 1000,
            display_interval_ms: 500,
            telemetry_interval_ms: 1000,

            // Input
            button_debounce_ms: 200,
            manual_speed_step: 10,

            // Loop
            loop_interval_ms: 10, // 100 Hz poll keeps button latency low
        }
    }
}
