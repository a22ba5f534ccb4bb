//! Automatic fan speed policy.
//!
//! Two independent piecewise-threshold tier functions — one over
//! temperature, one over humidity — combined by taking the maximum, so
//! either hot air or damp air can push the fan up and neither can pull it
//! below what the other demands.  Deliberately not a feedback controller:
//! the thresholds come straight from the board's characterisation.

/// Speed contribution from temperature (°C), percent.
///
/// Tiers: `<25 → 0`, `[25,28) → 30`, `[28,32) → 60`, `≥32 → 100`.
pub fn temperature_tier(temperature_c: f32) -> u8 {
    if temperature_c < 25.0 {
        0
    } else if temperature_c < 28.0 {
        30
    } else if temperature_c < 32.0 {
        60
    } else {
        100
    }
}

/// Speed contribution from relative humidity (%), percent.
///
/// Tiers: `<60 → 20`, `[60,70] → 40`, `>70 → 80`.  The mid band is closed
/// on both ends — the comparisons are `< 60` and `> 70`, everything else
/// falls through to 40.
pub fn humidity_tier(humidity_pct: f32) -> u8 {
    if humidity_pct < 60.0 {
        20
    } else if humidity_pct > 70.0 {
        80
    } else {
        40
    }
}

/// Recommended fan speed (percent) for the given climate pair.
pub fn auto_speed(temperature_c: f32, humidity_pct: f32) -> u8 {
    temperature_tier(temperature_c).max(humidity_tier(humidity_pct))
}
