//! GPIO / peripheral pin assignments for the fanctl controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Fan motor driver (N-channel MOSFET low-side switch)
// ---------------------------------------------------------------------------

/// LEDC PWM output for fan speed control.
pub const FAN_PWM_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// Piezo buzzer (passive, LEDC-driven)
// ---------------------------------------------------------------------------

/// LEDC PWM output for tone generation.
pub const BUZZER_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Analog humidity sensor (HIH-4030 class) — ratiometric voltage output.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const HUMIDITY_ADC_GPIO: i32 = 5;

/// Photoresistor divider for ambient light.
/// ADC1 channel 5 (GPIO 6 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 6;

/// Electret microphone amplifier envelope output for ambient sound.
/// ADC1 channel 6 (GPIO 7 on ESP32-S3).
pub const SOUND_ADC_GPIO: i32 = 7;

/// NTC thermistor — 10 kΩ @ 25 °C, voltage-divider to ADC.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Mode indicator LEDs (discrete, active HIGH)
// ---------------------------------------------------------------------------

/// Lit while the controller is in AUTO mode.
pub const LED_AUTO_GPIO: i32 = 11;
/// Lit while the controller is in MANUAL mode.
pub const LED_MANUAL_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// User buttons (momentary, active-low with internal pull-ups)
// ---------------------------------------------------------------------------

/// Toggles between AUTO and MANUAL mode.
pub const BUTTON_MODE_GPIO: i32 = 16;
/// Raises the manual speed setpoint.
pub const BUTTON_UP_GPIO: i32 = 17;
/// Lowers the manual speed setpoint.
pub const BUTTON_DOWN_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the fan motor (25 kHz — inaudible).
pub const FAN_PWM_FREQ_HZ: u32 = 25_000;
/// LEDC idle frequency for the buzzer timer (retuned per chirp).
pub const BUZZER_PWM_FREQ_HZ: u32 = 1_000;
