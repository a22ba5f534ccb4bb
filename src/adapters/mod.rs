//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to              |
//! |------------|--------------------|--------------------------|
//! | `hardware` | SensorPort         | ESP32 ADC                |
//! |            | ActuatorPort       | ESP32 PWM, GPIO          |
//! |            | InputPort          | ESP32 GPIO               |
//! | `serial`   | SerialPort         | UART0 console            |
//! | `display`  | DisplayPort        | Log console (LCD: TBD)   |
//! | `time`     | —                  | ESP32 system timer       |

pub mod display;
pub mod hardware;
pub mod serial;
pub mod time;
