//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver.  Climate reads carry a validity
//! signal (`None` on failure, the pair is never half-applied); ambient
//! reads are unconditional raw levels.

pub mod ambient;
pub mod climate;

use log::warn;

use ambient::{AmbientReading, AmbientSensors};
use climate::{ClimateReading, ClimateSensor};

/// Aggregates all sensor drivers.
pub struct SensorHub {
    climate: ClimateSensor,
    ambient: AmbientSensors,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(climate: ClimateSensor, ambient: AmbientSensors) -> Self {
        Self { climate, ambient }
    }

    /// Read the climate pair.  A failed read is logged and reported as
    /// `None` — the control loop retains its previous values and tries
    /// again on the next scheduled sample, never sooner.
    pub fn read_climate(&mut self) -> Option<ClimateReading> {
        match self.climate.read() {
            Ok(reading) => Some(reading),
            Err(e) => {
                warn!("climate read failed ({e}), keeping previous values");
                None
            }
        }
    }

    /// Read the ambient light/sound levels (always succeeds).
    pub fn read_ambient(&mut self) -> AmbientReading {
        self.ambient.read()
    }
}
