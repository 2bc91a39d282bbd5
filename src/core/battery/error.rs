use chrono::NaiveDateTime;

use crate::quantity::{energy::KilowattHours, power::Kilowatts};

/// Rejection of a single reading. The tracker state is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("reading at {reading} predates the last update at {last_update}")]
    TimeWentBackwards {
        reading: NaiveDateTime,
        last_update: NaiveDateTime,
    },

    #[error("power reading is not finite: {power}")]
    NonFinitePower { power: f64 },
}

/// Invalid construction parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("battery capacity must be positive and finite, got {capacity}")]
    NonPositiveCapacity { capacity: KilowattHours },

    #[error("initial energy {initial_energy} is outside 0..={capacity}")]
    InitialEnergyOutOfRange {
        initial_energy: KilowattHours,
        capacity: KilowattHours,
    },

    #[error("power limit must be non-negative and finite, got {limit}")]
    InvalidPowerLimit { limit: Kilowatts },

    #[error("restored energy {energy} is outside 0..={capacity}")]
    RestoredEnergyOutOfRange {
        energy: KilowattHours,
        capacity: KilowattHours,
    },

    #[error("restored setpoint {setpoint} exceeds the configured power limits")]
    RestoredSetpointOutOfRange { setpoint: Kilowatts },
}
