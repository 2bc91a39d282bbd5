use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::quantity::{energy::KilowattHours, power::Kilowatts};

/// The mutable part of the tracker, advanced by one reading at a time.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryState {
    /// Energy currently stored, kept within `0..=capacity`.
    #[serde(rename = "residualEnergy")]
    pub residual_energy: KilowattHours,

    /// Clamped power in force since the last reading, to be integrated over the next interval.
    #[serde(rename = "powerSetpoint")]
    pub power_setpoint: Kilowatts,

    /// Instant the state corresponds to; `None` until the first reading arrives.
    #[serde(rename = "lastUpdateAt")]
    pub last_update_at: Option<NaiveDateTime>,
}
