use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::quantity::power::Kilowatts;

/// One timestamped power measurement from the upstream meter.
#[must_use]
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Reading {
    /// Measurement instant. Zoned timestamps are accepted, their offset is dropped.
    #[serde(alias = "Time", deserialize_with = "deserialize_naive_instant")]
    pub time: NaiveDateTime,

    /// Measured power: positive charges the battery, negative discharges it.
    #[serde(alias = "Power")]
    pub power: Kilowatts,
}

fn deserialize_naive_instant<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(instant) = raw.parse::<NaiveDateTime>() {
        return Ok(instant);
    }
    raw.parse::<DateTime<FixedOffset>>()
        .map(|zoned| zoned.naive_local())
        .map_err(serde::de::Error::custom)
}
