use bon::Builder;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::quantity::{energy::KilowattHours, power::Kilowatts};

/// One vertex of the piecewise-linear capacity curve.
///
/// Each observation appends one point; an observation that crosses a capacity
/// bound appends two — the interpolated crossing instant, then the curtailed
/// setpoint at the reading instant.
#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracePoint {
    pub time: NaiveDateTime,

    /// Setpoint in force up to `time`.
    pub power: Kilowatts,

    pub energy: KilowattHours,
}
