use serde::{Deserialize, Serialize};

use crate::core::battery::{state::BatteryState, trace::TracePoint};

/// Everything the tracker preserves between runs.
///
/// The storage medium is the caller's concern, the snapshot only fixes the shape.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub state: BatteryState,

    pub trace: Vec<TracePoint>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::quantity::{energy::KilowattHours, power::Kilowatts};

    #[test]
    fn round_trip() {
        let time = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(1, 30, 0).unwrap();
        let snapshot = Snapshot {
            state: BatteryState {
                residual_energy: KilowattHours(437.5),
                power_setpoint: Kilowatts(-100.0),
                last_update_at: Some(time),
            },
            trace: vec![
                TracePoint::builder()
                    .time(time)
                    .power(Kilowatts::zero())
                    .energy(KilowattHours(437.5))
                    .build(),
            ],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(serde_json::from_str::<Snapshot>(&json).unwrap(), snapshot);
    }

    /// Verify the stable field names of the persisted form.
    #[test]
    fn field_names() {
        let snapshot = Snapshot {
            state: BatteryState {
                residual_energy: KilowattHours(100.0),
                power_setpoint: Kilowatts::zero(),
                last_update_at: None,
            },
            trace: Vec::new(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("residualEnergy").is_some());
        assert!(json.get("powerSetpoint").is_some());
        assert!(json.get("lastUpdateAt").is_some());
        assert!(json.get("trace").is_some());
    }
}
