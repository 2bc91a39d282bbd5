use std::ops::Div;

use crate::quantity::{power::Kilowatts, time::Hours};

quantity!(KilowattHours, "kWh");

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, power: Kilowatts) -> Self::Output {
        Hours(self.0 / power.0)
    }
}
