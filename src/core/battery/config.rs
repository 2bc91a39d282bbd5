use bon::bon;

use crate::{
    core::battery::error::ConfigError,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Battery parameters, fixed at construction.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct BatteryConfig {
    /// Energy stored when tracking starts.
    pub initial_energy: KilowattHours,

    /// Usable capacity. Tracked energy is kept within `0..=capacity`.
    pub capacity: KilowattHours,

    /// Charging power limit (positive value).
    pub max_charging_power: Kilowatts,

    /// Discharging power limit (positive value).
    pub max_discharging_power: Kilowatts,
}

#[bon]
impl BatteryConfig {
    #[builder]
    pub fn new(
        initial_energy: KilowattHours,
        capacity: KilowattHours,
        max_charging_power: Kilowatts,
        max_discharging_power: Kilowatts,
    ) -> Result<Self, ConfigError> {
        if !capacity.0.is_finite() || capacity <= KilowattHours::zero() {
            return Err(ConfigError::NonPositiveCapacity { capacity });
        }
        if !initial_energy.0.is_finite()
            || initial_energy < KilowattHours::zero()
            || initial_energy > capacity
        {
            return Err(ConfigError::InitialEnergyOutOfRange { initial_energy, capacity });
        }
        for limit in [max_charging_power, max_discharging_power] {
            if !limit.0.is_finite() || limit < Kilowatts::zero() {
                return Err(ConfigError::InvalidPowerLimit { limit });
            }
        }
        Ok(Self { initial_energy, capacity, max_charging_power, max_discharging_power })
    }
}

impl BatteryConfig {
    /// Clamp a power reading into the allowed charge/discharge band.
    pub fn clamp_power(&self, power: Kilowatts) -> Kilowatts {
        power.clamp(-self.max_discharging_power, self.max_charging_power)
    }
}
