use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{
    core::battery::{
        config::BatteryConfig,
        error::{ConfigError, ReadingError},
        reading::Reading,
        snapshot::Snapshot,
        state::BatteryState,
        trace::TracePoint,
    },
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, time::Hours},
};

/// Battery state-of-charge tracker.
///
/// Each reading closes the interval since the previous one: the setpoint that
/// was in force is integrated over the elapsed hours, the result is kept
/// within `0..=capacity`, and the new reading's clamped power becomes the
/// setpoint for the next interval.
#[must_use]
#[derive(Debug)]
pub struct Tracker {
    config: BatteryConfig,
    state: BatteryState,
    trace: Vec<TracePoint>,
}

/// Capacity at a given instant, reported back to the caller.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub capacity: KilowattHours,
    pub timestamp: NaiveDateTime,
}

impl Tracker {
    pub fn new(config: BatteryConfig) -> Self {
        Self {
            state: BatteryState {
                residual_energy: config.initial_energy,
                power_setpoint: Kilowatts::zero(),
                last_update_at: None,
            },
            trace: Vec::new(),
            config,
        }
    }

    /// Restore a tracker from a previously exported snapshot.
    ///
    /// The snapshot must be consistent with the configuration: a snapshot
    /// taken against different battery parameters is rejected rather than
    /// silently clamped.
    pub fn import_state(config: BatteryConfig, snapshot: Snapshot) -> Result<Self, ConfigError> {
        let state = snapshot.state;
        if state.residual_energy < KilowattHours::zero()
            || state.residual_energy > config.capacity
        {
            return Err(ConfigError::RestoredEnergyOutOfRange {
                energy: state.residual_energy,
                capacity: config.capacity,
            });
        }
        if state.power_setpoint < -config.max_discharging_power
            || state.power_setpoint > config.max_charging_power
        {
            return Err(ConfigError::RestoredSetpointOutOfRange {
                setpoint: state.power_setpoint,
            });
        }
        Ok(Self { config, state, trace: snapshot.trace })
    }

    pub fn export_state(&self) -> Snapshot {
        Snapshot { state: self.state, trace: self.trace.clone() }
    }

    pub const fn state(&self) -> &BatteryState {
        &self.state
    }

    /// Recorded vertices of the piecewise-linear capacity curve, in order.
    #[must_use]
    pub fn trace(&self) -> &[TracePoint] {
        &self.trace
    }

    /// Advance the state to the reading's instant and return the capacity there.
    ///
    /// Fails without touching the state when the reading goes back in time or
    /// carries a non-finite power.
    pub fn observe(&mut self, reading: Reading) -> Result<Observation, ReadingError> {
        if !reading.power.0.is_finite() {
            return Err(ReadingError::NonFinitePower { power: reading.power.0 });
        }

        if let Some(last_update_at) = self.state.last_update_at {
            let elapsed = reading.time - last_update_at;
            if elapsed < TimeDelta::zero() {
                return Err(ReadingError::TimeWentBackwards {
                    reading: reading.time,
                    last_update: last_update_at,
                });
            }
            self.integrate(reading.time, elapsed);
        } else {
            // The first reading opens the curve, there is no interval to integrate yet.
            self.trace.push(
                TracePoint::builder()
                    .time(reading.time)
                    .power(self.state.power_setpoint)
                    .energy(self.state.residual_energy)
                    .build(),
            );
        }

        self.state.last_update_at = Some(reading.time);
        self.state.power_setpoint = self.config.clamp_power(reading.power);
        debug!(setpoint = ?self.state.power_setpoint, at = %reading.time, "stored the new setpoint");

        Ok(Observation { capacity: self.state.residual_energy, timestamp: reading.time })
    }

    /// Apply the in-force setpoint over the elapsed interval, capping at the capacity bounds.
    fn integrate(&mut self, until: NaiveDateTime, elapsed: TimeDelta) {
        let setpoint = self.state.power_setpoint;
        let provisional = self.state.residual_energy + setpoint * Hours::from(elapsed);

        // A zero setpoint cannot move the energy across a bound.
        if setpoint > Kilowatts::zero() && provisional >= self.config.capacity {
            self.cross_bound(until, provisional, self.config.capacity);
        } else if setpoint < Kilowatts::zero() && provisional < KilowattHours::zero() {
            self.cross_bound(until, provisional, KilowattHours::zero());
        } else {
            self.state.residual_energy = provisional;
            self.trace.push(
                TracePoint::builder().time(until).power(setpoint).energy(provisional).build(),
            );
        }
    }

    /// The battery hit `bound` within the interval: record the interpolated
    /// crossing instant, then the curtailed setpoint at the interval's end.
    fn cross_bound(
        &mut self,
        until: NaiveDateTime,
        provisional: KilowattHours,
        bound: KilowattHours,
    ) {
        let setpoint = self.state.power_setpoint;
        // Walk back from the interval end by the overshoot at the in-force power.
        let crossed_at = until - TimeDelta::from((provisional - bound) / setpoint);
        self.trace.push(
            TracePoint::builder().time(crossed_at).power(setpoint).energy(bound).build(),
        );
        self.trace.push(
            TracePoint::builder().time(until).power(Kilowatts::zero()).energy(bound).build(),
        );
        self.state.residual_energy = bound;
    }
}
