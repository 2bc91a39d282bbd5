use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write, stdin, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    core::battery::{config::BatteryConfig, reading::Reading, tracker::Tracker},
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts},
    store,
};

#[must_use]
#[derive(Parser)]
pub struct TrackArgs {
    /// Newline-delimited JSON readings, `-` for standard input.
    #[clap(long, env = "BATTERY_READINGS", default_value = "-")]
    readings: PathBuf,

    #[clap(flatten)]
    battery: BatteryParams,

    /// Preserve the tracker state in this file between runs.
    #[clap(long, env = "BATTERY_STATE_PATH")]
    state_path: Option<PathBuf>,

    /// Dump the recorded capacity curve to this file when the input is exhausted.
    #[clap(long, env = "BATTERY_TRACE_PATH")]
    trace_path: Option<PathBuf>,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
struct BatteryParams {
    /// Usable battery capacity in kilowatt-hours.
    #[clap(long, env = "BATTERY_CAPACITY", default_value = "500")]
    capacity: KilowattHours,

    /// Energy stored at the start of tracking, in kilowatt-hours.
    #[clap(long, env = "BATTERY_INITIAL_ENERGY", default_value = "500")]
    initial_energy: KilowattHours,

    /// Charging power limit in kilowatts.
    #[clap(long, env = "MAX_CHARGING_POWER", default_value = "1000")]
    max_charging_power: Kilowatts,

    /// Discharging power limit in kilowatts.
    #[clap(long, env = "MAX_DISCHARGING_POWER", default_value = "1000")]
    max_discharging_power: Kilowatts,
}

impl BatteryParams {
    fn into_config(self) -> Result<BatteryConfig> {
        let config = BatteryConfig::builder()
            .capacity(self.capacity)
            .initial_energy(self.initial_energy)
            .max_charging_power(self.max_charging_power)
            .max_discharging_power(self.max_discharging_power)
            .build()?;
        Ok(config)
    }
}

impl TrackArgs {
    pub fn run(self) -> Result {
        let config = self.battery.into_config()?;
        let mut tracker = if let Some(path) = &self.state_path
            && let Some(snapshot) = store::load(path)?
        {
            Tracker::import_state(config, snapshot)?
        } else {
            Tracker::new(config)
        };

        let reader: Box<dyn BufRead> = if self.readings.as_os_str() == "-" {
            Box::new(BufReader::new(stdin()))
        } else {
            let file = File::open(&self.readings).with_context(|| {
                format!("failed to open the readings at `{}`", self.readings.display())
            })?;
            Box::new(BufReader::new(file))
        };
        let mut output = BufWriter::new(stdout().lock());

        for line in reader.lines() {
            let line = line.context("failed to read the input")?;
            if line.trim().is_empty() {
                continue;
            }
            let reading: Reading = serde_json::from_str(&line)
                .with_context(|| format!("malformed reading: `{line}`"))?;
            match tracker.observe(reading) {
                Ok(observation) => {
                    serde_json::to_writer(&mut output, &observation)?;
                    output.write_all(b"\n")?;
                }
                // Rejected readings leave the state untouched.
                Err(error) => warn!(%error, "skipping the reading"),
            }
        }
        output.flush().context("failed to flush the output")?;

        if let Some(path) = &self.trace_path {
            store::save_trace(path, tracker.trace())?;
        }
        if let Some(path) = &self.state_path {
            store::save(path, &tracker.export_state())?;
        }
        Ok(())
    }
}
