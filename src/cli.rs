mod track;

use clap::{Parser, Subcommand};

pub use self::track::TrackArgs;

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Track the battery state of charge over a stream of power readings.
    #[clap(name = "track")]
    Track(Box<TrackArgs>),
}
