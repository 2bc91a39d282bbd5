#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod store;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    match args.command {
        Command::Track(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
