//! bmcdbg - BMC platform debug commands
//!
//! A host-side rendition of the `platform` debug shell: enumerate, read,
//! and write GPIO pins and query cached sensor readings.
//!
//! # Architecture
//!
//! The core addressing and access-control logic lives in `bmcdbg-core`
//! behind the `GpioController` trait; this binary wires it to a concrete
//! controller backend (the in-memory dummy emulator), the board pin and
//! sensor tables, and the clap command dispatch. Every command failure is
//! reported as one operator-facing message; nothing is fatal.

mod board;
mod cli;
mod commands;
mod controllers;

use clap::Parser;
use cli::{Cli, Commands, GpioCommands, GpioSetCommands, SensorCommands, SensorSetCommands};

use bmcdbg_core::gpio::{GpioChip, GroupRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let controller = controllers::open(&cli.controller)?;
    let mut chip = GpioChip::new(board::catalog(), GroupRegistry::ast1030(), controller);

    log::debug!(
        "catalog: {} pins across {} groups",
        chip.catalog().capacity(),
        chip.registry().len()
    );

    match cli.command {
        Commands::Gpio { command } => match command {
            GpioCommands::ListGroup { device } => commands::gpio::run_list_group(&chip, &device),
            GpioCommands::ListAll => commands::gpio::run_list_all(&chip),
            GpioCommands::Get { index } => commands::gpio::run_get(&chip, index),
            GpioCommands::Set { command } => match command {
                GpioSetCommands::Val { index, value } => {
                    commands::gpio::run_set_val(&mut chip, index, value)
                }
                GpioSetCommands::Dir { index, value } => commands::gpio::run_set_dir(index, value),
            },
        },

        Commands::Sensor { command } => match command {
            SensorCommands::ListAll => commands::sensor::run_list_all(board::sensors()),
            SensorCommands::Get { num } => commands::sensor::run_get(board::sensors(), num),
            SensorCommands::Set { command } => match command {
                SensorSetCommands::Polling => commands::sensor::run_set_polling(),
                SensorSetCommands::Mbr => commands::sensor::run_set_mbr(),
                SensorSetCommands::Threshold => commands::sensor::run_set_threshold(),
            },
        },

        Commands::Note => commands::note::run(),
    }

    Ok(())
}
