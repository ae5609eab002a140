//! CLI argument parsing

use crate::controllers;
use clap::{Parser, Subcommand};

/// Parse a sensor number: hex by convention, with or without a 0x prefix
fn parse_sensor_num(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("Invalid sensor number: {}", e))
}

/// Generate dynamic help text for the controller argument
fn controller_help() -> String {
    format!(
        "Controller to use [available: {}]",
        controllers::controller_names_short()
    )
}

#[derive(Parser)]
#[command(name = "bmcdbg")]
#[command(author, version, about = "BMC platform debug commands", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Controller to use
    #[arg(short, long, global = true, default_value = "dummy", help = controller_help())]
    pub controller: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// GPIO relative commands
    Gpio {
        #[command(subcommand)]
        command: GpioCommands,
    },

    /// Sensor relative commands
    Sensor {
        #[command(subcommand)]
        command: SensorCommands,
    },

    /// Print the platform command info banner
    Note,
}

#[derive(Subcommand)]
pub enum GpioCommands {
    /// List all GPIO config from a certain group
    ListGroup {
        /// Group device name (e.g. GPIO0_A_D)
        device: String,
    },

    /// List all GPIO config
    ListAll,

    /// Get one GPIO config
    Get {
        /// Logical pin index (decimal)
        index: usize,
    },

    /// Set a certain GPIO config
    Set {
        #[command(subcommand)]
        command: GpioSetCommands,
    },
}

#[derive(Subcommand)]
pub enum GpioSetCommands {
    /// Set pin value
    Val {
        /// Logical pin index (decimal)
        index: usize,
        /// Value to drive (0 or 1)
        value: u8,
    },

    /// Set pin direction
    Dir {
        /// Logical pin index (decimal)
        index: usize,
        /// Direction value
        value: u8,
    },
}

#[derive(Subcommand)]
pub enum SensorCommands {
    /// List all sensors' info
    ListAll,

    /// Get one sensor info
    Get {
        /// Sensor number (hex)
        #[arg(value_parser = parse_sensor_num)]
        num: u16,
    },

    /// Set a certain sensor config
    Set {
        #[command(subcommand)]
        command: SensorSetCommands,
    },
}

#[derive(Subcommand)]
pub enum SensorSetCommands {
    /// Set sensor polling enable/disable
    Polling,
    /// Set sensor MBR
    Mbr,
    /// Set sensor THRESHOLD
    Threshold,
}
