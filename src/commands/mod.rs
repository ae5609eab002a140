//! Command implementations
//!
//! One module per command family, mirroring the `platform gpio` /
//! `platform sensor` / `platform note` surface. Every failure is handled
//! locally: the command prints one message for the operator and returns,
//! leaving the process alive.

use bmcdbg_core::controller::GpioController;
use bmcdbg_core::gpio::GpioChip;

pub mod gpio;
pub mod note;
pub mod sensor;

/// The chip type the commands operate on: any controller behind a box
pub type Chip = GpioChip<Box<dyn GpioController + Send>>;
