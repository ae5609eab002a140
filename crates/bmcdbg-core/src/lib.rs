//! bmcdbg-core - Core library for BMC platform debug access
//!
//! This crate provides the GPIO addressing/translation and access-control
//! logic behind the `bmcdbg` platform debug commands, plus read-only access
//! to cached sensor snapshots. It is designed to be `no_std` compatible for
//! use on the BMC itself; the host-side CLI enables the `std` feature.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation (required for the sensor table)
//!
//! # Example
//!
//! ```ignore
//! use bmcdbg_core::controller::GpioController;
//! use bmcdbg_core::gpio::{GpioChip, GroupRegistry};
//!
//! fn dump_pin<C: GpioController>(chip: &GpioChip<C>) {
//!     match chip.read_pin(42) {
//!         Ok(report) => println!("{}: {:?}", report.name, report.level),
//!         Err(e) => println!("read failed: {}", e),
//!     }
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod controller;
pub mod error;
pub mod gpio;
pub mod sensor;

pub use error::{Error, Result};
