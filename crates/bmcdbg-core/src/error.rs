//! Error types for bmcdbg-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Pin addressing errors
    /// Logical pin index is outside the catalog capacity
    OutOfRange,
    /// Pin is excluded from shell-driven access by a reservation check
    Reserved,

    // Write errors
    /// Write value is not 0 or 1
    InvalidValue,
    /// The GPIO controller rejected the operation
    ControllerError,

    // Lookup errors
    /// No GPIO group device with the given name
    DeviceNotFound,
    /// No sensor with the given external number
    SensorNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "gpio index out of range"),
            Self::Reserved => write!(f, "pin is reserved"),
            Self::InvalidValue => write!(f, "value must be 0 or 1"),
            Self::ControllerError => write!(f, "controller rejected the operation"),
            Self::DeviceNotFound => write!(f, "gpio device not found"),
            Self::SensorNotFound => write!(f, "no such sensor number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
