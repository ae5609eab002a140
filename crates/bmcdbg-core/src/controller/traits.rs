//! Controller trait definitions
//!
//! A `GpioController` is the platform-supplied capability the core calls
//! through for every hardware touch: live per-pin reads and writes, raw
//! register snapshots, and the per-group reserved-pin masks configured by
//! firmware or devicetree. The core itself never dereferences a register
//! address.

use crate::error::Result;
use bitflags::bitflags;

bitflags! {
    /// GPIO controller capability flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControllerFeatures: u32 {
        /// Exposes a per-group reserved-pin mask (e.g. devicetree
        /// `gpio-reserved`). When absent, group listings skip the mask
        /// check entirely.
        const PIN_MASK = 1 << 0;
        /// Accepts direction writes. No shipped controller sets this yet;
        /// the `gpio set dir` command reports "not support" either way.
        const DIR_WRITE = 1 << 1;
    }
}

impl Default for ControllerFeatures {
    fn default() -> Self {
        ControllerFeatures::empty()
    }
}

/// Electrical level of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Driven or sampled low (0)
    Low,
    /// Driven or sampled high (1)
    High,
}

impl Level {
    /// Numeric value of the level (0 or 1)
    pub const fn value(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// Level from a register bit (0 is low, anything else is high)
    pub const fn from_bit(bit: u32) -> Self {
        if bit == 0 {
            Level::Low
        } else {
            Level::High
        }
    }
}

/// Platform GPIO controller capability
///
/// Implementations serialize access to the live hardware state themselves;
/// the core performs at most one read or one write per call and never
/// retries or batches.
pub trait GpioController {
    /// Get the features supported by this controller
    fn features(&self) -> ControllerFeatures;

    /// Hardware-configured reserved-pin mask for a group ordinal
    ///
    /// Bit *i* set means group-relative pin *i* is usable. `None` when the
    /// group device or its mask configuration is unavailable - callers
    /// must treat that as fully reserved.
    fn pin_mask(&self, group: usize) -> Option<u32>;

    /// Sample the live electrical level of a logical pin
    ///
    /// Returns `None` when the line cannot be read back as 0 or 1. This is
    /// a pure observation with no hardware side effects.
    fn pin_get(&self, index: usize) -> Option<Level>;

    /// Drive a logical pin to the given level
    ///
    /// Fails with [`crate::Error::ControllerError`] when the controller
    /// rejects the write.
    fn pin_set(&mut self, index: usize, level: Level) -> Result<()>;

    /// Raw 32-bit register snapshot
    ///
    /// Mirrors a direct MMIO read and is therefore infallible; unknown
    /// addresses read as implementation-defined garbage, exactly like the
    /// hardware.
    fn read_register(&self, addr: u32) -> u32;
}

// Blanket impl for boxed controllers to allow trait objects
#[cfg(feature = "alloc")]
impl GpioController for alloc::boxed::Box<dyn GpioController + Send> {
    fn features(&self) -> ControllerFeatures {
        (**self).features()
    }

    fn pin_mask(&self, group: usize) -> Option<u32> {
        (**self).pin_mask(group)
    }

    fn pin_get(&self, index: usize) -> Option<Level> {
        (**self).pin_get(index)
    }

    fn pin_set(&mut self, index: usize, level: Level) -> Result<()> {
        (**self).pin_set(index, level)
    }

    fn read_register(&self, addr: u32) -> u32 {
        (**self).read_register(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_value_round_trip() {
        assert_eq!(Level::Low.value(), 0);
        assert_eq!(Level::High.value(), 1);
        assert_eq!(Level::from_bit(0), Level::Low);
        assert_eq!(Level::from_bit(1), Level::High);
        assert_eq!(Level::from_bit(0x8000_0000), Level::High);
    }
}
