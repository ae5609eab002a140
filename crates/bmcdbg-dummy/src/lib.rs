//! bmcdbg-dummy - In-memory GPIO controller emulator for testing
//!
//! This crate provides a dummy controller that emulates the AST1030 GPIO
//! register block in memory. It's useful for testing and development
//! without real hardware: the register pairs, per-group pin masks, and
//! per-pin live reads all behave like the real controller, and failure
//! modes (rejected writes, unsampleable lines) can be switched on for
//! driving error paths.

use bmcdbg_core::controller::{ControllerFeatures, GpioController, Level};
use bmcdbg_core::error::{Error, Result};
use bmcdbg_core::gpio::{GroupRegistry, GROUP_WIDTH, NUM_GROUPS};
use thiserror::Error as ThisError;

/// Errors from dummy controller option parsing
#[derive(Debug, ThisError)]
pub enum DummyError {
    /// Option value could not be parsed
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Option key is not recognized
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Configuration for the dummy controller
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Per-group reserved-pin masks; `None` emulates a group device with
    /// no mask configuration at all
    pub pin_masks: [Option<u32>; NUM_GROUPS],
    /// Reject every pin write (for driving the error path)
    pub fail_writes: bool,
}

impl Default for DummyConfig {
    fn default() -> Self {
        let registry = GroupRegistry::ast1030();
        let mut pin_masks = [None; NUM_GROUPS];
        for (ordinal, mask) in pin_masks.iter_mut().enumerate() {
            if let Some(group) = registry.group(ordinal) {
                *mask = Some(full_mask(group.pin_count));
            }
        }
        Self {
            pin_masks,
            fail_writes: false,
        }
    }
}

/// All-usable mask for a group of the given width
const fn full_mask(pin_count: usize) -> u32 {
    if pin_count >= 32 {
        u32::MAX
    } else {
        (1u32 << pin_count) - 1
    }
}

/// Parse `(key, value)` controller options into a config
///
/// Supported keys:
///
/// - `mask<N>=<hex|none>` - override group N's pin mask (`none` emulates
///   a missing mask)
/// - `fail-writes=<0|1>` - reject every pin write
pub fn parse_options(options: &[(&str, &str)]) -> std::result::Result<DummyConfig, DummyError> {
    let mut config = DummyConfig::default();

    for &(key, value) in options {
        match key {
            "mask0" | "mask1" | "mask2" | "mask3" | "mask4" | "mask5" => {
                let ordinal = key.as_bytes()[4] as usize - b'0' as usize;
                config.pin_masks[ordinal] = parse_mask(value)?;
            }
            "fail-writes" => {
                config.fail_writes = parse_bool(key, value)?;
            }
            _ => return Err(DummyError::UnknownOption(key.to_string())),
        }
    }

    Ok(config)
}

fn parse_mask(s: &str) -> std::result::Result<Option<u32>, DummyError> {
    if s == "none" {
        return Ok(None);
    }
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16)
        .map(Some)
        .map_err(|e| DummyError::InvalidParameter(format!("mask '{}': {}", s, e)))
}

fn parse_bool(key: &str, s: &str) -> std::result::Result<bool, DummyError> {
    match s {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(DummyError::InvalidParameter(format!("{}={}", key, s))),
    }
}

/// Dummy GPIO controller
///
/// Emulates the AST1030 register block in memory.
pub struct DummyGpio {
    config: DummyConfig,
    registry: GroupRegistry,
    values: [u32; NUM_GROUPS],
    directions: [u32; NUM_GROUPS],
    dead: [u32; NUM_GROUPS],
}

impl DummyGpio {
    /// Create a new dummy controller with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        Self {
            config,
            registry: GroupRegistry::ast1030(),
            values: [0; NUM_GROUPS],
            directions: [0; NUM_GROUPS],
            dead: [0; NUM_GROUPS],
        }
    }

    /// Create a new dummy controller with the default configuration
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// Overwrite a group's value register
    pub fn set_value_reg(&mut self, group: usize, value: u32) {
        if let Some(reg) = self.values.get_mut(group) {
            *reg = value;
        }
    }

    /// Overwrite a group's direction register
    pub fn set_direction_reg(&mut self, group: usize, value: u32) {
        if let Some(reg) = self.directions.get_mut(group) {
            *reg = value;
        }
    }

    /// Mark a logical pin's line as unsampleable: its live reads return
    /// neither 0 nor 1 from now on
    pub fn set_line_dead(&mut self, index: usize) {
        let group = index / GROUP_WIDTH;
        if let Some(mask) = self.dead.get_mut(group) {
            *mask |= 1 << (index % GROUP_WIDTH);
        }
    }

    /// Group ordinal and bit position for a logical index, if the pin
    /// exists on the emulated part
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let ordinal = index / GROUP_WIDTH;
        let bit = index % GROUP_WIDTH;
        let group = self.registry.group(ordinal)?;
        if bit >= group.pin_count {
            return None;
        }
        Some((ordinal, bit))
    }
}

impl Default for DummyGpio {
    fn default() -> Self {
        Self::new_default()
    }
}

impl GpioController for DummyGpio {
    fn features(&self) -> ControllerFeatures {
        ControllerFeatures::PIN_MASK
    }

    fn pin_mask(&self, group: usize) -> Option<u32> {
        self.config.pin_masks.get(group).copied().flatten()
    }

    fn pin_get(&self, index: usize) -> Option<Level> {
        let (ordinal, bit) = self.locate(index)?;
        if self.dead[ordinal] & (1 << bit) != 0 {
            return None;
        }
        Some(Level::from_bit(self.values[ordinal] & (1 << bit)))
    }

    fn pin_set(&mut self, index: usize, level: Level) -> Result<()> {
        if self.config.fail_writes {
            return Err(Error::ControllerError);
        }
        let (ordinal, bit) = self.locate(index).ok_or(Error::ControllerError)?;
        match level {
            Level::High => self.values[ordinal] |= 1 << bit,
            Level::Low => self.values[ordinal] &= !(1 << bit),
        }
        Ok(())
    }

    fn read_register(&self, addr: u32) -> u32 {
        for (ordinal, group) in self.registry.groups().iter().enumerate() {
            if addr == group.value_reg {
                return self.values[ordinal];
            }
            if addr == group.direction_reg() {
                return self.directions[ordinal];
            }
        }
        log::trace!("read of unmapped register 0x{:08x}", addr);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmcdbg_core::gpio::GPIO_REG_BASE;

    #[test]
    fn test_default_masks_cover_defined_pins() {
        let dummy = DummyGpio::new_default();
        assert_eq!(dummy.pin_mask(0), Some(u32::MAX));
        assert_eq!(dummy.pin_mask(4), Some(u32::MAX));
        assert_eq!(dummy.pin_mask(5), Some(0xFFFF));
        assert_eq!(dummy.pin_mask(6), None);
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut dummy = DummyGpio::new_default();
        dummy.pin_set(3, Level::High).unwrap();
        assert_eq!(dummy.pin_get(3), Some(Level::High));
        assert_eq!(dummy.read_register(GPIO_REG_BASE), 0b1000);

        dummy.pin_set(3, Level::Low).unwrap();
        assert_eq!(dummy.pin_get(3), Some(Level::Low));
        assert_eq!(dummy.read_register(GPIO_REG_BASE), 0);
    }

    #[test]
    fn test_registers_decode_per_group() {
        let mut dummy = DummyGpio::new_default();
        // Logical pin 163 is bit 3 of the last group
        dummy.pin_set(163, Level::High).unwrap();
        assert_eq!(dummy.read_register(GPIO_REG_BASE + 0x88), 0b1000);
        assert_eq!(dummy.read_register(GPIO_REG_BASE), 0);

        dummy.set_direction_reg(0, 0xA5);
        assert_eq!(dummy.read_register(GPIO_REG_BASE + 0x4), 0xA5);
    }

    #[test]
    fn test_unmapped_register_reads_zero() {
        let dummy = DummyGpio::new_default();
        assert_eq!(dummy.read_register(0xdead_beef), 0);
    }

    #[test]
    fn test_undefined_pins_rejected() {
        let mut dummy = DummyGpio::new_default();
        // Bit 16 of the 16-pin last group does not exist
        assert_eq!(dummy.pin_get(176), None);
        assert_eq!(dummy.pin_set(176, Level::High), Err(Error::ControllerError));
        // Past the last group entirely
        assert_eq!(dummy.pin_get(200), None);
    }

    #[test]
    fn test_dead_line_is_unsampleable() {
        let mut dummy = DummyGpio::new_default();
        dummy.set_line_dead(7);
        assert_eq!(dummy.pin_get(7), None);
        assert_eq!(dummy.pin_get(8), Some(Level::Low));
    }

    #[test]
    fn test_fail_writes() {
        let mut dummy = DummyGpio::new(DummyConfig {
            fail_writes: true,
            ..DummyConfig::default()
        });
        assert_eq!(dummy.pin_set(0, Level::High), Err(Error::ControllerError));
        assert_eq!(dummy.pin_get(0), Some(Level::Low));
    }

    #[test]
    fn test_parse_options() {
        let config = parse_options(&[
            ("mask2", "0x3"),
            ("mask5", "none"),
            ("fail-writes", "1"),
        ])
        .unwrap();
        assert_eq!(config.pin_masks[2], Some(0x3));
        assert_eq!(config.pin_masks[5], None);
        assert!(config.fail_writes);
        // Untouched groups keep the defaults
        assert_eq!(config.pin_masks[0], Some(u32::MAX));
    }

    #[test]
    fn test_parse_options_rejects_garbage() {
        assert!(matches!(
            parse_options(&[("mask9", "0x1")]),
            Err(DummyError::UnknownOption(_))
        ));
        assert!(matches!(
            parse_options(&[("mask0", "zz")]),
            Err(DummyError::InvalidParameter(_))
        ));
        assert!(matches!(
            parse_options(&[("fail-writes", "maybe")]),
            Err(DummyError::InvalidParameter(_))
        ));
    }
}
