//! Reservation checks
//!
//! Two independent signals can reserve a pin: the board catalog (name
//! prefix convention, enabled flag) and the hardware-configured per-group
//! pin mask. They are deliberately separate predicates - the single-pin
//! access path applies only the name check while group listings apply the
//! mask check, and that asymmetry is part of the command surface.

use super::catalog::PinConfig;
use super::group::GROUP_WIDTH;

/// Name prefix marking pins reserved by naming convention
pub const RESERVE_PREFIX: &str = "Reserve";

/// How an index handed to the mask check is interpreted
///
/// The interpretation is always explicit. Silently guessing which index
/// space a caller meant is how a debug command ends up toggling a pin
/// reserved by another subsystem and hanging the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// The index is already group-relative
    GroupRelative,
    /// The index is a flat logical index; it is reduced modulo the group
    /// width (32) first
    Global,
}

/// Mask-based reservation check
///
/// A pin is reserved when the group has no usable mask at all (`None` or
/// zero - the mask itself is meaningless, so the whole group is treated
/// as unsafe) or when the mask bit for the pin is unset.
pub fn reserved_by_mask(mask: Option<u32>, index: usize, mode: IndexMode) -> bool {
    let Some(mask) = mask else {
        return true;
    };
    if mask == 0 {
        return true;
    }

    let bit = match mode {
        IndexMode::GroupRelative => index,
        IndexMode::Global => index % GROUP_WIDTH,
    };

    // No mask bit exists past the register width
    if bit >= GROUP_WIDTH {
        return true;
    }

    mask & (1u32 << bit) == 0
}

/// Name-based reservation check (fixed-prefix, case-sensitive)
pub fn reserved_by_name(name: &str) -> bool {
    name.starts_with(RESERVE_PREFIX)
}

/// Catalog-based reservation check: disabled pins are never accessible
pub fn reserved_by_catalog(pin: &PinConfig) -> bool {
    !pin.enabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::catalog::{Direction, PinConfig, Property};

    #[test]
    fn test_absent_or_zero_mask_is_fully_reserved() {
        assert!(reserved_by_mask(None, 0, IndexMode::GroupRelative));
        assert!(reserved_by_mask(Some(0), 0, IndexMode::GroupRelative));
        assert!(reserved_by_mask(Some(0), 31, IndexMode::Global));
    }

    #[test]
    fn test_mask_bit_selects_pin() {
        let mask = Some(0b1010);
        assert!(reserved_by_mask(mask, 0, IndexMode::GroupRelative));
        assert!(!reserved_by_mask(mask, 1, IndexMode::GroupRelative));
        assert!(reserved_by_mask(mask, 2, IndexMode::GroupRelative));
        assert!(!reserved_by_mask(mask, 3, IndexMode::GroupRelative));
    }

    #[test]
    fn test_global_mode_reduces_modulo_group_width() {
        // Flat index 33 is bit 1 of its group
        let mask = Some(0b0010);
        assert!(!reserved_by_mask(mask, 33, IndexMode::Global));
        assert!(reserved_by_mask(mask, 32, IndexMode::Global));
        // The same index taken group-relative points past the register
        assert!(reserved_by_mask(mask, 33, IndexMode::GroupRelative));
    }

    #[test]
    fn test_name_prefix() {
        assert!(reserved_by_name("Reserve_GPIOH3"));
        assert!(reserved_by_name("Reserve"));
        assert!(!reserved_by_name("reserve_gpioh3"));
        assert!(!reserved_by_name("RST_BMC_R_N"));
        assert!(!reserved_by_name(""));
    }

    #[test]
    fn test_catalog_enabled_flag() {
        let enabled = PinConfig::new("PWRGD_SYS_PWROK", Direction::Input, Property::PushPull);
        let disabled = PinConfig::disabled("Reserve_GPIOA2");
        assert!(!reserved_by_catalog(&enabled));
        assert!(reserved_by_catalog(&disabled));
    }
}
