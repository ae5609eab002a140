//! Validated pin access
//!
//! [`GpioChip`] ties the pin catalog, the group registry, and a platform
//! [`GpioController`] together and exposes the operator-facing operations:
//! single-pin read/write, per-group listing, and full listing.
//!
//! The two reservation signals are applied asymmetrically, matching the
//! long-standing command surface: the single-pin get/set path is gated
//! only by the name-prefix check, while group listings apply the enabled
//! flag and the hardware pin-mask check. Unifying them would change
//! operator-visible safety behavior.

use crate::controller::{ControllerFeatures, GpioController, Level};
use crate::error::{Error, Result};

use super::catalog::{Direction, PinCatalog, Property};
use super::group::{GroupRegistry, PinGroup, GROUP_WIDTH};
use super::reserve::{reserved_by_catalog, reserved_by_mask, reserved_by_name, IndexMode};

/// Display name for logical indices at or beyond the catalog capacity
pub const UNDEFINED_NAME: &str = "Undefined";

/// Snapshot of one pin produced by the read and list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinReport {
    /// Flat logical index
    pub index: usize,
    /// Board net name
    pub name: &'static str,
    /// Electrical property from the catalog
    pub property: Property,
    /// Configured direction from the catalog
    pub direction: Direction,
    /// Direction observed in the group's direction register
    pub reg_direction: Direction,
    /// Live electrical level; `None` when the controller could not sample
    /// the line as 0 or 1
    pub level: Option<Level>,
    /// This pin's bit in the group's value register
    pub reg_bit: u8,
}

/// One entry of a listing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEntry {
    /// Fully-readable pin
    Report(PinReport),
    /// Catalog-disabled pin (group listings only)
    Disabled {
        /// Flat logical index
        index: usize,
    },
    /// Reserved pin: by hardware mask in group listings, by name prefix
    /// in full listings
    Reserved {
        /// Flat logical index
        index: usize,
    },
}

impl PinEntry {
    /// Flat logical index of this entry
    pub fn index(&self) -> usize {
        match self {
            PinEntry::Report(report) => report.index,
            PinEntry::Disabled { index } | PinEntry::Reserved { index } => *index,
        }
    }
}

/// All GPIO pins of one controller, addressed through the catalog and
/// group registry
#[derive(Debug)]
pub struct GpioChip<C> {
    catalog: PinCatalog,
    registry: GroupRegistry,
    controller: C,
}

impl<C: GpioController> GpioChip<C> {
    /// Bind a catalog and group registry to a controller
    ///
    /// # Panics
    ///
    /// Panics if the catalog is not padded to exactly the registry's
    /// index span - every group window slot must have a catalog entry.
    pub fn new(catalog: PinCatalog, registry: GroupRegistry, controller: C) -> Self {
        assert_eq!(
            catalog.capacity(),
            registry.index_span(),
            "pin catalog must cover the group index space"
        );
        Self {
            catalog,
            registry,
            controller,
        }
    }

    /// The pin catalog
    pub fn catalog(&self) -> &PinCatalog {
        &self.catalog
    }

    /// The group registry
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    /// The underlying controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutable access to the underlying controller
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Read one pin and build its report
    ///
    /// Only the name-prefix reservation check gates this path; the
    /// hardware pin mask is not consulted. No side effects.
    pub fn read_pin(&self, index: usize) -> Result<PinReport> {
        let pin = self.catalog.get(index).ok_or(Error::OutOfRange)?;
        if reserved_by_name(pin.name) {
            return Err(Error::Reserved);
        }

        let (group, bit) = self
            .registry
            .group_for_index(index)
            .ok_or(Error::OutOfRange)?;
        let g_val = self.controller.read_register(group.value_reg);
        let g_dir = self.controller.read_register(group.direction_reg());

        Ok(PinReport {
            index,
            name: pin.name,
            property: pin.property,
            direction: pin.direction,
            reg_direction: direction_from_bit(g_dir, bit),
            level: self.controller.pin_get(index),
            reg_bit: ((g_val >> bit) & 1) as u8,
        })
    }

    /// Drive one pin to `value` (0 or 1)
    ///
    /// Validation order matches the read path: index bounds, then the
    /// name-prefix reservation check, then the value check. The
    /// controller is not touched until all three pass.
    pub fn write_pin(&mut self, index: usize, value: u8) -> Result<()> {
        let pin = self.catalog.get(index).ok_or(Error::OutOfRange)?;
        if reserved_by_name(pin.name) {
            return Err(Error::Reserved);
        }
        if value > 1 {
            return Err(Error::InvalidValue);
        }

        log::debug!("gpio[{}] {} <- {}", index, pin.name, value);
        self.controller.pin_set(index, Level::from_bit(value as u32))
    }

    /// List every pin of a group device, in ascending group-relative order
    ///
    /// The group's value/direction registers are snapshotted once, when
    /// the iterator is constructed. The iterator yields exactly
    /// `pin_count` entries: disabled and mask-reserved pins become marker
    /// entries, with no live read performed for them. The mask check only
    /// applies when the controller advertises
    /// [`ControllerFeatures::PIN_MASK`].
    pub fn list_group(&self, device_name: &str) -> Result<GroupPins<'_, C>> {
        let ordinal = self
            .registry
            .index_by_device_name(device_name)
            .ok_or(Error::DeviceNotFound)?;
        let group = self.registry.group(ordinal).ok_or(Error::DeviceNotFound)?;

        let mask_check = self
            .controller
            .features()
            .contains(ControllerFeatures::PIN_MASK);

        Ok(GroupPins {
            chip: self,
            group,
            base: ordinal * GROUP_WIDTH,
            g_val: self.controller.read_register(group.value_reg),
            g_dir: self.controller.read_register(group.direction_reg()),
            mask_check,
            mask: self.controller.pin_mask(ordinal),
            rel: 0,
        })
    }

    /// List every logical pin through the single-pin read path
    ///
    /// Yields exactly `catalog.capacity()` entries in ascending index
    /// order; reserve-named pins become marker entries. As in the
    /// single-pin path, the hardware mask is not consulted.
    pub fn list_all(&self) -> AllPins<'_, C> {
        AllPins {
            chip: self,
            index: 0,
        }
    }

    /// Catalog name for a group-relative pin of a device
    ///
    /// `None` for unknown device names. Indices at or beyond the catalog
    /// capacity resolve to [`UNDEFINED_NAME`] so listings stay complete.
    pub fn pin_name(&self, device_name: &str, pin: usize) -> Option<&'static str> {
        let index = self.registry.logical_index(device_name, pin)?;
        Some(self.catalog.name(index).unwrap_or(UNDEFINED_NAME))
    }
}

fn direction_from_bit(g_dir: u32, bit: usize) -> Direction {
    if g_dir & (1u32 << bit) != 0 {
        Direction::Output
    } else {
        Direction::Input
    }
}

/// Iterator over one group's pins, produced by [`GpioChip::list_group`]
///
/// Finite and not restartable; holds the register snapshot taken at
/// construction.
pub struct GroupPins<'a, C> {
    chip: &'a GpioChip<C>,
    group: &'a PinGroup,
    base: usize,
    g_val: u32,
    g_dir: u32,
    mask_check: bool,
    mask: Option<u32>,
    rel: usize,
}

impl<C: GpioController> Iterator for GroupPins<'_, C> {
    type Item = PinEntry;

    fn next(&mut self) -> Option<PinEntry> {
        if self.rel >= self.group.pin_count {
            return None;
        }
        let rel = self.rel;
        self.rel += 1;
        let index = self.base + rel;

        let pin = match self.chip.catalog.get(index) {
            Some(pin) if !reserved_by_catalog(pin) => pin,
            _ => return Some(PinEntry::Disabled { index }),
        };

        if self.mask_check && reserved_by_mask(self.mask, rel, IndexMode::GroupRelative) {
            return Some(PinEntry::Reserved { index });
        }

        Some(PinEntry::Report(PinReport {
            index,
            name: pin.name,
            property: pin.property,
            direction: pin.direction,
            reg_direction: direction_from_bit(self.g_dir, rel),
            level: self.chip.controller.pin_get(index),
            reg_bit: ((self.g_val >> rel) & 1) as u8,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.group.pin_count - self.rel;
        (remaining, Some(remaining))
    }
}

impl<C: GpioController> ExactSizeIterator for GroupPins<'_, C> {}

/// Iterator over every logical pin, produced by [`GpioChip::list_all`]
pub struct AllPins<'a, C> {
    chip: &'a GpioChip<C>,
    index: usize,
}

impl<C: GpioController> Iterator for AllPins<'_, C> {
    type Item = PinEntry;

    fn next(&mut self) -> Option<PinEntry> {
        if self.index >= self.chip.catalog.capacity() {
            return None;
        }
        let index = self.index;
        self.index += 1;

        // read_pin can only fail Reserved for an in-range index
        match self.chip.read_pin(index) {
            Ok(report) => Some(PinEntry::Report(report)),
            Err(_) => Some(PinEntry::Reserved { index }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chip.catalog.capacity() - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: GpioController> ExactSizeIterator for AllPins<'_, C> {}
