//! GPIO group registry
//!
//! Each group is a named device covering up to 32 physically co-located
//! pins behind one value/direction register pair. The registry replaces
//! the usual hand-maintained parallel arrays (name list, register list,
//! pin-count list) with a single record per group, so the ordinal order
//! cannot drift between them.

/// Base address of the AST1030 GPIO register block
pub const GPIO_REG_BASE: u32 = 0x7e78_0000;

/// Number of GPIO groups on the AST1030
pub const NUM_GROUPS: usize = 6;

/// Width of one group's window in the flat logical index space
///
/// Every group occupies a full 32-index window regardless of how many
/// pins it actually has; the short last group simply never addresses its
/// upper slots.
pub const GROUP_WIDTH: usize = 32;

/// Total logical pin slots spanned by the AST1030 groups (5 * 32 + 16)
pub const AST1030_PIN_COUNT: usize = 176;

/// One GPIO group device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinGroup {
    /// Device name exposed to the command dispatcher
    pub device_name: &'static str,
    /// Number of pins actually present in this group
    pub pin_count: usize,
    /// Address of the 32-bit value register
    pub value_reg: u32,
}

impl PinGroup {
    /// Create a group record
    pub const fn new(device_name: &'static str, pin_count: usize, value_reg: u32) -> Self {
        Self {
            device_name,
            pin_count,
            value_reg,
        }
    }

    /// Address of the direction register (value register + 4; bit = 1
    /// means output-driven-by-register)
    pub const fn direction_reg(&self) -> u32 {
        self.value_reg + 0x4
    }
}

static AST1030_GROUPS: [PinGroup; NUM_GROUPS] = [
    PinGroup::new("GPIO0_A_D", 32, GPIO_REG_BASE),
    PinGroup::new("GPIO0_E_H", 32, GPIO_REG_BASE + 0x20),
    PinGroup::new("GPIO0_I_L", 32, GPIO_REG_BASE + 0x70),
    PinGroup::new("GPIO0_M_P", 32, GPIO_REG_BASE + 0x78),
    PinGroup::new("GPIO0_Q_T", 32, GPIO_REG_BASE + 0x80),
    PinGroup::new("GPIO0_U_V", 16, GPIO_REG_BASE + 0x88),
];

/// Ordered, immutable table of GPIO groups
///
/// Group ordinal order is fixed; it defines both the logical index
/// windows and the register mapping.
#[derive(Debug, Clone, Copy)]
pub struct GroupRegistry {
    groups: &'static [PinGroup],
}

impl GroupRegistry {
    /// Wrap a static group table
    pub const fn new(groups: &'static [PinGroup]) -> Self {
        Self { groups }
    }

    /// The fixed AST1030 six-group table
    pub const fn ast1030() -> Self {
        Self::new(&AST1030_GROUPS)
    }

    /// All groups in ordinal order
    pub fn groups(&self) -> &[PinGroup] {
        self.groups
    }

    /// Number of groups
    pub const fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if the registry has no groups
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group record for an ordinal
    pub fn group(&self, ordinal: usize) -> Option<&PinGroup> {
        self.groups.get(ordinal)
    }

    /// Ordinal for a device name (case-sensitive exact match)
    ///
    /// Names are unique by construction; the first match wins.
    pub fn index_by_device_name(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.device_name == name)
    }

    /// Flat logical index for a group-relative pin
    ///
    /// Returns `group_relative + 32 * ordinal`, or `None` for unknown
    /// device names. The result is not bounds-checked against the
    /// catalog; indices at or beyond catalog capacity resolve to the
    /// "Undefined" display name rather than an error.
    pub fn logical_index(&self, device_name: &str, group_relative: usize) -> Option<usize> {
        self.index_by_device_name(device_name)
            .map(|ordinal| group_relative + GROUP_WIDTH * ordinal)
    }

    /// Owning group and bit position for a flat logical index
    pub fn group_for_index(&self, index: usize) -> Option<(&PinGroup, usize)> {
        self.groups
            .get(index / GROUP_WIDTH)
            .map(|g| (g, index % GROUP_WIDTH))
    }

    /// Span of the flat index space covered by the group windows
    ///
    /// Full 32-index windows for every group but the last, plus the last
    /// group's actual pin count. The catalog must be padded to exactly
    /// this many entries.
    pub fn index_span(&self) -> usize {
        match self.groups.last() {
            Some(last) => GROUP_WIDTH * (self.groups.len() - 1) + last.pin_count,
            None => 0,
        }
    }
}
