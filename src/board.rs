//! Board pin and sensor tables
//!
//! The platform data the core tables are built from: one `PinConfig` per
//! logical pin slot (padded to the full group index space with Reserve
//! entries) and the registered sensor snapshots with their access
//! checkers.

use bmcdbg_core::gpio::{Direction, PinCatalog, PinConfig, Property, AST1030_PIN_COUNT};
use bmcdbg_core::sensor::{
    AccessChecker, AlwaysAccessible, CacheStatus, Sensor, SensorTable, SensorType,
};
use once_cell::sync::Lazy;

const fn input(name: &'static str) -> PinConfig {
    PinConfig::new(name, Direction::Input, Property::PushPull)
}

const fn output(name: &'static str) -> PinConfig {
    PinConfig::new(name, Direction::Output, Property::PushPull)
}

const fn output_od(name: &'static str) -> PinConfig {
    PinConfig::new(name, Direction::Output, Property::OpenDrain)
}

const fn reserve(name: &'static str) -> PinConfig {
    PinConfig::disabled(name)
}

/// Logical pin table, padded to the full group index space
pub static BOARD_PINS: [PinConfig; AST1030_PIN_COUNT] = [
    // GPIOA
    output("FM_BMC_PWRBTN_OUT_N"),
    input("FM_PWR_BTN_N"),
    input("PWRGD_SYS_PWROK"),
    input("RST_PLTRST_BMC_N"),
    input("FM_SLPS3_PLD_N"),
    input("FM_SLPS4_PLD_N"),
    input("IRQ_BMC_PCH_SMI_LPC_N"),
    input("FM_CPU_ERR0_LVT3_N"),
    // GPIOB
    input("FM_CPU_ERR1_LVT3_N"),
    input("FM_CPU_ERR2_LVT3_N"),
    input("FM_CPU_THERMTRIP_LVT3_N"),
    input("FM_CPU_CATERR_LVT3_N"),
    reserve("Reserve_GPIOB4"),
    input("FM_CPU_MEMHOT_OUT_N"),
    output("FM_FAST_PROCHOT_EN_N"),
    output_od("FM_BMC_PROCHOT_LVT3_N"),
    // GPIOC
    input("FM_PCH_BMC_THERMTRIP_N"),
    input("IRQ_SML1_PMBUS_ALERT_N"),
    input("IRQ_UV_DETECT_N"),
    input("IRQ_OC_DETECT_N"),
    input("FM_HSC_TIMER_ALT_N"),
    input("IRQ_SMB_IO_LVC3_STBY_ALRT_N"),
    input("DBP_PRESENT_N"),
    input("FM_BMC_TPM_PRSNT_N"),
    // GPIOD
    output("LED_POSTCODE_0"),
    output("LED_POSTCODE_1"),
    output("LED_POSTCODE_2"),
    output("LED_POSTCODE_3"),
    output("LED_POSTCODE_4"),
    output("LED_POSTCODE_5"),
    output("LED_POSTCODE_6"),
    output("LED_POSTCODE_7"),
    // GPIOE
    input("FM_BOARD_REV_ID0"),
    input("FM_BOARD_REV_ID1"),
    input("FM_BOARD_REV_ID2"),
    input("FM_BOARD_SKU_ID0"),
    input("FM_BOARD_SKU_ID1"),
    input("FM_BOARD_SKU_ID2"),
    input("FM_BOARD_SKU_ID3"),
    input("FM_BOARD_SKU_ID4"),
    // GPIOF
    output("RST_BMC_USB_HUB_N"),
    output("BMC_SPI_SEL"),
    output("FM_SOL_UART_CH_SEL"),
    output("FM_JTAG_TCK_MUX_SEL"),
    output_od("FM_BMC_ONCTL_N"),
    input("FM_RISER1_PRSNT_N"),
    input("FM_RISER2_PRSNT_N"),
    reserve("Reserve_GPIOF7"),
    // GPIOG
    input("PWRGD_CPUPWRGD_LVC3"),
    output("FM_SPD_DDRCPU_LVLSHFT_EN"),
    input("RST_RSMRST_PLD_R_N"),
    input("FM_AUDIO_DEBUG_PRESENT_N"),
    output("FM_SPI_PCH_MASTER_SEL_R"),
    input("FM_PCH_PRSNT_N"),
    output_od("FM_BMC_READY_N"),
    input("FM_SLPSUS_RSM_RST_N"),
    // GPIOH
    output_od("DBP_CPU_PREQ_BMC_N"),
    input("FM_CPU_SKTOCC_LVT3_N"),
    reserve("Reserve_GPIOH2"),
    reserve("Reserve_GPIOH3"),
    input("H_CPU_MEMTRIP_LVC1_N"),
    input("IRQ_PVCCIN_CPU_VRHOT_LVC3_N"),
    input("IRQ_PVDDQ_ABC_VRHOT_LVT3_N"),
    input("IRQ_PVDDQ_DEF_VRHOT_LVT3_N"),
    // GPIOI
    input("FM_SSD0_PRSNT_N"),
    input("FM_SSD1_PRSNT_N"),
    input("IRQ_NVME_SMB_ALERT_N"),
    input("FM_OCP_SFF_PRSNT_N"),
    output("FM_OCP_AUX_PWR_EN"),
    input("IRQ_OCP_SMB_ALERT_N"),
    output("RST_PCIE_PERST0_N"),
    output("RST_PCIE_PERST1_N"),
    // GPIOJ
    input("FM_PCIE_WAKE_LVC3_N"),
    input("FM_SYS_THROTTLE_LVC3"),
    output("FM_BMC_CPU_PWR_DEBUG_N"),
    input("FM_BIOS_POST_CMPLT_N"),
    output("FM_BIOS_DEBUG_EN_N"),
    input("FM_BMC_DEBUG_EN_N"),
    input("PWRGD_P3V3_AUX"),
    input("PWRGD_P5V_AUX"),
    // GPIOK
    output("FM_SMBUS_MUX_SEL0"),
    output("FM_SMBUS_MUX_SEL1"),
    output_od("LED_IDENTIFY_N"),
    output_od("LED_FAULT_N"),
    output("LED_HEARTBEAT"),
    input("FM_FORCE_ADR_N"),
    output("FM_BMC_SUSACK_N"),
    input("FM_ADR_COMPLETE"),
    // GPIOL
    output("JTAG_BMC_TRST_N"),
    input("FM_GLOBAL_RST_WARN_N"),
    reserve("Reserve_GPIOL2"),
    input("FM_SMI_ACTIVE_N"),
    input("FM_NMI_EVENT_N"),
    output("FM_BMC_NMI_OUT"),
    output_od("FM_PWRBRK_N"),
    input("FM_THERMTRIP_DLY_N"),
    // GPIOM
    input("IRQ_HSC_ALERT1_N"),
    input("IRQ_HSC_ALERT2_N"),
    output("FM_P12V_AUX_SW_EN"),
    input("PWRGD_P12V_AUX"),
    input("PWRGD_P1V05_STBY"),
    input("PWRGD_PVNN_PCH_AUX"),
    output("FM_P5V_EN"),
    output("FM_AUX_SW_EN"),
    // GPION
    input("IRQ_PVCCIO_CPU_VRHOT_LVC3_N"),
    input("FM_MEM_THERM_EVENT_LVT3_N"),
    output("FM_SPD_SWITCH_CTRL0"),
    output("FM_SPD_SWITCH_CTRL1"),
    input("FM_CPU0_PROC_ID0"),
    input("FM_CPU0_PROC_ID1"),
    input("FM_PWR_FAULT_N"),
    input("FM_UART_SWITCH_N"),
    // GPIOO
    input("FM_POST_CARD_PRES_BMC_N"),
    output("FM_PMBUS_ALERT_BUF_EN_N"),
    output("FM_BATTERY_SENSE_EN"),
    output("FM_OC_DETECT_EN"),
    input("FM_CPU_RST_DETECT_N"),
    output("RST_BMC_SGPIO_N"),
    reserve("Reserve_GPIOO6"),
    reserve("Reserve_GPIOO7"),
    // GPIOP
    output("SGPIO_BMC_CLK"),
    output("SGPIO_BMC_LD_N"),
    output("SGPIO_BMC_DOUT"),
    input("SGPIO_BMC_DIN"),
    input("FM_CPU_MSMI_LVT3_N"),
    input("FM_PCH_TIMEOUT_N"),
    output("FM_BMC_CPLD_PSU_SEL"),
    input("FM_PSU0_PRSNT_N"),
    // GPIOQ
    input("FM_PSU1_PRSNT_N"),
    input("SMB_PSU0_ALERT_N"),
    input("SMB_PSU1_ALERT_N"),
    input("PWRGD_PSU0_PWROK"),
    input("PWRGD_PSU1_PWROK"),
    output("FM_PS_EN_N"),
    output_od("LED_FAN_FAIL_N"),
    input("FM_CHASSIS_INTRUSION_N"),
    // GPIOR
    input("FM_USB_OC0_N"),
    input("FM_USB_OC1_N"),
    output("FM_USB2_MUX_SEL"),
    output("FM_DEBUG_UART_EN_N"),
    input("IRQ_TPM_INT_N"),
    output("RST_BMC_TPM_N"),
    input("IRQ_CPLD_INT_N"),
    output("FM_BMC_CPLD_HEARTBEAT"),
    // GPIOS
    output_od("SPI_BMC_BIOS_WP_N"),
    output("FM_BIOS_SPI_BMC_CTRL"),
    output_od("FM_BIOS_REC_MODE_N"),
    input("FM_CPLD_BMC_CONFIG_DONE"),
    output("RST_EMMC_BMC_N"),
    input("FM_EMMC_CD_N"),
    input("FM_FAN_BOARD_PRSNT_N"),
    output("FM_NCSI_SWITCH_N"),
    // GPIOT
    input("FM_NIC0_PRSNT_N"),
    input("FM_NIC0_WAKE_N"),
    input("FM_NIC1_WAKE_N"),
    output("FM_NCSI_BMC_TX_EN"),
    input("FM_M2_0_PRSNT_N"),
    input("FM_M2_1_PRSNT_N"),
    output("FM_SPI_SEC_MUX_SEL"),
    input("FM_SPARE_IO0"),
    // GPIOU
    input("IRQ_BMC_PCH_NMI_R"),
    input("FM_CPU0_FIVR_FAULT_LVT3_N"),
    output_od("FM_BMC_PCH_SCI_LPC_N"),
    output("FM_BMC_EUP_LOT6_N"),
    input("FM_SPARE_GPIOU4"),
    input("FM_SPARE_GPIOU5"),
    input("FM_SPARE_GPIOU6"),
    input("FM_SPARE_GPIOU7"),
    // GPIOV
    output_od("LED_BMC_ALIVE_N"),
    input("FM_ID_BTN_N"),
    output("FM_P2V5_BMC_AUX_EN"),
    input("PWRGD_P2V5_BMC_AUX"),
    input("FM_MFG_MODE_N"),
    input("FM_SPARE_GPIOV5"),
    reserve("Reserve_GPIOV6"),
    reserve("Reserve_GPIOV7"),
];

/// The board pin catalog
pub fn catalog() -> PinCatalog {
    PinCatalog::new(&BOARD_PINS)
}

/// Checker for sensors behind host DC power
///
/// The host power state is owned by the polling subsystem; on this
/// host-side tool the rail is never up.
#[derive(Debug, Clone, Copy)]
struct DcPowerAccess;

impl AccessChecker for DcPowerAccess {
    fn is_accessible(&self, _num: u16) -> bool {
        false
    }
}

static SENSORS: Lazy<SensorTable> = Lazy::new(|| {
    SensorTable::new(vec![
        Sensor::new(0x01, SensorType::Tmp75, Box::new(AlwaysAccessible))
            .with_cache(CacheStatus::ReadSuccess, 25),
        Sensor::new(0x02, SensorType::Tmp75, Box::new(AlwaysAccessible))
            .with_cache(CacheStatus::ReadSuccess, 31),
        Sensor::new(0x04, SensorType::Adc, Box::new(AlwaysAccessible))
            .with_cache(CacheStatus::ReadSuccess, 12),
        Sensor::new(0x07, SensorType::Adc, Box::new(AlwaysAccessible))
            .with_cache(CacheStatus::ReadAcurSuccess, 5),
        Sensor::new(0x10, SensorType::Peci, Box::new(DcPowerAccess))
            .with_cache(CacheStatus::NotAccessible, 0),
        Sensor::new(0x2c, SensorType::Vr, Box::new(DcPowerAccess))
            .with_cache(CacheStatus::PollingDisable, 0),
        Sensor::new(0x30, SensorType::Hsc, Box::new(AlwaysAccessible))
            .with_cache(CacheStatus::ReadSuccess, 132),
        Sensor::new(0x51, SensorType::Nvme, Box::new(DcPowerAccess))
            .with_cache(CacheStatus::FailToAccess, 0),
    ])
});

/// The board sensor table
pub fn sensors() -> &'static SensorTable {
    &SENSORS
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmcdbg_core::controller::Level;
    use bmcdbg_core::gpio::{reserved_by_name, GpioChip, GroupRegistry, PinEntry};
    use bmcdbg_dummy::DummyGpio;

    #[test]
    fn test_table_covers_index_space() {
        assert_eq!(BOARD_PINS.len(), AST1030_PIN_COUNT);
        assert_eq!(
            catalog().capacity(),
            GroupRegistry::ast1030().index_span()
        );
    }

    #[test]
    fn test_pin_names_unique() {
        for (i, a) in BOARD_PINS.iter().enumerate() {
            for b in BOARD_PINS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name, "duplicate pin name {}", a.name);
            }
        }
    }

    #[test]
    fn test_reserve_entries_are_disabled() {
        let reserved = BOARD_PINS
            .iter()
            .filter(|p| reserved_by_name(p.name))
            .count();
        assert_eq!(reserved, 9);
        assert!(BOARD_PINS
            .iter()
            .filter(|p| reserved_by_name(p.name))
            .all(|p| !p.enabled));
    }

    #[test]
    fn test_round_trip_on_dummy_controller() {
        let mut chip = GpioChip::new(
            catalog(),
            GroupRegistry::ast1030(),
            DummyGpio::new_default(),
        );

        // FM_BMC_PWRBTN_OUT_N is a writable output at index 0
        chip.write_pin(0, 1).unwrap();
        assert_eq!(chip.read_pin(0).unwrap().level, Some(Level::High));
        chip.write_pin(0, 0).unwrap();
        assert_eq!(chip.read_pin(0).unwrap().level, Some(Level::Low));
    }

    #[test]
    fn test_listings_cover_board() {
        let chip = GpioChip::new(
            catalog(),
            GroupRegistry::ast1030(),
            DummyGpio::new_default(),
        );

        assert_eq!(chip.list_group("GPIO0_A_D").unwrap().count(), 32);
        assert_eq!(chip.list_group("GPIO0_U_V").unwrap().count(), 16);
        assert_eq!(chip.list_all().count(), AST1030_PIN_COUNT);

        // Reserve slots surface as disabled markers in group listings
        let entries: Vec<PinEntry> = chip.list_group("GPIO0_A_D").unwrap().collect();
        assert!(matches!(entries[12], PinEntry::Disabled { index: 12 }));
    }

    #[test]
    fn test_board_sensors() {
        let table = sensors();
        assert_eq!(table.len(), 8);

        let report = table.report(0x01).unwrap();
        assert_eq!(report.type_name, "tmp75");
        assert!(report.accessible);
        assert_eq!(report.value, 25);

        let report = table.report(0x10).unwrap();
        assert!(!report.accessible);
        assert_eq!(report.status_name, "not_accesible");

        assert!(table.report(0x05).is_err());
    }
}
