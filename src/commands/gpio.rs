//! GPIO command implementations

use bmcdbg_core::gpio::{PinEntry, PinReport, GROUP_WIDTH};

use super::Chip;

/// Single-pin listing line (list-all and get)
fn pin_line(report: &PinReport) -> String {
    let prop = report.property.tag();
    let dir = report.direction.label();
    let dir_reg = report.reg_direction.tag();
    match report.level {
        Some(level) => format!(
            "[{:<3}] {:<35}: {:<3} | {:<6}({}) | {}({})",
            report.index,
            report.name,
            prop,
            dir,
            dir_reg,
            level.value(),
            report.reg_bit
        ),
        None => format!(
            "[{:<3}] {:<35}: {:<3} | {:<6}({}) | {}",
            report.index, report.name, prop, dir, dir_reg, "resv"
        ),
    }
}

/// Group listing line for a readable pin
fn group_line(device: &str, rel: usize, report: &PinReport) -> String {
    let prop = report.property.tag();
    let dir = report.direction.label();
    let dir_reg = report.reg_direction.tag();
    match report.level {
        Some(level) => format!(
            "[{:<3}][{} {:<3}] {:<35}: {:>2} | {:<6}({}) | {}({})",
            report.index,
            device,
            rel,
            report.name,
            prop,
            dir,
            dir_reg,
            level.value(),
            report.reg_bit
        ),
        None => format!(
            "[{:<3}][{} {:<3}] {:<35}: {:>2} | {:<6} | err",
            report.index, device, rel, report.name, prop, dir
        ),
    }
}

/// Group listing marker line for disabled/reserved pins
fn group_marker_line(device: &str, rel: usize, index: usize, marker: &str) -> String {
    format!(
        "[{:<3}][{} {:<3}] {:<35}: -- | {:<9} | NA",
        index, device, rel, marker, "i/o"
    )
}

pub fn run_list_group(chip: &Chip, device: &str) {
    let entries = match chip.list_group(device) {
        Ok(entries) => entries,
        Err(_) => {
            eprintln!("Device [{}] not found!", device);
            return;
        }
    };

    for entry in entries {
        let rel = entry.index() % GROUP_WIDTH;
        match entry {
            PinEntry::Disabled { index } => {
                println!("{}", group_marker_line(device, rel, index, "gpio_disable"));
            }
            PinEntry::Reserved { index } => {
                println!("{}", group_marker_line(device, rel, index, "gpio_reserve"));
            }
            PinEntry::Report(report) => {
                println!("{}", group_line(device, rel, &report));
            }
        }
    }
}

pub fn run_list_all(chip: &Chip) {
    // Reserve-named pins are silently skipped here, as on the original
    // shell surface
    for entry in chip.list_all() {
        if let PinEntry::Report(report) = entry {
            println!("{}", pin_line(&report));
        }
    }
}

pub fn run_get(chip: &Chip, index: usize) {
    match chip.read_pin(index) {
        Ok(report) => println!("{}", pin_line(&report)),
        Err(_) => eprintln!("gpio[{}] get failed!", index),
    }
}

pub fn run_set_val(chip: &mut Chip, index: usize, value: u8) {
    match chip.write_pin(index, value) {
        Ok(()) => println!("gpio[{}] --> {} ,success!", index, value),
        Err(_) => eprintln!("gpio[{}] --> {} ,failed!", index, value),
    }
}

pub fn run_set_dir(_index: usize, _value: u8) {
    eprintln!("GPIO set DIR command not support!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmcdbg_core::controller::Level;
    use bmcdbg_core::gpio::{Direction, Property};

    fn report(level: Option<Level>) -> PinReport {
        PinReport {
            index: 7,
            name: "LED_FAULT_N",
            property: Property::OpenDrain,
            direction: Direction::Output,
            reg_direction: Direction::Output,
            level,
            reg_bit: 1,
        }
    }

    #[test]
    fn test_pin_line() {
        assert_eq!(
            pin_line(&report(Some(Level::High))),
            "[7  ] LED_FAULT_N                        : OD  | output(O) | 1(1)"
        );
        assert_eq!(
            pin_line(&report(None)),
            "[7  ] LED_FAULT_N                        : OD  | output(O) | resv"
        );
    }

    #[test]
    fn test_group_lines() {
        assert_eq!(
            group_line("GPIO0_A_D", 7, &report(Some(Level::Low))),
            "[7  ][GPIO0_A_D 7  ] LED_FAULT_N                        : OD | output(O) | 0(1)"
        );
        assert_eq!(
            group_marker_line("GPIO0_A_D", 3, 3, "gpio_reserve"),
            "[3  ][GPIO0_A_D 3  ] gpio_reserve                       : -- | i/o       | NA"
        );
    }
}
