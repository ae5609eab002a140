//! Sensor command implementations

use bmcdbg_core::sensor::{SensorReport, SensorTable};

const BORDER: &str =
    "---------------------------------------------------------------------------------";

/// One sensor listing line
fn sensor_line(report: &SensorReport) -> String {
    let access = if report.accessible { "O" } else { "X" };
    format!(
        "*SENSOR[0x{:<2x}]:   TYPE[{:<5}]   ACCESS[{}]   STATUS[{:<20}]   VAL[{:<8}]",
        report.num, report.type_name, access, report.status_name, report.value
    )
}

pub fn run_list_all(table: &SensorTable) {
    println!("{}", BORDER);
    for report in table.reports() {
        println!("{}", sensor_line(&report));
    }
    println!("{}", BORDER);
}

pub fn run_get(table: &SensorTable, num: u16) {
    match table.report(num) {
        Ok(report) => println!("{}", sensor_line(&report)),
        Err(_) => eprintln!("No such sensor number!"),
    }
}

pub fn run_set_polling() {
    eprintln!("Set sensor POLLING is not support!");
}

pub fn run_set_mbr() {
    eprintln!("Set sensor MBR is not support!");
}

pub fn run_set_threshold() {
    eprintln!("Set sensor THRESHOLD is not support!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_line() {
        let report = SensorReport {
            num: 0x01,
            type_name: "tmp75",
            accessible: true,
            status_name: "read_success",
            value: 42,
        };
        assert_eq!(
            sensor_line(&report),
            "*SENSOR[0x1 ]:   TYPE[tmp75]   ACCESS[O]   STATUS[read_success        ]   VAL[42      ]"
        );

        let report = SensorReport {
            num: 0x2c,
            type_name: "hsc",
            accessible: false,
            status_name: "init_status",
            value: 0,
        };
        assert_eq!(
            sensor_line(&report),
            "*SENSOR[0x2c]:   TYPE[hsc  ]   ACCESS[X]   STATUS[init_status         ]   VAL[0       ]"
        );
    }

    #[test]
    fn test_border_width() {
        assert_eq!(BORDER.len(), 81);
    }
}
