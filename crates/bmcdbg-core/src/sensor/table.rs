//! Sensor table lookup and reporting

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{Error, Result};

use super::types::{AccessChecker, CacheStatus, SensorType};

/// One sensor snapshot entry
pub struct Sensor {
    /// External sensor number (conventionally hex)
    pub num: u16,
    /// Transducer kind
    pub sensor_type: SensorType,
    /// Outcome of the most recent cache refresh
    pub cache_status: CacheStatus,
    /// Last successfully cached reading
    pub cache: i32,
    /// Access predicate bound at registration time
    pub access_checker: Box<dyn AccessChecker + Send + Sync>,
}

impl Sensor {
    /// Create a sensor entry with no cached reading yet
    pub fn new(
        num: u16,
        sensor_type: SensorType,
        access_checker: Box<dyn AccessChecker + Send + Sync>,
    ) -> Self {
        Self {
            num,
            sensor_type,
            cache_status: CacheStatus::InitStatus,
            cache: 0,
            access_checker,
        }
    }

    /// Seed the cached status and value
    pub fn with_cache(mut self, status: CacheStatus, value: i32) -> Self {
        self.cache_status = status;
        self.cache = value;
        self
    }
}

impl core::fmt::Debug for Sensor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sensor")
            .field("num", &self.num)
            .field("sensor_type", &self.sensor_type)
            .field("cache_status", &self.cache_status)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Everything a sensor line displays, resolved from one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReport {
    /// External sensor number
    pub num: u16,
    /// Transducer kind display name
    pub type_name: &'static str,
    /// Result of the bound access checker (display-only)
    pub accessible: bool,
    /// Cache status display name
    pub status_name: &'static str,
    /// Cached reading
    pub value: i32,
}

/// Read-only table of sensor snapshots
#[derive(Debug)]
pub struct SensorTable {
    sensors: Vec<Sensor>,
}

impl SensorTable {
    /// Build the table from registered sensors
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors }
    }

    /// Number of sensors in the table
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// True if the table has no sensors
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Table index for an external sensor number
    ///
    /// Linear scan, first match; numbers are expected to be unique.
    pub fn index_by_number(&self, num: u16) -> Option<usize> {
        self.sensors.iter().position(|s| s.num == num)
    }

    /// Sensor entry by table index
    pub fn get(&self, index: usize) -> Option<&Sensor> {
        self.sensors.get(index)
    }

    /// Build the report for one sensor number
    ///
    /// The access checker result is part of the report but never blocks
    /// it.
    pub fn report(&self, num: u16) -> Result<SensorReport> {
        let index = self.index_by_number(num).ok_or(Error::SensorNotFound)?;
        Ok(self.report_at(&self.sensors[index]))
    }

    /// Reports for every sensor, in table order
    pub fn reports(&self) -> impl Iterator<Item = SensorReport> + '_ {
        self.sensors.iter().map(|s| self.report_at(s))
    }

    fn report_at(&self, sensor: &Sensor) -> SensorReport {
        SensorReport {
            num: sensor.num,
            type_name: sensor.sensor_type.name(),
            accessible: sensor.access_checker.is_accessible(sensor.num),
            status_name: sensor.cache_status.name(),
            value: sensor.cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::types::AlwaysAccessible;

    struct NeverAccessible;

    impl AccessChecker for NeverAccessible {
        fn is_accessible(&self, _num: u16) -> bool {
            false
        }
    }

    fn test_table() -> SensorTable {
        SensorTable::new(Vec::from([
            Sensor::new(0x01, SensorType::Tmp75, Box::new(AlwaysAccessible))
                .with_cache(CacheStatus::ReadSuccess, 42),
            Sensor::new(0x02, SensorType::Adc, Box::new(AlwaysAccessible))
                .with_cache(CacheStatus::PollingDisable, 0),
            Sensor::new(0x10, SensorType::Peci, Box::new(NeverAccessible))
                .with_cache(CacheStatus::NotAccessible, -1),
            Sensor::new(0x2c, SensorType::Hsc, Box::new(AlwaysAccessible)),
        ]))
    }

    #[test]
    fn test_index_by_number() {
        let table = test_table();
        assert_eq!(table.index_by_number(0x01), Some(0));
        assert_eq!(table.index_by_number(0x2c), Some(3));
        assert_eq!(table.index_by_number(0x05), None);
    }

    #[test]
    fn test_report_unknown_number() {
        let table = test_table();
        assert!(matches!(table.report(0x05), Err(Error::SensorNotFound)));
    }

    #[test]
    fn test_report_fields() {
        let table = test_table();
        let report = table.report(0x01).unwrap();
        assert_eq!(report.num, 0x01);
        assert_eq!(report.type_name, "tmp75");
        assert!(report.accessible);
        assert_eq!(report.status_name, "read_success");
        assert_eq!(report.value, 42);
    }

    #[test]
    fn test_inaccessible_sensor_still_reports() {
        let table = test_table();
        let report = table.report(0x10).unwrap();
        assert!(!report.accessible);
        assert_eq!(report.status_name, "not_accesible");
        assert_eq!(report.value, -1);
    }

    #[test]
    fn test_reports_cover_table_in_order() {
        let table = test_table();
        let nums: Vec<u16> = table.reports().map(|r| r.num).collect();
        assert_eq!(nums, [0x01, 0x02, 0x10, 0x2c]);

        let fresh = table.report(0x2c).unwrap();
        assert_eq!(fresh.status_name, "init_status");
        assert_eq!(fresh.value, 0);
    }
}
