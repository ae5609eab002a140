//! Sensor snapshot access
//!
//! The sensor cache is owned and refreshed by the platform polling
//! subsystem; this module only reads the snapshots. Lookup is by the
//! sensor's external number, and every sensor carries an access-checker
//! predicate bound at table-construction time.

mod types;

#[cfg(feature = "alloc")]
mod table;

pub use types::*;

#[cfg(feature = "alloc")]
pub use table::*;
