//! Controller traits and abstractions
//!
//! This module defines the capability boundary between the core access
//! logic and the platform GPIO driver.

mod traits;

pub use traits::*;
