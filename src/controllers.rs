//! Controller registration and dispatch
//!
//! This module resolves the `-c/--controller` spec string into a boxed
//! [`GpioController`]. Specs follow the `name:key=val,key=val` shape.
//! Only the in-memory dummy controller is registered: real AST1030
//! register access belongs to the platform firmware build, not to
//! portable host tooling.

use bmcdbg_core::controller::GpioController;
use bmcdbg_dummy::DummyGpio;

/// Information about a controller backend
pub struct ControllerInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
}

/// All controller backends built into this binary
pub const CONTROLLERS: &[ControllerInfo] = &[ControllerInfo {
    name: "dummy",
    description: "In-memory GPIO register emulator (mask<N>=<hex|none>,fail-writes=<0|1>)",
}];

/// Generate a short list of controller names for CLI help
pub fn controller_names_short() -> String {
    let names: Vec<&str> = CONTROLLERS.iter().map(|c| c.name).collect();
    names.join(", ")
}

/// Split a controller spec into its name and `key=val` options
fn parse_controller_string(s: &str) -> (&str, Vec<(&str, &str)>) {
    if let Some((name, opts)) = s.split_once(':') {
        let options: Vec<_> = opts
            .split(',')
            .filter_map(|opt| opt.split_once('='))
            .collect();
        (name, options)
    } else {
        (s, Vec::new())
    }
}

/// Open the controller described by a spec string
pub fn open(spec: &str) -> Result<Box<dyn GpioController + Send>, Box<dyn std::error::Error>> {
    let (name, options) = parse_controller_string(spec);

    match name {
        "dummy" => {
            let config = bmcdbg_dummy::parse_options(&options)?;
            Ok(Box::new(DummyGpio::new(config)))
        }
        _ => {
            let mut msg = format!("Unknown controller: {}\n\nAvailable controllers:\n", name);
            for c in CONTROLLERS {
                msg.push_str(&format!("  {:12} - {}\n", c.name, c.description));
            }
            Err(msg.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_controller_string() {
        let (name, opts) = parse_controller_string("dummy");
        assert_eq!(name, "dummy");
        assert!(opts.is_empty());

        let (name, opts) = parse_controller_string("dummy:mask0=0xff,fail-writes=1");
        assert_eq!(name, "dummy");
        assert_eq!(opts, [("mask0", "0xff"), ("fail-writes", "1")]);
    }

    #[test]
    fn test_open_dummy() {
        assert!(open("dummy").is_ok());
        assert!(open("dummy:mask0=none").is_ok());
        assert!(open("dummy:mask0=zz").is_err());
        assert!(open("mmio").is_err());
    }
}
