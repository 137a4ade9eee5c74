//! Library options read from the environment.
//!
//! A replacement input library has no config file or command line of its
//! own, so the few knobs it offers come from environment variables set in
//! the host process:
//!
//! - `VXPAD_SUBTYPE` overrides the device subtype byte reported by the
//!   capabilities descriptor (decimal or `0x`-prefixed hex).
//! - `VXPAD_LOG` sets the tracing filter, read by the logging setup.

use std::sync::LazyLock;

use tracing::warn;

use crate::pad::capabilities::DEVICE_SUBTYPE_GAMEPAD;

static OPTIONS: LazyLock<Options> = LazyLock::new(Options::from_env);

/// Options that can be set via environment variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Device subtype byte reported in the capabilities descriptor
    pub subtype: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            subtype: DEVICE_SUBTYPE_GAMEPAD,
        }
    }
}

impl Options {
    /// Read options from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut options = Options::default();

        if let Ok(raw) = std::env::var("VXPAD_SUBTYPE") {
            match parse_u8(&raw) {
                Some(subtype) => options.subtype = subtype,
                None => warn!("ignoring unparsable VXPAD_SUBTYPE: {:?}", raw),
            }
        }

        options
    }
}

/// Get the process-wide options, reading the environment on first use.
pub fn options() -> &'static Options {
    &OPTIONS
}

fn parse_u8(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        raw.parse().ok()
    }
}
