//! The static capabilities descriptor.
//!
//! Callers probe capabilities before polling state. The virtual device
//! always describes itself the same way; nothing in the descriptor is
//! derived from the mutable pad record.

use super::buttons::Buttons;
use crate::config;

/// Device type byte: gamepad.
pub const DEVICE_TYPE_GAMEPAD: u8 = 0x01;

/// Default device subtype byte: standard gamepad.
pub const DEVICE_SUBTYPE_GAMEPAD: u8 = 0x01;

/// Both vibration motors report this as their full-speed value.
pub const MOTOR_RANGE_MAX: u16 = 0xFF;

/// Both triggers report this as their maximum analog value.
pub const TRIGGER_RANGE_MAX: u8 = 0xFF;

/// Value reported on all four stick axes of the descriptor.
pub const STICK_AXIS_CAPS: i16 = -64;

/// The device description returned to capability probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub device_type: u8,
    pub subtype: u8,
    /// Feature flags; 0 means no voice/audio support.
    pub flags: u16,
    pub buttons: Buttons,
    pub trigger_max: u8,
    pub stick_axis: i16,
    pub motor_max: u16,
}

/// Build the descriptor. Static apart from the subtype, which honors the
/// `VXPAD_SUBTYPE` override.
pub fn capabilities() -> Capabilities {
    Capabilities {
        device_type: DEVICE_TYPE_GAMEPAD,
        subtype: config::options().subtype,
        flags: 0,
        buttons: Buttons::all(),
        trigger_max: TRIGGER_RANGE_MAX,
        stick_axis: STICK_AXIS_CAPS,
        motor_max: MOTOR_RANGE_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_fixed() {
        let caps = capabilities();
        assert_eq!(caps.device_type, DEVICE_TYPE_GAMEPAD);
        assert_eq!(caps.flags, 0);
        assert_eq!(caps.buttons.bits(), 0xF3FF);
        assert_eq!(caps.trigger_max, 0xFF);
        assert_eq!(caps.stick_axis, -64);
        assert_eq!(caps.motor_max, 0xFF);
    }

    #[test]
    fn test_descriptor_is_stable() {
        assert_eq!(capabilities(), capabilities());
    }
}
