//! Button bit constants for the virtual pad.
//!
//! Bit positions match the XINPUT_GAMEPAD button word, so a raw mask from
//! an external driver maps straight onto the flag set.

use bitflags::bitflags;

bitflags! {
    /// 16-bit button flag set. `Buttons::all()` is exactly the
    /// supported-buttons mask the capabilities descriptor reports (0xF3FF).
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const DPAD_UP        = 0x0001;
        const DPAD_DOWN      = 0x0002;
        const DPAD_LEFT      = 0x0004;
        const DPAD_RIGHT     = 0x0008;
        const START          = 0x0010;
        const BACK           = 0x0020;
        const LEFT_THUMB     = 0x0040;
        const RIGHT_THUMB    = 0x0080;
        const LEFT_SHOULDER  = 0x0100;
        const RIGHT_SHOULDER = 0x0200;
        const A              = 0x1000;
        const B              = 0x2000;
        const X              = 0x4000;
        const Y              = 0x8000;
    }
}
