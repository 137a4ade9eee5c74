//! C ABI export surface.
//!
//! Exports the stock XInput entry points (names, parameter order, struct
//! layouts, numeric status codes) so a host application loads this library
//! in place of the system DLL, plus the three setter entry points an
//! external driver uses to steer the virtual pad. All translation between
//! the internal types and the wire layouts happens here.

// Exported names and boundary structs match the impersonated surface.
#![allow(non_snake_case, non_camel_case_types)]

use std::ffi::c_void;
use std::mem::size_of;

use tracing::{debug, trace};

use super::buttons::Buttons;
use super::capabilities::{self, Capabilities};
use super::state::{self, Pad, PadResult, PadSnapshot, Side, MAX_PLAYERS, PAD};
use crate::logging;

/// Status code for a successful operation (ERROR_SUCCESS).
pub const ERROR_SUCCESS: u32 = 0;

/// Status code for a probe of an absent slot (ERROR_DEVICE_NOT_CONNECTED).
/// Callers compare against the numeric value, not just truthiness.
pub const ERROR_DEVICE_NOT_CONNECTED: u32 = 1167;

/// Number of controller slots the surface admits probes for.
pub const XUSER_MAX_COUNT: u32 = MAX_PLAYERS;

/// Wildcard slot index some callers pass to keystroke queries.
pub const XUSER_INDEX_ANY: u32 = 0x0000_00FF;

/// Battery type byte for a device with no battery.
pub const BATTERY_TYPE_DISCONNECTED: u8 = 0x00;

// DllMain notification reason codes.
pub const DLL_PROCESS_DETACH: u32 = 0;
pub const DLL_PROCESS_ATTACH: u32 = 1;
pub const DLL_THREAD_ATTACH: u32 = 2;
pub const DLL_THREAD_DETACH: u32 = 3;

/// Gamepad portion of the state record.
/// Layout must match XINPUT_GAMEPAD exactly:
/// WORD wButtons; BYTE bLeftTrigger, bRightTrigger;
/// SHORT sThumbLX, sThumbLY, sThumbRX, sThumbRY.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_GAMEPAD {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub thumb_lx: i16,
    pub thumb_ly: i16,
    pub thumb_rx: i16,
    pub thumb_ry: i16,
}

/// Full state record a query fills in.
/// Layout must match XINPUT_STATE: DWORD dwPacketNumber; XINPUT_GAMEPAD.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_STATE {
    pub packet_number: u32,
    pub gamepad: XINPUT_GAMEPAD,
}

/// Motor speed pair. Layout must match XINPUT_VIBRATION:
/// WORD wLeftMotorSpeed, wRightMotorSpeed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_VIBRATION {
    pub left_motor_speed: u16,
    pub right_motor_speed: u16,
}

/// Device description record. Layout must match XINPUT_CAPABILITIES:
/// BYTE Type, SubType; WORD Flags; XINPUT_GAMEPAD; XINPUT_VIBRATION.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_CAPABILITIES {
    pub device_type: u8,
    pub subtype: u8,
    pub flags: u16,
    pub gamepad: XINPUT_GAMEPAD,
    pub vibration: XINPUT_VIBRATION,
}

/// Layout must match XINPUT_BATTERY_INFORMATION: BYTE BatteryType, BatteryLevel.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_BATTERY_INFORMATION {
    pub battery_type: u8,
    pub battery_level: u8,
}

/// Layout must match XINPUT_KEYSTROKE:
/// WORD VirtualKey; WCHAR Unicode; WORD Flags; BYTE UserIndex, HidCode.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XINPUT_KEYSTROKE {
    pub virtual_key: u16,
    pub unicode: u16,
    pub flags: u16,
    pub user_index: u8,
    pub hid_code: u8,
}

/// Layout must match the Windows GUID struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

// Wire struct sizes must match the stock layouts exactly.
const _: [(); 12] = [(); size_of::<XINPUT_GAMEPAD>()];
const _: [(); 16] = [(); size_of::<XINPUT_STATE>()];
const _: [(); 4] = [(); size_of::<XINPUT_VIBRATION>()];
const _: [(); 20] = [(); size_of::<XINPUT_CAPABILITIES>()];
const _: [(); 2] = [(); size_of::<XINPUT_BATTERY_INFORMATION>()];
const _: [(); 8] = [(); size_of::<XINPUT_KEYSTROKE>()];
const _: [(); 16] = [(); size_of::<GUID>()];

impl From<Pad> for XINPUT_GAMEPAD {
    fn from(pad: Pad) -> Self {
        XINPUT_GAMEPAD {
            buttons: pad.buttons.bits(),
            left_trigger: pad.left_trigger,
            right_trigger: pad.right_trigger,
            thumb_lx: pad.left_stick.x,
            thumb_ly: pad.left_stick.y,
            thumb_rx: pad.right_stick.x,
            thumb_ry: pad.right_stick.y,
        }
    }
}

impl From<PadSnapshot> for XINPUT_STATE {
    fn from(snapshot: PadSnapshot) -> Self {
        XINPUT_STATE {
            packet_number: snapshot.sequence,
            gamepad: snapshot.pad.into(),
        }
    }
}

impl From<Capabilities> for XINPUT_CAPABILITIES {
    fn from(caps: Capabilities) -> Self {
        // The descriptor reuses the gamepad/vibration layouts to carry
        // ranges: triggers and sticks hold their maximums, motors their
        // full-speed values.
        XINPUT_CAPABILITIES {
            device_type: caps.device_type,
            subtype: caps.subtype,
            flags: caps.flags,
            gamepad: XINPUT_GAMEPAD {
                buttons: caps.buttons.bits(),
                left_trigger: caps.trigger_max,
                right_trigger: caps.trigger_max,
                thumb_lx: caps.stick_axis,
                thumb_ly: caps.stick_axis,
                thumb_rx: caps.stick_axis,
                thumb_ry: caps.stick_axis,
            },
            vibration: XINPUT_VIBRATION {
                left_motor_speed: caps.motor_max,
                right_motor_speed: caps.motor_max,
            },
        }
    }
}

fn status(result: PadResult<()>) -> u32 {
    match result {
        Ok(()) => ERROR_SUCCESS,
        Err(_) => ERROR_DEVICE_NOT_CONNECTED,
    }
}

/// Load-time notification hook. Process attach performs the library's only
/// piece of setup (logging); every other reason is a no-op.
#[no_mangle]
pub extern "system" fn DllMain(_module: *mut c_void, reason: u32, _reserved: *mut c_void) -> i32 {
    if reason == DLL_PROCESS_ATTACH {
        logging::init();
        debug!("virtual pad library attached");
    }
    1
}

// === Query entry points ===

/// Copy the current pad state for `user_index`, stamping a fresh packet
/// number. Slots other than 0 report not-connected and the output record
/// is left untouched.
///
/// # Safety
/// `state` must be null or a valid pointer to a writable XINPUT_STATE.
#[no_mangle]
pub unsafe extern "system" fn XInputGetState(user_index: u32, state: *mut XINPUT_STATE) -> u32 {
    match state::snapshot(user_index) {
        Ok(snapshot) => {
            if !state.is_null() {
                *state = XINPUT_STATE::from(snapshot);
            }
            ERROR_SUCCESS
        }
        Err(_) => ERROR_DEVICE_NOT_CONNECTED,
    }
}

/// Fill in the static device description. Reports success for every slot;
/// stock xinput1_4 has the same quirk and enumeration code may rely on it.
///
/// # Safety
/// `caps` must be null or a valid pointer to a writable XINPUT_CAPABILITIES.
#[no_mangle]
pub unsafe extern "system" fn XInputGetCapabilities(
    _user_index: u32,
    _flags: u32,
    caps: *mut XINPUT_CAPABILITIES,
) -> u32 {
    if !caps.is_null() {
        *caps = XINPUT_CAPABILITIES::from(capabilities::capabilities());
    }
    ERROR_SUCCESS
}

/// Battery query stub: slot-gated status, output left untouched.
#[no_mangle]
pub extern "system" fn XInputGetBatteryInformation(
    user_index: u32,
    _dev_type: u8,
    _battery_information: *mut XINPUT_BATTERY_INFORMATION,
) -> u32 {
    status(state::connected(user_index))
}

/// Keystroke query stub: slot-gated status, output left untouched.
#[no_mangle]
pub extern "system" fn XInputGetKeystroke(
    user_index: u32,
    _reserved: u32,
    _keystroke: *mut XINPUT_KEYSTROKE,
) -> u32 {
    status(state::connected(user_index))
}

/// Extended state query stub: slot-gated status, output left untouched.
#[no_mangle]
pub extern "system" fn XInputGetStateEx(user_index: u32, _state: *mut XINPUT_STATE) -> u32 {
    status(state::connected(user_index))
}

/// Audio device query stub: slot-gated status, GUIDs left untouched.
#[no_mangle]
pub extern "system" fn XInputGetDSoundAudioDeviceGuids(
    user_index: u32,
    _render_guid: *mut GUID,
    _capture_guid: *mut GUID,
) -> u32 {
    status(state::connected(user_index))
}

/// Guide-button wait stub. Never blocks; returns the slot-gated status
/// immediately.
#[no_mangle]
pub extern "system" fn XInputWaitForGuideButton(
    user_index: u32,
    _flag: u32,
    _reserved: *mut c_void,
) -> u32 {
    status(state::connected(user_index))
}

/// Stock xinput declares this one without WINAPI, so it is cdecl here too.
#[no_mangle]
pub extern "C" fn XInputCancelGuideButtonWait(user_index: u32) -> u32 {
    status(state::connected(user_index))
}

/// Stock xinput declares this one without WINAPI, so it is cdecl here too.
#[no_mangle]
pub extern "C" fn XInputPowerOffController(user_index: u32) -> u32 {
    status(state::connected(user_index))
}

// === Mutation entry points ===

/// Vibration request: slot-gated status, payload discarded. The virtual
/// device has no feedback path to the external driver.
#[no_mangle]
pub extern "system" fn XInputSetState(
    user_index: u32,
    vibration: *const XINPUT_VIBRATION,
) -> u32 {
    if !vibration.is_null() {
        let v = unsafe { &*vibration };
        trace!(
            left = v.left_motor_speed,
            right = v.right_motor_speed,
            "vibration request discarded"
        );
    }
    status(state::connected(user_index))
}

/// Enable/disable toggle: accepted for ABI compatibility only.
#[no_mangle]
pub extern "system" fn XInputEnable(_enable: i32) {}

/// Set or clear button bits in the shared record. This is part of the
/// control surface an external driver calls; it takes no slot and cannot
/// fail.
#[no_mangle]
pub extern "C" fn XInputSetButtonState(button: u16, pressed: i32) {
    trace!(button, pressed, "set button state");
    PAD.write()
        .set_button(Buttons::from_bits_retain(button), pressed != 0);
}

/// Overwrite one trigger in the shared record.
#[no_mangle]
pub extern "C" fn XInputSetTriggerState(left: i32, value: u8) {
    let side = if left != 0 { Side::Left } else { Side::Right };
    trace!(?side, value, "set trigger state");
    PAD.write().set_trigger(side, value);
}

/// Overwrite both axes of one stick in the shared record as a pair.
#[no_mangle]
pub extern "C" fn XInputSetThumbState(left: i32, x: i16, y: i16) {
    let side = if left != 0 { Side::Left } else { Side::Right };
    trace!(?side, x, y, "set thumb state");
    PAD.write().set_thumb(side, x, y);
}
