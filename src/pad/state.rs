//! Virtual pad state and operations.
//!
//! One pad record exists for the process lifetime. External drivers
//! overwrite its fields through the setter entry points; the host
//! application copies it out through the query entry points.

use std::sync::LazyLock;

use parking_lot::RwLock;

use super::buttons::Buttons;
use crate::ticks;

/// The one slot that reports a connected pad.
pub const PLAYER_ONE: u32 = 0;

/// Number of controller slots a caller may probe.
pub const MAX_PLAYERS: u32 = 4;

/// Global pad record. Zero-initialized at first touch, lives for the
/// process lifetime, fields are only ever overwritten.
pub static PAD: LazyLock<RwLock<Pad>> = LazyLock::new(|| RwLock::new(Pad::default()));

/// Error type for slot-gated operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PadError {
    #[error("controller slot {0} is not connected")]
    NotConnected(u32),
}

/// Result type for slot-gated operations
pub type PadResult<T> = Result<T, PadError>;

/// Which stick or trigger a setter addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One thumbstick position. Both axes of a stick are written together, so
/// a snapshot never sees a half-updated pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stick {
    pub x: i16,
    pub y: i16,
}

/// The pad record: buttons, triggers, sticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pad {
    pub buttons: Buttons,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub left_stick: Stick,
    pub right_stick: Stick,
}

impl Pad {
    /// Set or clear the given button bits. Operates on the raw word, so
    /// bits outside the defined set pass through untouched.
    pub fn set_button(&mut self, mask: Buttons, pressed: bool) {
        if pressed {
            self.buttons.insert(mask);
        } else {
            self.buttons.remove(mask);
        }
    }

    /// Overwrite one trigger, leaving the other untouched.
    pub fn set_trigger(&mut self, side: Side, value: u8) {
        match side {
            Side::Left => self.left_trigger = value,
            Side::Right => self.right_trigger = value,
        }
    }

    /// Overwrite both axes of one stick as a pair.
    pub fn set_thumb(&mut self, side: Side, x: i16, y: i16) {
        let stick = Stick { x, y };
        match side {
            Side::Left => self.left_stick = stick,
            Side::Right => self.right_stick = stick,
        }
    }
}

/// A copy of the pad record stamped with a fresh sequence number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadSnapshot {
    pub sequence: u32,
    pub pad: Pad,
}

/// Slot gate: only [`PLAYER_ONE`] is emulated as present.
pub fn connected(slot: u32) -> PadResult<()> {
    if slot == PLAYER_ONE {
        Ok(())
    } else {
        Err(PadError::NotConnected(slot))
    }
}

/// Copy the current record out, stamping the sequence number with the
/// current tick count. The stored record is not mutated.
pub fn snapshot(slot: u32) -> PadResult<PadSnapshot> {
    connected(slot)?;
    let pad = *PAD.read();
    Ok(PadSnapshot {
        sequence: ticks::tick_count(),
        pad,
    })
}
