//! Virtual pad state store
//!
//! This module holds the single virtual controller the library reports to
//! its host application, together with the C ABI surface that makes the
//! library a drop-in replacement for the platform input library.
//!
//! # Architecture
//!
//! Two disjoint groups of operations share one pad record:
//! - Query entry points the host application polls (state, capabilities,
//!   battery/keystroke/audio stubs), which copy the record out.
//! - Setter entry points an external driver calls (buttons, triggers,
//!   sticks), which overwrite individual fields in place.
//!
//! Only slot 0 is emulated as present; probing any other slot yields the
//! not-connected status and leaves the caller's output record untouched.
//!
//! # Thread Safety
//!
//! The pad record is protected by a RwLock: a state query always observes
//! a consistent snapshot, and a paired-axis stick write is atomic with
//! respect to queries. No operation blocks.

pub mod buttons;
pub mod capabilities;
pub mod ffi;
pub mod state;

pub use buttons::Buttons;
pub use capabilities::{capabilities, Capabilities};
pub use state::{connected, snapshot, Pad, PadError, PadResult, PadSnapshot, Side, Stick};
