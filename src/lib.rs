// vxpad: virtual controller input library
// Drop-in replacement for the platform input library's export surface,
// backed by an in-process pad record driven through setter entry points.

pub mod config;
pub mod logging;
pub mod pad;
pub mod ticks;

pub use config::Options;
pub use pad::{Buttons, Capabilities, Pad, PadError, PadSnapshot, Side, Stick};
