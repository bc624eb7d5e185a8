//! Key code tables for keystroke injection.
//!
//! The canonical representation is USB HID Usage IDs (page 0x07,
//! Keyboard/Keypad). Script key names and typed characters are translated
//! to HID codes here; the USB transport consumes the codes unchanged.

pub mod ascii;
pub mod hid;
pub mod names;

pub use hid::KeyCode;
