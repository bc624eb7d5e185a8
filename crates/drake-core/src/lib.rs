//! # drake-core
//!
//! Shared library for the Drake keystroke injector containing the key code
//! translation tables and the script engine: line assembly, directive
//! parsing, and the interpreter state machine.
//!
//! This crate is used by the device firmware binary and by tests. It has
//! zero dependencies on OS APIs, serial drivers, or USB transport.
//!
//! # Architecture overview (for beginners)
//!
//! Drake is the firmware core of a USB keystroke-injection device: a small
//! gadget that enumerates as a keyboard and "types" a script into whatever
//! host it is plugged into. Command lines arrive one at a time over a byte
//! channel (a serial link, a TCP socket, stdin during development) and each
//! line is a single directive such as `STRING hello` or `CTRL-ALT DEL`.
//!
//! This crate defines:
//!
//! - **`keymap`** – The canonical key representation: USB HID Usage IDs
//!   (page 0x07), the resolver that turns textual key names like `ENTER` or
//!   `LEFTARROW` into codes, and the ASCII table used to type characters
//!   with the correct shift state.
//!
//! - **`script`** – The engine. A [`script::line::LineAssembler`] turns raw
//!   bytes into bounded, terminator-stripped lines; the
//!   [`script::interpreter::Interpreter`] tokenizes each line, dispatches it
//!   to a directive handler, and drives a [`script::emitter::KeyboardEmitter`]
//!   implementation supplied by the caller.

pub mod keymap;
pub mod script;

// Re-export the most-used types at the crate root so callers can write
// `drake_core::Interpreter` instead of `drake_core::script::interpreter::Interpreter`.
pub use keymap::hid::KeyCode;
pub use script::emitter::{EmitError, KeyEvent, KeyboardEmitter, RecordingKeyboard};
pub use script::interpreter::{Dispatch, Interpreter};
pub use script::line::{ByteSource, FeedOutcome, LineAssembler, LineError, LINE_CAPACITY};
