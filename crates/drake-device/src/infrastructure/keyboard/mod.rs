//! `KeyboardEmitter` implementations for the device.
//!
//! - **`hidg`** – The real transport: boot-protocol keyboard reports
//!   written to a Linux USB gadget character device (`/dev/hidg0`).
//! - **`trace`** – A dry-run emitter that logs events instead of sending
//!   them, for exercising scripts without a configured gadget.
//!
//! The recording emitter used by tests ships with `drake-core`
//! (`drake_core::RecordingKeyboard`).

pub mod hidg;
pub mod trace;

pub use hidg::HidGadgetKeyboard;
pub use trace::TraceKeyboard;
