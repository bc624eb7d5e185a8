//! Application layer use cases for the device.
//!
//! - **`session`** – The script session: one poll reads at most one complete
//!   line from the byte sources, runs it through the interpreter, and applies
//!   the inter-command delay. The main loop and the script-playback mode are
//!   both thin drivers around it.

pub mod session;
