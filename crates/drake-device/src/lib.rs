//! drake-device library entry point.
//!
//! Re-exports the application and infrastructure modules so integration
//! tests in `tests/` and the binary entry point in `main.rs` share the same
//! module tree.
//!
//! # What does drake-device do? (for beginners)
//!
//! The *device* is the half of Drake that runs on real hardware — typically
//! a small Linux board configured as a USB keyboard gadget and plugged into
//! a victim/host machine. It:
//!
//! 1. Opens the USB gadget character device that carries keyboard reports
//!    to the host.
//! 2. Listens for script lines on its configured byte channels (a TCP
//!    control link and/or an interactive stdin during development).
//! 3. Feeds those bytes through the `drake-core` line assembler and
//!    interpreter, which turn directives like `STRING hello` into key
//!    events.
//! 4. Applies the inter-command pacing delay between lines.

/// Application layer: the script session poll loop.
pub mod application;

/// Infrastructure layer: byte sources, keyboard transports, configuration.
pub mod infrastructure;
