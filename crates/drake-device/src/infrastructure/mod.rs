//! Infrastructure layer for the device.
//!
//! Contains the OS-facing adapters. **Dependency rule**: this layer may
//! depend on `application` and `drake_core`, but must not be imported by
//! them.
//!
//! # Sub-modules
//!
//! - **`line_source`** – `ByteSource` implementations: a TCP control link
//!   and an interactive stdin channel, each backed by a reader thread
//!   feeding an in-process queue so the single-threaded session can poll
//!   without blocking.
//!
//! - **`keyboard`** – `KeyboardEmitter` implementations: boot-protocol
//!   reports over a Linux USB gadget character device, and a tracing-only
//!   emitter for dry runs.
//!
//! - **`storage`** – TOML configuration loading.

pub mod keyboard;
pub mod line_source;
pub mod storage;
