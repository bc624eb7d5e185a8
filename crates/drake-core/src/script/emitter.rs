//! The keyboard emitter seam between the interpreter and the USB transport.
//!
//! The interpreter produces abstract key events; how they reach a host
//! (USB gadget reports, a debug log, a test recorder) is behind the
//! [`KeyboardEmitter`] trait, injected by the caller.
//!
//! # Why a recording emitter in the shipped tree?
//!
//! The real emitter writes to a character device that only exists on a
//! configured USB gadget, and its effects (keystrokes on a *host* machine)
//! cannot be observed from test code. [`RecordingKeyboard`] replaces the
//! transport with an in-memory event log so unit and integration tests can
//! assert exactly which events a script produced, in order. The
//! `should_fail` flag simulates transport failures to exercise
//! error-absorption paths in callers.

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::keymap::ascii::key_for_char;
use crate::keymap::hid::KeyCode;

/// Error type for keyboard emission.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The underlying transport failed (gadget device write, etc.).
    #[error("keyboard transport error: {0}")]
    Transport(#[from] io::Error),
}

/// One observable keyboard action, as recorded by [`RecordingKeyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Key held down (released later by `ReleaseAll`).
    Press(KeyCode),
    /// All held keys released.
    ReleaseAll,
    /// Atomic press-and-release of one key.
    Write(KeyCode),
    /// One typed character, resolved to a key plus shift state.
    Char { shift: bool, key: KeyCode },
}

/// Abstract keyboard the interpreter drives.
///
/// Implementations are synchronous: when a call returns, the event is
/// assumed observable by the host.
pub trait KeyboardEmitter {
    /// Holds `key` down until [`KeyboardEmitter::release_all`].
    fn press(&mut self, key: KeyCode) -> Result<(), EmitError>;

    /// Releases every held key and modifier.
    fn release_all(&mut self) -> Result<(), EmitError>;

    /// Presses and releases `key` as one action.
    fn write(&mut self, key: KeyCode) -> Result<(), EmitError>;

    /// Types a printable character, resolving shift state internally.
    ///
    /// Characters with no keystroke representation are skipped, not errors:
    /// text typing degrades per-character the way the script author would
    /// expect from a keyboard that simply lacks the key.
    fn type_char(&mut self, c: char) -> Result<(), EmitError>;
}

/// A keyboard that records all events without any transport.
#[derive(Debug, Default)]
pub struct RecordingKeyboard {
    /// Every event in emission order.
    pub events: Vec<KeyEvent>,
    /// When `true`, every method returns a transport error. Use this to
    /// test error-handling paths in callers.
    pub should_fail: bool,
}

impl RecordingKeyboard {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn check(&self) -> Result<(), EmitError> {
        if self.should_fail {
            Err(EmitError::Transport(io::Error::new(
                io::ErrorKind::Other,
                "recording keyboard failure",
            )))
        } else {
            Ok(())
        }
    }
}

impl KeyboardEmitter for RecordingKeyboard {
    fn press(&mut self, key: KeyCode) -> Result<(), EmitError> {
        self.check()?;
        self.events.push(KeyEvent::Press(key));
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), EmitError> {
        self.check()?;
        self.events.push(KeyEvent::ReleaseAll);
        Ok(())
    }

    fn write(&mut self, key: KeyCode) -> Result<(), EmitError> {
        self.check()?;
        self.events.push(KeyEvent::Write(key));
        Ok(())
    }

    fn type_char(&mut self, c: char) -> Result<(), EmitError> {
        self.check()?;
        let Some((shift, key)) = key_for_char(c) else {
            debug!(character = ?c, "character has no key mapping; skipped");
            return Ok(());
        };
        self.events.push(KeyEvent::Char { shift, key });
        Ok(())
    }
}
