//! Dry-run keyboard emitter.
//!
//! Logs every event the interpreter produces instead of sending it to a
//! host. Lets a script be exercised on a workstation with no USB gadget
//! configured (`drake-device --dry-run`).

use tracing::info;

use drake_core::{EmitError, KeyCode, KeyboardEmitter};

/// Emitter that narrates events to the log and performs nothing.
pub struct TraceKeyboard;

impl KeyboardEmitter for TraceKeyboard {
    fn press(&mut self, key: KeyCode) -> Result<(), EmitError> {
        info!(?key, "press");
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), EmitError> {
        info!("release all");
        Ok(())
    }

    fn write(&mut self, key: KeyCode) -> Result<(), EmitError> {
        info!(?key, "press+release");
        Ok(())
    }

    fn type_char(&mut self, c: char) -> Result<(), EmitError> {
        info!(character = ?c, "type");
        Ok(())
    }
}
