//! Boot-protocol keyboard reports over a Linux USB gadget device.
//!
//! A USB gadget configured with a keyboard HID function exposes a character
//! device (`/dev/hidg0` by convention); every 8-byte write is one keyboard
//! report delivered to the host:
//!
//! ```text
//! [modifier bitmap][reserved][key1][key2][key3][key4][key5][key6]
//! ```
//!
//! Byte 0 carries the eight modifiers (Left Ctrl = bit 0 … Right GUI =
//! bit 7); bytes 2–7 carry up to six concurrently held key usage IDs.
//! Releasing everything is a write of eight zero bytes. The host keeps a
//! key "held" until a report without it arrives, which is why every press
//! here is flushed immediately: the report stream *is* the key state.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use drake_core::keymap::ascii::key_for_char;
use drake_core::{EmitError, KeyCode, KeyboardEmitter};

const REPORT_LEN: usize = 8;
const FIRST_KEY_SLOT: usize = 2;

/// One boot-protocol keyboard report under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Report {
    bytes: [u8; REPORT_LEN],
}

impl Report {
    /// Adds a key, routing modifiers into the bitmap and everything else
    /// into a free key slot. A seventh concurrent key is silently dropped,
    /// as a hardware keyboard would.
    fn add_key(&mut self, key: KeyCode) {
        if let Some(bit) = key.modifier_bit() {
            self.bytes[0] |= bit;
            return;
        }
        let code = key.usage_id();
        for slot in &mut self.bytes[FIRST_KEY_SLOT..] {
            if *slot == code {
                return;
            }
            if *slot == 0 {
                *slot = code;
                return;
            }
        }
    }

    fn set_shift(&mut self) {
        // Left Shift bit; fine for typed characters regardless of which
        // physical shift a human would use.
        self.bytes[0] |= 0x02;
    }

    fn clear(&mut self) {
        self.bytes = [0; REPORT_LEN];
    }
}

/// Keyboard emitter writing to a USB gadget HID device.
pub struct HidGadgetKeyboard {
    device: File,
    report: Report,
}

impl HidGadgetKeyboard {
    /// Opens the gadget character device.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the device node is missing or
    /// inaccessible (gadget not configured, insufficient permissions).
    pub fn open(path: &Path) -> io::Result<Self> {
        let device = OpenOptions::new().read(true).write(true).open(path)?;
        debug!(path = %path.display(), "HID gadget device opened");
        Ok(Self {
            device,
            report: Report::default(),
        })
    }

    fn flush(&mut self) -> Result<(), EmitError> {
        self.device.write_all(&self.report.bytes)?;
        Ok(())
    }

    fn flush_and_release(&mut self) -> Result<(), EmitError> {
        self.flush()?;
        self.report.clear();
        self.flush()
    }
}

impl KeyboardEmitter for HidGadgetKeyboard {
    fn press(&mut self, key: KeyCode) -> Result<(), EmitError> {
        self.report.add_key(key);
        self.flush()
    }

    fn release_all(&mut self) -> Result<(), EmitError> {
        self.report.clear();
        self.flush()
    }

    fn write(&mut self, key: KeyCode) -> Result<(), EmitError> {
        self.report.add_key(key);
        self.flush_and_release()
    }

    fn type_char(&mut self, c: char) -> Result<(), EmitError> {
        let Some((shift, key)) = key_for_char(c) else {
            debug!(character = ?c, "character has no key mapping; skipped");
            return Ok(());
        };
        if shift {
            self.report.set_shift();
        }
        self.report.add_key(key);
        self.flush_and_release()
    }
}
