//! The directive interpreter state machine.
//!
//! One call to [`Interpreter::interpret`] consumes one assembled line:
//! tokenize, dispatch to a directive handler, emit key events and perform
//! any blocking waits, and report the outcome as a [`Dispatch`].
//!
//! The interpreter owns exactly two pieces of persistent state, passed
//! explicitly rather than living in globals:
//!
//! - the **default inter-command delay**, mutated only by `DEFAULT_DELAY`,
//!   applied *by the caller* between commands (the interpreter merely
//!   reports, via [`Dispatch::CustomDelay`], when a directive has already
//!   done its own waiting);
//! - the **last executed command**, re-run by `REPEAT`. Every directive
//!   except comments and `REPEAT` itself overwrites it — *before* its own
//!   argument validation, so a malformed line is still repeatable.
//!
//! # Error philosophy
//!
//! No command failure is fatal. Malformed input ([`Dispatch::Bad`]) and
//! structural misuse ([`Dispatch::InvalidInput`]) are logged to the
//! diagnostic sink and absorbed; the caller simply reads the next line.
//! Scripts cannot observe or branch on failures.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::keymap::hid::KeyCode;
use crate::keymap::names;
use crate::script::directive::{argument, first_token, Directive};
use crate::script::emitter::{EmitError, KeyboardEmitter};
use crate::script::line::LINE_CAPACITY;
use crate::script::numeric::parse_u32;
use crate::script::words::count_words;

/// Default delay between commands at power-on, in milliseconds.
pub const INITIAL_DEFAULT_DELAY_MS: u32 = 100;

/// Outcome of interpreting one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The directive executed.
    Done,
    /// Malformed input: missing or unparseable argument, unknown directive
    /// or key name, or `REPEAT` with no history. Logged and discarded.
    Bad,
    /// Structural precondition violated (line exceeds the assembler
    /// capacity). Treated like [`Dispatch::Bad`] by callers.
    InvalidInput,
    /// The directive performed its own timing; the caller must skip the
    /// default inter-command delay for this cycle.
    CustomDelay,
}

/// The interpreter and its persistent state.
pub struct Interpreter {
    default_delay_ms: u32,
    last_command: String,
}

impl Interpreter {
    /// Creates an interpreter with the power-on default delay.
    pub fn new() -> Self {
        Self::with_default_delay(INITIAL_DEFAULT_DELAY_MS)
    }

    /// Creates an interpreter with a configured initial default delay.
    pub fn with_default_delay(ms: u32) -> Self {
        Self {
            default_delay_ms: ms,
            last_command: String::new(),
        }
    }

    /// The current inter-command delay, applied by the caller after every
    /// command that does not return [`Dispatch::CustomDelay`].
    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.default_delay_ms))
    }

    /// The stored command `REPEAT` would re-run; empty until a
    /// non-comment, non-`REPEAT` line has been interpreted.
    pub fn last_command(&self) -> &str {
        &self.last_command
    }

    /// Interprets one command line.
    ///
    /// Emits zero or more key events through `keyboard` and performs any
    /// blocking waits the directive requires, then reports the [`Dispatch`]
    /// outcome. Never panics on malformed input.
    pub fn interpret(&mut self, line: &str, keyboard: &mut dyn KeyboardEmitter) -> Dispatch {
        if line.len() >= LINE_CAPACITY {
            warn!(len = line.len(), "line exceeds assembler capacity; refused");
            return Dispatch::InvalidInput;
        }

        let words = count_words(line);
        if words == 0 {
            return Dispatch::Bad;
        }
        let argc = words - 1;
        info!(command = line, argc, "command received");

        let token = first_token(line);

        // Comments never execute and never become repeat history. `//` is a
        // prefix test because the comment text may abut the marker.
        if token == "REM" || line.starts_with("//") {
            debug!("comment line ignored");
            return Dispatch::Done;
        }

        if token == "REPEAT" {
            return self.repeat(line, argc, keyboard);
        }

        // Memoize before validation: even a line that fails below is what
        // REPEAT re-runs next.
        self.last_command.clear();
        self.last_command.push_str(line);

        match Directive::lookup(token) {
            Some(Directive::DefaultDelay) => self.set_default_delay(line, argc),
            Some(Directive::Delay) => self.delay(line, argc),
            Some(Directive::StringDelay) => self.string_delay(line, argc, keyboard),
            Some(Directive::String) => self.type_string(line, argc, keyboard),
            Some(Directive::CtrlAlt) => {
                self.chord(&[KeyCode::ControlLeft, KeyCode::AltLeft], line, argc, keyboard)
            }
            Some(Directive::CtrlShift) => {
                self.chord(&[KeyCode::ControlLeft, KeyCode::ShiftLeft], line, argc, keyboard)
            }
            Some(Directive::AltShift) => {
                self.chord(&[KeyCode::AltLeft, KeyCode::ShiftLeft], line, argc, keyboard)
            }
            Some(Directive::AltTab) => self.alt_tab(keyboard),
            Some(Directive::CommandOption) => {
                self.chord(&[KeyCode::MetaLeft, KeyCode::AltLeft], line, argc, keyboard)
            }
            Some(Directive::Gui) => self.chord(&[KeyCode::MetaLeft], line, argc, keyboard),
            Some(Directive::Ctrl) => self.chord(&[KeyCode::ControlLeft], line, argc, keyboard),
            Some(Directive::Alt) => self.chord(&[KeyCode::AltLeft], line, argc, keyboard),
            Some(Directive::Shift) => self.chord(&[KeyCode::ShiftLeft], line, argc, keyboard),
            None => self.single_key(line, keyboard),
        }
    }

    /// `REPEAT n` — re-runs the stored command `n` times sequentially.
    ///
    /// Each iteration runs to completion, including its own delays, and its
    /// outcome is ignored. The stored command can never itself be a
    /// `REPEAT` line, so the re-entry depth is bounded at one.
    fn repeat(&mut self, line: &str, argc: usize, keyboard: &mut dyn KeyboardEmitter) -> Dispatch {
        if argc == 0 {
            warn!("REPEAT without a count");
            return Dispatch::Bad;
        }
        if self.last_command.is_empty() {
            warn!("REPEAT with no stored command");
            return Dispatch::Bad;
        }
        let Some(count) = numeric_argument(line, argc) else {
            return Dispatch::Bad;
        };

        let repeated = self.last_command.clone();
        debug!(count, command = %repeated, "repeating stored command");
        for _ in 0..count {
            let _ = self.interpret(&repeated, keyboard);
        }
        Dispatch::Done
    }

    /// `DEFAULT_DELAY n` / `DEFAULTDELAY n`.
    fn set_default_delay(&mut self, line: &str, argc: usize) -> Dispatch {
        let Some(ms) = numeric_argument(line, argc) else {
            return Dispatch::Bad;
        };
        self.default_delay_ms = ms;
        info!(default_delay_ms = ms, "default inter-command delay updated");
        Dispatch::Done
    }

    /// `DELAY n` — blocks for `n` milliseconds here and now.
    fn delay(&self, line: &str, argc: usize) -> Dispatch {
        let Some(ms) = numeric_argument(line, argc) else {
            return Dispatch::Bad;
        };
        thread::sleep(Duration::from_millis(u64::from(ms)));
        Dispatch::CustomDelay
    }

    /// `STRING text` — types the argument verbatim.
    fn type_string(
        &self,
        line: &str,
        argc: usize,
        keyboard: &mut dyn KeyboardEmitter,
    ) -> Dispatch {
        if argc == 0 {
            warn!("STRING without text");
            return Dispatch::Bad;
        }
        let Some(text) = argument(line) else {
            return Dispatch::Bad;
        };
        for c in text.chars() {
            if let Err(e) = keyboard.type_char(c) {
                return absorb(e);
            }
        }
        Dispatch::Done
    }

    /// `STRING_DELAY n text` — types the text with an `n`-millisecond pause
    /// after every character.
    fn string_delay(
        &self,
        line: &str,
        argc: usize,
        keyboard: &mut dyn KeyboardEmitter,
    ) -> Dispatch {
        if argc < 2 {
            warn!("STRING_DELAY needs a delay and text");
            return Dispatch::Bad;
        }
        let Some(rest) = argument(line) else {
            return Dispatch::Bad;
        };

        // The delay token runs up to the next space inside the remainder;
        // the terminated-run requirement is waived because text follows.
        let digit_run = rest.find(' ').unwrap_or(rest.len());
        let per_char_ms = match parse_u32(rest, digit_run, false) {
            Ok(ms) => ms,
            Err(e) => {
                warn!(error = %e, "unparseable STRING_DELAY interval");
                return Dispatch::Bad;
            }
        };
        let Some(text) = argument(rest) else {
            return Dispatch::Bad;
        };

        let pause = Duration::from_millis(u64::from(per_char_ms));
        for c in text.chars() {
            if let Err(e) = keyboard.type_char(c) {
                return absorb(e);
            }
            thread::sleep(pause);
        }
        Dispatch::Done
    }

    /// Modifier chord: press the fixed modifier set, optionally one resolved
    /// key, then release everything.
    ///
    /// A supplied-but-unrecognized key name downgrades to a modifiers-only
    /// chord rather than failing; scripts rely on this leniency.
    fn chord(
        &self,
        modifiers: &[KeyCode],
        line: &str,
        argc: usize,
        keyboard: &mut dyn KeyboardEmitter,
    ) -> Dispatch {
        let mut extra = KeyCode::Undefined;
        if argc > 0 {
            let Some(name) = argument(line) else {
                return Dispatch::Bad;
            };
            extra = names::resolve(name);
            if extra == KeyCode::Undefined {
                debug!(name, "unrecognized chord key; pressing modifiers only");
            }
        }

        match emit_chord(keyboard, modifiers, extra) {
            Ok(()) => Dispatch::Done,
            Err(e) => absorb(e),
        }
    }

    /// `ALT-TAB` — fixed chord, ignores any argument text.
    fn alt_tab(&self, keyboard: &mut dyn KeyboardEmitter) -> Dispatch {
        match emit_chord(keyboard, &[KeyCode::AltLeft], KeyCode::Tab) {
            Ok(()) => Dispatch::Done,
            Err(e) => absorb(e),
        }
    }

    /// Fallback: the whole line is a key name. Trailing text defeats the
    /// lookup, so `ENTER extra` is rejected rather than partially matched.
    fn single_key(&self, line: &str, keyboard: &mut dyn KeyboardEmitter) -> Dispatch {
        let key = names::resolve(line);
        if key == KeyCode::Undefined {
            warn!(command = line, "unknown directive or key name");
            return Dispatch::Bad;
        }
        match keyboard.write(key) {
            Ok(()) => Dispatch::Done,
            Err(e) => absorb(e),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Presses `modifiers` in order, then `extra` unless it is the undefined
/// sentinel, then releases all.
fn emit_chord(
    keyboard: &mut dyn KeyboardEmitter,
    modifiers: &[KeyCode],
    extra: KeyCode,
) -> Result<(), EmitError> {
    for &modifier in modifiers {
        keyboard.press(modifier)?;
    }
    if extra != KeyCode::Undefined {
        keyboard.press(extra)?;
    }
    keyboard.release_all()
}

/// Extracts and parses the full-remainder numeric argument used by
/// `REPEAT`, `DELAY`, and `DEFAULT_DELAY`.
fn numeric_argument(line: &str, argc: usize) -> Option<u32> {
    if argc == 0 {
        warn!(command = line, "missing numeric argument");
        return None;
    }
    let arg = argument(line)?;
    match parse_u32(arg, arg.len(), true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(command = line, error = %e, "unparseable numeric argument");
            None
        }
    }
}

/// Logs an emitter failure and converts it to the absorbed-failure outcome.
fn absorb(e: EmitError) -> Dispatch {
    warn!(error = %e, "keyboard emitter failure");
    Dispatch::Bad
}
