//! The script session poll loop.
//!
//! Ties the line assembler and the interpreter together with the pacing
//! rule from the device's outer loop: after every executed command the
//! session blocks for the interpreter's default delay, unless the command
//! reports that it already performed its own timing
//! ([`Dispatch::CustomDelay`]).
//!
//! Execution is strictly sequential: a command (including every repeat of a
//! `REPEAT`) runs to completion, delays included, before another byte of
//! input is read.

use std::thread;

use tracing::warn;

use drake_core::{
    ByteSource, Dispatch, FeedOutcome, Interpreter, KeyboardEmitter, LineAssembler,
};

/// Result of one [`ScriptSession::poll`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// One complete line was interpreted with the given outcome.
    Executed(Dispatch),
    /// No complete line was available from any source.
    Idle,
}

/// Owns the line assembler and interpreter for one execution stream.
pub struct ScriptSession {
    assembler: LineAssembler,
    interpreter: Interpreter,
}

impl ScriptSession {
    /// Creates a session around a configured interpreter.
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            assembler: LineAssembler::new(),
            interpreter,
        }
    }

    /// Read-only access to the interpreter (diagnostics, tests).
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Drains available input and, if a complete line arrived, executes it.
    ///
    /// Applies the default inter-command delay after execution unless the
    /// directive reported [`Dispatch::CustomDelay`]. Returns
    /// [`SessionStep::Idle`] when the sources had no complete line to offer.
    pub fn poll(
        &mut self,
        sources: &mut [&mut dyn ByteSource],
        keyboard: &mut dyn KeyboardEmitter,
    ) -> SessionStep {
        match self.assembler.feed(sources) {
            Ok(FeedOutcome::LineReady) => {
                let line = String::from_utf8_lossy(self.assembler.line()).into_owned();
                let outcome = self.interpreter.interpret(&line, keyboard);
                self.assembler.reset();
                if outcome != Dispatch::CustomDelay {
                    thread::sleep(self.interpreter.default_delay());
                }
                SessionStep::Executed(outcome)
            }
            Ok(FeedOutcome::Pending) => SessionStep::Idle,
            Err(e) => {
                // The session always resets after a line, so a full buffer
                // means an upstream bug. Drop the buffered bytes and carry on.
                warn!(error = %e, "line buffer overrun; discarding buffered input");
                self.assembler.reset();
                SessionStep::Executed(Dispatch::InvalidInput)
            }
        }
    }

    /// Polls until the sources run dry, returning the executed outcomes.
    ///
    /// Used for script-file playback, where the byte source is finite.
    pub fn run_until_idle(
        &mut self,
        sources: &mut [&mut dyn ByteSource],
        keyboard: &mut dyn KeyboardEmitter,
    ) -> Vec<Dispatch> {
        let mut outcomes = Vec::new();
        while let SessionStep::Executed(outcome) = self.poll(sources, keyboard) {
            outcomes.push(outcome);
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use drake_core::{KeyCode, KeyEvent, RecordingKeyboard};

    /// A session whose pacing delay is zero, so tests never sleep.
    fn quiet_session() -> ScriptSession {
        ScriptSession::new(Interpreter::with_default_delay(0))
    }

    fn source(bytes: &[u8]) -> VecDeque<u8> {
        bytes.iter().copied().collect()
    }

    #[test]
    fn test_idle_when_no_line_is_complete() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();
        let mut partial = source(b"STRING unfinish");

        assert_eq!(session.poll(&mut [&mut partial], &mut kb), SessionStep::Idle);
        assert!(kb.events.is_empty());
    }

    #[test]
    fn test_one_poll_executes_at_most_one_line() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();
        let mut input = source(b"ENTER\nTAB\n");

        assert_eq!(
            session.poll(&mut [&mut input], &mut kb),
            SessionStep::Executed(Dispatch::Done)
        );
        assert_eq!(kb.events, vec![KeyEvent::Write(KeyCode::Enter)]);

        assert_eq!(
            session.poll(&mut [&mut input], &mut kb),
            SessionStep::Executed(Dispatch::Done)
        );
        assert_eq!(kb.events.len(), 2);
    }

    #[test]
    fn test_line_accumulates_across_polls() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();

        let mut first = source(b"STRING h");
        assert_eq!(session.poll(&mut [&mut first], &mut kb), SessionStep::Idle);

        let mut second = source(b"i\n");
        assert_eq!(
            session.poll(&mut [&mut second], &mut kb),
            SessionStep::Executed(Dispatch::Done)
        );
        assert_eq!(kb.events.len(), 2);
    }

    #[test]
    fn test_run_until_idle_plays_a_whole_script() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();
        let mut script = source(b"GUI r\nSTRING cmd\nENTER\n");

        let outcomes = session.run_until_idle(&mut [&mut script], &mut kb);

        assert_eq!(
            outcomes,
            vec![Dispatch::Done, Dispatch::Done, Dispatch::Done]
        );
        assert_eq!(kb.events.len(), 3 + 3 + 1);
    }

    #[test]
    fn test_custom_delay_skips_the_pacing_sleep() {
        // A large default delay would hang this test if DELAY did not
        // suppress it; DELAY 1 itself blocks for only a millisecond.
        let mut session = ScriptSession::new(Interpreter::with_default_delay(3_600_000));
        let mut kb = RecordingKeyboard::new();
        let mut input = source(b"DELAY 1\n");

        assert_eq!(
            session.poll(&mut [&mut input], &mut kb),
            SessionStep::Executed(Dispatch::CustomDelay)
        );
    }

    #[test]
    fn test_rejected_lines_do_not_stop_the_session() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();
        let mut script = source(b"NOT_A_COMMAND\nENTER\n");

        let outcomes = session.run_until_idle(&mut [&mut script], &mut kb);

        assert_eq!(outcomes, vec![Dispatch::Bad, Dispatch::Done]);
        assert_eq!(kb.events, vec![KeyEvent::Write(KeyCode::Enter)]);
    }

    #[test]
    fn test_sources_are_polled_in_priority_order() {
        let mut session = quiet_session();
        let mut kb = RecordingKeyboard::new();
        let mut control = source(b"STRING a\n");
        let mut fallback = source(b"STRING b\n");

        session.poll(&mut [&mut control, &mut fallback], &mut kb);

        assert_eq!(
            kb.events,
            vec![KeyEvent::Char { shift: false, key: KeyCode::KeyA }]
        );
    }
}
