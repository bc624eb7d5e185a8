//! Integration tests for the device script session.
//!
//! Drives the session the way `main` does — bytes from real source
//! implementations, events into a recording emitter — to verify the wiring
//! between infrastructure sources, the core engine, and the pacing rules.

use std::collections::VecDeque;
use std::io::Write;
use std::net::TcpStream;
use std::thread;
use std::time::{Duration, Instant};

use drake_core::{ByteSource, Dispatch, Interpreter, KeyCode, KeyEvent, RecordingKeyboard};
use drake_device::application::session::{ScriptSession, SessionStep};
use drake_device::infrastructure::line_source::TcpSource;

fn quiet_session() -> ScriptSession {
    ScriptSession::new(Interpreter::with_default_delay(0))
}

#[test]
fn test_script_playback_from_memory() {
    let mut session = quiet_session();
    let mut kb = RecordingKeyboard::new();
    let mut source: VecDeque<u8> = b"REM demo\nGUI r\nSTRING notepad\nENTER\nREPEAT 1\n"
        .iter()
        .copied()
        .collect();

    let outcomes = session.run_until_idle(&mut [&mut source], &mut kb);

    assert_eq!(
        outcomes,
        vec![
            Dispatch::Done, // REM
            Dispatch::Done, // GUI r
            Dispatch::Done, // STRING notepad
            Dispatch::Done, // ENTER
            Dispatch::Done, // REPEAT replays ENTER
        ]
    );
    // GUI chord (3 events) + "notepad" (7) + ENTER + repeated ENTER.
    assert_eq!(kb.events.len(), 3 + 7 + 1 + 1);
    assert_eq!(kb.events.last(), Some(&KeyEvent::Write(KeyCode::Enter)));
}

#[test]
fn test_lines_arriving_over_tcp_execute_in_order() {
    let mut session = quiet_session();
    let mut kb = RecordingKeyboard::new();
    let mut source = TcpSource::bind("127.0.0.1:0").expect("bind ephemeral port");

    let mut client = TcpStream::connect(source.local_addr()).expect("connect");
    client.write_all(b"ENTER\nTAB\n").unwrap();
    client.flush().unwrap();
    drop(client);

    let mut executed = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while executed.len() < 2 && Instant::now() < deadline {
        match session.poll(&mut [&mut source], &mut kb) {
            SessionStep::Executed(outcome) => executed.push(outcome),
            SessionStep::Idle => thread::sleep(Duration::from_millis(1)),
        }
    }

    assert_eq!(executed, vec![Dispatch::Done, Dispatch::Done]);
    assert_eq!(
        kb.events,
        vec![KeyEvent::Write(KeyCode::Enter), KeyEvent::Write(KeyCode::Tab)]
    );
}

#[test]
fn test_priority_source_wins_when_both_have_lines() {
    let mut session = quiet_session();
    let mut kb = RecordingKeyboard::new();

    let mut control: VecDeque<u8> = b"STRING c\n".iter().copied().collect();
    let mut fallback: VecDeque<u8> = b"STRING f\n".iter().copied().collect();

    // First poll completes the control-link line without touching stdin's.
    session.poll(&mut [&mut control, &mut fallback], &mut kb);
    assert_eq!(
        kb.events,
        vec![KeyEvent::Char { shift: false, key: KeyCode::KeyC }]
    );

    // Next poll drains the fallback source.
    session.poll(&mut [&mut control, &mut fallback], &mut kb);
    assert_eq!(kb.events.len(), 2);
    assert_eq!(
        kb.events[1],
        KeyEvent::Char { shift: false, key: KeyCode::KeyF }
    );
}

#[test]
fn test_default_delay_pacing_is_applied_between_commands() {
    // Two commands with a 30 ms default delay: the wall clock must show at
    // least two pacing sleeps.
    let mut session = ScriptSession::new(Interpreter::with_default_delay(30));
    let mut kb = RecordingKeyboard::new();
    let mut source: VecDeque<u8> = b"ENTER\nTAB\n".iter().copied().collect();

    let started = Instant::now();
    let outcomes = session.run_until_idle(&mut [&mut source], &mut kb);
    let elapsed = started.elapsed();

    assert_eq!(outcomes, vec![Dispatch::Done, Dispatch::Done]);
    assert!(
        elapsed >= Duration::from_millis(60),
        "expected two 30 ms pacing delays, got {elapsed:?}"
    );
}

#[test]
fn test_custom_delay_replaces_pacing_for_that_cycle() {
    // DELAY 1 must not incur the (enormous) default delay; if it did, this
    // test would time out rather than finish instantly.
    let mut session = ScriptSession::new(Interpreter::with_default_delay(3_600_000));
    let mut kb = RecordingKeyboard::new();
    let mut source: VecDeque<u8> = b"DELAY 1\n".iter().copied().collect();

    let started = Instant::now();
    let outcome = session.poll(&mut [&mut source], &mut kb);

    assert_eq!(outcome, SessionStep::Executed(Dispatch::CustomDelay));
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[test]
fn test_source_trait_objects_compose() {
    // The session accepts heterogeneous sources: a real TCP link and an
    // in-memory queue in one priority list.
    let mut session = quiet_session();
    let mut kb = RecordingKeyboard::new();
    let mut tcp = TcpSource::bind("127.0.0.1:0").expect("bind ephemeral port");
    let mut mem: VecDeque<u8> = b"TAB\n".iter().copied().collect();

    let mut sources: Vec<&mut dyn ByteSource> = vec![&mut tcp, &mut mem];
    let step = session.poll(&mut sources, &mut kb);

    assert_eq!(step, SessionStep::Executed(Dispatch::Done));
    assert_eq!(kb.events, vec![KeyEvent::Write(KeyCode::Tab)]);
}
