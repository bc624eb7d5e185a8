//! Character-to-key translation for text typing (US layout).
//!
//! `STRING`-style directives type arbitrary text, which means every printable
//! character must be turned into a key plus a shift state: `a` is the A key
//! unshifted, `A` is the A key with Shift held, `!` is the 1 key with Shift
//! held. This table encodes the US keyboard layout; hosts configured with a
//! different layout will see translated punctuation, which is a known
//! limitation of boot-protocol injection devices.
//!
//! A newline types the Enter key, so multi-line text behaves the way a human
//! typing it would.

use super::hid::KeyCode;

/// Returns the `(shift, key)` pair that types `c` on a US-layout host.
///
/// Returns `None` for characters with no single-keystroke representation
/// (non-ASCII, control characters other than `\n`/`\t`).
pub fn key_for_char(c: char) -> Option<(bool, KeyCode)> {
    let pair = match c {
        // Letters
        'a' => (false, KeyCode::KeyA),
        'b' => (false, KeyCode::KeyB),
        'c' => (false, KeyCode::KeyC),
        'd' => (false, KeyCode::KeyD),
        'e' => (false, KeyCode::KeyE),
        'f' => (false, KeyCode::KeyF),
        'g' => (false, KeyCode::KeyG),
        'h' => (false, KeyCode::KeyH),
        'i' => (false, KeyCode::KeyI),
        'j' => (false, KeyCode::KeyJ),
        'k' => (false, KeyCode::KeyK),
        'l' => (false, KeyCode::KeyL),
        'm' => (false, KeyCode::KeyM),
        'n' => (false, KeyCode::KeyN),
        'o' => (false, KeyCode::KeyO),
        'p' => (false, KeyCode::KeyP),
        'q' => (false, KeyCode::KeyQ),
        'r' => (false, KeyCode::KeyR),
        's' => (false, KeyCode::KeyS),
        't' => (false, KeyCode::KeyT),
        'u' => (false, KeyCode::KeyU),
        'v' => (false, KeyCode::KeyV),
        'w' => (false, KeyCode::KeyW),
        'x' => (false, KeyCode::KeyX),
        'y' => (false, KeyCode::KeyY),
        'z' => (false, KeyCode::KeyZ),
        'A' => (true, KeyCode::KeyA),
        'B' => (true, KeyCode::KeyB),
        'C' => (true, KeyCode::KeyC),
        'D' => (true, KeyCode::KeyD),
        'E' => (true, KeyCode::KeyE),
        'F' => (true, KeyCode::KeyF),
        'G' => (true, KeyCode::KeyG),
        'H' => (true, KeyCode::KeyH),
        'I' => (true, KeyCode::KeyI),
        'J' => (true, KeyCode::KeyJ),
        'K' => (true, KeyCode::KeyK),
        'L' => (true, KeyCode::KeyL),
        'M' => (true, KeyCode::KeyM),
        'N' => (true, KeyCode::KeyN),
        'O' => (true, KeyCode::KeyO),
        'P' => (true, KeyCode::KeyP),
        'Q' => (true, KeyCode::KeyQ),
        'R' => (true, KeyCode::KeyR),
        'S' => (true, KeyCode::KeyS),
        'T' => (true, KeyCode::KeyT),
        'U' => (true, KeyCode::KeyU),
        'V' => (true, KeyCode::KeyV),
        'W' => (true, KeyCode::KeyW),
        'X' => (true, KeyCode::KeyX),
        'Y' => (true, KeyCode::KeyY),
        'Z' => (true, KeyCode::KeyZ),

        // Digit row, unshifted and shifted
        '1' => (false, KeyCode::Digit1),
        '2' => (false, KeyCode::Digit2),
        '3' => (false, KeyCode::Digit3),
        '4' => (false, KeyCode::Digit4),
        '5' => (false, KeyCode::Digit5),
        '6' => (false, KeyCode::Digit6),
        '7' => (false, KeyCode::Digit7),
        '8' => (false, KeyCode::Digit8),
        '9' => (false, KeyCode::Digit9),
        '0' => (false, KeyCode::Digit0),
        '!' => (true, KeyCode::Digit1),
        '@' => (true, KeyCode::Digit2),
        '#' => (true, KeyCode::Digit3),
        '$' => (true, KeyCode::Digit4),
        '%' => (true, KeyCode::Digit5),
        '^' => (true, KeyCode::Digit6),
        '&' => (true, KeyCode::Digit7),
        '*' => (true, KeyCode::Digit8),
        '(' => (true, KeyCode::Digit9),
        ')' => (true, KeyCode::Digit0),

        // Whitespace and control
        ' ' => (false, KeyCode::Space),
        '\t' => (false, KeyCode::Tab),
        '\n' => (false, KeyCode::Enter),

        // Punctuation
        '-' => (false, KeyCode::Minus),
        '_' => (true, KeyCode::Minus),
        '=' => (false, KeyCode::Equal),
        '+' => (true, KeyCode::Equal),
        '[' => (false, KeyCode::BracketLeft),
        '{' => (true, KeyCode::BracketLeft),
        ']' => (false, KeyCode::BracketRight),
        '}' => (true, KeyCode::BracketRight),
        '\\' => (false, KeyCode::Backslash),
        '|' => (true, KeyCode::Backslash),
        ';' => (false, KeyCode::Semicolon),
        ':' => (true, KeyCode::Semicolon),
        '\'' => (false, KeyCode::Quote),
        '"' => (true, KeyCode::Quote),
        '`' => (false, KeyCode::Backquote),
        '~' => (true, KeyCode::Backquote),
        ',' => (false, KeyCode::Comma),
        '<' => (true, KeyCode::Comma),
        '.' => (false, KeyCode::Period),
        '>' => (true, KeyCode::Period),
        '/' => (false, KeyCode::Slash),
        '?' => (true, KeyCode::Slash),

        _ => return None,
    };
    Some(pair)
}
