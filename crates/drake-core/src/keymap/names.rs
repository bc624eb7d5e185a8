//! Script key name resolution.
//!
//! Maps the textual key names that appear in script lines (`ENTER`,
//! `LEFTARROW`, `F5`, `a`, …) to [`KeyCode`]s. Resolution is a total
//! function: unrecognized names yield [`KeyCode::Undefined`] rather than an
//! error, so callers decide how lenient to be.
//!
//! Naming rules:
//!
//! - Multi-character names are matched exactly (case-sensitive).
//! - Single letters are accepted in both cases (`a` and `A` → [`KeyCode::KeyA`]).
//! - Several aliases map to the same code (`LEFT`/`LEFTARROW`, `DEL`/`DELETE`,
//!   `ESC`/`ESCAPE`, …).
//! - `F1` through `F9` resolve; `F10`–`F12` have codes but no names here,
//!   matching the directive set this table was built against.

use super::hid::KeyCode;

/// Resolves a script key name to its [`KeyCode`].
///
/// Returns [`KeyCode::Undefined`] for any name not in the table.
pub fn resolve(name: &str) -> KeyCode {
    match name {
        "POWER" => KeyCode::Power,
        "HOME" => KeyCode::Home,
        "INSERT" => KeyCode::Insert,
        "PAGEUP" => KeyCode::PageUp,
        "PAGEDOWN" => KeyCode::PageDown,
        "PRINTSCREEN" => KeyCode::PrintScreen,
        "ENTER" => KeyCode::Enter,
        "SPACE" => KeyCode::Space,
        "TAB" => KeyCode::Tab,
        "END" => KeyCode::End,
        "BREAK" => KeyCode::Pause,

        // Navigation aliases
        "LEFTARROW" | "LEFT" => KeyCode::ArrowLeft,
        "RIGHTARROW" | "RIGHT" => KeyCode::ArrowRight,
        "DOWNARROW" | "DOWN" => KeyCode::ArrowDown,
        "UPARROW" | "UP" => KeyCode::ArrowUp,

        "ESCAPE" | "ESC" => KeyCode::Escape,
        "DELETE" | "DEL" => KeyCode::Delete,
        "MENU" | "APP" => KeyCode::Menu,

        // Lock keys
        "NUMLOCK" | "NUM_LOCK" => KeyCode::NumLock,
        "CAPSLOCK" | "CAPS_LOCK" => KeyCode::CapsLock,
        "SCROLLLOCK" | "SCROLL_LOCK" => KeyCode::ScrollLock,

        // Media keys. `PAUSE` is the media play/pause toggle; the keyboard
        // Pause key is reached through `BREAK`.
        "MEDIA_PLAY_PAUSE" | "PLAY" | "PAUSE" => KeyCode::MediaPlayPause,
        "MEDIA_STOP" | "STOP" => KeyCode::MediaStop,
        "MEDIA_MUTE" | "MUTE" => KeyCode::Mute,
        "MEDIA_VOLUME_INC" | "VOLUMEUP" => KeyCode::VolumeUp,
        "MEDIA_VOLUME_DEC" | "VOLUMEDOWN" => KeyCode::VolumeDown,

        // Single letters, either case
        "a" | "A" => KeyCode::KeyA,
        "b" | "B" => KeyCode::KeyB,
        "c" | "C" => KeyCode::KeyC,
        "d" | "D" => KeyCode::KeyD,
        "e" | "E" => KeyCode::KeyE,
        "f" | "F" => KeyCode::KeyF,
        "g" | "G" => KeyCode::KeyG,
        "h" | "H" => KeyCode::KeyH,
        "i" | "I" => KeyCode::KeyI,
        "j" | "J" => KeyCode::KeyJ,
        "k" | "K" => KeyCode::KeyK,
        "l" | "L" => KeyCode::KeyL,
        "m" | "M" => KeyCode::KeyM,
        "n" | "N" => KeyCode::KeyN,
        "o" | "O" => KeyCode::KeyO,
        "p" | "P" => KeyCode::KeyP,
        "q" | "Q" => KeyCode::KeyQ,
        "r" | "R" => KeyCode::KeyR,
        "s" | "S" => KeyCode::KeyS,
        "t" | "T" => KeyCode::KeyT,
        "u" | "U" => KeyCode::KeyU,
        "v" | "V" => KeyCode::KeyV,
        "w" | "W" => KeyCode::KeyW,
        "x" | "X" => KeyCode::KeyX,
        "y" | "Y" => KeyCode::KeyY,
        "z" | "Z" => KeyCode::KeyZ,

        // Digits
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,

        // Function keys (F10–F12 intentionally absent, see module docs)
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,

        _ => KeyCode::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_aliases_resolve_to_same_code() {
        assert_eq!(resolve("LEFT"), resolve("LEFTARROW"));
        assert_eq!(resolve("RIGHT"), resolve("RIGHTARROW"));
        assert_eq!(resolve("UP"), resolve("UPARROW"));
        assert_eq!(resolve("DOWN"), resolve("DOWNARROW"));
        assert_eq!(resolve("LEFT"), KeyCode::ArrowLeft);
    }

    #[test]
    fn test_editing_aliases() {
        assert_eq!(resolve("DEL"), resolve("DELETE"));
        assert_eq!(resolve("ESC"), resolve("ESCAPE"));
        assert_eq!(resolve("APP"), resolve("MENU"));
        assert_eq!(resolve("CAPS_LOCK"), resolve("CAPSLOCK"));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(resolve("a"), KeyCode::KeyA);
        assert_eq!(resolve("A"), KeyCode::KeyA);
        assert_eq!(resolve("z"), resolve("Z"));
    }

    #[test]
    fn test_multi_character_names_are_case_sensitive() {
        assert_eq!(resolve("ENTER"), KeyCode::Enter);
        assert_eq!(resolve("enter"), KeyCode::Undefined);
        assert_eq!(resolve("Enter"), KeyCode::Undefined);
    }

    #[test]
    fn test_media_pause_is_play_pause_and_break_is_pause_key() {
        assert_eq!(resolve("PAUSE"), KeyCode::MediaPlayPause);
        assert_eq!(resolve("BREAK"), KeyCode::Pause);
    }

    #[test]
    fn test_function_keys_stop_at_f9() {
        assert_eq!(resolve("F1"), KeyCode::F1);
        assert_eq!(resolve("F9"), KeyCode::F9);
        assert_eq!(resolve("F10"), KeyCode::Undefined);
        assert_eq!(resolve("F11"), KeyCode::Undefined);
        assert_eq!(resolve("F12"), KeyCode::Undefined);
    }

    #[test]
    fn test_unknown_names_yield_the_sentinel() {
        assert_eq!(resolve("ZZZ"), KeyCode::Undefined);
        assert_eq!(resolve(""), KeyCode::Undefined);
        assert_eq!(resolve("ENTER "), KeyCode::Undefined);
    }
}
