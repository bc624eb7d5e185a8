//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the canonical key representation used throughout Drake. Script
//! key names and typed characters are resolved to these codes, and the USB
//! gadget transport places them into boot-protocol keyboard reports as-is.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number
//! to every key on a keyboard. All keyboard keys live on page 0x07. Letter A
//! is 0x04 (not ASCII 0x41), because HID codes identify **physical key
//! positions**, not characters — the character a key produces depends on the
//! host's layout and the modifiers held down.
//!
//! Modifier keys (Ctrl/Shift/Alt/GUI, left and right) occupy 0xE0–0xE7.
//! In a boot-protocol report they are transmitted as a bitmap rather than as
//! key slots, but treating them as ordinary codes here keeps the script
//! engine uniform: `CTRL` presses 0xE0 the same way `ENTER` presses 0x28.
//!
//! # The `Undefined` sentinel
//!
//! Key name resolution is a total function: unrecognized names yield
//! [`KeyCode::Undefined`] (0x03, "ErrorUndefined" in the HID tables), which
//! is never a real key. Directive handlers treat it as "no key".

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID. Media keys use the
/// vendor-style code points carried by the original firmware's report
/// descriptor (0x7F–0x81, 0xB5–0xB7, 0xCD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyCode {
    /// Sentinel for unrecognized key names ("ErrorUndefined").
    Undefined = 0x03,

    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control and punctuation keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    NonUsHash = 0x32,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x53)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,
    NumLock = 0x53,

    // Application/system keys
    App = 0x65,
    Power = 0x66,
    Execute = 0x74,
    Help = 0x75,
    Menu = 0x76,
    Select = 0x77,
    Stop = 0x78,
    Again = 0x79,
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,
    Find = 0x7E,

    // Media keys (report-descriptor specific code points)
    Mute = 0x7F,
    VolumeUp = 0x80,
    VolumeDown = 0x81,
    MediaNextTrack = 0xB5,
    MediaPrevTrack = 0xB6,
    MediaStop = 0xB7,
    MediaPlayPause = 0xCD,

    // Modifiers (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,
}

impl KeyCode {
    /// Returns the raw HID usage ID.
    pub const fn usage_id(self) -> u8 {
        self as u8
    }

    /// True for the eight modifier keys (0xE0–0xE7).
    pub const fn is_modifier(self) -> bool {
        (self as u8) >= 0xE0
    }

    /// Bit position of a modifier key inside the boot-report modifier byte.
    ///
    /// Returns `None` for non-modifier keys. Left Ctrl is bit 0, Right GUI
    /// is bit 7, matching the HID boot keyboard report layout.
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(1 << ((self as u8) - 0xE0))
        } else {
            None
        }
    }
}
