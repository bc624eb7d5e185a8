//! Directive recognition and argument extraction.
//!
//! A command line is `NAME [argument text]`. Recognition happens on the
//! exact first space-delimited token through a closed table, so a key name
//! that merely starts with a directive name (`CTRL2`, say) falls through to
//! key-name resolution instead of colliding with `CTRL`.
//!
//! Comment markers (`REM`, `//`) and `REPEAT` are handled before this table
//! by the interpreter because they bypass command memoization.

/// The memoized, executable directives. Alias spellings collapse to one
/// variant at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `DEFAULT_DELAY n` / `DEFAULTDELAY n` — set the inter-command delay.
    DefaultDelay,
    /// `DELAY n` — one blocking pause, skipping the default delay after.
    Delay,
    /// `STRING_DELAY n text` — type text with a per-character pause.
    StringDelay,
    /// `STRING text` — type text.
    String,
    /// `CTRL-ALT [key]`
    CtrlAlt,
    /// `CTRL-SHIFT [key]`
    CtrlShift,
    /// `ALT-SHIFT [key]`
    AltShift,
    /// `ALT-TAB` — fixed Alt+Tab chord, no argument.
    AltTab,
    /// `COMMAND-OPTION [key]` — GUI+Alt chord.
    CommandOption,
    /// `GUI [key]` / `WINDOWS [key]` / `COMMAND [key]`
    Gui,
    /// `CONTROL [key]` / `CTRL [key]`
    Ctrl,
    /// `ALT [key]`
    Alt,
    /// `SHIFT [key]`
    Shift,
}

impl Directive {
    /// Looks up a directive by its exact token. Unknown tokens return `None`
    /// and are treated as bare key names by the interpreter.
    pub fn lookup(token: &str) -> Option<Directive> {
        Some(match token {
            "DEFAULT_DELAY" | "DEFAULTDELAY" => Directive::DefaultDelay,
            "DELAY" => Directive::Delay,
            "STRING_DELAY" => Directive::StringDelay,
            "STRING" => Directive::String,
            "CTRL-ALT" => Directive::CtrlAlt,
            "CTRL-SHIFT" => Directive::CtrlShift,
            "ALT-SHIFT" => Directive::AltShift,
            "ALT-TAB" => Directive::AltTab,
            "COMMAND-OPTION" => Directive::CommandOption,
            "GUI" | "WINDOWS" | "COMMAND" => Directive::Gui,
            "CONTROL" | "CTRL" => Directive::Ctrl,
            "ALT" => Directive::Alt,
            "SHIFT" => Directive::Shift,
            _ => return None,
        })
    }
}

/// The first space-delimited token of a line (the whole line if no space).
pub fn first_token(line: &str) -> &str {
    match line.find(' ') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// The argument text: everything after the first space in the line.
///
/// Returns `None` when the line has no space or the space is its final
/// character — the uniform "no argument available" condition. Applied a
/// second time to its own result for two-argument directives.
pub fn argument(line: &str) -> Option<&str> {
    let idx = line.find(' ')?;
    let rest = &line[idx + 1..];
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}
