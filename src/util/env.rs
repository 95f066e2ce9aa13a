//! Terminal detection.

use std::io::IsTerminal;

use crate::storage::ENV_NO_COLOR_STD;

/// Check if stdout is a TTY.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Whether stdout output should carry ANSI colors.
///
/// Off with the flag, `NO_COLOR`, `TERM=dumb`, or when stdout is piped.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os(ENV_NO_COLOR_STD).is_some() {
        return false;
    }

    if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
        return false;
    }

    stdout_is_tty()
}
