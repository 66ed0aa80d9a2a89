//! ui::output
//!
//! Console output for generation diagnostics.
//!
//! # Design
//!
//! Warnings go to stderr and respect the quiet flag. Nothing here is needed
//! by the core; it backs [`crate::diagnostics::ConsoleSink`].

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

/// Format a warning line.
pub fn format_warning(message: impl Display) -> String {
    format!("warning: {}", message)
}

/// The line [`warn`] prints at `verbosity`, if any.
pub fn warning_line(message: impl Display, verbosity: Verbosity) -> Option<String> {
    match verbosity {
        Verbosity::Quiet => None,
        Verbosity::Normal | Verbosity::Debug => Some(format_warning(message)),
    }
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if let Some(line) = warning_line(message, verbosity) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_prefix() {
        assert_eq!(format_warning("two colors"), "warning: two colors");
    }

    #[test]
    fn quiet_suppresses_line() {
        assert_eq!(warning_line("two colors", Verbosity::Quiet), None);
        assert_eq!(
            warning_line("two colors", Verbosity::Normal).as_deref(),
            Some("warning: two colors")
        );
        assert_eq!(
            warning_line("two colors", Verbosity::Debug).as_deref(),
            Some("warning: two colors")
        );
    }
}
