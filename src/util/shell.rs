//! Centralized shell output.
//!
//! All user-facing status lines go through [`Shell`], which handles
//! verbosity, coloring, and the aligned status-verb format. Probe verdicts
//! are ordinary status lines; a `no` verdict is data, not an error.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    /// Default: status messages
    #[default]
    Normal,
    /// --verbose: status messages plus debug detail
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

/// Status types for output messages.
///
/// Shell handles all formatting - callers just specify the semantic status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Generated,
    Finished,
    Removed,

    // In-progress statuses (cyan)
    Probing,

    // Info statuses (blue)
    Info,

    // Warning statuses (yellow)
    Skipped,
    Warning,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Generated => "Generated",
            Status::Finished => "Finished",
            Status::Removed => "Removed",
            Status::Probing => "Probing",
            Status::Info => "Info",
            Status::Skipped => "Skipped",
            Status::Warning => "Warning",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            // Success: bold green
            Status::Generated | Status::Finished | Status::Removed => "\x1b[1;32m",
            // In-progress: bold cyan
            Status::Probing => "\x1b[1;36m",
            // Info: bold blue
            Status::Info => "\x1b[1;34m",
            // Warning: bold yellow
            Status::Skipped | Status::Warning => "\x1b[1;33m",
            // Error: bold red
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Width of the aligned status column.
const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Print an aligned status line (suppressed in quiet mode).
    pub fn status(&self, status: Status, message: impl Display) {
        if self.verbosity == Verbosity::Quiet && status != Status::Error {
            return;
        }
        self.print(status, message);
    }

    /// Print a status line only in verbose mode.
    pub fn verbose_status(&self, status: Status, message: impl Display) {
        if self.is_verbose() {
            self.print(status, message);
        }
    }

    /// Print a warning.
    pub fn warn(&self, message: impl Display) {
        self.status(Status::Warning, message);
    }

    /// Print an error (always shown).
    pub fn error(&self, message: impl Display) {
        self.print(Status::Error, message);
    }

    fn print(&self, status: Status, message: impl Display) {
        let mut stderr = io::stderr().lock();
        let verb = status.as_str();
        let result = if self.use_color {
            writeln!(
                stderr,
                "{}{:>width$}\x1b[0m {}",
                status.color_code(),
                verb,
                message,
                width = STATUS_WIDTH
            )
        } else {
            writeln!(stderr, "{:>width$} {}", verb, message, width = STATUS_WIDTH)
        };
        // Failing to write a status line is not worth aborting a run.
        let _ = result;
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}
