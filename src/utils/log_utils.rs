//! Logging utilities for the application
//!
//! Everything here writes to stderr. Stdout is reserved for the public base
//! URL printed after a successful sync.

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for application messages
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        log(msg, self.verbosity, level);
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    /// Always displayed, prefixed so it stands out in the output
    pub fn warn(&self, msg: &str) {
        eprintln!("warn: {}", msg);
    }

    /// Always displayed
    pub fn error(&self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    /// Get current verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

/// Format a log line for the given level, or `None` if it should be suppressed
fn format_line(msg: &str, verbosity: u8, level: LogLevel) -> Option<String> {
    if verbosity < level as u8 {
        return None;
    }
    Some(match level {
        LogLevel::Normal => msg.to_string(),
        LogLevel::Info => format!("info: {}", msg),
        LogLevel::Debug => format!("dbg: {}", msg),
    })
}

/// Log a message if the verbosity level is at least the specified level
///
/// # Arguments
///
/// * `msg` - The message to log
/// * `verbosity` - The current verbosity level (0 = normal, 1 = info, 2+ = debug)
/// * `level` - The minimum level required for this message to be logged
pub fn log(msg: &str, verbosity: u8, level: LogLevel) {
    if let Some(line) = format_line(msg, verbosity, level) {
        eprintln!("{}", line);
    }
}

/// Log at info level (verbose >= 1)
pub fn info(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Info)
}

/// Log at debug level (verbose >= 2)
pub fn debug(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Debug)
}

/// Show only the first four characters of a secret-ish value
pub fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_lines_above_verbosity() {
        assert_eq!(format_line("x", 0, LogLevel::Info), None);
        assert_eq!(format_line("x", 1, LogLevel::Debug), None);
        assert_eq!(format_line("x", 0, LogLevel::Normal).as_deref(), Some("x"));
        assert_eq!(format_line("x", 1, LogLevel::Info).as_deref(), Some("info: x"));
        assert_eq!(format_line("x", 3, LogLevel::Debug).as_deref(), Some("dbg: x"));
    }

    #[test]
    fn mask_keeps_four_characters() {
        assert_eq!(mask("AKIAEXAMPLE"), "AKIA****");
        assert_eq!(mask("ab"), "ab****");
    }
}
