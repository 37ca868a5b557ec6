//! Game event logger
//!
//! Every engine event goes through one `GameLogger`. Messages are filtered by
//! verbosity, printed as text or JSON lines, and can be captured to an
//! in-memory buffer for tests and post-game inspection.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log line
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g. "strategy_choice", "score")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Read-only access to captured log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Centralized logger for game events
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,

    /// Captured log entries. Interior mutability lets `&self` logging work
    /// while the game state is borrowed by a strategy.
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Capture to memory only, suppressing stdout
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stdout;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Print buffered logs that pass the verbosity filter, then clear the buffer
    pub fn flush_buffer(&mut self) {
        self.flush_tail(usize::MAX);
    }

    /// Print only the last `tail_lines` buffered logs, then clear the buffer
    pub fn flush_tail(&mut self, tail_lines: usize) {
        {
            let buffer = self.log_buffer.borrow();
            let elided = buffer.len().saturating_sub(tail_lines);
            if elided > 0 {
                println!(">>> {elided} LOG LINES ELIDED. PRINTING LAST {tail_lines} LINES <<<");
            }
            for entry in buffer.iter().skip(elided) {
                if entry.level <= self.verbosity {
                    self.write_stdout(entry);
                }
            }
        }
        self.clear_logs();
    }

    /// Captured log entries
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    fn write_stdout(&self, entry: &LogEntry) {
        match self.output_format {
            OutputFormat::Text => {
                if entry.level == VerbosityLevel::Minimal {
                    println!("{}", entry.message);
                } else {
                    println!("  {}", entry.message);
                }
            }
            OutputFormat::Json => match serde_json::to_string(entry) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("failed to encode log entry: {e}"),
            },
        }
    }

    fn log(&self, level: VerbosityLevel, category: Option<&str>, message: &str) {
        let should_capture = self.is_capturing();
        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both)
            && level <= self.verbosity;

        if !should_capture && !should_output {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            category: category.map(str::to_string),
        };
        if should_output {
            self.write_stdout(&entry);
        }
        if should_capture {
            self.log_buffer.borrow_mut().push(entry);
        }
    }

    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, None, message);
    }

    #[inline]
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, None, message);
    }

    #[inline]
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, None, message);
    }

    /// Log a strategy decision at Normal level
    pub fn strategy_choice(&self, strategy_name: &str, message: &str) {
        self.log(
            VerbosityLevel::Normal,
            Some("strategy_choice"),
            &format!("[{strategy_name}] {message}"),
        );
    }

    /// Log a change of score at Minimal level
    pub fn score(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, Some("score"), message);
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

/// Clones the settings, not the captured entries
impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_format: self.output_format,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = GameLogger::new();
        assert_eq!(logger.verbosity(), VerbosityLevel::Normal);
        assert!(!logger.is_capturing());
    }

    #[test]
    fn test_log_capture() {
        let mut logger = GameLogger::new();
        logger.enable_capture();

        logger.normal("test message");
        logger.minimal("minimal message");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "test message");
        assert_eq!(logs[1].level, VerbosityLevel::Minimal);
    }

    #[test]
    fn test_capture_ignores_verbosity() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();
        logger.verbose("detail");
        assert_eq!(logger.logs().len(), 1);
    }

    #[test]
    fn test_categories() {
        let mut logger = GameLogger::new();
        logger.enable_capture();
        logger.strategy_choice("random", "places at 0,1");
        logger.score("Ebb scores A1/0");

        let logs = logger.logs();
        assert_eq!(logs[0].category.as_deref(), Some("strategy_choice"));
        assert_eq!(logs[0].message, "[random] places at 0,1");
        assert_eq!(logs[1].category.as_deref(), Some("score"));
    }

    #[test]
    fn test_json_entry_shape() {
        let entry = LogEntry {
            level: VerbosityLevel::Normal,
            message: "hello".to_string(),
            category: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"level":"Normal","message":"hello"}"#);
    }

    #[test]
    fn test_flush_clears_buffer() {
        let mut logger = GameLogger::new();
        logger.enable_capture();
        logger.normal("message 1");
        logger.normal("message 2");
        logger.flush_tail(1);
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_clone_drops_entries() {
        let mut logger = GameLogger::new();
        logger.enable_capture();
        logger.normal("kept");
        let copy = logger.clone();
        assert!(copy.is_capturing());
        assert!(copy.logs().is_empty());
    }
}
