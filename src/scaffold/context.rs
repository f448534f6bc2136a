//! Output reporting for a scaffold run
//!
//! The reporter owns the verbosity level and prints the prefixed progress
//! lines every step emits.

use colored::Colorize;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// Prints progress and diagnostics to standard output
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Verbosity level
    pub verbosity: Verbosity,
}

impl Reporter {
    /// Create a reporter with normal verbosity
    pub fn new() -> Self {
        Reporter {
            verbosity: Verbosity::Normal,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{} {}", "[INFO]".green(), message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            println!("{} {}", "[ERROR]".red().bold(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            println!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }

    /// Print a skipped copy
    pub fn print_skip(&self, what: &str, reason: &str) {
        self.print_debug(&format!("Skipping {}: {}", what, reason));
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
