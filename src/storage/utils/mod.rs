// Utilities for storage module
pub mod path;

/// Output format for CLI commands that can render machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One entry per line
    Human,
    /// Single-line JSON output
    Json,
}
