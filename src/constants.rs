//! Configuration constants for graph-scc
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress reporting configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a phase is running
    pub const SPINNER_FRAMES: &[&str] =
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "plain";
}
