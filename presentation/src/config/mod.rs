//! Presentation-level configuration
//!
//! Configuration for output styling and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while each stage runs
    pub show_progress: bool,
    /// Path to the input history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Set the history file, expanding a leading `~/`
    pub fn with_history_file(mut self, path: Option<&str>) -> Self {
        self.history_file = path.map(expand_home);
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReplConfig::default();
        assert!(config.show_progress);
        assert!(config.history_file.is_none());
        assert!(OutputConfig::default().color);
    }

    #[test]
    fn test_absolute_history_path_kept() {
        let config = ReplConfig::default().with_history_file(Some("/tmp/duo-history.txt"));
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/duo-history.txt")));
    }

    #[test]
    fn test_home_is_expanded() {
        let config = ReplConfig::default().with_history_file(Some("~/history.txt"));
        let path = config.history_file.unwrap();
        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
            assert!(path.ends_with("history.txt"));
        }
    }
}
