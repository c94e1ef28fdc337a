//! Configuration file loading for duo-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./duo-chat.toml` or `./.duo-chat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/duo-chat/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEvaluatorConfig, FileGeneratorConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
