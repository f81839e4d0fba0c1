//! Configuration file loading for policy-assistant
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./assistant.toml` or `./.assistant.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/policy-assistant/config.toml`
//! 4. Fallback: `~/.config/policy-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
