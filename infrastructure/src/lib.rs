//! Infrastructure layer for policy-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::{
    error::{BackendError, Result},
    gateway::HttpAnswerGateway,
};
pub use config::{ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig};
pub use logging::JsonlQueryLogger;
