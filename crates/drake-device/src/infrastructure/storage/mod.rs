//! Configuration persistence.

pub mod config;

pub use config::{AppConfig, ConfigError};
