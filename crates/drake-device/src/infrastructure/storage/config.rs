//! TOML configuration for the device.
//!
//! Example `drake.toml`:
//!
//! ```toml
//! [device]
//! gadget_path = "/dev/hidg0"
//! log_level = "info"
//!
//! [input]
//! stdin = true
//! listen_addr = "0.0.0.0:7716"
//!
//! [interpreter]
//! default_delay_ms = 100
//! ```
//!
//! Every field carries a `#[serde(default = "...")]` so a partial file — or
//! no file at all — yields a working configuration. A missing config file
//! is not an error; first boot runs on defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level device configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

/// USB gadget and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    /// Path of the keyboard HID gadget character device.
    #[serde(default = "default_gadget_path")]
    pub gadget_path: PathBuf,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Which byte channels deliver script lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Whether stdin is polled as a script source.
    #[serde(default = "default_true")]
    pub stdin: bool,
    /// TCP listen address for the control link; disabled when absent.
    /// When both channels are enabled the TCP link is polled first.
    #[serde(default)]
    pub listen_addr: Option<String>,
}

/// Interpreter start-up state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterpreterConfig {
    /// Initial delay between commands in milliseconds (scripts change it
    /// with `DEFAULT_DELAY`).
    #[serde(default = "default_delay_ms")]
    pub default_delay_ms: u32,
}

// ── Field defaults ────────────────────────────────────────────────────────────

fn default_gadget_path() -> PathBuf {
    PathBuf::from("/dev/hidg0")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_delay_ms() -> u32 {
    drake_core::script::interpreter::INITIAL_DEFAULT_DELAY_MS
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            gadget_path: default_gadget_path(),
            log_level: default_log_level(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            stdin: true,
            listen_addr: None,
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_delay_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            input: InputConfig::default(),
            interpreter: InterpreterConfig::default(),
        }
    }
}

// ── Load/parse ────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrong types.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the configuration file at `path`, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for any I/O failure other than a missing
    /// file, and [`ConfigError::Parse`] for malformed content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
