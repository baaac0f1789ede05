//! Host error types

use std::fmt;
use std::io;
use std::path::PathBuf;

use lumen_core::config::ConfigIssue;
use lumen_hal::{DeviceId, SendError};
use lumen_protocol::PacketError;

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: PathBuf, source: io::Error },
    /// TOML parsing failed
    TomlParse(toml::de::Error),
    /// Parsed values are unusable
    Invalid(ConfigIssue),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::TomlParse(e) => write!(f, "invalid configuration: {}", e),
            ConfigError::Invalid(issue) => write!(f, "invalid configuration: {}", issue),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::TomlParse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParse(e)
    }
}

impl From<ConfigIssue> for ConfigError {
    fn from(issue: ConfigIssue) -> Self {
        ConfigError::Invalid(issue)
    }
}

/// Device discovery and access errors
#[derive(Debug)]
pub enum DeviceError {
    /// No hidraw node matches the requested vendor/product
    NotFound(DeviceId),
    /// Filesystem access failed
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NotFound(id) => write!(f, "no hidraw device with id {}", id),
            DeviceError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::NotFound(_) => None,
            DeviceError::Io { source, .. } => Some(source),
        }
    }
}

/// Top-level error returned by [`crate::run`]
#[derive(Debug)]
pub enum HostError {
    Config(ConfigError),
    Packet(PacketError),
    Device(DeviceError),
    Write(SendError<io::Error>),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Config(e) => write!(f, "{}", e),
            HostError::Packet(e) => write!(f, "{}", e),
            HostError::Device(e) => write!(f, "{}", e),
            HostError::Write(e) => write!(f, "error writing to device: {}", e),
        }
    }
}

impl std::error::Error for HostError {}

impl From<ConfigError> for HostError {
    fn from(e: ConfigError) -> Self {
        HostError::Config(e)
    }
}

impl From<ConfigIssue> for HostError {
    fn from(issue: ConfigIssue) -> Self {
        HostError::Config(ConfigError::Invalid(issue))
    }
}

impl From<PacketError> for HostError {
    fn from(e: PacketError) -> Self {
        HostError::Packet(e)
    }
}

impl From<DeviceError> for HostError {
    fn from(e: DeviceError) -> Self {
        HostError::Device(e)
    }
}

impl From<SendError<io::Error>> for HostError {
    fn from(e: SendError<io::Error>) -> Self {
        HostError::Write(e)
    }
}
