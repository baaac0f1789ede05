//! Configuration type definitions
//!
//! These types represent the controller configuration. Every section has a
//! default, so an empty configuration file drives the stock device.

use lumen_hal::DeviceId;
use lumen_protocol::{DEFAULT_METADATA_PREFIX, METADATA_PREFIX_SIZE};

use crate::color::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// USB vendor ID of the stock controller
pub const DEFAULT_VENDOR_ID: u16 = 0x27bb;

/// USB product ID of the stock controller
pub const DEFAULT_PRODUCT_ID: u16 = 0x3bce;

/// Default keep-alive interval
pub const DEFAULT_KEEPALIVE_INTERVAL_MS: u32 = 5000;

/// Shortest keep-alive interval accepted
pub const MIN_KEEPALIVE_INTERVAL_MS: u32 = 100;

/// Which controller to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
        }
    }
}

impl DeviceConfig {
    pub fn id(&self) -> DeviceId {
        DeviceId::new(self.vendor_id, self.product_id)
    }
}

/// Requested color, each channel a percentage
///
/// Any integer is accepted here; values outside `0..=100` are clamped when
/// the color is built, the same as the command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ColorConfig {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            red: 0,
            green: 100,
            blue: 0,
        }
    }
}

impl ColorConfig {
    /// Sanitized color
    pub fn rgb(&self) -> Rgb {
        Rgb::from_percent(self.red, self.green, self.blue)
    }
}

/// Keep-alive retransmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct KeepAliveConfig {
    /// Re-send the packet periodically after the initial write
    pub enabled: bool,
    /// Time between re-sends
    pub interval_ms: u32,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_KEEPALIVE_INTERVAL_MS,
        }
    }
}

/// Packet framing bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FramingConfig {
    /// First six metadata bytes; the last two are always the checksum
    pub metadata_prefix: [u8; METADATA_PREFIX_SIZE],
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            metadata_prefix: DEFAULT_METADATA_PREFIX,
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LightConfig {
    pub device: DeviceConfig,
    pub color: ColorConfig,
    pub keepalive: KeepAliveConfig,
    pub framing: FramingConfig,
}

/// Configuration rejected by [`LightConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigIssue {
    /// Keep-alive interval below [`MIN_KEEPALIVE_INTERVAL_MS`]
    IntervalTooShort(u32),
}

impl core::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigIssue::IntervalTooShort(ms) => write!(
                f,
                "keep-alive interval {} ms is below the {} ms minimum",
                ms, MIN_KEEPALIVE_INTERVAL_MS
            ),
        }
    }
}

impl LightConfig {
    /// Check values that parse fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if self.keepalive.enabled && self.keepalive.interval_ms < MIN_KEEPALIVE_INTERVAL_MS {
            return Err(ConfigIssue::IntervalTooShort(self.keepalive.interval_ms));
        }
        Ok(())
    }
}
