//! Command-line flags

use std::path::PathBuf;

use clap::Parser;
use lumen_core::color::clamp_percent;
use lumen_core::config::LightConfig;

/// Set a solid color on a Lumen RGB controller and keep it alive.
///
/// Log output is controlled by RUST_LOG.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "lumenctl", version, about)]
pub struct RunOptions {
    /// Red intensity in percent, clamped to 0-100 (default 0)
    #[arg(long, allow_negative_numbers = true)]
    pub red: Option<i64>,

    /// Green intensity in percent, clamped to 0-100 (default 100)
    #[arg(long, allow_negative_numbers = true)]
    pub green: Option<i64>,

    /// Blue intensity in percent, clamped to 0-100 (default 0)
    #[arg(long, allow_negative_numbers = true)]
    pub blue: Option<i64>,

    /// Read settings from a TOML file
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Keep-alive interval in milliseconds (default 5000)
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u32>,

    /// Write the packet once and exit
    #[arg(long)]
    pub once: bool,

    /// Print the packet and exit without opening the device
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunOptions {
    /// Apply flag overrides on top of a loaded configuration
    ///
    /// Color values are clamped to `0..=100` here, before they reach the
    /// packet builder.
    pub fn apply(&self, mut config: LightConfig) -> LightConfig {
        if let Some(red) = self.red {
            config.color.red = clamp_percent(red).into();
        }
        if let Some(green) = self.green {
            config.color.green = clamp_percent(green).into();
        }
        if let Some(blue) = self.blue {
            config.color.blue = clamp_percent(blue).into();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.keepalive.interval_ms = interval_ms;
        }
        if self.once {
            config.keepalive.enabled = false;
        }
        config
    }
}
