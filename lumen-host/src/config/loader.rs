//! Configuration file loading
//!
//! Reads the TOML configuration given on the command line. Falls back to
//! the embedded defaults if no file is given.

use std::fs;
use std::path::Path;

use log::{debug, info};
use lumen_core::config::LightConfig;

use crate::error::ConfigError;

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../../lumen.toml");

/// Load configuration from `path`, or the embedded defaults
pub fn load(path: Option<&Path>) -> Result<LightConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&text)?
        }
        None => {
            debug!("No config file given, using embedded defaults");
            parse_config(EMBEDDED_CONFIG)?
        }
    };

    log_config_summary(&config);
    Ok(config)
}

/// Parse TOML configuration into LightConfig
///
/// Missing sections and keys take their defaults; unknown keys are errors.
pub fn parse_config(input: &str) -> Result<LightConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &LightConfig) {
    debug!("  device {}", config.device.id());
    debug!(
        "  color r={}% g={}% b={}%",
        config.color.red, config.color.green, config.color.blue
    );
    debug!(
        "  keep-alive {} every {} ms",
        if config.keepalive.enabled { "on" } else { "off" },
        config.keepalive.interval_ms
    );
    debug!("  metadata prefix {:02x?}", config.framing.metadata_prefix);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(parse_config(EMBEDDED_CONFIG).unwrap(), LightConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), LightConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [color]
            red = 100
            green = 0

            [keepalive]
            interval_ms = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.color.red, 100);
        assert_eq!(config.color.green, 0);
        assert_eq!(config.color.blue, 0);
        assert_eq!(config.keepalive.interval_ms, 1000);
        assert!(config.keepalive.enabled);
        assert_eq!(config.device, LightConfig::default().device);
    }

    #[test]
    fn test_device_and_framing() {
        let config = parse_config(
            r#"
            [device]
            vendor_id = 0x1234
            product_id = 0x5678

            [framing]
            metadata_prefix = [1, 2, 3, 4, 5, 6]
            "#,
        )
        .unwrap();

        assert_eq!(config.device.vendor_id, 0x1234);
        assert_eq!(config.device.product_id, 0x5678);
        assert_eq!(config.framing.metadata_prefix, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_color_clamped() {
        let config = parse_config("[color]\nred = 300\ngreen = -5\n").unwrap();
        let rgb = config.color.rgb();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (100, 0, 0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = parse_config("[color]\npurple = 1\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_wrong_prefix_length_rejected() {
        let result = parse_config("[framing]\nmetadata_prefix = [1, 2, 3]\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load(Some(Path::new("/nonexistent/lumen.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
