//! Lumen host tool
//!
//! Sets a solid color on a Lumen RGB controller attached over USB and keeps
//! re-sending it. The packet itself is built by `lumen-core` and
//! `lumen-protocol`; this crate supplies the flags, configuration file,
//! Linux hidraw access and the keep-alive loop.

pub mod args;
pub mod config;
pub mod device;
pub mod error;
pub mod tasks;

use std::fmt::Write as _;

use log::{debug, info};
use lumen_core::config::LightConfig;
use lumen_core::program;
use lumen_hal::{ReportSink, SendError};
use lumen_protocol::PACKET_SIZE;

use crate::args::RunOptions;
use crate::device::{HidrawOpener, HidrawScanner};
use crate::error::HostError;
use crate::tasks::{keep_alive_task, KeepAlive, Opener};

/// Lowercase hex, no separators
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Load and validate the configuration, then frame the packet
pub fn prepare(options: &RunOptions) -> Result<(LightConfig, [u8; PACKET_SIZE]), HostError> {
    let config = options.apply(config::load(options.config_path.as_deref())?);
    config.validate()?;

    let frame = program::frame_for(&config)?;
    Ok((config, frame))
}

/// Open the device and write the first packet
///
/// Returns the keep-alive state if keep-alive is enabled.
pub fn connect<O>(
    mut opener: O,
    config: &LightConfig,
    frame: [u8; PACKET_SIZE],
) -> Result<Option<KeepAlive<O>>, HostError>
where
    O: Opener,
    <O::Sink as ReportSink>::Error: std::fmt::Display,
    HostError: From<O::Error> + From<SendError<<O::Sink as ReportSink>::Error>>,
{
    let mut sink = opener.open()?;
    sink.send(&frame)?;
    debug!("Written to device: {} bytes", frame.len());

    if !config.keepalive.enabled {
        return Ok(None);
    }

    Ok(Some(KeepAlive::new(
        opener,
        sink,
        frame,
        config.keepalive.interval_ms,
    )))
}

/// Run the tool until the keep-alive loop is stopped
pub async fn run(options: &RunOptions) -> Result<(), HostError> {
    let (config, frame) = prepare(options)?;
    println!("{}", encode_hex(&frame));

    if options.dry_run {
        info!("Dry run, not opening the device");
        return Ok(());
    }

    let id = config.device.id();
    let scanner = HidrawScanner::system();
    let node = scanner.find(id)?;
    info!("{}", node.product_name.as_deref().unwrap_or("unknown product"));
    debug!("Using {}", node.dev_path.display());

    let opener = HidrawOpener::new(scanner, id).with_node(node);
    match connect(opener, &config, frame)? {
        Some(keep_alive) => keep_alive_task(keep_alive).await,
        None => info!("Keep-alive disabled, exiting"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0x00, 0x8f, 0xff, 0x03]), "008fff03");
    }

    #[test]
    fn test_prepare_defaults() {
        let (config, frame) = prepare(&RunOptions::default()).unwrap();
        assert_eq!(config, LightConfig::default());
        assert_eq!(
            encode_hex(&frame),
            "10000064000000000000000000000000\
             00000000000000000000000000000000\
             00000000000000000000000000000000\
             0000000000000000000000ffffff0371"
        );
    }
}
