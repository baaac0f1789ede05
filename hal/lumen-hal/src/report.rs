//! HID report transport abstractions
//!
//! Provides traits for sending output reports to a lighting controller.
//! Implemented by the host binary for Linux hidraw nodes and by in-memory
//! sinks in tests.

use core::fmt;

/// USB vendor/product pair identifying a controller model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceId {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

/// Failure to deliver a complete report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError<E> {
    /// The transport itself failed
    Transport(E),
    /// The transport accepted only part of the report
    ShortWrite { expected: usize, written: usize },
}

impl<E: fmt::Display> fmt::Display for SendError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Transport(e) => write!(f, "transport error: {}", e),
            SendError::ShortWrite { expected, written } => {
                write!(f, "short write: {} of {} bytes", written, expected)
            }
        }
    }
}

/// Output report sink
///
/// The report is handed to the transport as-is. For devices without
/// numbered reports the first byte is ordinary report data.
pub trait ReportSink {
    /// Error type for write operations
    type Error;

    /// Write one report
    ///
    /// Returns the number of bytes the transport accepted.
    fn write_report(&mut self, report: &[u8]) -> Result<usize, Self::Error>;

    /// Write one report, treating a partial write as an error
    fn send(&mut self, report: &[u8]) -> Result<(), SendError<Self::Error>> {
        let written = self.write_report(report).map_err(SendError::Transport)?;
        if written != report.len() {
            return Err(SendError::ShortWrite {
                expected: report.len(),
                written,
            });
        }
        Ok(())
    }
}

impl<T: ReportSink + ?Sized> ReportSink for &mut T {
    type Error = T::Error;

    fn write_report(&mut self, report: &[u8]) -> Result<usize, Self::Error> {
        (**self).write_report(report)
    }
}

/// An opened controller
pub trait ReportDevice: ReportSink {
    /// Vendor/product identity of the opened device
    fn device_id(&self) -> DeviceId;

    /// Human-readable product name, if the device reports one
    fn product_name(&self) -> Option<&str>;
}
