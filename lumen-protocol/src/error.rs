//! Packet encoding errors

use core::fmt;

/// Errors that can occur while encoding a packet
///
/// Both variants are fatal to the encode call that produced them. The
/// encoder never pads or truncates to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// A step record encoded to the wrong number of bytes
    MalformedRecord { expected: usize, actual: usize },
    /// Step table does not hold exactly the protocol's slot count
    InvalidStepCount { expected: usize, actual: usize },
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketError::MalformedRecord { expected, actual } => write!(
                f,
                "malformed step record: expected {} bytes, got {}",
                expected, actual
            ),
            PacketError::InvalidStepCount { expected, actual } => write!(
                f,
                "invalid step count: expected {} slots, got {}",
                expected, actual
            ),
        }
    }
}
