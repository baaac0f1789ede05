//! Well-known step patterns and framing bytes

use crate::packet::METADATA_PREFIX_SIZE;
use crate::step::{RawQuadWord, Step, TimedColorStep};

// Opcode bytes observed from the device vendor's tool. The split between
// operation and jump target is not documented, so these stay opaque.
pub const OP_SET_COLOR: u8 = 0x10;
pub const OP_BOOT: u8 = 0x40;
pub const OP_KEEP_ALIVE: u8 = 0x8f;

/// Canonical empty slot
pub const EMPTY_STEP: Step = Step::RawQuadWord(RawQuadWord(0));

/// Step sent when the device is first initialized
pub const BOOT_STEP: TimedColorStep = TimedColorStep::new(OP_BOOT);

/// Reserved keep-alive step
pub const KEEP_ALIVE_STEP: TimedColorStep = TimedColorStep::new(OP_KEEP_ALIVE);

/// Framing prefix used by every captured packet
pub const DEFAULT_METADATA_PREFIX: [u8; METADATA_PREFIX_SIZE] = [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::encode_step;

    #[test]
    fn test_boot_record() {
        assert_eq!(
            encode_step(&BOOT_STEP.into()).unwrap(),
            [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_keep_alive_record() {
        assert_eq!(
            encode_step(&KEEP_ALIVE_STEP.into()).unwrap(),
            [0x8f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(encode_step(&EMPTY_STEP).unwrap(), [0u8; 8]);
    }
}
