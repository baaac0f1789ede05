//! Checksum framing
//!
//! The device expects a 16-bit additive checksum: the wrapping sum of the
//! first 62 packet bytes, stored big-endian in the last two bytes.
//!
//! This is not a CRC. A single flipped bit always changes the sum, but two
//! corruptions that cancel out (one byte up by `n`, another down by `n`),
//! reordered bytes, and any change that is a multiple of 65536 in total all
//! produce the same checksum. Treat it as a framing sanity check only.

use crate::error::PacketError;
use crate::packet::{Packet, CHECKSUM_OFFSET, PACKET_SIZE};

/// Wrapping 16-bit sum of `data`
pub fn additive_checksum(data: &[u8]) -> u16 {
    data.iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)))
}

/// Encode a packet and write its checksum into the last two bytes
///
/// Works on a copy of `packet`, so the caller's value is never modified.
/// The checksum bytes are zeroed before summing, which makes the operation
/// idempotent.
pub fn frame_with_checksum(packet: &Packet) -> Result<[u8; PACKET_SIZE], PacketError> {
    let mut packet = *packet;
    packet.metadata.clear_checksum();

    let mut buffer = packet.assemble()?;
    let checksum = additive_checksum(&buffer[..CHECKSUM_OFFSET]);
    buffer[CHECKSUM_OFFSET..].copy_from_slice(&checksum.to_be_bytes());

    Ok(buffer)
}

/// Checksum stored in a framed packet
pub fn stored_checksum(buffer: &[u8; PACKET_SIZE]) -> u16 {
    u16::from_be_bytes([buffer[CHECKSUM_OFFSET], buffer[CHECKSUM_OFFSET + 1]])
}

/// Returns true if the stored checksum matches the packet contents
pub fn verify(buffer: &[u8; PACKET_SIZE]) -> bool {
    stored_checksum(buffer) == additive_checksum(&buffer[..CHECKSUM_OFFSET])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{Metadata, STEP_COUNT};
    use crate::patterns::{DEFAULT_METADATA_PREFIX, KEEP_ALIVE_STEP, OP_SET_COLOR};
    use crate::step::{RawQuadWord, Step, StepSlot, TimedColorStep};
    use proptest::prelude::*;

    // Captured from the device vendor's tool
    const KEEP_ALIVE_HEX: &str = "8f000000000000000000000000000000\
                                  00000000000000000000000000000000\
                                  00000000000000000000000000000000\
                                  0000000000000000000000ffffff038c";

    const RED_HEX: &str = "10006400000000000000000000000000\
                           00000000000000000000000000000000\
                           00000000000000000000000000000000\
                           0000000000000000000000ffffff0371";

    fn from_hex(hex: &str) -> [u8; PACKET_SIZE] {
        let digits = hex.as_bytes();
        assert_eq!(digits.len(), PACKET_SIZE * 2);
        let mut out = [0u8; PACKET_SIZE];
        for (i, byte) in out.iter_mut().enumerate() {
            let pair = core::str::from_utf8(&digits[i * 2..i * 2 + 2]).unwrap();
            *byte = u8::from_str_radix(pair, 16).unwrap();
        }
        out
    }

    #[test]
    fn test_additive_checksum_wraps() {
        assert_eq!(additive_checksum(&[]), 0);
        assert_eq!(additive_checksum(&[0xFF, 0x01]), 0x0100);
        // 258 * 255 = 65790 = 65536 + 254
        assert_eq!(additive_checksum(&[0xFF; 258]), 254);
    }

    #[test]
    fn test_fixed_point_scenario() {
        let mut steps = [StepSlot(Step::RawQuadWord(RawQuadWord(0))); STEP_COUNT];
        steps[0] = TimedColorStep {
            opcode_target: 0x10,
            repeat: 0x00,
            red: 0x00,
            green: 0x64,
            blue: 0x08,
            on_time: 0x00,
            off_time: 0x00,
            padding: 0x00,
        }
        .into();
        let packet = Packet::new(steps, Metadata::new([0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]));

        let buffer = frame_with_checksum(&packet).unwrap();

        assert_eq!(&buffer[..8], &[0x10, 0x00, 0x00, 0x64, 0x08, 0x00, 0x00, 0x00]);
        assert!(buffer[8..56].iter().all(|&b| b == 0));
        assert_eq!(&buffer[56..62], &[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]);
        // 0x10 + 0x64 + 0x08 + 3 * 0xFF = 0x379
        assert_eq!(&buffer[62..], &[0x03, 0x79]);
        assert!(verify(&buffer));
    }

    #[test]
    fn test_keep_alive_reference_frame() {
        let packet = Packet::with_program(&[KEEP_ALIVE_STEP.into()], DEFAULT_METADATA_PREFIX).unwrap();
        let buffer = frame_with_checksum(&packet).unwrap();
        let expected = from_hex(KEEP_ALIVE_HEX);

        assert_eq!(&buffer[..CHECKSUM_OFFSET], &expected[..CHECKSUM_OFFSET]);
        assert_eq!(buffer, expected);
        assert_eq!(stored_checksum(&buffer), 0x038c);
        assert!(verify(&expected));
    }

    #[test]
    fn test_red_reference_frame() {
        let step = TimedColorStep::new(OP_SET_COLOR).with_color(0x64, 0x00, 0x00);
        let packet = Packet::with_program(&[step.into()], DEFAULT_METADATA_PREFIX).unwrap();
        assert_eq!(frame_with_checksum(&packet).unwrap(), from_hex(RED_HEX));
    }

    #[test]
    fn test_stale_checksum_is_ignored() {
        let mut packet = Packet::empty(DEFAULT_METADATA_PREFIX);
        let clean = frame_with_checksum(&packet).unwrap();

        packet.metadata = Metadata::from_bytes([0, 0, 0, 0xFF, 0xFF, 0xFF, 0x12, 0x34]);
        assert_eq!(frame_with_checksum(&packet).unwrap(), clean);
        // caller's packet untouched
        assert_eq!(packet.metadata.as_bytes()[6..], [0x12, 0x34]);
    }

    #[test]
    fn test_reframing_framed_output() {
        let packet = Packet::with_program(&[KEEP_ALIVE_STEP.into()], DEFAULT_METADATA_PREFIX).unwrap();
        let first = frame_with_checksum(&packet).unwrap();

        let mut reloaded = packet;
        let mut metadata = [0u8; 8];
        metadata.copy_from_slice(&first[56..]);
        reloaded.metadata = Metadata::from_bytes(metadata);

        assert_eq!(frame_with_checksum(&reloaded).unwrap(), first);
    }

    #[test]
    fn test_compensating_corruption_goes_undetected() {
        let packet = Packet::with_program(&[KEEP_ALIVE_STEP.into()], DEFAULT_METADATA_PREFIX).unwrap();
        let mut buffer = frame_with_checksum(&packet).unwrap();
        assert!(verify(&buffer));

        buffer[0] -= 5; // 0x8f -> 0x8a
        buffer[1] += 5;
        assert!(verify(&buffer));
    }

    fn any_packet() -> impl Strategy<Value = Packet> {
        let step = prop_oneof![
            any::<[u8; 8]>().prop_map(|b| Step::TimedColor(TimedColorStep {
                opcode_target: b[0],
                repeat: b[1],
                red: b[2],
                green: b[3],
                blue: b[4],
                on_time: b[5],
                off_time: b[6],
                padding: b[7],
            })),
            any::<u64>().prop_map(|v| Step::RawQuadWord(RawQuadWord(v))),
        ];
        (proptest::array::uniform7(step), any::<[u8; 8]>()).prop_map(|(steps, metadata)| {
            Packet::new(steps.map(StepSlot), Metadata::from_bytes(metadata))
        })
    }

    proptest! {
        #[test]
        fn prop_framing_is_idempotent(packet in any_packet()) {
            let first = frame_with_checksum(&packet).unwrap();
            let second = frame_with_checksum(&packet).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_checksum_matches_sum(packet in any_packet()) {
            let buffer = frame_with_checksum(&packet).unwrap();
            let wide: u32 = buffer[..CHECKSUM_OFFSET].iter().map(|&b| u32::from(b)).sum();
            let stored = (u32::from(buffer[62]) << 8) | u32::from(buffer[63]);
            prop_assert_eq!(stored, wide % 65536);
        }

        #[test]
        fn prop_single_bit_flip_detected(
            packet in any_packet(),
            index in 0..CHECKSUM_OFFSET,
            bit in 0u8..8,
        ) {
            let mut buffer = frame_with_checksum(&packet).unwrap();
            buffer[index] ^= 1 << bit;
            prop_assert!(!verify(&buffer));
        }
    }
}
