//! Packet assembly
//!
//! Packet format:
//! - STEPS (56 bytes): seven 8-byte step records in table order
//! - METADATA PREFIX (6 bytes): device framing/addressing bytes
//! - CHECKSUM (2 bytes): big-endian additive checksum, see [`crate::checksum`]

use crate::checksum::frame_with_checksum;
use crate::error::PacketError;
use crate::patterns::EMPTY_STEP;
use crate::step::{encode_record, Step, StepSlot, RECORD_SIZE};

/// Number of slots in the device program table
pub const STEP_COUNT: usize = 7;

/// Metadata block size in bytes
pub const METADATA_SIZE: usize = 8;

/// Caller-supplied part of the metadata block
pub const METADATA_PREFIX_SIZE: usize = 6;

/// Complete packet size (STEPS + METADATA)
pub const PACKET_SIZE: usize = STEP_COUNT * RECORD_SIZE + METADATA_SIZE;

/// Offset of the big-endian checksum within the packet
pub const CHECKSUM_OFFSET: usize = PACKET_SIZE - 2;

/// Trailing metadata block
///
/// The last two bytes belong to the checksum and are overwritten whenever
/// the packet is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Metadata([u8; METADATA_SIZE]);

impl Metadata {
    /// Create a metadata block from its framing prefix, checksum cleared
    pub const fn new(prefix: [u8; METADATA_PREFIX_SIZE]) -> Self {
        let mut bytes = [0u8; METADATA_SIZE];
        let mut i = 0;
        while i < METADATA_PREFIX_SIZE {
            bytes[i] = prefix[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Create a metadata block from all eight bytes
    pub const fn from_bytes(bytes: [u8; METADATA_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw metadata bytes
    pub const fn as_bytes(&self) -> &[u8; METADATA_SIZE] {
        &self.0
    }

    /// Framing prefix (bytes 0-5)
    pub fn prefix(&self) -> [u8; METADATA_PREFIX_SIZE] {
        let mut prefix = [0u8; METADATA_PREFIX_SIZE];
        prefix.copy_from_slice(&self.0[..METADATA_PREFIX_SIZE]);
        prefix
    }

    /// Zero the checksum bytes so they do not contribute to the sum
    pub fn clear_checksum(&mut self) {
        self.0[METADATA_PREFIX_SIZE..].fill(0);
    }
}

/// Full step table plus metadata
///
/// `Copy` so that framing works on its own copy and never mutates a packet
/// shared between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Program table, slot 0 first
    pub steps: [StepSlot; STEP_COUNT],
    /// Trailing metadata block
    pub metadata: Metadata,
}

impl Packet {
    /// Create a packet from a complete step table
    pub const fn new(steps: [StepSlot; STEP_COUNT], metadata: Metadata) -> Self {
        Self { steps, metadata }
    }

    /// Create a packet with every slot empty
    pub fn empty(prefix: [u8; METADATA_PREFIX_SIZE]) -> Self {
        Self::new([StepSlot(EMPTY_STEP); STEP_COUNT], Metadata::new(prefix))
    }

    /// Create a packet from a short program
    ///
    /// Steps fill the table from slot 0; remaining slots are empty.
    pub fn with_program(
        program: &[Step],
        prefix: [u8; METADATA_PREFIX_SIZE],
    ) -> Result<Self, PacketError> {
        if program.len() > STEP_COUNT {
            return Err(PacketError::InvalidStepCount {
                expected: STEP_COUNT,
                actual: program.len(),
            });
        }

        let mut packet = Self::empty(prefix);
        for (slot, step) in packet.steps.iter_mut().zip(program) {
            *slot = StepSlot(*step);
        }
        Ok(packet)
    }

    /// Assemble without touching the checksum bytes
    pub fn assemble(&self) -> Result<[u8; PACKET_SIZE], PacketError> {
        assemble(&self.steps, &self.metadata)
    }

    /// Assemble and patch in the checksum
    pub fn frame(&self) -> Result<[u8; PACKET_SIZE], PacketError> {
        frame_with_checksum(self)
    }
}

/// Concatenate step records and metadata into one packet buffer
///
/// The step table must hold exactly [`STEP_COUNT`] slots.
pub fn assemble(steps: &[StepSlot], metadata: &Metadata) -> Result<[u8; PACKET_SIZE], PacketError> {
    if steps.len() != STEP_COUNT {
        return Err(PacketError::InvalidStepCount {
            expected: STEP_COUNT,
            actual: steps.len(),
        });
    }

    let mut buffer = [0u8; PACKET_SIZE];
    for (chunk, slot) in buffer.chunks_exact_mut(RECORD_SIZE).zip(steps) {
        chunk.copy_from_slice(&encode_record(slot)?);
    }
    buffer[STEP_COUNT * RECORD_SIZE..].copy_from_slice(metadata.as_bytes());

    Ok(buffer)
}
