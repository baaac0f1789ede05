//! Lumen Device Packet Protocol
//!
//! This crate encodes the fixed-layout control packet understood by the
//! Lumen USB RGB controller. The device runs a small program table of seven
//! steps; the host overwrites the whole table with a single 64-byte report.
//!
//! # Packet Overview
//!
//! ```text
//! ┌────────┬────────┬─────┬────────┬──────────────────┬──────────┐
//! │ STEP 0 │ STEP 1 │ ... │ STEP 6 │ METADATA PREFIX  │ CHECKSUM │
//! │ 8B     │ 8B     │     │ 8B     │ 6B               │ 2B (BE)  │
//! └────────┴────────┴─────┴────────┴──────────────────┴──────────┘
//! ```
//!
//! Multi-byte step fields are little-endian. The checksum is the 16-bit
//! wrapping sum of the first 62 bytes, stored high byte first.
//!
//! The protocol is write-only: the device never answers with a packet, so
//! there is no parser here.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod checksum;
pub mod error;
pub mod packet;
pub mod patterns;
pub mod step;
pub mod value;

pub use checksum::{additive_checksum, frame_with_checksum, stored_checksum, verify};
pub use error::PacketError;
pub use packet::{
    assemble, Metadata, Packet, CHECKSUM_OFFSET, METADATA_PREFIX_SIZE, METADATA_SIZE,
    PACKET_SIZE, STEP_COUNT,
};
pub use patterns::{
    BOOT_STEP, DEFAULT_METADATA_PREFIX, EMPTY_STEP, KEEP_ALIVE_STEP, OP_BOOT, OP_KEEP_ALIVE,
    OP_SET_COLOR,
};
pub use step::{
    encode_record, encode_step, RawQuadWord, Record, RecordWriter, Step, StepSlot,
    TimedColorStep, RECORD_SIZE,
};
pub use value::LeValue;
