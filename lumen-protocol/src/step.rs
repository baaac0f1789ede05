//! Step records for the device program table
//!
//! Every step occupies exactly [`RECORD_SIZE`] bytes on the wire. The set of
//! step kinds is closed: each variant has a statically known layout and the
//! width is still checked after encoding, because one misaligned record
//! would shift every record after it.

use heapless::Vec;

use crate::error::PacketError;
use crate::value::LeValue;

/// Encoded size of one step record in bytes
pub const RECORD_SIZE: usize = 8;

/// Timed color transition
///
/// Wire layout: `[opcode_target, repeat, red, green, blue, on_time, off_time, padding]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedColorStep {
    /// Operation code and jump target, packed by the device firmware.
    /// Kept opaque; the caller sets it directly.
    pub opcode_target: u8,
    /// Repeat count
    pub repeat: u8,
    /// Red intensity
    pub red: u8,
    /// Green intensity
    pub green: u8,
    /// Blue intensity
    pub blue: u8,
    /// Time the color is held
    pub on_time: u8,
    /// Time the LEDs stay dark before the next step
    pub off_time: u8,
    /// Reserved, always sent as-is
    pub padding: u8,
}

impl TimedColorStep {
    /// Create a step with the given opcode byte and every other field zero
    pub const fn new(opcode_target: u8) -> Self {
        Self {
            opcode_target,
            repeat: 0,
            red: 0,
            green: 0,
            blue: 0,
            on_time: 0,
            off_time: 0,
            padding: 0,
        }
    }

    /// Set the color channels
    pub const fn with_color(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self
    }

    /// Set the on/off timing
    pub const fn with_timing(mut self, on_time: u8, off_time: u8) -> Self {
        self.on_time = on_time;
        self.off_time = off_time;
        self
    }

    /// Set the repeat count
    pub const fn with_repeat(mut self, repeat: u8) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Raw 64-bit filler record, little-endian on the wire
///
/// The canonical empty slot is `RawQuadWord(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawQuadWord(pub u64);

/// One entry of the device program table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Timed color transition
    TimedColor(TimedColorStep),
    /// Raw filler value
    RawQuadWord(RawQuadWord),
}

impl Default for Step {
    fn default() -> Self {
        Step::RawQuadWord(RawQuadWord(0))
    }
}

impl From<TimedColorStep> for Step {
    fn from(step: TimedColorStep) -> Self {
        Step::TimedColor(step)
    }
}

impl From<RawQuadWord> for Step {
    fn from(word: RawQuadWord) -> Self {
        Step::RawQuadWord(word)
    }
}

/// Tagged holder for exactly one step
///
/// Gives the fixed-size step table a uniform element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepSlot(pub Step);

impl StepSlot {
    /// The step held in this slot
    pub const fn step(&self) -> &Step {
        &self.0
    }
}

impl From<Step> for StepSlot {
    fn from(step: Step) -> Self {
        StepSlot(step)
    }
}

impl From<TimedColorStep> for StepSlot {
    fn from(step: TimedColorStep) -> Self {
        StepSlot(Step::TimedColor(step))
    }
}

impl From<RawQuadWord> for StepSlot {
    fn from(word: RawQuadWord) -> Self {
        StepSlot(Step::RawQuadWord(word))
    }
}

/// Accumulates the bytes of one record
///
/// Writes never fail. Bytes past [`RECORD_SIZE`] are counted but not stored,
/// so the width check in [`encode_record`] sees the true length.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: Vec<u8, RECORD_SIZE>,
    written: usize,
}

impl RecordWriter {
    fn new() -> Self {
        Self::default()
    }

    /// Append a scalar field in little-endian order
    pub fn put<V: LeValue>(&mut self, value: V) {
        self.put_bytes(value.to_le_array().as_ref());
    }

    /// Append raw bytes
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            // Overflow is reported through `written`
            let _ = self.buf.push(byte);
        }
        self.written += bytes.len();
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.written
    }

    /// Returns true if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }
}

/// A fixed-layout record that can be placed in a step slot
pub trait Record {
    /// Write this record's fields in wire order
    fn write_record(&self, out: &mut RecordWriter);
}

impl Record for TimedColorStep {
    fn write_record(&self, out: &mut RecordWriter) {
        out.put(self.opcode_target);
        out.put(self.repeat);
        out.put(self.red);
        out.put(self.green);
        out.put(self.blue);
        out.put(self.on_time);
        out.put(self.off_time);
        out.put(self.padding);
    }
}

impl Record for RawQuadWord {
    fn write_record(&self, out: &mut RecordWriter) {
        out.put(self.0);
    }
}

impl Record for Step {
    fn write_record(&self, out: &mut RecordWriter) {
        match self {
            Step::TimedColor(step) => step.write_record(out),
            Step::RawQuadWord(word) => word.write_record(out),
        }
    }
}

impl Record for StepSlot {
    fn write_record(&self, out: &mut RecordWriter) {
        self.0.write_record(out);
    }
}

/// Encode any record, enforcing the 8-byte width
pub fn encode_record<R: Record + ?Sized>(record: &R) -> Result<[u8; RECORD_SIZE], PacketError> {
    let mut writer = RecordWriter::new();
    record.write_record(&mut writer);

    if writer.len() != RECORD_SIZE {
        return Err(PacketError::MalformedRecord {
            expected: RECORD_SIZE,
            actual: writer.len(),
        });
    }

    let mut out = [0u8; RECORD_SIZE];
    out.copy_from_slice(&writer.buf);
    Ok(out)
}

/// Encode one step into its 8-byte record
pub fn encode_step(step: &Step) -> Result<[u8; RECORD_SIZE], PacketError> {
    encode_record(step)
}
