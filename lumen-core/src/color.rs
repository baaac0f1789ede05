//! Color input sanitizing
//!
//! The controller takes channel intensities as a percentage. Values are
//! clamped here, before any step is built; the packet encoder itself
//! accepts the full byte range.

/// Highest intensity the controller accepts
pub const MAX_INTENSITY_PERCENT: u8 = 100;

/// Clamp a raw user value to `0..=100`
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, MAX_INTENSITY_PERCENT as i64) as u8
}

/// Sanitized color, each channel in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// All channels off
    pub const OFF: Rgb = Rgb {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Build a color from unchecked percentages, clamping each channel
    pub fn from_percent(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: clamp_percent(red),
            green: clamp_percent(green),
            blue: clamp_percent(blue),
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}
