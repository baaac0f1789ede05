//! Program building
//!
//! Turns a sanitized request into the step table sent to the controller.

use lumen_protocol::{
    Packet, PacketError, Step, TimedColorStep, BOOT_STEP,
    KEEP_ALIVE_STEP, METADATA_PREFIX_SIZE, OP_SET_COLOR, PACKET_SIZE,
};

use crate::color::Rgb;
use crate::config::LightConfig;

/// Step that holds a solid color
pub fn solid_color_step(rgb: Rgb) -> TimedColorStep {
    TimedColorStep::new(OP_SET_COLOR).with_color(rgb.red(), rgb.green(), rgb.blue())
}

/// Packet with `step` in slot 0 and every other slot empty
fn single_step_packet(step: Step, prefix: [u8; METADATA_PREFIX_SIZE]) -> Packet {
    let mut packet = Packet::empty(prefix);
    packet.steps[0] = step.into();
    packet
}

/// Packet that sets a solid color
pub fn solid_color_packet(rgb: Rgb, prefix: [u8; METADATA_PREFIX_SIZE]) -> Packet {
    single_step_packet(solid_color_step(rgb).into(), prefix)
}

/// Packet carrying the reserved keep-alive step
pub fn keep_alive_packet(prefix: [u8; METADATA_PREFIX_SIZE]) -> Packet {
    single_step_packet(KEEP_ALIVE_STEP.into(), prefix)
}

/// Packet carrying the boot step
pub fn boot_packet(prefix: [u8; METADATA_PREFIX_SIZE]) -> Packet {
    single_step_packet(BOOT_STEP.into(), prefix)
}

/// Build the packet described by a configuration
pub fn packet_for(config: &LightConfig) -> Packet {
    solid_color_packet(config.color.rgb(), config.framing.metadata_prefix)
}

/// Build and frame the packet described by a configuration
///
/// The same buffer is used for the first write and every keep-alive.
pub fn frame_for(config: &LightConfig) -> Result<[u8; PACKET_SIZE], PacketError> {
    packet_for(config).frame()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_protocol::{verify, StepSlot, DEFAULT_METADATA_PREFIX, EMPTY_STEP};

    #[test]
    fn test_solid_color_step() {
        let step = solid_color_step(Rgb::from_percent(100, 0, 50));
        assert_eq!(step.opcode_target, 0x10);
        assert_eq!((step.red, step.green, step.blue), (100, 0, 50));
        assert_eq!((step.repeat, step.on_time, step.off_time), (0, 0, 0));
    }

    #[test]
    fn test_single_step_layout() {
        let packet = keep_alive_packet(DEFAULT_METADATA_PREFIX);
        assert_eq!(packet.steps[0], StepSlot::from(KEEP_ALIVE_STEP));
        assert!(packet.steps[1..].iter().all(|s| *s.step() == EMPTY_STEP));

        let packet = boot_packet(DEFAULT_METADATA_PREFIX);
        assert_eq!(packet.steps[0], StepSlot::from(BOOT_STEP));
    }

    #[test]
    fn test_frame_for_default_config() {
        let frame = frame_for(&LightConfig::default()).unwrap();
        // green at 100%
        assert_eq!(&frame[..8], &[0x10, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&frame[56..62], &DEFAULT_METADATA_PREFIX);
        assert!(verify(&frame));
    }

    #[test]
    fn test_frame_for_custom_prefix() {
        let mut config = LightConfig::default();
        config.framing.metadata_prefix = [1, 2, 3, 4, 5, 6];
        let frame = frame_for(&config).unwrap();
        assert_eq!(&frame[56..62], &[1, 2, 3, 4, 5, 6]);
        assert!(verify(&frame));
    }

    #[test]
    fn test_frame_is_stable_across_calls() {
        let config = LightConfig::default();
        assert_eq!(frame_for(&config).unwrap(), frame_for(&config).unwrap());
    }
}
