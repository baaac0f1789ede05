//! Controller access
//!
//! Linux exposes USB HID devices as `/dev/hidrawN` character devices; an
//! output report is written to the node as-is.

pub mod hidraw;

pub use hidraw::{parse_uevent, HidrawDevice, HidrawNode, HidrawOpener, HidrawScanner};
