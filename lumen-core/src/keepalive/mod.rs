//! Keep-alive scheduling
//!
//! Decides when the framed packet must be re-sent and tracks whether the
//! controller is still accepting writes.

pub mod monitor;

pub use monitor::{KeepAliveMonitor, LinkStatus, MAX_CONSECUTIVE_FAILURES};
