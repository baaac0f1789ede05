//! Keep-alive monitor implementation
//!
//! Tracks time since the last write attempt and consecutive write failures.

/// Failed writes in a row before the link is considered lost
pub const MAX_CONSECUTIVE_FAILURES: u8 = 3;

/// Link health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Writes are being accepted
    Ok,
    /// Too many consecutive writes failed; the device should be reopened
    Lost,
}

/// Keep-alive schedule and link monitor
///
/// The caller advances time with [`update_time`](Self::update_time), sends
/// when [`is_due`](Self::is_due) says so, and reports the outcome.
#[derive(Debug, Clone)]
pub struct KeepAliveMonitor {
    /// Re-send period (ms)
    interval_ms: u32,
    /// Time since the last write attempt (ms)
    since_last_write_ms: u32,
    /// Failed writes in a row
    consecutive_failures: u8,
    /// Successful writes since creation
    sent: u32,
}

impl KeepAliveMonitor {
    /// Create a monitor; the first send is due one interval from now
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            since_last_write_ms: 0,
            consecutive_failures: 0,
            sent: 0,
        }
    }

    /// Update time tracking
    ///
    /// # Arguments
    /// - `delta_ms`: Time elapsed since last update
    pub fn update_time(&mut self, delta_ms: u32) {
        self.since_last_write_ms = self.since_last_write_ms.saturating_add(delta_ms);
    }

    /// Returns true once an interval has elapsed since the last attempt
    pub fn is_due(&self) -> bool {
        self.since_last_write_ms >= self.interval_ms
    }

    /// Record a successful write
    pub fn write_succeeded(&mut self) {
        self.since_last_write_ms = 0;
        self.consecutive_failures = 0;
        self.sent = self.sent.saturating_add(1);
    }

    /// Record a failed write
    ///
    /// The next attempt waits a full interval, like a successful one.
    pub fn write_failed(&mut self) {
        self.since_last_write_ms = 0;
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    /// Forget past failures after the device has been reopened
    pub fn link_restored(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Check link health
    pub fn check(&self) -> LinkStatus {
        if self.consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
            LinkStatus::Lost
        } else {
            LinkStatus::Ok
        }
    }

    /// Get the re-send period
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Get number of failed writes in a row
    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    /// Get number of successful writes
    pub fn sent_count(&self) -> u32 {
        self.sent
    }
}
