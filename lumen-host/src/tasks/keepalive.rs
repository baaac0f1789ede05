//! Keep-alive task
//!
//! Re-sends the framed packet every keep-alive interval so the controller
//! keeps showing the color. Repeated write failures drop the device handle;
//! the next due tick rediscovers and reopens it.

use std::fmt::Display;

use embassy_time::{Duration, Instant, Ticker};
use log::{debug, info, warn};
use lumen_core::keepalive::{KeepAliveMonitor, LinkStatus};
use lumen_hal::ReportSink;
use lumen_protocol::PACKET_SIZE;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 100;

/// Source of fresh device handles
pub trait Opener {
    type Sink: ReportSink;
    type Error: Display;

    fn open(&mut self) -> Result<Self::Sink, Self::Error>;
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing due yet
    Idle,
    /// Packet written
    Sent,
    /// Write failed
    Failed,
    /// Device could not be reopened
    Unavailable,
}

/// Keep-alive state: device handle, schedule and the packet to repeat
pub struct KeepAlive<O: Opener> {
    opener: O,
    sink: Option<O::Sink>,
    monitor: KeepAliveMonitor,
    frame: [u8; PACKET_SIZE],
}

impl<O: Opener> KeepAlive<O>
where
    <O::Sink as ReportSink>::Error: Display,
{
    /// Start from an already opened device that has received the first write
    pub fn new(opener: O, sink: O::Sink, frame: [u8; PACKET_SIZE], interval_ms: u32) -> Self {
        Self {
            opener,
            sink: Some(sink),
            monitor: KeepAliveMonitor::new(interval_ms),
            frame,
        }
    }

    /// Advance time by `delta_ms` and re-send if due
    pub fn tick(&mut self, delta_ms: u32) -> TickOutcome {
        self.monitor.update_time(delta_ms);
        if !self.monitor.is_due() {
            return TickOutcome::Idle;
        }

        if self.sink.is_none() {
            match self.opener.open() {
                Ok(sink) => {
                    info!("Device reopened");
                    self.sink = Some(sink);
                    self.monitor.link_restored();
                }
                Err(e) => {
                    warn!("Device unavailable: {}", e);
                    self.monitor.write_failed();
                    return TickOutcome::Unavailable;
                }
            }
        }

        let Some(sink) = self.sink.as_mut() else {
            return TickOutcome::Unavailable;
        };

        match sink.send(&self.frame) {
            Ok(()) => {
                self.monitor.write_succeeded();
                debug!(
                    "Written to device: {} bytes (#{})",
                    PACKET_SIZE,
                    self.monitor.sent_count()
                );
                TickOutcome::Sent
            }
            Err(e) => {
                warn!("Error writing to device: {}", e);
                self.monitor.write_failed();
                if self.monitor.check() == LinkStatus::Lost {
                    warn!(
                        "Link lost after {} failed writes, reopening",
                        self.monitor.consecutive_failures()
                    );
                    self.sink = None;
                }
                TickOutcome::Failed
            }
        }
    }

    /// Returns true while a device handle is held
    pub fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    pub fn monitor(&self) -> &KeepAliveMonitor {
        &self.monitor
    }
}

/// Keep-alive task - ticks forever, re-sending when due
pub async fn keep_alive_task<O: Opener>(mut keep_alive: KeepAlive<O>)
where
    <O::Sink as ReportSink>::Error: Display,
{
    info!(
        "Keep-alive task started ({} ms interval)",
        keep_alive.monitor().interval_ms()
    );

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let mut last = Instant::now();

    loop {
        ticker.next().await;

        let now = Instant::now();
        let delta_ms = u32::try_from((now - last).as_millis()).unwrap_or(u32::MAX);
        last = now;

        keep_alive.tick(delta_ms);
    }
}
