//! Embassy async tasks

pub mod keepalive;

pub use keepalive::{keep_alive_task, KeepAlive, Opener, TickOutcome, TICK_INTERVAL_MS};
