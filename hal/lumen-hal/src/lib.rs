//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the transport traits the rest of the workspace is
//! written against, so the packet logic never depends on a particular
//! operating system's HID stack.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (lumen-host, tests)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ Linux hidraw  │       │  in-memory    │
//! │    device     │       │  test sink    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`report::ReportSink`] - Write output reports
//! - [`report::ReportDevice`] - An opened, identified controller

#![no_std]
#![deny(unsafe_code)]

pub mod report;

// Re-export key traits at crate root for convenience
pub use report::{DeviceId, ReportDevice, ReportSink, SendError};
