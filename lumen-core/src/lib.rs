//! Board-agnostic core logic for Lumen lighting controllers
//!
//! This crate contains all application logic that does not depend on a
//! particular transport:
//!
//! - Color input sanitizing
//! - Program building (which steps go into the packet)
//! - Keep-alive scheduling and link health
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod keepalive;
pub mod program;
