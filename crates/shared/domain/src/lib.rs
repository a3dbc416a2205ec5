//! # Domain Models
//!
//! Pure data shared by every Herald crate: configuration, constants and the slice registry.
//! Only `serde` is allowed here; no I/O and no networking.

pub mod config;
pub mod constants;
pub mod registry;
