//! Error handling
//!
//! Defines error types and conversions for the bridge.

pub mod types;

pub use types::*;
