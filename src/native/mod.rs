//! Native layer model
//!
//! Status codes reported by the native authentication backend and their
//! descriptive strings.

pub mod codes;

pub use codes::*;
