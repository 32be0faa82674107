//! Headless viewer state for pointer-driven treasure discovery

/// Session state and event handlers
pub mod session;

pub use session::{Reveal, ViewerSession};
