//! Connected-region treasure discovery over tile-map collision grids
//!
//! A collision grid marks some tiles with a sentinel code. Pointing at a
//! marked tile finds every marked tile 4-connected to it; once that region
//! reaches a threshold size it is highlighted and revealed. The engine is
//! pure and total, so it can be called on every pointer move.

#![forbid(unsafe_code)]

/// Connectivity engine, connected regions and whole-map surveys
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Collision grid and pan/zoom viewport
pub mod spatial;
/// Headless viewer session driven by pointer events
pub mod viewer;

pub use algorithm::connectivity::{ConnectivityEngine, Probe, should_reveal};
pub use algorithm::region::ConnectedRegion;
pub use io::configuration::EngineConfig;
pub use io::error::{MapError, Result};
pub use spatial::{TileCoord, TileGrid};
