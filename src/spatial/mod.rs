//! Spatial data structures and screen mapping
//!
//! This module contains spatial-related functionality including:
//! - The immutable, bounds-checked collision grid
//! - Pan/zoom conversion between screen pixels and tiles

/// Collision grid and tile coordinates
pub mod grid;
/// Pan and zoom state for drawing the grid
pub mod viewport;

pub use grid::{TileCoord, TileGrid};
pub use viewport::{ScreenRect, Viewport};
