//! Pan and zoom arithmetic between screen pixels and tile coordinates
//!
//! The map is drawn with its top-left corner at `offset` (screen pixels) and
//! scaled by `scale`, so a tile occupies `tile_size * scale` pixels on screen.

use crate::io::configuration::{MAX_ZOOM, MIN_ZOOM, ZOOM_INTENSITY};
use crate::spatial::grid::{TileCoord, TileGrid};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

/// Camera state for a tile map shown on a fixed-size canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset: [f64; 2],
    scale: f64,
    tile_size: f64,
    canvas_size: [f64; 2],
    map_size: [f64; 2],
    drag_anchor: Option<[f64; 2]>,
}

impl Viewport {
    /// Create an unzoomed viewport at the origin
    ///
    /// `map_size` is the unscaled pixel size of the whole map.
    pub const fn new(canvas_size: [f64; 2], map_size: [f64; 2], tile_size: f64) -> Self {
        Self {
            offset: [0.0, 0.0],
            scale: 1.0,
            tile_size,
            canvas_size,
            map_size,
            drag_anchor: None,
        }
    }

    /// Create a viewport sized for a grid drawn with `tile_size` pixel tiles
    pub fn for_grid(grid: &TileGrid, canvas_size: [f64; 2], tile_size: f64) -> Self {
        let map_size = [
            grid.width() as f64 * tile_size,
            grid.height() as f64 * tile_size,
        ];
        Self::new(canvas_size, map_size, tile_size)
    }

    /// Start from a specific pan offset without applying movement limits
    #[must_use]
    pub const fn with_offset(mut self, offset: [f64; 2]) -> Self {
        self.offset = offset;
        self
    }

    /// Current pan offset in screen pixels
    pub const fn offset(&self) -> [f64; 2] {
        self.offset
    }

    /// Current zoom scale
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Unscaled tile edge length in pixels
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Canvas size in screen pixels
    pub const fn canvas_size(&self) -> [f64; 2] {
        self.canvas_size
    }

    /// Unscaled map size in pixels
    pub const fn map_size(&self) -> [f64; 2] {
        self.map_size
    }

    /// Resize the canvas and re-apply movement limits
    pub fn set_canvas_size(&mut self, canvas_size: [f64; 2]) {
        self.canvas_size = canvas_size;
        self.limit_movement();
    }

    /// Replace the map extent, e.g. after loading a different grid
    pub fn set_map_size(&mut self, map_size: [f64; 2]) {
        self.map_size = map_size;
        self.limit_movement();
    }

    /// Tile under a screen point
    ///
    /// Points off the map produce coordinates outside the grid, which the
    /// grid treats as empty.
    pub fn screen_to_tile(&self, screen_x: f64, screen_y: f64) -> TileCoord {
        let tile_extent = self.tile_size * self.scale;
        let column = ((screen_x - self.offset[0]) / tile_extent).floor();
        let row = ((screen_y - self.offset[1]) / tile_extent).floor();
        // Float to int casts saturate, and NaN maps to 0
        TileCoord::new(column as i32, row as i32)
    }

    /// Screen rectangle covered by a tile
    pub fn tile_rect(&self, coord: TileCoord) -> ScreenRect {
        let tile_extent = self.tile_size * self.scale;
        ScreenRect {
            x: f64::from(coord.x).mul_add(tile_extent, self.offset[0]),
            y: f64::from(coord.y).mul_add(tile_extent, self.offset[1]),
            width: tile_extent,
            height: tile_extent,
        }
    }

    /// Anchor a drag at a screen point
    pub const fn begin_drag(&mut self, screen_x: f64, screen_y: f64) {
        self.drag_anchor = Some([screen_x - self.offset[0], screen_y - self.offset[1]]);
    }

    /// Pan so the anchored map point follows the pointer
    ///
    /// Returns whether a drag was in progress.
    pub fn drag_to(&mut self, screen_x: f64, screen_y: f64) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        self.offset = [screen_x - anchor[0], screen_y - anchor[1]];
        self.limit_movement();
        true
    }

    /// Release the drag anchor
    pub const fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Check whether a drag is in progress
    pub const fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Apply a wheel delta to the zoom scale
    ///
    /// Positive deltas zoom out. Non-finite deltas are ignored.
    pub fn zoom_by_wheel(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.scale = delta_y
            .mul_add(-ZOOM_INTENSITY, self.scale)
            .clamp(MIN_ZOOM, MAX_ZOOM);
        self.limit_movement();
    }

    /// Keep the scaled map covering the canvas where possible
    ///
    /// The upper bound (0) is applied before the lower bound, so a map
    /// smaller than the canvas is pinned to the lower bound.
    pub fn limit_movement(&mut self) {
        let scale = self.scale;
        let limit = |offset: f64, canvas: f64, map: f64| {
            let min = map.mul_add(-scale, canvas);
            let mut limited = offset;
            if limited > 0.0 {
                limited = 0.0;
            }
            if limited < min {
                limited = min;
            }
            limited
        };

        let [x, y] = self.offset;
        let [canvas_width, canvas_height] = self.canvas_size;
        let [map_width, map_height] = self.map_size;
        self.offset = [
            limit(x, canvas_width, map_width),
            limit(y, canvas_height, map_height),
        ];
    }
}
