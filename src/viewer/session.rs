//! Interactive viewer state driven by pointer and wheel events
//!
//! Holds everything the hover/click/drag/zoom handlers share: the grid, the
//! engine, the viewport, the single live highlight and whether the reveal
//! dialog is open. The host forwards raw events and redraws from the
//! accessors; nothing here touches a drawing API.

use crate::algorithm::connectivity::ConnectivityEngine;
use crate::algorithm::region::ConnectedRegion;
use crate::spatial::grid::{TileCoord, TileGrid};
use crate::spatial::viewport::{ScreenRect, Viewport};

/// Notice that a click landed on a region large enough to reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Tile that was clicked
    pub coord: TileCoord,
    /// Size of the revealed region
    pub count: usize,
}

/// Viewer state for one map on one canvas
#[derive(Debug, Clone)]
pub struct ViewerSession {
    grid: TileGrid,
    engine: ConnectivityEngine,
    viewport: Viewport,
    highlight: ConnectedRegion,
    reveal_open: bool,
    pointer: Option<[f64; 2]>,
}

impl ViewerSession {
    /// Create a session over a loaded grid
    pub fn new(grid: TileGrid, engine: ConnectivityEngine, viewport: Viewport) -> Self {
        Self {
            grid,
            engine,
            viewport,
            highlight: ConnectedRegion::empty(),
            reveal_open: false,
            pointer: None,
        }
    }

    /// Grid being viewed
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Engine answering tile queries
    pub const fn engine(&self) -> &ConnectivityEngine {
        &self.engine
    }

    /// Current camera state
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Region currently highlighted, empty when nothing is
    pub const fn highlight(&self) -> &ConnectedRegion {
        &self.highlight
    }

    /// Whether the reveal dialog is showing
    pub const fn is_reveal_open(&self) -> bool {
        self.reveal_open
    }

    /// Last pointer position seen, in screen pixels
    pub const fn pointer(&self) -> Option<[f64; 2]> {
        self.pointer
    }

    /// Tile under the last pointer position
    pub fn hovered_tile(&self) -> Option<TileCoord> {
        self.pointer.map(|[x, y]| self.viewport.screen_to_tile(x, y))
    }

    /// Swap in a new grid snapshot
    ///
    /// The old highlight belonged to the old grid and is dropped.
    pub fn replace_grid(&mut self, grid: TileGrid) {
        let tile_size = self.viewport.tile_size();
        self.viewport.set_map_size([
            grid.width() as f64 * tile_size,
            grid.height() as f64 * tile_size,
        ]);
        self.grid = grid;
        self.highlight = ConnectedRegion::empty();
    }

    /// Handle pointer motion
    ///
    /// Pans while a drag is active, then re-evaluates the hover highlight:
    /// the previous highlight is always cleared and replaced only when the
    /// hovered tile belongs to a revealing region. Returns whether the view
    /// needs a redraw.
    pub fn pointer_moved(&mut self, screen_x: f64, screen_y: f64) -> bool {
        self.pointer = Some([screen_x, screen_y]);
        let panned = self.viewport.drag_to(screen_x, screen_y);

        let coord = self.viewport.screen_to_tile(screen_x, screen_y);
        let probe = self.engine.probe(&self.grid, coord.x, coord.y);
        let next = if probe.reveal {
            probe.region
        } else {
            ConnectedRegion::empty()
        };

        let changed = next != self.highlight;
        self.highlight = next;
        panned || changed
    }

    /// Handle a click, opening the reveal dialog on a revealing region
    pub fn clicked(&mut self, screen_x: f64, screen_y: f64) -> Option<Reveal> {
        let coord = self.viewport.screen_to_tile(screen_x, screen_y);
        let probe = self.engine.probe(&self.grid, coord.x, coord.y);
        if !probe.reveal {
            return None;
        }

        let count = probe.count();
        self.highlight = probe.region;
        self.reveal_open = true;
        Some(Reveal { coord, count })
    }

    /// Handle a button press, starting a drag
    pub const fn pointer_pressed(&mut self, screen_x: f64, screen_y: f64) {
        self.viewport.begin_drag(screen_x, screen_y);
    }

    /// Handle a button release, ending any drag
    pub const fn pointer_released(&mut self) {
        self.viewport.end_drag();
    }

    /// Handle a wheel event
    pub fn wheel(&mut self, delta_y: f64) {
        self.viewport.zoom_by_wheel(delta_y);
    }

    /// Handle a canvas resize
    pub fn resize(&mut self, canvas_size: [f64; 2]) {
        self.viewport.set_canvas_size(canvas_size);
    }

    /// Close the reveal dialog
    ///
    /// Returns whether it was open.
    pub const fn dismiss_reveal(&mut self) -> bool {
        let was_open = self.reveal_open;
        self.reveal_open = false;
        was_open
    }

    /// Screen rectangles of the highlighted tiles, for the rendering layer
    pub fn highlight_rects(&self) -> impl Iterator<Item = ScreenRect> + '_ {
        self.highlight.iter().map(|&coord| self.viewport.tile_rect(coord))
    }
}
