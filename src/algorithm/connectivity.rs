use bitvec::prelude::*;

use crate::algorithm::region::ConnectedRegion;
use crate::io::configuration::EngineConfig;
use crate::spatial::grid::{TileCoord, TileGrid};

/// Decides whether a tile is marked and which marked tiles are connected to it
///
/// Stateless apart from its configuration, so a single engine can serve any
/// number of grids and threads. Every query is total: out-of-bounds
/// coordinates and empty grids simply yield `false` or an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectivityEngine {
    config: EngineConfig,
}

/// Result of probing one tile, as consumed by the input layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// Tile that was probed
    pub coord: TileCoord,
    /// Whether the tile carries the sentinel code
    pub marked: bool,
    /// Connected region containing the tile, empty when unmarked
    pub region: ConnectedRegion,
    /// Whether the region is large enough to reveal
    pub reveal: bool,
}

impl Probe {
    /// Size of the connected region
    pub const fn count(&self) -> usize {
        self.region.count()
    }
}

impl ConnectivityEngine {
    /// Create an engine with the given configuration
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Tile code treated as marked
    pub const fn sentinel(&self) -> i32 {
        self.config.sentinel
    }

    /// Minimum region size that reveals
    pub const fn reveal_threshold(&self) -> usize {
        self.config.reveal_threshold
    }

    /// Check whether `(x, y)` is inside the grid and carries the sentinel
    pub fn is_marked(&self, grid: &TileGrid, x: i32, y: i32) -> bool {
        grid.get(TileCoord::new(x, y)) == Some(self.config.sentinel)
    }

    /// Maximal 4-connected region of marked tiles containing `(x, y)`
    ///
    /// Returns an empty region when the start tile is not marked; in that
    /// case no neighbour is ever examined.
    pub fn find_connected_region(&self, grid: &TileGrid, x: i32, y: i32) -> ConnectedRegion {
        let seed = grid
            .index_of(TileCoord::new(x, y))
            .filter(|&index| grid.get_index(index) == Some(self.config.sentinel));

        let Some(seed) = seed else {
            return ConnectedRegion::empty();
        };

        let mut visited = bitvec![0; grid.len()];
        ConnectedRegion::from_tiles(flood_from(grid, self.config.sentinel, seed, &mut visited))
    }

    /// Apply the configured reveal threshold to a region size
    pub const fn should_reveal(&self, count: usize) -> bool {
        should_reveal(count, self.config.reveal_threshold)
    }

    /// Run the full hover/click query for one tile
    pub fn probe(&self, grid: &TileGrid, x: i32, y: i32) -> Probe {
        let coord = TileCoord::new(x, y);
        let marked = self.is_marked(grid, x, y);
        let region = if marked {
            self.find_connected_region(grid, x, y)
        } else {
            ConnectedRegion::empty()
        };
        let reveal = marked && self.should_reveal(region.count());

        Probe {
            coord,
            marked,
            region,
            reveal,
        }
    }
}

/// Reveal rule: a region reveals once it has at least `threshold` tiles
pub const fn should_reveal(count: usize, threshold: usize) -> bool {
    count >= threshold
}

/// Depth-first fill over marked tiles using an explicit stack
///
/// `visited` must cover every grid index. Tiles already set in `visited`
/// are treated as explored, which lets a survey share one bitset across
/// many fills. The seed must be an in-bounds marked index.
pub(crate) fn flood_from(
    grid: &TileGrid,
    sentinel: i32,
    seed: usize,
    visited: &mut BitSlice,
) -> Vec<TileCoord> {
    let mut tiles = Vec::new();
    let mut stack = Vec::new();

    if let Some(mut bit) = visited.get_mut(seed) {
        *bit = true;
        stack.push(seed);
    }

    while let Some(index) = stack.pop() {
        if let Some(coord) = grid.coord_of(index) {
            tiles.push(coord);
        }

        for neighbor in grid.neighbors(index) {
            if grid.get_index(neighbor) != Some(sentinel) {
                continue;
            }
            if let Some(mut bit) = visited.get_mut(neighbor) {
                if !*bit {
                    *bit = true;
                    stack.push(neighbor);
                }
            }
        }
    }

    tiles
}
