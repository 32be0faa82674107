//! Map constants and runtime configuration defaults

// Tile code the map editor exports for collision tiles
/// Tile code that marks a tile as collision/markable
pub const DEFAULT_SENTINEL: i32 = 1025;

/// Minimum connected region size that triggers a reveal
pub const DEFAULT_REVEAL_THRESHOLD: usize = 4;

/// Number of columns in the exported collision layer
pub const DEFAULT_MAP_COLUMNS: usize = 70;

/// Edge length of one tile in map pixels
pub const DEFAULT_TILE_SIZE: f64 = 48.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Zoom behaviour
/// Smallest zoom scale
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom scale
pub const MAX_ZOOM: f64 = 3.0;
/// Scale change per unit of wheel delta
pub const ZOOM_INTENSITY: f64 = 0.1;

// Overlay rendering
/// Default pixel edge length of one tile in exported overlays
pub const DEFAULT_OVERLAY_CELL_SIZE: u32 = 4;
/// Fill for revealing regions (yellow at half opacity)
pub const HIGHLIGHT_COLOR: [u8; 4] = [255, 255, 0, 128];
/// Fill for marked tiles outside any revealing region
pub const MARKED_COLOR: [u8; 4] = [96, 96, 96, 128];

// Region membership settings
/// Bounding boxes up to this many cells always use a membership bitset
pub const MIN_DENSE_REGION_CELLS: usize = 4096;
/// Larger boxes use a bitset only while they hold at most this many cells per tile
pub const DENSE_REGION_CELLS_PER_TILE: usize = 64;

// Output settings
/// Suffix added to overlay filenames
pub const OUTPUT_SUFFIX: &str = "_treasures";
/// File extensions recognised as collision data
pub const COLLISION_EXTENSIONS: [&str; 3] = ["js", "txt", "csv"];

/// Runtime configuration of the connectivity engine
///
/// Adjacency is always 4-directional and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tile code counted as collision/markable
    pub sentinel: i32,
    /// Minimum region size that counts as a reveal
    pub reveal_threshold: usize,
}

impl EngineConfig {
    /// Create a configuration with explicit values
    pub const fn new(sentinel: i32, reveal_threshold: usize) -> Self {
        Self {
            sentinel,
            reveal_threshold,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL, DEFAULT_REVEAL_THRESHOLD)
    }
}
