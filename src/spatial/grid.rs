//! Immutable collision grid with bounds-checked tile access
//!
//! All out-of-bounds handling lives here: any coordinate outside the grid,
//! negative or oversized, simply has no tile. Rectangularity and size limits
//! are validated once at construction so queries stay branch-light.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MapError, Result, invalid_parameter};

/// Tile position in grid space as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl TileCoord {
    /// Create a coordinate from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular grid of tile codes
///
/// Stored row-major as an `Array2` of shape (height, width). The grid is
/// never edited in place once built; `with_tile` produces a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Array2<i32>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl TileGrid {
    /// Create a 0x0 grid
    pub fn empty() -> Self {
        Self {
            tiles: Array2::zeros((0, 0)),
        }
    }

    /// Create a grid where every tile has the same code
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn filled(width: usize, height: usize, code: i32) -> Result<Self> {
        check_dimensions(height, width)?;
        Ok(Self {
            tiles: Array2::from_elem((height, width), code),
        })
    }

    /// Build a grid from explicit rows
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Rows differ in length
    /// - Either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);

        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != expected {
                return Err(MapError::NonRectangular {
                    row,
                    expected,
                    found: tiles.len(),
                });
            }
        }

        check_dimensions(rows.len(), expected)?;

        let flat: Vec<i32> = rows.iter().flatten().copied().collect();
        let tiles = Array2::from_shape_vec((rows.len(), expected), flat)
            .map_err(|shape_error| invalid_parameter("rows", &rows.len(), &shape_error))?;

        Ok(Self { tiles })
    }

    /// Fold a flat row-major list of tile codes into rows of `columns` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list length is not a multiple of `columns`
    /// - `columns` is zero while tiles were supplied
    /// - Either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn from_flat(tiles: Vec<i32>, columns: usize) -> Result<Self> {
        if tiles.is_empty() {
            return Ok(Self::empty());
        }

        if columns == 0 || !tiles.len().is_multiple_of(columns) {
            return Err(MapError::RaggedTileData {
                len: tiles.len(),
                columns,
            });
        }

        let rows = tiles.len() / columns;
        check_dimensions(rows, columns)?;

        let tiles = Array2::from_shape_vec((rows, columns), tiles)
            .map_err(|shape_error| invalid_parameter("columns", &columns, &shape_error))?;

        Ok(Self { tiles })
    }

    /// Copy of this grid with one tile replaced
    ///
    /// Out-of-bounds coordinates leave the copy unchanged.
    #[must_use]
    pub fn with_tile(&self, coord: TileCoord, code: i32) -> Self {
        let mut tiles = self.tiles.clone();
        if let Some((row, col)) = self.cell(coord) {
            if let Some(tile) = tiles.get_mut([row, col]) {
                *tile = code;
            }
        }
        Self { tiles }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the grid has no tiles on at least one axis
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Read-only view of the underlying (row, column) array
    pub const fn tiles(&self) -> &Array2<i32> {
        &self.tiles
    }

    /// Check whether a coordinate addresses a tile
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.cell(coord).is_some()
    }

    /// Tile code at a coordinate, `None` when out of bounds
    pub fn get(&self, coord: TileCoord) -> Option<i32> {
        let (row, col) = self.cell(coord)?;
        self.tiles.get([row, col]).copied()
    }

    /// Tile code at a linearized (row-major) index
    pub fn get_index(&self, index: usize) -> Option<i32> {
        match self.tiles.as_slice() {
            Some(slice) => slice.get(index).copied(),
            None => self.coord_of(index).and_then(|coord| self.get(coord)),
        }
    }

    /// Linearized (row-major) index of a coordinate
    pub fn index_of(&self, coord: TileCoord) -> Option<usize> {
        self.cell(coord).map(|(row, col)| row * self.width() + col)
    }

    /// Coordinate of a linearized index
    pub fn coord_of(&self, index: usize) -> Option<TileCoord> {
        if index >= self.len() {
            return None;
        }
        let width = self.width();
        // Dimensions are capped well below i32::MAX at construction
        Some(TileCoord::new((index % width) as i32, (index / width) as i32))
    }

    /// In-bounds 4-directional neighbours of a linearized index
    ///
    /// Yields left, right, up, down in that order, skipping any that fall
    /// off the grid.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let width = self.width();
        let len = self.len();

        let (left, right, up, down) = if index < len {
            let col = index % width;
            (
                (col > 0).then(|| index - 1),
                (col + 1 < width).then_some(index + 1),
                index.checked_sub(width),
                Some(index + width).filter(|&below| below < len),
            )
        } else {
            (None, None, None, None)
        };

        [left, right, up, down].into_iter().flatten()
    }

    fn cell(&self, coord: TileCoord) -> Option<(usize, usize)> {
        let row = usize::try_from(coord.y).ok()?;
        let col = usize::try_from(coord.x).ok()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(MapError::GridTooLarge {
            dimensions: (rows, cols),
            limit: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}
