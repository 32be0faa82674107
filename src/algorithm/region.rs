use bitvec::prelude::*;
use std::collections::HashSet;
use std::fmt;

use crate::io::configuration::{DENSE_REGION_CELLS_PER_TILE, MIN_DENSE_REGION_CELLS};
use crate::spatial::grid::TileCoord;

#[derive(Clone, Debug)]
enum Membership {
    /// One bit per cell of the bounding box, row-major
    Dense {
        span: usize,
        rows: usize,
        bits: BitVec,
    },
    /// Sorted tiles, for bounding boxes too large or sparse for a bitset
    Sparse(Vec<TileCoord>),
}

impl Default for Membership {
    fn default() -> Self {
        Self::Sparse(Vec::new())
    }
}

/// One 4-connected region of marked tiles
///
/// Tiles are kept in discovery order for drawing. Membership tests go through
/// a bitset over the bounding box, or a sorted list when the box would need
/// far more bits than the region has tiles. Equality compares the regions as
/// sets, so two searches seeded from different members compare equal.
#[derive(Clone, Debug, Default)]
pub struct ConnectedRegion {
    tiles: Vec<TileCoord>,
    min: TileCoord,
    max: TileCoord,
    membership: Membership,
}

impl ConnectedRegion {
    /// Region with no tiles
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a region from its tiles
    ///
    /// Duplicate coordinates are kept only once. Any coordinates are
    /// accepted, however far apart.
    pub fn from_tiles(mut tiles: Vec<TileCoord>) -> Self {
        let Some(&first) = tiles.first() else {
            return Self::empty();
        };

        let (mut min, mut max) = (first, first);
        for tile in &tiles {
            min.x = min.x.min(tile.x);
            min.y = min.y.min(tile.y);
            max.x = max.x.max(tile.x);
            max.y = max.y.max(tile.y);
        }

        let budget = tiles
            .len()
            .saturating_mul(DENSE_REGION_CELLS_PER_TILE)
            .max(MIN_DENSE_REGION_CELLS);
        let dense_shape = axis_len(min.x, max.x)
            .zip(axis_len(min.y, max.y))
            .filter(|&(span, rows)| span.checked_mul(rows).is_some_and(|cells| cells <= budget));

        let membership = if let Some((span, rows)) = dense_shape {
            let mut bits = bitvec![0; span * rows];
            tiles.retain(|&tile| {
                match dense_index(min, span, rows, tile).and_then(|index| bits.get_mut(index)) {
                    Some(mut bit) if !*bit => {
                        *bit = true;
                        true
                    }
                    _ => false,
                }
            });
            Membership::Dense { span, rows, bits }
        } else {
            let mut seen = HashSet::with_capacity(tiles.len());
            tiles.retain(|&tile| seen.insert(tile));
            let mut sorted = tiles.clone();
            sorted.sort_unstable();
            Membership::Sparse(sorted)
        };

        Self {
            tiles,
            min,
            max,
            membership,
        }
    }

    /// Number of tiles in the region
    pub const fn count(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the region has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Test tile membership
    pub fn contains(&self, coord: TileCoord) -> bool {
        match &self.membership {
            Membership::Dense { span, rows, bits } => dense_index(self.min, *span, *rows, coord)
                .and_then(|index| bits.get(index).as_deref().copied())
                .unwrap_or(false),
            Membership::Sparse(sorted) => sorted.binary_search(&coord).is_ok(),
        }
    }

    /// Tiles in discovery order
    pub fn tiles(&self) -> &[TileCoord] {
        &self.tiles
    }

    /// Iterate over tiles in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, TileCoord> {
        self.tiles.iter()
    }

    /// First tile discovered, which is the query seed for engine results
    pub fn seed(&self) -> Option<TileCoord> {
        self.tiles.first().copied()
    }

    /// Inclusive (min, max) corners of the bounding box
    pub fn bounds(&self) -> Option<(TileCoord, TileCoord)> {
        (!self.is_empty()).then_some((self.min, self.max))
    }

    /// Tiles ordered by row, then column
    pub fn to_sorted_vec(&self) -> Vec<TileCoord> {
        let mut sorted = self.tiles.clone();
        sorted.sort_unstable_by_key(|tile| (tile.y, tile.x));
        sorted
    }
}

/// Number of cells between two inclusive bounds on one axis
fn axis_len(low: i32, high: i32) -> Option<usize> {
    usize::try_from(i64::from(high) - i64::from(low) + 1).ok()
}

fn dense_index(origin: TileCoord, span: usize, rows: usize, coord: TileCoord) -> Option<usize> {
    let col = usize::try_from(i64::from(coord.x) - i64::from(origin.x)).ok()?;
    let row = usize::try_from(i64::from(coord.y) - i64::from(origin.y)).ok()?;
    (col < span && row < rows).then(|| row * span + col)
}

impl PartialEq for ConnectedRegion {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.tiles.iter().all(|&tile| other.contains(tile))
    }
}

impl Eq for ConnectedRegion {}

impl<'a> IntoIterator for &'a ConnectedRegion {
    type Item = &'a TileCoord;
    type IntoIter = std::slice::Iter<'a, TileCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ConnectedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Some((min, max)) => write!(
                f,
                "ConnectedRegion({} tiles spanning {min}..={max})",
                self.count()
            ),
            None => write!(f, "ConnectedRegion(empty)"),
        }
    }
}
