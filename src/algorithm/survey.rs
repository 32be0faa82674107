use bitvec::prelude::*;

use crate::algorithm::connectivity::{ConnectivityEngine, flood_from};
use crate::algorithm::region::ConnectedRegion;
use crate::spatial::grid::TileGrid;

/// Every maximal marked region of the grid
///
/// Regions are ordered by the row-major position of their first tile. All
/// fills share one visited bitset, so the pass touches each tile a bounded
/// number of times.
pub fn survey(engine: &ConnectivityEngine, grid: &TileGrid) -> Vec<ConnectedRegion> {
    survey_with_progress(engine, grid, |_| {})
}

/// Survey the grid, reporting the number of completed rows after each row
pub fn survey_with_progress<F>(
    engine: &ConnectivityEngine,
    grid: &TileGrid,
    mut on_row: F,
) -> Vec<ConnectedRegion>
where
    F: FnMut(usize),
{
    let sentinel = engine.sentinel();
    let width = grid.width();
    let mut visited = bitvec![0; grid.len()];
    let mut regions = Vec::new();

    for row in 0..grid.height() {
        for index in row * width..(row + 1) * width {
            if grid.get_index(index) != Some(sentinel) {
                continue;
            }
            if visited.get(index).as_deref() == Some(&true) {
                continue;
            }
            let tiles = flood_from(grid, sentinel, index, &mut visited);
            regions.push(ConnectedRegion::from_tiles(tiles));
        }
        on_row(row + 1);
    }

    regions
}

/// Regions large enough to reveal under the engine's threshold
pub fn treasures(engine: &ConnectivityEngine, grid: &TileGrid) -> Vec<ConnectedRegion> {
    survey(engine, grid)
        .into_iter()
        .filter(|region| engine.should_reveal(region.count()))
        .collect()
}
