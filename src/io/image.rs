//! PNG overlay export marking collision tiles and revealing regions

use bitvec::prelude::*;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::region::ConnectedRegion;
use crate::io::configuration::{HIGHLIGHT_COLOR, MARKED_COLOR};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::grid::{TileCoord, TileGrid};

/// Render the grid as an RGBA overlay
///
/// Each tile becomes a `cell_size` square. Tiles in `highlighted` regions use
/// the highlight color, other `sentinel` tiles the marked color, and all
/// remaining tiles stay transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - `cell_size` is zero
/// - The image would not fit in `u32` pixel dimensions
pub fn render_overlay(
    grid: &TileGrid,
    sentinel: i32,
    highlighted: &[ConnectedRegion],
    cell_size: u32,
) -> Result<RgbaImage> {
    if grid.is_empty() {
        return Err(MapError::InvalidParameter {
            parameter: "grid",
            value: format!("{}x{}", grid.width(), grid.height()),
            reason: "cannot render an empty grid".to_string(),
        });
    }
    if cell_size == 0 {
        return Err(invalid_parameter("cell_size", &cell_size, &"must be positive"));
    }

    let scaled = |tiles: usize| {
        u32::try_from(tiles)
            .ok()
            .and_then(|tiles| tiles.checked_mul(cell_size))
    };
    let (Some(width), Some(height)) = (scaled(grid.width()), scaled(grid.height())) else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"overlay dimensions overflow",
        ));
    };

    let mut lit = bitvec![0; grid.len()];
    for tile in highlighted.iter().flat_map(ConnectedRegion::iter) {
        if let Some(index) = grid.index_of(*tile) {
            lit.set(index, true);
        }
    }

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let coord = TileCoord::new((px / cell_size) as i32, (py / cell_size) as i32);
        let Some(index) = grid.index_of(coord) else {
            return Rgba([0, 0, 0, 0]);
        };

        if lit.get(index).as_deref() == Some(&true) {
            Rgba(HIGHLIGHT_COLOR)
        } else if grid.get_index(index) == Some(sentinel) {
            Rgba(MARKED_COLOR)
        } else {
            Rgba([0, 0, 0, 0])
        }
    }))
}

/// Render the overlay and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_overlay`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_overlay_png(
    grid: &TileGrid,
    sentinel: i32,
    highlighted: &[ConnectedRegion],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_overlay(grid, sentinel, highlighted, cell_size)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| MapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
