//! Collision layer loading from exported tile-code lists
//!
//! Map editors export the collision layer as one flat, row-major list of
//! tile codes, usually wrapped as `const collisions = [0, 1025, ...]`. The
//! loader accepts that form or bare numbers separated by commas/whitespace,
//! and folds the list into rows of a known width.

use std::path::Path;

use crate::io::error::{MapError, Result};
use crate::spatial::grid::TileGrid;

/// Extract tile codes from collision data text
///
/// Line comments (`//`) are ignored. When the text contains a bracketed
/// list only its contents are read, so surrounding declarations are
/// skipped.
///
/// # Errors
///
/// Returns an error naming the first entry that is not an `i32`
pub fn parse_tile_codes(text: &str, path: &Path) -> Result<Vec<i32>> {
    let stripped: String = text
        .lines()
        .map(|line| line.split("//").next().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    let body = match (stripped.find('['), stripped.rfind(']')) {
        (Some(open), Some(close)) if open < close => {
            stripped.get(open + 1..close).unwrap_or_default()
        }
        _ => stripped.as_str(),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(entry, token)| {
            token
                .parse::<i32>()
                .ok()
                .ok_or_else(|| MapError::CollisionParse {
                    path: path.to_path_buf(),
                    entry,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Load a collision grid from a file of tile codes
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file contains an entry that is not a tile code
/// - The number of codes is not a multiple of `columns`
pub fn load_collision_grid(path: &Path, columns: usize) -> Result<TileGrid> {
    let text = std::fs::read_to_string(path).map_err(|source| MapError::FileSystem {
        path: path.to_path_buf(),
        operation: "read collision data",
        source,
    })?;

    let codes = parse_tile_codes(&text, path)?;
    TileGrid::from_flat(codes, columns)
}
