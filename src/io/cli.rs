//! Command-line interface for surveying collision maps for treasure regions

use crate::algorithm::connectivity::ConnectivityEngine;
use crate::io::collision::load_collision_grid;
use crate::io::configuration::{
    COLLISION_EXTENSIONS, DEFAULT_MAP_COLUMNS, DEFAULT_OVERLAY_CELL_SIZE,
    DEFAULT_REVEAL_THRESHOLD, DEFAULT_SENTINEL, EngineConfig, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_overlay_png;
use crate::io::progress::ProgressManager;
use crate::io::report::MapReport;
use crate::spatial::grid::TileCoord;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "treasuregrid")]
#[command(
    author,
    version,
    about = "Find connected collision regions that reveal treasure"
)]
/// Command-line arguments for the map survey tool
pub struct Cli {
    /// Collision data file or directory of them
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of tile columns in the map
    #[arg(short, long, default_value_t = DEFAULT_MAP_COLUMNS)]
    pub columns: usize,

    /// Tile code treated as collision
    #[arg(short, long, default_value_t = DEFAULT_SENTINEL, allow_negative_numbers = true)]
    pub sentinel: i32,

    /// Minimum connected tiles for a reveal
    #[arg(short, long, default_value_t = DEFAULT_REVEAL_THRESHOLD)]
    pub threshold: usize,

    /// Tile to query, as X,Y (repeatable)
    #[arg(
        short,
        long,
        value_name = "X,Y",
        value_parser = parse_coordinate,
        allow_hyphen_values = true
    )]
    pub probe: Vec<TileCoord>,

    /// Write a PNG overlay of the revealing regions next to each input
    #[arg(short, long)]
    pub overlay: bool,

    /// Pixel size of one tile in the overlay
    #[arg(long, default_value_t = DEFAULT_OVERLAY_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration selected by the flags
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.sentinel, self.threshold)
    }
}

/// Parse an `X,Y` tile coordinate
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated integers
pub fn parse_coordinate(text: &str) -> std::result::Result<TileCoord, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but found '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok(TileCoord::new(parse(x)?, parse(y)?))
}

/// Orchestrates batch surveys of collision files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    engine: ConnectivityEngine,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let engine = ConnectivityEngine::new(cli.engine_config());

        Self {
            cli,
            engine,
            progress_manager,
        }
    }

    /// Survey every target file and print the reports
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading or overlay export fails
    pub fn process(&mut self) -> Result<()> {
        let reports = self.survey_all()?;

        // Allow print for the survey reports, which are the tool's output
        #[allow(clippy::print_stdout)]
        for report in &reports {
            print!("{report}");
        }

        Ok(())
    }

    /// Survey every target file without printing
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading or overlay export fails
    pub fn survey_all(&mut self) -> Result<Vec<MapReport>> {
        let files = self.collect_files()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && Self::is_collision_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a collision data file or directory",
            ))
        }
    }

    fn is_collision_file(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| COLLISION_EXTENSIONS.contains(&ext))
    }

    fn process_file(&mut self, input_path: &Path) -> Result<MapReport> {
        let grid = load_collision_grid(input_path, self.cli.columns)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path, grid.height());
        }

        let name = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let progress = self.progress_manager.as_ref();
        let report = MapReport::build(name, &self.engine, &grid, &self.cli.probe, |rows| {
            if let Some(pm) = progress {
                pm.update_rows(rows);
            }
        });

        if self.cli.overlay {
            export_overlay_png(
                &grid,
                self.engine.sentinel(),
                &report.treasures(),
                self.cli.cell_size,
                &Self::get_overlay_path(input_path),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(report.treasures().len());
        }

        Ok(report)
    }

    /// Overlay path for an input: `<stem>_treasures.png` beside it
    pub fn get_overlay_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let overlay_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(overlay_name)
        } else {
            PathBuf::from(overlay_name)
        }
    }
}
