//! Survey progress: a row bar for the current map and a map counter for batches

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Progress display for a sequential batch of map surveys
///
/// Maps are surveyed one at a time, so a single row bar is reused for each
/// map. Batches of more than one map also get a counter bar that tracks the
/// number of treasures found so far.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    map_bar: Option<ProgressBar>,
    row_bar: Option<ProgressBar>,
    treasures_found: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:30.yellow/blue}] {pos}/{len} rows {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static MAP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.yellow/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a manager with no bars attached yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            map_bar: None,
            row_bar: None,
            treasures_found: 0,
        }
    }

    /// Attach bars for a batch of `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        if map_count == 0 {
            return;
        }

        if map_count > 1 {
            let map_bar = ProgressBar::new(map_count as u64);
            map_bar.set_style(MAP_STYLE.clone());
            self.map_bar = Some(self.multi_progress.add(map_bar));
        }

        let row_bar = ProgressBar::new(0);
        row_bar.set_style(ROW_STYLE.clone());
        self.row_bar = Some(self.multi_progress.add(row_bar));
    }

    /// Point the row bar at a new map with `rows` rows to survey
    pub fn start_file(&self, path: &Path, rows: usize) {
        if let Some(ref bar) = self.row_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.reset();
            bar.set_length(rows as u64);
            bar.set_prefix(name.to_string());
            bar.set_message("");
        }
    }

    /// Report the number of rows surveyed so far on the current map
    pub fn update_rows(&self, rows_done: usize) {
        if let Some(ref bar) = self.row_bar {
            bar.set_position(rows_done as u64);
        }
    }

    /// Close out the current map with its treasure count
    pub fn complete_file(&mut self, treasures: usize) {
        self.treasures_found += treasures;

        if let Some(ref bar) = self.row_bar {
            bar.set_position(bar.length().unwrap_or(0));
            bar.set_message(format!("✓ {treasures} treasures"));
        }
        if let Some(ref bar) = self.map_bar {
            bar.inc(1);
            bar.set_message(format!("{} treasures", self.treasures_found));
        }
    }

    /// Total treasures reported through `complete_file`
    pub const fn treasures_found(&self) -> usize {
        self.treasures_found
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.map_bar {
            bar.finish_with_message(format!("{} treasures in all maps", self.treasures_found));
        }
        let _ = self.multi_progress.clear();
    }
}
