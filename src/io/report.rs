//! Plain-text survey reports for the command-line tool

use std::fmt;

use crate::algorithm::connectivity::{ConnectivityEngine, Probe, should_reveal};
use crate::algorithm::region::ConnectedRegion;
use crate::algorithm::survey::survey_with_progress;
use crate::spatial::grid::{TileCoord, TileGrid};

/// Survey result for one map plus any probed tiles
#[derive(Debug, Clone)]
pub struct MapReport {
    /// Display name of the map
    pub name: String,
    /// Grid dimensions (width, height)
    pub dimensions: (usize, usize),
    /// Every marked region found
    pub regions: Vec<ConnectedRegion>,
    /// Results for explicitly probed tiles
    pub probes: Vec<Probe>,
    /// Threshold the regions were judged against
    pub reveal_threshold: usize,
}

impl MapReport {
    /// Survey a grid and probe the requested tiles
    ///
    /// `on_row` receives the number of rows surveyed so far.
    pub fn build<F>(
        name: impl Into<String>,
        engine: &ConnectivityEngine,
        grid: &TileGrid,
        probes: &[TileCoord],
        on_row: F,
    ) -> Self
    where
        F: FnMut(usize),
    {
        let regions = survey_with_progress(engine, grid, on_row);
        let probes = probes
            .iter()
            .map(|coord| engine.probe(grid, coord.x, coord.y))
            .collect();

        Self {
            name: name.into(),
            dimensions: (grid.width(), grid.height()),
            regions,
            probes,
            reveal_threshold: engine.reveal_threshold(),
        }
    }

    /// Regions at or above the reveal threshold
    pub fn treasures(&self) -> Vec<ConnectedRegion> {
        self.regions
            .iter()
            .filter(|region| should_reveal(region.count(), self.reveal_threshold))
            .cloned()
            .collect()
    }
}

impl fmt::Display for MapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let treasures = self.treasures();
        writeln!(
            f,
            "{}: {}x{} map, {} marked regions, {} treasures (threshold {})",
            self.name,
            self.dimensions.0,
            self.dimensions.1,
            self.regions.len(),
            treasures.len(),
            self.reveal_threshold
        )?;

        for (number, region) in treasures.iter().enumerate() {
            match region.bounds() {
                Some((min, max)) => writeln!(
                    f,
                    "  treasure {}: {} tiles spanning {min}..={max}",
                    number + 1,
                    region.count()
                )?,
                None => writeln!(f, "  treasure {}: empty", number + 1)?,
            }
        }

        for probe in &self.probes {
            if probe.marked {
                writeln!(
                    f,
                    "  probe {}: marked, {} connected, {}",
                    probe.coord,
                    probe.count(),
                    if probe.reveal { "reveal" } else { "hidden" }
                )?;
            } else {
                writeln!(f, "  probe {}: not marked", probe.coord)?;
            }
        }

        Ok(())
    }
}
