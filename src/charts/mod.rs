// Chart renderers: one PNG per dashboard view
pub mod daily;
pub mod monthly;
pub mod priority;
pub mod productivity;
pub mod status;
pub mod style;
pub mod team;

pub use daily::DailyCompletionChart;
pub use monthly::MonthlyEvolutionChart;
pub use priority::PriorityDistributionChart;
pub use productivity::ProductivityMetricsChart;
pub use status::StatusDistributionChart;
pub use team::TeamPerformanceChart;

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::Payload;
use style::Canvas;

pub type ChartResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// A chart that knows its output file and how to draw itself on a bitmap
pub trait DrawableChart {
    fn file_name(&self) -> &'static str;

    /// Human-readable description used in run summaries
    fn description(&self) -> &'static str;

    /// Canvas size in pixels
    fn size(&self) -> (u32, u32);

    /// Charts without data produce no file
    fn has_data(&self) -> bool {
        true
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult;

    fn draw(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(self.file_name());
        {
            let root = BitMapBackend::new(&path, self.size()).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Failed to prepare canvas for {}", path.display()))?;
            self.define_chart(&root)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Failed to draw {}", self.file_name()))?;
            root.present()
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        info!("saved chart to {}", path.display());
        Ok(path)
    }
}

/// A file written by a renderer
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub file_name: &'static str,
    pub description: &'static str,
    pub path: PathBuf,
}

/// The fixed set of renderers, in drawing order
pub fn all_charts(payload: &Payload) -> Vec<Box<dyn DrawableChart + '_>> {
    vec![
        Box::new(MonthlyEvolutionChart::new(&payload.evolution)),
        Box::new(DailyCompletionChart::new(&payload.evolution)),
        Box::new(PriorityDistributionChart::new(&payload.evolution)),
        Box::new(StatusDistributionChart::new(&payload.overview)),
        Box::new(ProductivityMetricsChart::new(&payload.overview, &payload.productivity)),
        Box::new(TeamPerformanceChart::new(&payload.overview)),
    ]
}

/// Create the output directory once, then draw every chart that has data
pub fn render_all(payload: &Payload, output_dir: &Path) -> Result<Vec<ChartArtifact>> {
    render_charts(all_charts(payload), output_dir)
}

pub fn render_charts(
    charts: Vec<Box<dyn DrawableChart + '_>>,
    output_dir: &Path,
) -> Result<Vec<ChartArtifact>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut artifacts = Vec::new();
    for chart in charts {
        if !chart.has_data() {
            debug!("skipping {}: no data", chart.file_name());
            continue;
        }
        let path = chart.draw(output_dir)?;
        artifacts.push(ChartArtifact {
            file_name: chart.file_name(),
            description: chart.description(),
            path,
        });
    }

    Ok(artifacts)
}
