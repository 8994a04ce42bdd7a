use super::style::{BarPanel, Canvas, draw_bar_panel, status_color};
use super::{ChartResult, DrawableChart};
use crate::models::{Overview, StatusCount, status_label};

/// Bar per task status, annotated with its count
pub struct StatusDistributionChart<'a> {
    stats: &'a [StatusCount],
}

impl<'a> StatusDistributionChart<'a> {
    pub fn new(overview: &'a Overview) -> Self {
        Self {
            stats: &overview.task_stats,
        }
    }

    pub fn panel(&self) -> BarPanel<'static> {
        BarPanel {
            title: "Distribuição de Tarefas por Status",
            x_desc: Some("Status"),
            y_desc: "Número de Tarefas",
            categories: self.stats.iter().map(|s| status_label(&s.status)).collect(),
            values: self.stats.iter().map(|s| s.count as f64).collect(),
            colors: self
                .stats
                .iter()
                .enumerate()
                .map(|(i, s)| status_color(&s.status, i))
                .collect(),
            annotation_suffix: "",
        }
    }
}

impl DrawableChart for StatusDistributionChart<'_> {
    fn file_name(&self) -> &'static str {
        "status_distribution.png"
    }

    fn description(&self) -> &'static str {
        "Distribuição por status"
    }

    fn size(&self) -> (u32, u32) {
        (1000, 600)
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        draw_bar_panel(root, &self.panel())
    }
}
