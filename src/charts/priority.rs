use super::style::{Canvas, PieSlice, draw_pie, priority_color};
use super::{ChartResult, DrawableChart};
use crate::models::{Evolution, PriorityCount, priority_label};

/// Pie of task counts per priority
pub struct PriorityDistributionChart<'a> {
    priorities: &'a [PriorityCount],
}

impl<'a> PriorityDistributionChart<'a> {
    pub fn new(evolution: &'a Evolution) -> Self {
        Self {
            priorities: &evolution.priority_distribution,
        }
    }

    pub fn slices(&self) -> Vec<PieSlice> {
        self.priorities
            .iter()
            .enumerate()
            .map(|(i, p)| PieSlice {
                label: priority_label(&p.priority),
                value: p.count as f64,
                color: priority_color(&p.priority, i),
            })
            .collect()
    }
}

impl DrawableChart for PriorityDistributionChart<'_> {
    fn file_name(&self) -> &'static str {
        "priority_distribution.png"
    }

    fn description(&self) -> &'static str {
        "Distribuição por prioridade"
    }

    fn size(&self) -> (u32, u32) {
        (1000, 800)
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        draw_pie(root, "Distribuição de Tarefas por Prioridade", &self.slices())
    }
}
