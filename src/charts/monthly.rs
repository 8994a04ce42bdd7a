use plotters::prelude::*;

use super::style::{AMBER, Canvas, EMERALD, SLATE, VIOLET, axis_max, category_label, grid_style};
use super::{ChartResult, DrawableChart};
use crate::models::{Evolution, MonthlyEvolution, TaskStatus};
use crate::utils::format_month_label;

const GROUP_BAR_WIDTH: f64 = 0.2;

/// One bar series of the grouped monthly chart
pub struct MonthlySeries {
    pub label: &'static str,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

/// Grouped bars of task counts per status for each month
pub struct MonthlyEvolutionChart<'a> {
    months: &'a [MonthlyEvolution],
}

impl<'a> MonthlyEvolutionChart<'a> {
    pub fn new(evolution: &'a Evolution) -> Self {
        Self {
            months: &evolution.monthly_evolution,
        }
    }

    pub fn month_labels(&self) -> Vec<String> {
        self.months
            .iter()
            .map(|m| format_month_label(&m.month))
            .collect()
    }

    /// Series in legend order: completed, in progress, to do, in review
    pub fn series(&self) -> Vec<MonthlySeries> {
        vec![
            MonthlySeries {
                label: TaskStatus::Completed.label(),
                color: EMERALD,
                values: self.column(|m| m.completed_tasks),
            },
            MonthlySeries {
                label: TaskStatus::InProgress.label(),
                color: AMBER,
                values: self.column(|m| m.in_progress_tasks),
            },
            MonthlySeries {
                label: TaskStatus::Todo.label(),
                color: SLATE,
                values: self.column(|m| m.todo_tasks),
            },
            MonthlySeries {
                label: TaskStatus::InReview.label(),
                color: VIOLET,
                values: self.column(|m| m.review_tasks),
            },
        ]
    }

    fn column<F: Fn(&MonthlyEvolution) -> u64>(&self, field: F) -> Vec<f64> {
        self.months.iter().map(|m| field(m) as f64).collect()
    }
}

impl DrawableChart for MonthlyEvolutionChart<'_> {
    fn file_name(&self) -> &'static str {
        "monthly_evolution.png"
    }

    fn description(&self) -> &'static str {
        "Evolução mensal de tarefas"
    }

    fn size(&self) -> (u32, u32) {
        (1200, 600)
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        let labels = self.month_labels();
        let series = self.series();
        let count = labels.len().max(1);
        let y_max = axis_max(series.iter().flat_map(|s| s.values.iter().copied()));

        let mut chart = ChartBuilder::on(root)
            .caption("Evolução de Tarefas por Mês", ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), 0f64..y_max)?;

        let x_formatter = |x: &f64| category_label(&labels, *x);
        chart
            .configure_mesh()
            .x_labels(count)
            .x_label_formatter(&x_formatter)
            .bold_line_style(&grid_style())
            .light_line_style(&WHITE.mix(0.0))
            .x_desc("Mês")
            .y_desc("Número de Tarefas")
            .label_style(("sans-serif", 14))
            .draw()?;

        let group_count = series.len() as f64;
        for (slot, s) in series.iter().enumerate() {
            // Offsets -1.5w, -0.5w, +0.5w, +1.5w around the month tick
            let offset = (slot as f64 - (group_count - 1.0) / 2.0) * GROUP_BAR_WIDTH;
            let color = s.color;
            chart
                .draw_series(s.values.iter().enumerate().map(|(i, value)| {
                    let center = i as f64 + offset;
                    Rectangle::new(
                        [
                            (center - GROUP_BAR_WIDTH / 2.0, 0.0),
                            (center + GROUP_BAR_WIDTH / 2.0, *value),
                        ],
                        color.filled(),
                    )
                }))?
                .label(s.label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(("sans-serif", 14))
            .draw()?;

        Ok(())
    }
}
