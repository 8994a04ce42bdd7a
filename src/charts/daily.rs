use chrono::NaiveDate;

use super::style::{Canvas, EMERALD, LinePanel, draw_line_panel};
use super::{ChartResult, DrawableChart};
use crate::models::{DailyCompletion, Evolution};

/// Line with area fill of tasks completed per day
pub struct DailyCompletionChart<'a> {
    days: &'a [DailyCompletion],
}

impl<'a> DailyCompletionChart<'a> {
    pub fn new(evolution: &'a Evolution) -> Self {
        Self {
            days: &evolution.daily_completion,
        }
    }

    pub fn points(&self) -> Vec<(NaiveDate, f64)> {
        let mut points: Vec<(NaiveDate, f64)> = self
            .days
            .iter()
            .map(|d| (d.date, d.completed_count as f64))
            .collect();
        points.sort_by_key(|(date, _)| *date);
        points
    }
}

impl DrawableChart for DailyCompletionChart<'_> {
    fn file_name(&self) -> &'static str {
        "daily_completion.png"
    }

    fn description(&self) -> &'static str {
        "Conclusão diária de tarefas"
    }

    fn size(&self) -> (u32, u32) {
        (1200, 600)
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        draw_line_panel(
            root,
            &LinePanel {
                title: "Tarefas Concluídas por Dia (Mês Atual)",
                x_desc: "Data",
                y_desc: "Tarefas Concluídas",
                points: self.points(),
                color: EMERALD,
                label_every: 3,
                fill: true,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_points_are_sorted_by_date() {
        let evolution: Evolution = serde_json::from_value(json!({
            "monthlyEvolution": [],
            "dailyCompletion": [
                {"date": "2024-03-02", "completed_count": 4},
                {"date": "2024-03-01", "completed_count": 1}
            ],
            "priorityDistribution": []
        }))
        .unwrap();

        let points = DailyCompletionChart::new(&evolution).points();
        assert_eq!(points[0], (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 1.0));
        assert_eq!(points[1], (NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), 4.0));
    }
}
