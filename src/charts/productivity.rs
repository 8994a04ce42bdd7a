use plotters::prelude::*;
use plotters::style::FontStyle;

use super::style::{
    AMBER, AZURE, BarPanel, CRIMSON, Canvas, EMERALD, LinePanel, MIST, PieSlice, draw_bar_panel,
    draw_line_panel, draw_pie,
};
use super::{ChartResult, DrawableChart};
use crate::models::{Overview, Productivity};
use crate::utils::format_percent;

/// 2x2 grid: velocity, estimated vs actual hours, estimate accuracy, key metrics
pub struct ProductivityMetricsChart<'a> {
    overview: &'a Overview,
    productivity: &'a Productivity,
}

impl<'a> ProductivityMetricsChart<'a> {
    pub fn new(overview: &'a Overview, productivity: &'a Productivity) -> Self {
        Self {
            overview,
            productivity,
        }
    }

    pub fn velocity_panel(&self) -> LinePanel<'static> {
        let mut points: Vec<_> = self
            .productivity
            .velocity
            .iter()
            .map(|v| (v.date, v.tasks_completed as f64))
            .collect();
        points.sort_by_key(|(date, _)| *date);

        LinePanel {
            title: "Velocidade (Tarefas Concluídas por Dia)",
            x_desc: "Data",
            y_desc: "Tarefas Concluídas",
            points,
            color: AZURE,
            label_every: 1,
            fill: false,
        }
    }

    pub fn hours_panel(&self) -> BarPanel<'static> {
        BarPanel {
            title: "Comparação de Horas Estimadas vs Reais",
            x_desc: None,
            y_desc: "Horas",
            categories: vec!["Estimadas".to_string(), "Reais".to_string()],
            values: vec![
                self.overview.hours_stats.estimated,
                self.overview.hours_stats.actual,
            ],
            colors: vec![AMBER, EMERALD],
            annotation_suffix: "h",
        }
    }

    /// Accuracy slice against its complement, clamped to 0..=100
    pub fn accuracy_slices(&self) -> Vec<PieSlice> {
        let accuracy = &self.productivity.time_accuracy;
        let difference = accuracy.accuracy_percentage.clamp(0.0, 100.0);
        vec![
            PieSlice {
                label: "Diferença".to_string(),
                value: difference,
                color: if accuracy.is_overestimated {
                    CRIMSON
                } else {
                    EMERALD
                },
            },
            PieSlice {
                label: "Precisão".to_string(),
                value: 100.0 - difference,
                color: MIST,
            },
        ]
    }

    pub fn key_metrics(&self) -> Vec<String> {
        vec![
            format!("Tarefas Concluídas: {}", self.overview.completed_this_month),
            format!("Tarefas em Atraso: {}", self.overview.overdue_tasks),
            format!("Vencem esta Semana: {}", self.overview.due_this_week),
            format!(
                "Taxa de Conclusão: {}",
                format_percent(self.overview.completion_rate())
            ),
        ]
    }

    fn draw_key_metrics(&self, area: &Canvas<'_>) -> ChartResult {
        let area = area.titled("Métricas Principais", ("sans-serif", 22))?;
        let (width, height) = area.dim_in_pixel();
        let x = (width as f64 * 0.1) as i32;

        for (i, metric) in self.key_metrics().into_iter().enumerate() {
            let y = (height as f64 * (0.2 + 0.2 * i as f64)) as i32;
            area.draw(&Text::new(
                metric,
                (x, y),
                ("sans-serif", 20).into_font().style(FontStyle::Bold),
            ))?;
        }
        Ok(())
    }
}

impl DrawableChart for ProductivityMetricsChart<'_> {
    fn file_name(&self) -> &'static str {
        "productivity_metrics.png"
    }

    fn description(&self) -> &'static str {
        "Métricas de produtividade"
    }

    fn size(&self) -> (u32, u32) {
        (1500, 1000)
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        let panels = root.split_evenly((2, 2));

        draw_line_panel(&panels[0], &self.velocity_panel())?;
        draw_bar_panel(&panels[1], &self.hours_panel())?;
        draw_pie(
            &panels[2],
            "Precisão das Estimativas de Tempo",
            &self.accuracy_slices(),
        )?;
        self.draw_key_metrics(&panels[3])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SampleGenerator;
    use chrono::NaiveDate;

    fn sample() -> crate::models::Payload {
        SampleGenerator::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).generate()
    }

    #[test]
    fn test_key_metrics_text() {
        let payload = sample();
        let chart = ProductivityMetricsChart::new(&payload.overview, &payload.productivity);

        assert_eq!(
            chart.key_metrics(),
            vec![
                "Tarefas Concluídas: 15",
                "Tarefas em Atraso: 3",
                "Vencem esta Semana: 7",
                "Taxa de Conclusão: 22.1%",
            ]
        );
    }

    #[test]
    fn test_accuracy_slices() {
        let mut payload = sample();
        let slices = ProductivityMetricsChart::new(&payload.overview, &payload.productivity)
            .accuracy_slices();
        assert_eq!(slices[0].label, "Diferença");
        assert!((slices[0].value - 15.3).abs() < 1e-9);
        assert!((slices[1].value - 84.7).abs() < 1e-9);
        assert_eq!((slices[0].color.0, slices[0].color.1, slices[0].color.2), (0xEF, 0x44, 0x44));

        payload.productivity.time_accuracy.is_overestimated = false;
        payload.productivity.time_accuracy.accuracy_percentage = 140.0;
        let slices = ProductivityMetricsChart::new(&payload.overview, &payload.productivity)
            .accuracy_slices();
        assert_eq!((slices[0].color.0, slices[0].color.1, slices[0].color.2), (0x10, 0xB9, 0x81));
        assert_eq!(slices[1].value, 0.0);
    }

    #[test]
    fn test_hours_panel() {
        let payload = sample();
        let panel =
            ProductivityMetricsChart::new(&payload.overview, &payload.productivity).hours_panel();
        assert_eq!(panel.categories, vec!["Estimadas", "Reais"]);
        assert_eq!(panel.values, vec![120.0, 95.0]);
        assert_eq!(panel.annotation_suffix, "h");
    }

    #[test]
    fn test_velocity_points() {
        let payload = sample();
        let panel =
            ProductivityMetricsChart::new(&payload.overview, &payload.productivity).velocity_panel();
        let values: Vec<f64> = panel.points.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![2.0, 3.0, 1.0, 4.0, 2.0]);
    }
}
