use super::style::{AZURE, BarPanel, Canvas, EMERALD, draw_bar_panel};
use super::{ChartResult, DrawableChart};
use crate::models::{MemberProductivity, Overview};

/// Side-by-side bars of tasks completed and hours worked per team member
pub struct TeamPerformanceChart<'a> {
    members: &'a [MemberProductivity],
}

impl<'a> TeamPerformanceChart<'a> {
    pub fn new(overview: &'a Overview) -> Self {
        Self {
            members: &overview.member_productivity,
        }
    }

    fn names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.user.name.clone()).collect()
    }

    pub fn tasks_panel(&self) -> BarPanel<'static> {
        BarPanel {
            title: "Tarefas Concluídas por Membro da Equipe",
            x_desc: Some("Membro da Equipe"),
            y_desc: "Tarefas Concluídas",
            categories: self.names(),
            values: self
                .members
                .iter()
                .map(|m| m.tasks_completed as f64)
                .collect(),
            colors: vec![AZURE; self.members.len()],
            annotation_suffix: "",
        }
    }

    pub fn hours_panel(&self) -> BarPanel<'static> {
        BarPanel {
            title: "Horas Trabalhadas por Membro da Equipe",
            x_desc: Some("Membro da Equipe"),
            y_desc: "Horas Trabalhadas",
            categories: self.names(),
            values: self.members.iter().map(|m| m.hours_worked).collect(),
            colors: vec![EMERALD; self.members.len()],
            annotation_suffix: "h",
        }
    }
}

impl DrawableChart for TeamPerformanceChart<'_> {
    fn file_name(&self) -> &'static str {
        "team_performance.png"
    }

    fn description(&self) -> &'static str {
        "Performance da equipe"
    }

    fn size(&self) -> (u32, u32) {
        (1500, 600)
    }

    fn has_data(&self) -> bool {
        !self.members.is_empty()
    }

    fn define_chart(&self, root: &Canvas<'_>) -> ChartResult {
        let panels = root.split_evenly((1, 2));
        draw_bar_panel(&panels[0], &self.tasks_panel())?;
        draw_bar_panel(&panels[1], &self.hours_panel())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SampleGenerator;
    use chrono::NaiveDate;

    #[test]
    fn test_panels_follow_member_order() {
        let payload = SampleGenerator::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).generate();
        let chart = TeamPerformanceChart::new(&payload.overview);
        assert!(chart.has_data());

        let tasks = chart.tasks_panel();
        assert_eq!(tasks.categories, vec!["João Silva", "Maria Santos"]);
        assert_eq!(tasks.values, vec![8.0, 7.0]);

        let hours = chart.hours_panel();
        assert_eq!(hours.values, vec![45.0, 50.0]);
        assert_eq!(hours.annotation_suffix, "h");
    }
}
