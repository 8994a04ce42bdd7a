use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Payload, status_label};
use crate::utils::{format_hours, format_report_timestamp};

pub const REPORT_FILE_NAME: &str = "insights_report.md";

/// Charts listed at the end of the report, in drawing order
const GENERATED_CHARTS: [(&str, &str); 6] = [
    ("monthly_evolution.png", "Evolução mensal de tarefas"),
    ("daily_completion.png", "Conclusão diária de tarefas"),
    ("priority_distribution.png", "Distribuição por prioridade"),
    ("status_distribution.png", "Distribuição por status"),
    ("productivity_metrics.png", "Métricas de produtividade"),
    ("team_performance.png", "Performance da equipe"),
];

/// Render the markdown insights report for `payload` as of `now`.
///
/// Only the "Data de Análise" line depends on `now`.
pub fn render_report(payload: &Payload, now: NaiveDateTime) -> String {
    let overview = &payload.overview;
    let accuracy = &payload.productivity.time_accuracy;

    let mut report = String::new();
    report.push('\n');
    report.push_str("# Relatório de Análise de Evolução de Tarefas - Tareffy\n\n");

    report.push_str("## Resumo Executivo\n");
    report.push_str(&format!(
        "Data de Análise: {}\n\n",
        format_report_timestamp(&now)
    ));

    report.push_str("## Métricas Principais\n");
    report.push_str(&format!(
        "- **Tarefas Concluídas este Mês**: {}\n",
        overview.completed_this_month
    ));
    report.push_str(&format!(
        "- **Tarefas em Atraso**: {}\n",
        overview.overdue_tasks
    ));
    report.push_str(&format!(
        "- **Tarefas que Vencem esta Semana**: {}\n",
        overview.due_this_week
    ));
    report.push_str(&format!(
        "- **Horas Estimadas**: {}h\n",
        format_hours(overview.hours_stats.estimated)
    ));
    report.push_str(&format!(
        "- **Horas Reais**: {}h\n",
        format_hours(overview.hours_stats.actual)
    ));
    report.push_str(&format!(
        "- **Taxa de Conclusão**: {:.1}%\n\n",
        overview.completion_rate()
    ));

    report.push_str("## Análise de Produtividade\n");
    report.push_str(&format!(
        "- **Precisão das Estimativas**: {:.1}%\n",
        accuracy.accuracy_percentage
    ));
    report.push_str(&format!(
        "- **Status das Estimativas**: {}\n\n",
        if accuracy.is_overestimated {
            "Superestimadas"
        } else {
            "Subestimadas"
        }
    ));

    report.push_str("## Distribuição por Status\n");
    for stat in &overview.task_stats {
        report.push_str(&format!(
            "- **{}**: {} tarefas\n",
            status_label(&stat.status),
            stat.count
        ));
    }
    report.push('\n');

    report.push_str("## Performance da Equipe\n");
    for member in &overview.member_productivity {
        report.push_str(&format!(
            "- **{}**: {} tarefas concluídas, {}h trabalhadas\n",
            member.user.name,
            member.tasks_completed,
            format_hours(member.hours_worked)
        ));
    }
    report.push('\n');

    report.push_str("## Recomendações\n");
    report.push_str(&format!(
        "1. **Foco em Tarefas em Atraso**: {} tarefas estão em atraso. Priorize estas tarefas.\n",
        overview.overdue_tasks
    ));
    report.push_str(&format!(
        "2. **Melhoria de Estimativas**: A precisão das estimativas é de {:.1}%. Considere ajustar o processo de estimativa.\n",
        accuracy.accuracy_percentage
    ));
    report.push_str(&format!(
        "3. **Monitoramento Semanal**: {} tarefas vencem esta semana. Mantenha foco nestas entregas.\n\n",
        overview.due_this_week
    ));

    // Fixed list; team_performance.png is listed even when no file was drawn
    report.push_str("## Gráficos Gerados\n");
    for (file_name, description) in GENERATED_CHARTS {
        report.push_str(&format!("- {file_name}: {description}\n"));
    }
    report.push('\n');

    report.push_str("---\n");
    report.push_str("*Relatório gerado automaticamente pelo Task Evolution Analyzer*\n");

    report
}

/// Write the report into `output_dir`, replacing any previous one
pub fn write_report(payload: &Payload, output_dir: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);
    fs::write(&path, render_report(payload, now))
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    info!("Insights report written to {}", path.display());
    Ok(path)
}
