use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

use crate::charts::ChartArtifact;
use crate::source::DataOrigin;

/// Trait for items that can be displayed as tables or JSON
pub trait OutputFormat {
    fn to_table(&self) -> String;
    fn to_json(&self) -> Result<String, serde_json::Error>;
}

/// Row for the generated-artifacts table
#[derive(Tabled, Serialize, Debug, Clone)]
pub struct ArtifactRow {
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(skip)]
    pub path: PathBuf,
}

impl ArtifactRow {
    pub fn from_chart(artifact: &ChartArtifact) -> Self {
        Self {
            file: artifact.file_name.to_string(),
            description: artifact.description.to_string(),
            path: artifact.path.clone(),
        }
    }

    pub fn report(path: &Path) -> Self {
        Self {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            description: "Relatório de insights".to_string(),
            path: path.to_path_buf(),
        }
    }
}

/// What a single analyzer run produced
#[derive(Serialize, Debug, Clone)]
pub struct RunSummary {
    pub project_id: String,
    pub origin: DataOrigin,
    pub output_dir: PathBuf,
    pub artifacts: Vec<ArtifactRow>,
}

impl RunSummary {
    pub fn new(
        project_id: &str,
        origin: DataOrigin,
        output_dir: &Path,
        charts: &[ChartArtifact],
        report: &Path,
    ) -> Self {
        let mut artifacts: Vec<ArtifactRow> = charts.iter().map(ArtifactRow::from_chart).collect();
        artifacts.push(ArtifactRow::report(report));

        Self {
            project_id: project_id.to_string(),
            origin,
            output_dir: output_dir.to_path_buf(),
            artifacts,
        }
    }
}

impl OutputFormat for RunSummary {
    fn to_table(&self) -> String {
        let table = Table::new(self.artifacts.clone()).to_string();

        format!(
            "Analysis complete for project {} ({})\n{}\nCheck the '{}' directory for charts and reports.",
            self.project_id,
            self.origin.describe(),
            table,
            self.output_dir.display()
        )
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        let charts = vec![ChartArtifact {
            file_name: "status_distribution.png",
            description: "Distribuição por status",
            path: PathBuf::from("output/status_distribution.png"),
        }];
        RunSummary::new(
            "p1",
            DataOrigin::SampleFallback,
            Path::new("output"),
            &charts,
            Path::new("output/insights_report.md"),
        )
    }

    #[test]
    fn test_summary_lists_report_last() {
        let summary = summary();
        assert_eq!(summary.artifacts.len(), 2);
        assert_eq!(summary.artifacts[1].file, "insights_report.md");
    }

    #[test]
    fn test_table_output() {
        let table = summary().to_table();
        assert!(table.contains("status_distribution.png"));
        assert!(table.contains("insights_report.md"));
        assert!(table.contains("sample data (API unavailable)"));
        assert!(table.contains("File"));
    }

    #[test]
    fn test_json_output() {
        let json = summary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["origin"], "sample_fallback");
        assert_eq!(value["project_id"], "p1");
        assert_eq!(value["artifacts"][0]["path"], "output/status_distribution.png");
    }
}
