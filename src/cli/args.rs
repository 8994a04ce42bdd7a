use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "task-analyzer")]
#[command(about = "Task evolution analyzer: dashboard charts and insights report")]
#[command(version)]
pub struct Cli {
    /// API base URL [default: http://localhost:3001/api]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Project ID to analyze
    #[arg(long, required = true)]
    pub project_id: String,

    /// Access token for API authentication
    #[arg(long)]
    pub token: Option<String>,

    /// Use sample data instead of the API
    #[arg(long)]
    pub sample: bool,

    /// Directory for charts and the report [default: output]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Months of history to request (and to generate in sample mode)
    #[arg(long)]
    pub months: Option<u32>,

    /// Seed for reproducible sample data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after applying CLI overrides on top of the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub api_url: String,
    pub project_id: String,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
    pub use_sample: bool,
    pub output_dir: PathBuf,
    /// Only set when requested explicitly; the API picks its own window otherwise
    pub months: Option<u32>,
    pub sample_months: u32,
    pub seed: Option<u64>,
}

impl Cli {
    pub fn resolve(&self, config: &Config) -> RunSettings {
        RunSettings {
            api_url: self
                .api_url
                .clone()
                .unwrap_or_else(|| config.api.base_url.clone()),
            project_id: self.project_id.clone(),
            token: self.token.clone().or_else(|| config.api.token.clone()),
            timeout: config.request_timeout(),
            use_sample: self.sample,
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.directory)),
            months: self.months,
            sample_months: self.months.unwrap_or(config.sample.months),
            seed: self.seed.or(config.sample.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_project_id_is_a_usage_error() {
        let err = Cli::try_parse_from(["task-analyzer", "--sample"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_minimal_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["task-analyzer", "--project-id", "p1"]).unwrap();
        let settings = cli.resolve(&Config::default());

        assert_eq!(settings.api_url, "http://localhost:3001/api");
        assert_eq!(settings.project_id, "p1");
        assert!(settings.token.is_none());
        assert!(!settings.use_sample);
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert_eq!(settings.months, None);
        assert_eq!(settings.sample_months, 6);
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        config.api.base_url = "https://from-config/api".to_string();
        config.api.token = Some("config-token".to_string());
        config.sample.seed = Some(1);

        let cli = Cli::try_parse_from([
            "task-analyzer",
            "--project-id",
            "p1",
            "--api-url",
            "https://from-cli/api",
            "--token",
            "cli-token",
            "--seed",
            "5",
            "--months",
            "3",
            "--output-dir",
            "charts",
            "--sample",
        ])
        .unwrap();
        let settings = cli.resolve(&config);

        assert_eq!(settings.api_url, "https://from-cli/api");
        assert_eq!(settings.token.as_deref(), Some("cli-token"));
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.months, Some(3));
        assert_eq!(settings.sample_months, 3);
        assert_eq!(settings.output_dir, PathBuf::from("charts"));
        assert!(settings.use_sample);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let mut config = Config::default();
        config.api.token = Some("config-token".to_string());
        config.output.directory = "reports".to_string();

        let cli = Cli::try_parse_from(["task-analyzer", "--project-id", "p1"]).unwrap();
        let settings = cli.resolve(&config);

        assert_eq!(settings.token.as_deref(), Some("config-token"));
        assert_eq!(settings.output_dir, PathBuf::from("reports"));
    }
}
