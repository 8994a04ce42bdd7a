// task-analyzer: dashboard charts and insights report for a Tareffy project
use chrono::Local;
use clap::Parser;
use tracing::{Level, info};

use task_analyzer::charts;
use task_analyzer::cli::Cli;
use task_analyzer::config::Config;
use task_analyzer::output::{OutputFormat, RunSummary};
use task_analyzer::report;
use task_analyzer::source::{self, DashboardClient, SampleGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };
    let settings = cli.resolve(&config);

    info!("Starting task evolution analysis for project {}", settings.project_id);

    let client = DashboardClient::new(&settings.api_url, &settings.project_id)
        .with_token(settings.token.clone())
        .with_timeout(settings.timeout)
        .with_months(settings.months);
    let generator = SampleGenerator::new(Local::now().date_naive())
        .with_seed(settings.seed)
        .with_months(settings.sample_months);

    let (payload, origin) = source::load_payload(settings.use_sample, &client, &generator).await;
    info!("Using {}", origin.describe());

    let artifacts = charts::render_all(&payload, &settings.output_dir)?;
    let report_path =
        report::write_report(&payload, &settings.output_dir, Local::now().naive_local())?;

    let summary = RunSummary::new(
        &settings.project_id,
        origin,
        &settings.output_dir,
        &artifacts,
        &report_path,
    );

    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", summary.to_table());
    }

    Ok(())
}
