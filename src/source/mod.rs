// Data source module: live dashboard API with sample-data fallback
pub mod api;
pub mod sample;

pub use api::{DEFAULT_API_URL, DashboardClient};
pub use sample::SampleGenerator;

use serde::Serialize;
use tracing::warn;

use crate::models::Payload;

/// Where the analysed payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Api,
    Sample,
    SampleFallback,
}

impl DataOrigin {
    pub fn describe(&self) -> &'static str {
        match self {
            DataOrigin::Api => "dashboard API",
            DataOrigin::Sample => "sample data",
            DataOrigin::SampleFallback => "sample data (API unavailable)",
        }
    }
}

/// Fetch from the API, substituting generated sample data for the whole
/// payload when any of the three requests fails.
pub async fn fetch_with_fallback(
    client: &DashboardClient,
    generator: &SampleGenerator,
) -> (Payload, DataOrigin) {
    match client.fetch_payload().await {
        Ok(payload) => (payload, DataOrigin::Api),
        Err(e) => {
            warn!("Error fetching data from API: {e:#}");
            (generator.generate(), DataOrigin::SampleFallback)
        }
    }
}

/// Pick the data source: sample mode skips the network entirely
pub async fn load_payload(
    use_sample: bool,
    client: &DashboardClient,
    generator: &SampleGenerator,
) -> (Payload, DataOrigin) {
    if use_sample {
        (generator.generate(), DataOrigin::Sample)
    } else {
        fetch_with_fallback(client, generator).await
    }
}
