use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::models::{ApiEnvelope, Evolution, Overview, Payload, Productivity};

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Client for the three dashboard endpoints of a single project
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
    project_id: String,
    token: Option<String>,
    timeout: Option<Duration>,
    months: Option<u32>,
}

impl DashboardClient {
    pub fn new(base_url: &str, project_id: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            token: None,
            timeout: None,
            months: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Evolution window passed to the backend as `?months=N`
    pub fn with_months(mut self, months: Option<u32>) -> Self {
        self.months = months;
        self
    }

    pub fn endpoint(&self, section: &str) -> String {
        format!("{}/dashboard/{}/{}", self.base_url, section, self.project_id)
    }

    /// Fetch overview, evolution and productivity in sequence.
    ///
    /// Any failure aborts the whole fetch; sections already retrieved are dropped.
    pub async fn fetch_payload(&self) -> Result<Payload> {
        let overview: Overview = self.fetch_section("overview", &[]).await?;

        let months_query = self.months.map(|m| ("months", m.to_string()));
        let evolution: Evolution = self
            .fetch_section("evolution", months_query.as_slice())
            .await?;

        let productivity: Productivity = self.fetch_section("productivity", &[]).await?;

        Ok(Payload {
            overview,
            evolution,
            productivity,
        })
    }

    async fn fetch_section<T: DeserializeOwned>(
        &self,
        section: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(section);
        debug!(url = %url, "requesting dashboard section");

        let mut request = self.client.get(&url).query(query);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {section} data from {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error fetching {} data: {}",
                section,
                response.status()
            ));
        }

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to read {section} response body"))?;

        let envelope: ApiEnvelope<T> = serde_json::from_str(&response_text).with_context(|| {
            let preview: String = response_text.chars().take(200).collect();
            format!("Failed to parse {section} response. Preview: {preview}")
        })?;

        Ok(envelope.data)
    }
}
