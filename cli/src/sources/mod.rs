//! HTTP collaborators feeding the engine: hourly forecasts, tides, observed
//! wind and the marine zone text.

pub mod noaa;
pub mod open_meteo;

use crate::config::config;
use crate::retry::{with_retry, RetryConfig, RetryError};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = "mbwind/0.1 (wind confidence tool)";

pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config().http_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

/// GET `url` with `query` and decode the JSON body, retrying transient failures.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let fetch = move || async move {
        let response = client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str::<T>(&body)
            .map_err(|e| RetryError::NonRetryable(anyhow::Error::new(e)))
    };

    log::debug!("GET {}", url);
    with_retry(fetch, &RetryConfig::default())
        .await
        .map_err(RetryError::into_inner)
        .with_context(|| format!("Request to {} failed", url))
}
