use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL};
use reqwest::Client;

use crate::utils::error::{Result, StripError};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Downloads standings pages. The results site serves plain HTML but
/// rejects clients that do not look like a browser.
#[derive(Debug, Clone)]
pub struct HtmlFetcher {
    client: Client,
}

impl HtmlFetcher {
    pub fn new(timeout_seconds: u64, user_agent: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ca,es;q=0.9,en;q=0.8"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

        let user_agent = user_agent.unwrap_or(DEFAULT_USER_AGENT);
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::info!("Downloading {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());
        let response = response.error_for_status().map_err(StripError::Fetch)?;

        let html = response.text().await?;
        tracing::info!("Page downloaded ({} bytes)", html.len());
        Ok(html)
    }
}
