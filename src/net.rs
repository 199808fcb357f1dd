use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::warn;
use url::Url;

use crate::config::CrawlConfig;
use crate::error::Result;

/// Something that can return the HTML body for a site-relative or absolute URL
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;

    /// Base URL that relative links resolve against
    fn base_url(&self) -> &Url;
}

/// Fetches pages from the crawl host over HTTP
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Builds a client limited to `max_connections` pooled connections to the host
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(config.max_connections);
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(HttpSource {
            client: builder.build()?,
            base_url: config.base_url()?,
        })
    }
}

impl PageSource for HttpSource {
    /// Returns the body whatever the status; a non-success status only logs a warning
    async fn fetch(&self, url: &str) -> Result<String> {
        let full_url = self.base_url.join(url)?;
        let response = self.client.get(full_url.clone()).send().await?;

        if !response.status().is_success() {
            warn!("{} returned {}", full_url, response.status());
        }

        Ok(response.text().await?)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
