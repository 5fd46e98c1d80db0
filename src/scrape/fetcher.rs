//! HTTP fetcher for catalog pages
//!
//! One client is built per scrape run and every page (index, listing, and
//! detail) goes through [`fetch_html`]. Fetches are strictly sequential;
//! a non-success status or transport failure aborts the whole run.

use crate::config::SiteConfig;
use crate::{Result, ShelfError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for every fetch in a scrape run
///
/// # Arguments
///
/// * `site` - The source site configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(site: &SiteConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&site.user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ShelfError)` - Transport failure or non-success HTTP status
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShelfError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let site = SiteConfig::default();
        let client = build_http_client(&site);
        assert!(client.is_ok());
    }
}
