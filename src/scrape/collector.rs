//! Collector - sequential catalog traversal
//!
//! Drives the scrape stage: one fetch at a time, the index page first, then
//! every category's listing chain, then every book detail page in listing
//! order. The whole traversal is all-or-nothing; the first failure aborts
//! the run with nothing persisted.

use crate::config::Config;
use crate::model::{BookRecord, CategoryIndex};
use crate::scrape::fetcher::{build_http_client, fetch_html};
use crate::scrape::parser::{discover_categories, extract_book, parse_listing};
use crate::Result;
use reqwest::Client;
use url::Url;

/// Catalog collector holding the HTTP client and resolved base URL
pub struct Collector {
    client: Client,
    base_url: Url,
}

impl Collector {
    /// Creates a collector from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Ready to collect
    /// * `Err(ShelfError)` - Invalid base URL or client build failure
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.site.base_url)
            .map_err(|e| crate::ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
        let client = build_http_client(&config.site)?;

        Ok(Self { client, base_url })
    }

    /// Collects the full category index.
    ///
    /// Fetches the site index once, discovers categories, and traverses each
    /// one in discovery order. Category labels become the index keys, so the
    /// serialized file keeps the site's category order.
    pub async fn collect(&self) -> Result<CategoryIndex> {
        let index_html = fetch_html(&self.client, &self.base_url).await?;
        let categories = discover_categories(&index_html, &self.base_url)?;

        tracing::info!("Discovered {} categories", categories.len());

        let mut index = CategoryIndex::new();
        for (label, url) in categories {
            tracing::info!("Processing category: {}", label);
            let books = self.traverse_listing(url).await?;
            tracing::debug!("Collected {} books under '{}'", books.len(), label);
            index.insert(label, books);
        }

        Ok(index)
    }

    /// Walks one category's listing chain and extracts every book.
    ///
    /// Follows the next-page link until a page has none, visiting each
    /// listing page exactly once. Book detail pages are fetched one at a
    /// time in page order.
    pub async fn traverse_listing(&self, start: Url) -> Result<Vec<BookRecord>> {
        let mut books = Vec::new();
        let mut next = Some(start);

        while let Some(page_url) = next {
            tracing::debug!("Fetching listing page: {}", page_url);
            let html = fetch_html(&self.client, &page_url).await?;
            let listing = parse_listing(&html, &page_url)?;

            for book_url in &listing.book_urls {
                tracing::trace!("Fetching detail page: {}", book_url);
                let detail_html = fetch_html(&self.client, book_url).await?;
                books.push(extract_book(&detail_html, book_url)?);
            }

            next = listing.next;
        }

        Ok(books)
    }
}
