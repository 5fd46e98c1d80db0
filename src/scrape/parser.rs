//! HTML parsers for the three page kinds the scraper visits
//!
//! - The site index, for category discovery
//! - Category listing pages, for book links and the next-page link
//! - Book detail pages, for the four record fields
//!
//! Field extraction is lenient: a missing price, availability, or
//! description yields the unknown sentinel (`None`). The title lookup is
//! the one deliberate exception; a detail page without a main heading
//! fails the whole record, and with it the run.

use crate::model::BookRecord;
use crate::{Result, ShelfError};
use scraper::{Html, Selector};
use url::Url;

/// Parsed contents of one category listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// Detail page URLs in page order
    pub book_urls: Vec<Url>,

    /// URL of the next listing page, if the page has one
    pub next: Option<Url>,
}

/// Href fragment identifying the site's "all books" pseudo-category
const ALL_BOOKS_FRAGMENT: &str = "books_1";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ShelfError::HtmlParse(format!("bad selector '{}': {}", css, e)))
}

/// Discovers genuine categories from the site index page.
///
/// Reads the sidebar navigation anchors in document order and resolves each
/// href against `base`. The "all books" pseudo-entry is excluded so only
/// real categories remain.
///
/// # Returns
///
/// Label/URL pairs in the order the site lists them
pub fn discover_categories(html: &str, base: &Url) -> Result<Vec<(String, Url)>> {
    let document = Html::parse_document(html);
    let category_selector = selector(".side_categories ul li a")?;

    let mut categories = Vec::new();
    for element in document.select(&category_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Skip the pseudo-category that links to the full catalog
        if href.contains(ALL_BOOKS_FRAGMENT) {
            continue;
        }

        let label = element.text().collect::<String>().trim().to_string();
        let url = base.join(href)?;
        categories.push((label, url));
    }

    Ok(categories)
}

/// Parses a category listing page into book links and the next-page link.
///
/// Both kinds of links are relative on the site, so they are resolved
/// against the URL of the listing page itself.
pub fn parse_listing(html: &str, page_url: &Url) -> Result<ListingPage> {
    let document = Html::parse_document(html);
    let book_selector = selector(".product_pod h3 a")?;
    let next_selector = selector(".next a")?;

    let mut book_urls = Vec::new();
    for element in document.select(&book_selector) {
        if let Some(href) = element.value().attr("href") {
            book_urls.push(page_url.join(href)?);
        }
    }

    let next = match document.select(&next_selector).next() {
        Some(element) => match element.value().attr("href") {
            Some(href) => Some(page_url.join(href)?),
            None => None,
        },
        None => None,
    };

    Ok(ListingPage { book_urls, next })
}

/// Extracts a book record from a detail page.
///
/// The title comes from the first `h1`; a page without one fails the whole
/// record rather than producing an empty title. The remaining fields fall
/// back to the unknown sentinel when their element is absent.
///
/// # Arguments
///
/// * `html` - The detail page markup
/// * `url` - The detail page URL, for error context
pub fn extract_book(html: &str, url: &Url) -> Result<BookRecord> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selector("h1")?)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ShelfError::MissingTitle {
            url: url.to_string(),
        })?;

    let price = extract_price(&document, url)?;
    let availability = extract_availability(&document)?;
    let description = extract_description(&document)?;

    Ok(BookRecord {
        title,
        price,
        availability,
        description,
    })
}

/// Price from the `.price_color` element: strip everything except ASCII
/// digits and the decimal point, then parse. Absent element or an
/// unparseable remainder both map to unknown.
fn extract_price(document: &Html, url: &Url) -> Result<Option<f64>> {
    let Some(element) = document.select(&selector(".price_color")?).next() else {
        return Ok(None);
    };

    let text = element.text().collect::<String>();
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(price) => Ok(Some(price)),
        Err(_) => {
            tracing::warn!("Unparseable price text '{}' at {}", text.trim(), url);
            Ok(None)
        }
    }
}

/// Stock count: the first run of ASCII digits in the `.availability` text.
fn extract_availability(document: &Html) -> Result<Option<u32>> {
    let Some(element) = document.select(&selector(".availability")?).next() else {
        return Ok(None);
    };

    let text = element.text().collect::<String>();
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    Ok(digits.parse::<u32>().ok())
}

/// Description from the `content` attribute of `meta[name="description"]`,
/// trimmed. An absent tag or blank content maps to unknown.
fn extract_description(document: &Html) -> Result<Option<String>> {
    let description = document
        .select(&selector(r#"meta[name="description"]"#)?)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(description)
}
