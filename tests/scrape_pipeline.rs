//! Integration tests for the scrape stage
//!
//! These tests use wiremock to stand up a mock catalog site and exercise
//! the full collect cycle end-to-end, including pagination, unknown-field
//! sentinels, and the JSON round trip into the flattened table.

use shelf_scout::config::{Config, OutputConfig, SiteConfig};
use shelf_scout::model::flatten;
use shelf_scout::scrape::Collector;
use shelf_scout::store::load_category_index;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, raw_data_path: &str, analysis_dir: &str) -> Config {
    Config {
        site: SiteConfig {
            base_url: format!("{}/", base_url),
            user_agent: "TestAgent/1.0".to_string(),
        },
        output: OutputConfig {
            raw_data_path: raw_data_path.to_string(),
            analysis_dir: analysis_dir.to_string(),
        },
    }
}

fn detail_page(title: &str, price: Option<&str>, availability: Option<&str>, description: Option<&str>) -> String {
    let mut body = String::from("<html><head>");
    if let Some(d) = description {
        body.push_str(&format!(r#"<meta name="description" content="{}" />"#, d));
    }
    body.push_str("</head><body>");
    body.push_str(&format!("<h1>{}</h1>", title));
    if let Some(p) = price {
        body.push_str(&format!(r#"<p class="price_color">{}</p>"#, p));
    }
    if let Some(a) = availability {
        body.push_str(&format!(r#"<p class="availability">{}</p>"#, a));
    }
    body.push_str("</body></html>");
    body
}

async fn mount_page(server: &MockServer, url_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a small catalog: two genuine categories plus the excluded
/// "all books" pseudo-entry. Travel spans two listing pages.
async fn mount_catalog(server: &MockServer) {
    let index = r#"
        <html><body>
        <div class="side_categories">
            <ul>
                <li><a href="catalogue/category/books_1/index.html"> Books </a></li>
                <li><a href="catalogue/category/books/travel_2/index.html"> Travel </a></li>
                <li><a href="catalogue/category/books/mystery_3/index.html"> Mystery </a></li>
            </ul>
        </div>
        </body></html>
    "#;
    mount_page(server, "/", index.to_string()).await;

    let travel_page_1 = r#"
        <article class="product_pod"><h3><a href="../../../voyager_1/index.html">Voyager</a></h3></article>
        <article class="product_pod"><h3><a href="../../../wanderlust_2/index.html">Wanderlust</a></h3></article>
        <ul class="pager"><li class="next"><a href="page-2.html">next</a></li></ul>
    "#;
    mount_page(
        server,
        "/catalogue/category/books/travel_2/index.html",
        travel_page_1.to_string(),
    )
    .await;

    let travel_page_2 = r#"
        <article class="product_pod"><h3><a href="../../../atlas_3/index.html">Atlas</a></h3></article>
        <ul class="pager"><li class="previous"><a href="index.html">previous</a></li></ul>
    "#;
    mount_page(
        server,
        "/catalogue/category/books/travel_2/page-2.html",
        travel_page_2.to_string(),
    )
    .await;

    let mystery_page = r#"
        <article class="product_pod"><h3><a href="../../../whodunit_4/index.html">Whodunit</a></h3></article>
    "#;
    mount_page(
        server,
        "/catalogue/category/books/mystery_3/index.html",
        mystery_page.to_string(),
    )
    .await;

    mount_page(
        server,
        "/catalogue/voyager_1/index.html",
        detail_page(
            "Voyager",
            Some("£13.76"),
            Some("In stock (22 available)"),
            Some(" A voyage légendaire. "),
        ),
    )
    .await;
    mount_page(
        server,
        "/catalogue/wanderlust_2/index.html",
        detail_page(
            "Wanderlust",
            Some("£24.99"),
            Some("In stock (3 available)"),
            Some("Restless feet."),
        ),
    )
    .await;
    mount_page(
        server,
        "/catalogue/atlas_3/index.html",
        detail_page("Atlas", Some("£5.00"), Some("Out of stock"), Some("Maps.")),
    )
    .await;

    // Missing price and description, availability text without a digit run
    mount_page(
        server,
        "/catalogue/whodunit_4/index.html",
        detail_page("Whodunit", None, Some("In stock"), None),
    )
    .await;
}

#[tokio::test]
async fn test_collect_full_catalog() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let raw_path = dir.path().join("books.json");
    let config = create_test_config(
        &mock_server.uri(),
        raw_path.to_str().unwrap(),
        dir.path().join("analysis").to_str().unwrap(),
    );

    let collector = Collector::new(&config).expect("Failed to create collector");
    let index = collector.collect().await.expect("Collect failed");

    // The pseudo-category is excluded; genuine categories keep site order
    let categories: Vec<&String> = index.keys().collect();
    assert_eq!(categories, vec!["Travel", "Mystery"]);

    // Travel spans two listing pages, books in page order
    let travel = &index["Travel"];
    assert_eq!(travel.len(), 3);
    assert_eq!(travel[0].title, "Voyager");
    assert_eq!(travel[0].price, Some(13.76));
    assert_eq!(travel[0].availability, Some(22));
    assert_eq!(travel[0].description.as_deref(), Some("A voyage légendaire."));
    assert_eq!(travel[1].title, "Wanderlust");
    assert_eq!(travel[2].title, "Atlas");
    assert_eq!(travel[2].availability, None);

    // Unknown sentinels survive extraction untouched
    let mystery = &index["Mystery"];
    assert_eq!(mystery.len(), 1);
    assert_eq!(mystery[0].title, "Whodunit");
    assert_eq!(mystery[0].price, None);
    assert_eq!(mystery[0].availability, None);
    assert_eq!(mystery[0].description, None);

    // .expect(1) on every mock verifies each page was fetched exactly once
}

#[tokio::test]
async fn test_scrape_stage_round_trip() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let raw_path = dir.path().join("data").join("raw").join("books.json");
    let config = create_test_config(
        &mock_server.uri(),
        raw_path.to_str().unwrap(),
        dir.path().join("analysis").to_str().unwrap(),
    );

    shelf_scout::scrape::run(&config).await.expect("Scrape stage failed");
    assert!(raw_path.exists());

    // Non-ASCII text is stored unescaped
    let raw_text = std::fs::read_to_string(&raw_path).unwrap();
    assert!(raw_text.contains("légendaire"));

    // Loading and flattening yields the rows in traversal order
    let loaded = load_category_index(&raw_path).expect("Load failed");
    let rows = flatten(&loaded);

    let expected: usize = loaded.values().map(Vec::len).sum();
    assert_eq!(rows.len(), expected);
    assert_eq!(rows.len(), 4);

    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Voyager", "Wanderlust", "Atlas", "Whodunit"]);
    assert_eq!(rows[3].category, "Mystery");

    // Substitution is deferred to the accessors
    assert_eq!(rows[3].price, None);
    assert_eq!(rows[3].price_filled(), 0.0);
}

#[tokio::test]
async fn test_http_error_aborts_collect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().join("books.json").to_str().unwrap(),
        dir.path().join("analysis").to_str().unwrap(),
    );

    let collector = Collector::new(&config).expect("Failed to create collector");
    let result = collector.collect().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_missing_title_aborts_run() {
    let mock_server = MockServer::start().await;

    let index = r#"
        <div class="side_categories"><ul>
            <li><a href="catalogue/category/books/horror_5/index.html"> Horror </a></li>
        </ul></div>
    "#;
    mount_page(&mock_server, "/", index.to_string()).await;

    let listing = r#"
        <article class="product_pod"><h3><a href="../../../nameless_6/index.html">?</a></h3></article>
    "#;
    mount_page(
        &mock_server,
        "/catalogue/category/books/horror_5/index.html",
        listing.to_string(),
    )
    .await;

    // Detail page without an h1
    mount_page(
        &mock_server,
        "/catalogue/nameless_6/index.html",
        r#"<html><body><p class="price_color">£9.99</p></body></html>"#.to_string(),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let raw_path = dir.path().join("books.json");
    let config = create_test_config(
        &mock_server.uri(),
        raw_path.to_str().unwrap(),
        dir.path().join("analysis").to_str().unwrap(),
    );

    let result = shelf_scout::scrape::run(&config).await;
    assert!(result.is_err());

    // All-or-nothing: no partial file is written on failure
    assert!(!raw_path.exists());
}
