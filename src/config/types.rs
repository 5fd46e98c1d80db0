use serde::Deserialize;

/// Main configuration structure for Shelf-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the catalog site to scrape
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// User agent string sent with every request.
    ///
    /// The default imitates a desktop browser so the catalog site serves the
    /// same markup it serves to ordinary visitors.
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output location configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the raw scraped data JSON file
    #[serde(rename = "raw-data-path", default = "default_raw_data_path")]
    pub raw_data_path: String,

    /// Directory for analysis artifacts (cleaned CSV, chart PNGs)
    #[serde(rename = "analysis-dir", default = "default_analysis_dir")]
    pub analysis_dir: String,
}

fn default_base_url() -> String {
    "http://books.toscrape.com/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_raw_data_path() -> String {
    "data/raw/books.json".to_string()
}

fn default_analysis_dir() -> String {
    "data/analysis".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            raw_data_path: default_raw_data_path(),
            analysis_dir: default_analysis_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
