use crate::config::types::{Config, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the source site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the output location configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.raw_data_path.is_empty() {
        return Err(ConfigError::Validation(
            "raw-data-path cannot be empty".to_string(),
        ));
    }

    if config.analysis_dir.is_empty() {
        return Err(ConfigError::Validation(
            "analysis-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
