use crate::config::types::{Config, FetchConfig, NaverConfig, ProxyConfig, RenderConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_render_config(&config.render)?;
    validate_proxy_config(&config.proxy)?;
    validate_naver_config(&config.naver)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.max_redirects < 1 || config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "fetch max-redirects must be between 1 and 20, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "fetch user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates render configuration
fn validate_render_config(config: &RenderConfig) -> Result<(), ConfigError> {
    if config.navigation_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "render navigation-timeout-secs must be >= 1, got {}",
            config.navigation_timeout_secs
        )));
    }

    Ok(())
}

/// Validates proxy configuration
fn validate_proxy_config(config: &ProxyConfig) -> Result<(), ConfigError> {
    validate_http_base_url(&config.base_url, "proxy base-url")?;

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "proxy timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.max_content_chars < 1 {
        return Err(ConfigError::Validation(format!(
            "proxy max-content-chars must be >= 1, got {}",
            config.max_content_chars
        )));
    }

    Ok(())
}

/// Validates naver configuration
fn validate_naver_config(config: &NaverConfig) -> Result<(), ConfigError> {
    validate_http_base_url(&config.mobile_base_url, "naver mobile-base-url")
}

/// Validates that a base URL parses and uses an HTTP(S) scheme
fn validate_http_base_url(value: &str, field: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )));
    }

    Ok(())
}
