use serde::Deserialize;

/// Main configuration structure for Postlens
///
/// Every section is optional in the TOML file; missing sections take the
/// defaults below, so a bare `Config::default()` is a fully working setup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub naver: NaverConfig,
}

/// Direct HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Timeout for a single direct fetch (seconds)
    #[serde(rename = "timeout-secs", default = "default_fetch_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of redirects to follow
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    ///
    /// A desktop Chrome string by default; several platforms serve a reduced
    /// or blocking page to obvious bot agents.
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language header sent with every request
    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,
}

/// Browser-rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Whether rendered extraction may be attempted at all
    ///
    /// Set to false on restricted/ephemeral runtimes (serverless), where a
    /// headless browser is too resource-fragile to launch reliably.
    #[serde(default = "default_render_enabled")]
    pub enabled: bool,

    /// Timeout for a single rendered navigation step (seconds)
    #[serde(
        rename = "navigation-timeout-secs",
        default = "default_navigation_timeout"
    )]
    pub navigation_timeout_secs: u64,
}

/// Remote text-extraction proxy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Base URL of the plain-text rendering proxy
    #[serde(rename = "base-url", default = "default_proxy_base")]
    pub base_url: String,

    /// Timeout for the proxy fetch (seconds)
    #[serde(rename = "timeout-secs", default = "default_proxy_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of characters kept from the proxy text
    #[serde(rename = "max-content-chars", default = "default_max_content_chars")]
    pub max_content_chars: usize,
}

/// Naver-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NaverConfig {
    /// Base URL of the lightweight mobile rendering of a post
    #[serde(rename = "mobile-base-url", default = "default_mobile_base")]
    pub mobile_base_url: String,
}

fn default_fetch_timeout() -> u64 {
    20
}

fn default_max_redirects() -> usize {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7".to_string()
}

fn default_render_enabled() -> bool {
    true
}

fn default_navigation_timeout() -> u64 {
    30
}

fn default_proxy_base() -> String {
    "https://r.jina.ai".to_string()
}

fn default_proxy_timeout() -> u64 {
    15
}

fn default_max_content_chars() -> usize {
    8000
}

fn default_mobile_base() -> String {
    "https://m.blog.naver.com".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout_secs: default_fetch_timeout(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            enabled: default_render_enabled(),
            navigation_timeout_secs: default_navigation_timeout(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            base_url: default_proxy_base(),
            timeout_secs: default_proxy_timeout(),
            max_content_chars: default_max_content_chars(),
        }
    }
}

impl Default for NaverConfig {
    fn default() -> Self {
        NaverConfig {
            mobile_base_url: default_mobile_base(),
        }
    }
}
