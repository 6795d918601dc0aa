//! Content fetching from URLs, files, and stdin.
//!
//! The scrape core only needs a document; this module supplies one from
//! HTTP/HTTPS URLs (behind the `fetch` feature), local files, or standard
//! input.

use std::fs;
use std::path::PathBuf;

use crate::{PagemarkError, Result};

/// HTTP client configuration for fetching web pages.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

#[cfg(feature = "fetch")]
impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Pagemark/1.0; +https://github.com/pagemark/pagemark)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET, follows redirects, respects the configured timeout,
/// and sends a browser-like Accept header for better compatibility.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| PagemarkError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(PagemarkError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(PagemarkError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                PagemarkError::Timeout { timeout: config.timeout }
            } else {
                PagemarkError::HttpError(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(PagemarkError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(PagemarkError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(PagemarkError::from)?;

    Ok(buffer)
}
