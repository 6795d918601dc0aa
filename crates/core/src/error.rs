//! Error types for Pagemark operations.
//!
//! This module defines the main error type [`PagemarkError`] which represents
//! all possible errors that can occur during selector resolution, rendering,
//! and content fetching.
//!
//! # Example
//!
//! ```rust
//! use pagemark_core::{PagemarkError, Result};
//!
//! fn check_selectors(extra: &str) -> Result<()> {
//!     if extra.contains('[') && !extra.contains(']') {
//!         return Err(PagemarkError::InvalidSelector(extra.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scrape operations.
///
/// Selector resolution and pathological table input are the only error paths
/// inside a render; everything else (empty lists, header-only tables,
/// unmapped tags) is handled as an explicit case, not an error. The remaining
/// variants cover content fetching, file I/O, and preference storage around
/// the render.
///
/// # Example
///
/// ```rust
/// use pagemark_core::{PagemarkError, scrape, ScrapeOptions};
///
/// let options = ScrapeOptions { extra_selectors: "[invalid".to_string(), ..Default::default() };
/// match scrape("<p>Hello</p>", &options) {
///     Err(PagemarkError::InvalidSelector(msg)) => println!("bad selector: {}", msg),
///     other => panic!("expected selector failure, got {:?}", other.is_ok()),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PagemarkError {
    /// The exclusion selector string is not valid CSS selector syntax.
    ///
    /// This aborts the whole scrape; no partial output is produced.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A table element has zero rows.
    ///
    /// Raised instead of indexing past the end of an empty row list.
    #[error("Table has no rows")]
    EmptyTable,

    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and other
    /// HTTP-related problems. Only available with the `fetch` feature.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    /// Only available with the `fetch` feature.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Preference storage errors.
    ///
    /// Returned when the persisted preference file cannot be located or
    /// contains invalid data.
    #[error("Preference error: {0}")]
    PrefsError(String),
}

/// Result type alias for PagemarkError.
///
/// This is a convenience alias for `std::result::Result<T, PagemarkError>`.
pub type Result<T> = std::result::Result<T, PagemarkError>;
