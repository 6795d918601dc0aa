pub mod error;
pub mod fetch;
pub mod parse;
pub mod prefs;
pub mod render;
pub mod scrape;
pub mod selector;

pub use error::{PagemarkError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use fetch::{fetch_file, fetch_stdin};
pub use parse::Document;
pub use prefs::{Preferences, Theme};
pub use render::{InlineCodePolicy, inline_text, render};
pub use scrape::{ScrapeOptions, Scraper, scrape};
pub use selector::{DEFAULT_OMIT_SELECTORS, OmitSet, effective_selector, resolve_omit_set};
