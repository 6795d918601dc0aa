//! Persisted scrape preferences.
//!
//! The original surface kept its omission settings and display theme in
//! host-side storage written from the UI. Here that becomes an explicit
//! load-at-start / store-on-change value: callers read [`Preferences`] once,
//! pass the relevant fields into
//! [`ScrapeOptions`](crate::scrape::ScrapeOptions), and write back only when
//! the user asks. The renderer itself never touches this state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{PagemarkError, Result};

/// Display theme for an output surface. Carried here so consumers share one
/// preference file; the Markdown itself is theme-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User preferences persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Exclude the baseline boilerplate regions by default.
    pub omit_defaults: bool,
    /// Extra comma-separated CSS selectors to exclude.
    pub extra_selectors: String,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            omit_defaults: true,
            extra_selectors: String::new(),
            theme: Theme::default(),
        }
    }
}

impl Preferences {
    /// The preference file location under the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`PagemarkError::PrefsError`] when the platform exposes no
    /// config directory.
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("pagemark").join("prefs.json"))
            .ok_or_else(|| PagemarkError::PrefsError("no config directory available".to_string()))
    }

    /// Loads preferences from the default location.
    ///
    /// A missing file yields the defaults; a present but unreadable or
    /// malformed file is an error rather than silently reset.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Stores preferences to the default location, creating parent
    /// directories as needed.
    pub fn store(&self) -> Result<()> {
        self.store_to(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| PagemarkError::PrefsError(e.to_string()))
    }

    fn store_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(self).map_err(|e| PagemarkError::PrefsError(e.to_string()))?;
        fs::write(path, raw)?;

        Ok(())
    }
}
