//! Static-asset loading: the spell catalog and the backstory fragment
//!
//! These are the only two network touches in the system. Both are
//! fire-and-forget from the triggering action's perspective: no retry, no
//! timeout, no cancellation. Failures degrade to a visible but non-blocking
//! state (empty catalog, inline error markup).

use std::path::Path;

use reqwest::Client;

use crate::core::error::{Result, SheetError};
use crate::spells::catalog::{Spell, SpellCatalog};

/// HTTP client for the two static-asset fetches
pub struct AssetClient {
    client: Client,
}

impl AssetClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Fetch the spell catalog; any failure leaves it empty
    ///
    /// Called exactly once at startup. There is no retry: a failed load
    /// means dependent views render no results until the next start.
    pub async fn fetch_catalog(&self, url: &str) -> SpellCatalog {
        match self.try_fetch_catalog(url).await {
            Ok(catalog) => {
                tracing::debug!("Spell catalog loaded: {} spells", catalog.len());
                catalog
            }
            Err(e) => {
                tracing::warn!("Spell catalog failed to load from {}: {}", url, e);
                SpellCatalog::new()
            }
        }
    }

    async fn try_fetch_catalog(&self, url: &str) -> Result<SpellCatalog> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SheetError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SheetError::Fetch(format!("HTTP {}", response.status())));
        }

        let spells: Vec<Spell> = response
            .json()
            .await
            .map_err(|e| SheetError::Fetch(e.to_string()))?;

        Ok(SpellCatalog::from_spells(spells))
    }

    /// Fetch the backstory fragment as raw markup text
    pub async fn fetch_backstory(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SheetError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SheetError::Fetch("Could not load backstory.".into()));
        }

        response
            .text()
            .await
            .map_err(|e| SheetError::Fetch(e.to_string()))
    }

    /// Backstory markup, or the inline error message on failure
    pub async fn backstory_or_error(&self, url: &str) -> String {
        match self.fetch_backstory(url).await {
            Ok(markup) => markup,
            Err(e) => backstory_error_markup(&e),
        }
    }
}

impl Default for AssetClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The inline placeholder shown when the backstory fails to load
pub fn backstory_error_markup(error: &SheetError) -> String {
    format!("<p>Error loading backstory: {}</p>", error)
}

/// Load the backstory fragment from a file on disk
pub fn load_backstory_from_path(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
