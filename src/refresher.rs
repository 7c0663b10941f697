//! Periodic refresh of the supported-language and supported-domain lists.
//!
//! Refresh failures are absorbed here: the previous cache is kept, the
//! failure is logged, and nothing propagates into the request path or the
//! schedule. An empty upstream list is also treated as a no-op, since the
//! provider never means "nothing is supported any more".

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{error, info};

use crate::reference::{Domain, Language, ReferenceDataStore};

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    language: String,
}

/// The provider's wire field is literally "domains" even though each entry
/// carries a single domain value.
#[derive(Debug, Deserialize)]
struct DomainEntry {
    domains: String,
}

/// Fetches reference data from the provider and commits it into the store.
pub struct ReferenceDataRefresher {
    client: reqwest::Client,
    base_url: String,
    store: Arc<ReferenceDataStore>,
}

impl ReferenceDataRefresher {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        store: Arc<ReferenceDataStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            store,
        }
    }

    /// Refreshes the supported-language set and returns the set now in
    /// effect. On fetch failure or an empty upstream list the previous set
    /// is kept and returned.
    pub async fn refresh_languages(&self) -> HashSet<Language> {
        match self.fetch_languages().await {
            Ok(fetched) if fetched.is_empty() => {
                info!("Upstream language list was empty, keeping previous set");
                self.store.read().languages.clone()
            }
            Ok(fetched) => {
                self.store.replace_languages(fetched.clone());
                info!("Supported languages updated ({} entries)", fetched.len());
                fetched
            }
            Err(e) => {
                error!("Failed to refresh supported languages: {e:#}");
                self.store.read().languages.clone()
            }
        }
    }

    /// Refreshes the supported-domain set; same failure handling as
    /// [`refresh_languages`](Self::refresh_languages).
    pub async fn refresh_domains(&self) -> HashSet<Domain> {
        match self.fetch_domains().await {
            Ok(fetched) if fetched.is_empty() => {
                info!("Upstream domain list was empty, keeping previous set");
                self.store.read().domains.clone()
            }
            Ok(fetched) => {
                self.store.replace_domains(fetched.clone());
                info!("Supported domains updated ({} entries)", fetched.len());
                fetched
            }
            Err(e) => {
                error!("Failed to refresh supported domains: {e:#}");
                self.store.read().domains.clone()
            }
        }
    }

    /// One full refresh cycle. Runs at startup before traffic is accepted
    /// and on every scheduled tick; never fails.
    pub async fn refresh_all(&self) {
        self.refresh_languages().await;
        self.refresh_domains().await;
    }

    async fn fetch_languages(&self) -> Result<HashSet<Language>> {
        let url = format!("{}/languages", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to languages endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Languages endpoint error ({}): {}", status, body);
        }

        let entries: Vec<LanguageEntry> = response
            .json()
            .await
            .context("Failed to parse languages response")?;

        Ok(entries
            .into_iter()
            .map(|e| Language::new(e.language))
            .collect())
    }

    async fn fetch_domains(&self) -> Result<HashSet<Domain>> {
        let url = format!("{}/domains", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to domains endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Domains endpoint error ({}): {}", status, body);
        }

        let entries: Vec<DomainEntry> = response
            .json()
            .await
            .context("Failed to parse domains response")?;

        Ok(entries.into_iter().map(|e| Domain::new(e.domains)).collect())
    }
}
