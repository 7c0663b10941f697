//! Reference data: the cached supported-language and supported-domain sets
//! used to gate translation requests before they are forwarded upstream.
//!
//! The cache lives in a [`ReferenceDataStore`] as an immutable snapshot that
//! is replaced wholesale on each successful refresh. Readers take the whole
//! snapshot, so a concurrent refresh can never make a single validation
//! internally inconsistent.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// A supported language tag (e.g. "en-US"). Opaque, exact-match equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets a HashSet<Language> be probed with the plain &str from a request.
impl Borrow<str> for Language {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A supported translation domain (e.g. "general", "business").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Domain {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A point-in-time snapshot of the provider's supported languages and
/// domains. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub languages: HashSet<Language>,
    pub domains: HashSet<Domain>,
}

impl ReferenceData {
    /// The startup snapshot: nothing is supported until the first refresh.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(languages: HashSet<Language>, domains: HashSet<Domain>) -> Self {
        Self { languages, domains }
    }

    pub fn supports_language(&self, tag: &str) -> bool {
        self.languages.contains(tag)
    }

    pub fn supports_domain(&self, name: &str) -> bool {
        self.domains.contains(name)
    }
}

/// Holds the current reference data snapshot and swaps it atomically.
///
/// `read` hands out the committed `Arc` snapshot; `replace` installs a new
/// one. Readers that already hold a snapshot keep seeing it unchanged for as
/// long as they need it.
pub struct ReferenceDataStore {
    current: RwLock<Arc<ReferenceData>>,
}

impl ReferenceDataStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(ReferenceData::empty())),
        }
    }

    /// Returns the latest committed snapshot. Non-blocking apart from the
    /// brief lock needed to clone the `Arc`.
    pub fn read(&self) -> Arc<ReferenceData> {
        // A poisoned lock only means a panic elsewhere; the stored Arc is
        // still a complete snapshot, so recover rather than propagate.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically replaces the whole snapshot.
    pub fn replace(&self, data: ReferenceData) {
        let new = Arc::new(data);
        match self.current.write() {
            Ok(mut guard) => *guard = new,
            Err(poisoned) => *poisoned.into_inner() = new,
        }
    }

    /// Commits a new language set, carrying the current domain set over into
    /// the new snapshot. Languages and domains refresh independently.
    pub fn replace_languages(&self, languages: HashSet<Language>) {
        match self.current.write() {
            Ok(mut guard) => {
                *guard = Arc::new(ReferenceData::new(languages, guard.domains.clone()));
            }
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                *guard = Arc::new(ReferenceData::new(languages, guard.domains.clone()));
            }
        }
    }

    /// Commits a new domain set, carrying the current language set over.
    pub fn replace_domains(&self, domains: HashSet<Domain>) {
        match self.current.write() {
            Ok(mut guard) => {
                *guard = Arc::new(ReferenceData::new(guard.languages.clone(), domains));
            }
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                *guard = Arc::new(ReferenceData::new(guard.languages.clone(), domains));
            }
        }
    }
}

impl Default for ReferenceDataStore {
    fn default() -> Self {
        Self::new()
    }
}
