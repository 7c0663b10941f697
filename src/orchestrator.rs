//! Validate-then-translate: the one externally invoked operation.

use std::sync::Arc;

use thiserror::Error;

use crate::forwarder::{TranslationForwarder, UpstreamError};
use crate::reference::ReferenceDataStore;
use crate::request::TranslationRequest;
use crate::validator::{self, ValidationFailure};

/// Why a translation could not be produced. Validation failures are client
/// errors; upstream errors are dependency errors. Callers map them to
/// different status codes, so the two classes stay distinct.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Composes the validator and the forwarder over the shared reference data
/// store.
pub struct TranslationService {
    store: Arc<ReferenceDataStore>,
    forwarder: TranslationForwarder,
}

impl TranslationService {
    pub fn new(store: Arc<ReferenceDataStore>, forwarder: TranslationForwarder) -> Self {
        Self { store, forwarder }
    }

    /// Validates against one snapshot of the current reference data, then
    /// forwards. An invalid request never reaches the provider, so no
    /// upstream cost is incurred for it.
    pub async fn handle(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let reference = self.store.read();
        validator::validate(request, &reference)?;
        Ok(self.forwarder.translate(request).await?)
    }
}
