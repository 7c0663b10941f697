//! Request validation against the current reference data.
//!
//! Validation exists to cut costs: an invalid request is rejected before any
//! upstream translate call is made.

use thiserror::Error;

use crate::reference::ReferenceData;
use crate::request::TranslationRequest;

/// Maximum number of whitespace-delimited words allowed in the content.
pub const MAX_CONTENT_WORDS: usize = 30;

/// Why a translation request was rejected. Messages follow the provider
/// contract and are returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Unsupported language!")]
    UnsupportedLanguage,
    #[error("Unsupported domain!")]
    UnsupportedDomain,
    #[error("The length of the content is greater than 30!")]
    ContentTooLong,
}

/// Validates a request against one reference data snapshot.
///
/// Checks run in a fixed order and the first failure wins, so simultaneous
/// violations always produce the same reason: language pair, then domain,
/// then content length.
pub fn validate(
    request: &TranslationRequest,
    reference: &ReferenceData,
) -> Result<(), ValidationFailure> {
    if !reference.supports_language(&request.source_language)
        || !reference.supports_language(&request.target_language)
    {
        return Err(ValidationFailure::UnsupportedLanguage);
    }
    if !reference.supports_domain(&request.domain) {
        return Err(ValidationFailure::UnsupportedDomain);
    }
    if word_count(&request.content) > MAX_CONTENT_WORDS {
        return Err(ValidationFailure::ContentTooLong);
    }
    Ok(())
}

/// Counts words by splitting on runs of whitespace; empty tokens are
/// discarded, so leading or trailing whitespace does not inflate the count.
fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}
