use serde::{Deserialize, Serialize};

/// An inbound translation request. The same four fields are sent verbatim as
/// the upstream translate payload, camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub domain: String,
    pub content: String,
}
