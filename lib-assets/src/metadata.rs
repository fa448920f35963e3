//! Metadata Decisions
//!
//! `apply_verification` is the only place where persisted asset state is
//! computed. The result is handed to an `AssetMetadataStore` by the caller.

use serde::{Deserialize, Serialize};

use crate::types::{AssetMetadata, MetadataPatch};

/// User decision taken from the warning panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDecision {
    /// "Add to asset list"
    Trust,
    /// "Don't show"
    Hide,
}

impl VerificationDecision {
    pub fn patch(&self) -> MetadataPatch {
        match self {
            VerificationDecision::Trust => MetadataPatch::verified(),
            VerificationDecision::Hide => MetadataPatch::hidden(),
        }
    }
}

/// Shallow-merge a decision into the current metadata
///
/// Fields set in `decision` win; everything else, including
/// `discovery_tx_hash` and unknown forward-compatible keys, is carried over.
/// Applying the same decision twice gives the same result as applying it once.
pub fn apply_verification(
    current: Option<&AssetMetadata>,
    decision: &MetadataPatch,
) -> AssetMetadata {
    let mut merged = current.cloned().unwrap_or_default();

    if let Some(verified) = decision.verified {
        merged.verified = Some(verified);
    }
    if let Some(hidden) = decision.hidden {
        merged.hidden = Some(hidden);
    }
    for (key, value) in &decision.extra {
        merged.extra.insert(key.clone(), value.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provenance_preserved() {
        let current = AssetMetadata::discovered_in("0xA");
        let merged = apply_verification(Some(&current), &MetadataPatch::verified());

        assert_eq!(merged.discovery_tx_hash.as_deref(), Some("0xA"));
        assert_eq!(merged.verified, Some(true));
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({ "discoveryTxHash": "0xA", "verified": true })
        );
    }

    #[test]
    fn test_no_current_metadata() {
        let merged = apply_verification(None, &MetadataPatch::verified());
        assert_eq!(serde_json::to_value(&merged).unwrap(), json!({ "verified": true }));
    }

    #[test]
    fn test_idempotent() {
        let current = AssetMetadata::discovered_in("0xA");
        let patch = VerificationDecision::Trust.patch();

        let once = apply_verification(Some(&current), &patch);
        let twice = apply_verification(Some(&once), &patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_decision_overrides_existing_value() {
        let current = AssetMetadata {
            verified: Some(false),
            ..AssetMetadata::default()
        };
        let merged = apply_verification(Some(&current), &MetadataPatch::verified());
        assert_eq!(merged.verified, Some(true));
    }

    #[test]
    fn test_hide_keeps_verification_and_extras() {
        let mut current = AssetMetadata::discovered_in("0xA");
        current.verified = Some(true);
        current.extra.insert("tokenLists".to_string(), json!([]));

        let merged = apply_verification(Some(&current), &VerificationDecision::Hide.patch());
        assert_eq!(merged.hidden, Some(true));
        assert_eq!(merged.verified, Some(true));
        assert_eq!(merged.discovery_tx_hash.as_deref(), Some("0xA"));
        assert!(merged.extra.contains_key("tokenLists"));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let current = AssetMetadata::discovered_in("0xA");
        let patch = MetadataPatch::default();
        assert!(patch.is_empty());
        assert_eq!(apply_verification(Some(&current), &patch), current);
    }
}
