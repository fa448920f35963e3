//! Asset Warning Types
//!
//! Snapshot types read from the wallet's asset registry and activity feed,
//! plus the derived display mode. Field names follow the wallet background
//! store (camelCase JSON).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// NETWORK
// =============================================================================

/// Network the asset lives on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Chain identifier as a decimal string ("1", "137", ...)
    pub chain_id: String,
    /// Display name
    pub name: String,
    /// Fields owned by the registry (family, baseAsset, ...), kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Network {
    pub fn new(chain_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// ASSET METADATA
// =============================================================================

/// Metadata stored alongside an asset in the registry
///
/// Every field is optional. An absent `verified` means "not yet decided" and
/// is treated exactly like `false`. `discovery_tx_hash` is a provenance marker
/// and is never rewritten once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    /// Explicit user or curator verification flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Hash of the transaction through which the asset was first observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_tx_hash: Option<String>,

    /// Set when the user chose not to show this asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Forward-compatible fields carried through untouched (tokenLists, logoURL, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetMetadata {
    /// Metadata for an asset discovered through `tx_hash`
    pub fn discovered_in(tx_hash: impl Into<String>) -> Self {
        Self {
            discovery_tx_hash: Some(tx_hash.into()),
            ..Self::default()
        }
    }

    /// True only for an explicit `verified: true`
    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }

    /// True only for an explicit `hidden: true`
    pub fn is_hidden(&self) -> bool {
        self.hidden == Some(true)
    }
}

/// Partial metadata update
///
/// The typed counterpart of a `Partial<AssetMetadata>` decision. There is no
/// `discovery_tx_hash` field: provenance cannot be rewritten through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetadataPatch {
    /// Patch that marks the asset as trusted
    pub fn verified() -> Self {
        Self {
            verified: Some(true),
            ..Self::default()
        }
    }

    /// Patch that hides the asset from listings
    pub fn hidden() -> Self {
        Self {
            hidden: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verified.is_none() && self.hidden.is_none() && self.extra.is_empty()
    }
}

// =============================================================================
// ASSET
// =============================================================================

/// Registry identity of an asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fungible asset snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Chain-specific contract identifier; absent for base assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AssetMetadata>,

    /// Registry fields this crate does not interpret (decimals, homeNetwork, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Create a contract asset without metadata
    pub fn new(symbol: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            contract_address: Some(contract_address.into()),
            metadata: None,
            extra: Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: AssetMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Contract address, or `""` for non-contract assets
    pub fn contract_address(&self) -> &str {
        self.contract_address.as_deref().unwrap_or("")
    }

    /// Discovery hash, treating an empty string as absent
    pub fn discovery_tx_hash(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.discovery_tx_hash.as_deref())
            .filter(|hash| !hash.is_empty())
    }

    /// Registry key: lower-cased contract address, falling back to the symbol
    pub fn key(&self) -> AssetKey {
        match self.contract_address() {
            "" => AssetKey(self.symbol.clone()),
            address => AssetKey(address.to_lowercase()),
        }
    }

    /// Whether `query` names this asset by symbol (case-insensitive) or contract address
    pub fn matches(&self, query: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(query)
            || (!self.contract_address().is_empty()
                && self.contract_address().eq_ignore_ascii_case(query))
    }
}

// =============================================================================
// ACTIVITY
// =============================================================================

/// Entry of the current account's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Transaction hash
    pub hash: String,

    /// Opaque display details (from, to, value, blockHeight, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ActivityRecord {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            details: Map::new(),
        }
    }
}

// =============================================================================
// DISPLAY MODE
// =============================================================================

/// How the warning panel presents an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDisplayMode {
    /// Asset explicitly trusted
    Verified,
    /// Asset not (yet) trusted
    Unverified,
    /// Unverified-asset workflow disabled; plain acknowledgement only
    LegacyUnsupported,
}
