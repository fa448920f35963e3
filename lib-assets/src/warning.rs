//! Asset Warning Panel
//!
//! View-model and action handling for the panel shown when the wallet meets a
//! token contract outside the curated lists. Rendering, translations and the
//! reactive store live in the UI-binding layer; it implements [`PanelHost`]
//! and [`AssetMetadataStore`] and hands snapshots in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::correlation::{correlate, Correlation, DiscoveryAction};
use crate::errors::{AssetError, AssetResult};
use crate::explorer::BlockExplorers;
use crate::format::truncate_address;
use crate::metadata::{apply_verification, VerificationDecision};
use crate::types::{ActivityRecord, Asset, AssetMetadata, Network, VerificationDisplayMode};
use crate::verification::{is_unverified_by_user, resolve_display_mode};

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Persists metadata for an asset in the registry
///
/// Implementations must make the write visible to subsequent reads of the
/// asset before returning `Ok`.
#[async_trait]
pub trait AssetMetadataStore: Send + Sync {
    async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> AssetResult<()>;
}

/// Short transient confirmations (snackbar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    AssetUpdated,
    CopiedToClipboard,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::AssetUpdated => write!(f, "Asset updated"),
            Notice::CopiedToClipboard => write!(f, "Copied to clipboard"),
        }
    }
}

/// UI-side effects the panel can trigger
pub trait PanelHost: Send + Sync {
    fn notify(&self, notice: Notice);

    fn copy_to_clipboard(&self, text: &str) -> AssetResult<()>;

    /// `None` means "no navigation"
    fn open_activity_details(&self, activity: Option<&ActivityRecord>);

    fn close(&self);
}

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerTitle {
    Verified,
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerDescription {
    /// Explains the verify / don't-show workflow
    Current,
    /// Plain caution text used while the workflow is disabled
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: BannerTitle,
    pub description: BannerDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryRow<'a> {
    pub hash: &'a str,
    pub display: String,
    pub correlation: Correlation<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDetails<'a> {
    pub symbol: &'a str,
    pub contract_address: &'a str,
    pub contract_display: String,
    /// `None` disables the contract button
    pub contract_link: Option<String>,
    pub discovery: Option<DiscoveryRow<'a>>,
}

/// Buttons the panel can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAction {
    /// Dismiss without touching metadata (legacy mode)
    Close,
    /// Hide the asset from listings
    DontShow,
    /// Mark the asset as verified
    AddToAssetList,
}

impl PanelAction {
    /// Metadata decision carried by this action, if any
    pub fn decision(&self) -> Option<VerificationDecision> {
        match self {
            PanelAction::Close => None,
            PanelAction::DontShow => Some(VerificationDecision::Hide),
            PanelAction::AddToAssetList => Some(VerificationDecision::Trust),
        }
    }
}

/// Buttons offered for a display mode
pub fn available_actions(mode: VerificationDisplayMode) -> Vec<PanelAction> {
    match mode {
        VerificationDisplayMode::LegacyUnsupported => vec![PanelAction::Close],
        VerificationDisplayMode::Unverified => {
            vec![PanelAction::DontShow, PanelAction::AddToAssetList]
        }
        VerificationDisplayMode::Verified => vec![PanelAction::DontShow],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Panel closed, nothing persisted
    Dismissed,
    /// Metadata persisted, user notified, panel closed
    Updated(AssetMetadata),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// Activity detail view opened
    Navigated,
    /// Hash copied to the clipboard
    Copied,
    /// Asset has no discovery hash
    Absent,
}

// =============================================================================
// PANEL
// =============================================================================

/// Warning panel for one asset, over borrowed snapshots
pub struct AssetWarning<'a> {
    asset: &'a Asset,
    activities: &'a [ActivityRecord],
    network: Option<&'a Network>,
    explorers: &'a BlockExplorers,
    feature_enabled: bool,
}

impl<'a> AssetWarning<'a> {
    pub fn new(
        asset: &'a Asset,
        activities: &'a [ActivityRecord],
        network: Option<&'a Network>,
        explorers: &'a BlockExplorers,
        feature_enabled: bool,
    ) -> Self {
        Self {
            asset,
            activities,
            network,
            explorers,
            feature_enabled,
        }
    }

    pub fn asset(&self) -> &'a Asset {
        self.asset
    }

    pub fn display_mode(&self) -> VerificationDisplayMode {
        resolve_display_mode(self.asset.metadata.as_ref(), self.feature_enabled)
    }

    pub fn banner(&self) -> Banner {
        let title = if is_unverified_by_user(self.asset) {
            BannerTitle::Unverified
        } else {
            BannerTitle::Verified
        };
        let description = if self.feature_enabled {
            BannerDescription::Current
        } else {
            BannerDescription::Legacy
        };
        Banner { title, description }
    }

    pub fn correlation(&self) -> Correlation<'a> {
        correlate(self.asset.discovery_tx_hash(), self.activities)
    }

    pub fn details(&self) -> AssetDetails<'a> {
        let contract_address = self.asset.contract_address();
        let contract_link = self
            .network
            .and_then(|network| self.explorers.token_url(network, contract_address));

        let discovery = self.asset.discovery_tx_hash().map(|hash| DiscoveryRow {
            hash,
            display: truncate_address(hash),
            correlation: self.correlation(),
        });

        AssetDetails {
            symbol: &self.asset.symbol,
            contract_address,
            contract_display: truncate_address(contract_address),
            contract_link,
            discovery,
        }
    }

    pub fn actions(&self) -> Vec<PanelAction> {
        available_actions(self.display_mode())
    }

    /// Run a panel button
    ///
    /// Decisions are persisted first; only a successful write is followed by
    /// the confirmation notice and closing the panel.
    pub async fn perform(
        &self,
        action: PanelAction,
        store: &dyn AssetMetadataStore,
        host: &dyn PanelHost,
    ) -> AssetResult<ActionOutcome> {
        let mode = self.display_mode();
        if !available_actions(mode).contains(&action) {
            return Err(AssetError::ActionUnavailable { action, mode });
        }

        let Some(decision) = action.decision() else {
            host.close();
            return Ok(ActionOutcome::Dismissed);
        };

        let metadata = apply_verification(self.asset.metadata.as_ref(), &decision.patch());

        if let Err(e) = store
            .update_asset_metadata(self.asset, metadata.clone())
            .await
        {
            warn!(asset = %self.asset.key(), ?decision, error = %e, "metadata update failed");
            return Err(e);
        }

        info!(asset = %self.asset.key(), ?decision, "asset metadata updated");
        host.notify(Notice::AssetUpdated);
        host.close();

        Ok(ActionOutcome::Updated(metadata))
    }

    /// Click on the discovery transaction row
    pub fn open_discovery(&self, host: &dyn PanelHost) -> AssetResult<DiscoveryOutcome> {
        match self.correlation().discovery_action() {
            DiscoveryAction::OpenActivity(activity) => {
                debug!(hash = %activity.hash, "discovery transaction found in activity window");
                host.open_activity_details(Some(activity));
                Ok(DiscoveryOutcome::Navigated)
            }
            DiscoveryAction::CopyHash(hash) => {
                debug!(hash, "discovery transaction outside activity window, copying hash");
                host.copy_to_clipboard(hash)?;
                host.notify(Notice::CopiedToClipboard);
                Ok(DiscoveryOutcome::Copied)
            }
            DiscoveryAction::Nothing => Ok(DiscoveryOutcome::Absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_for<'a>(
        asset: &'a Asset,
        explorers: &'a BlockExplorers,
        network: Option<&'a Network>,
        feature_enabled: bool,
    ) -> AssetWarning<'a> {
        AssetWarning::new(asset, &[], network, explorers, feature_enabled)
    }

    #[test]
    fn test_actions_per_mode() {
        assert_eq!(
            available_actions(VerificationDisplayMode::LegacyUnsupported),
            vec![PanelAction::Close]
        );
        assert_eq!(
            available_actions(VerificationDisplayMode::Unverified),
            vec![PanelAction::DontShow, PanelAction::AddToAssetList]
        );
        assert_eq!(
            available_actions(VerificationDisplayMode::Verified),
            vec![PanelAction::DontShow]
        );
    }

    #[test]
    fn test_banner_title_ignores_feature_flag() {
        let explorers = BlockExplorers::default();
        let trusted = Asset::new("FOO", "0x1").with_metadata(AssetMetadata {
            verified: Some(true),
            ..AssetMetadata::default()
        });

        let banner = panel_for(&trusted, &explorers, None, false).banner();
        assert_eq!(banner.title, BannerTitle::Verified);
        assert_eq!(banner.description, BannerDescription::Legacy);

        let untrusted = Asset::new("BAR", "0x2");
        let banner = panel_for(&untrusted, &explorers, None, true).banner();
        assert_eq!(banner.title, BannerTitle::Unverified);
        assert_eq!(banner.description, BannerDescription::Current);
    }

    #[test]
    fn test_details_contract_link() {
        let explorers = BlockExplorers::default();
        let mainnet = Network::new("1", "Ethereum");
        let asset = Asset::new("DAI", "0x6b175474e89094c44da98b954eedeac495271d0f");

        let details = panel_for(&asset, &explorers, Some(&mainnet), true).details();
        assert_eq!(details.symbol, "DAI");
        assert_eq!(details.contract_display, "0x6b17…71d0f");
        assert_eq!(
            details.contract_link.as_deref(),
            Some("https://etherscan.io/token/0x6b175474e89094c44da98b954eedeac495271d0f")
        );
        assert!(details.discovery.is_none());

        let details = panel_for(&asset, &explorers, None, true).details();
        assert!(details.contract_link.is_none());
    }

    #[test]
    fn test_details_discovery_row() {
        let explorers = BlockExplorers::default();
        let asset = Asset::new("FOO", "0x1").with_metadata(AssetMetadata::discovered_in(
            "0xdeadbeefdeadbeefdeadbeef",
        ));

        let details = panel_for(&asset, &explorers, None, true).details();
        let row = details.discovery.expect("discovery row");
        assert_eq!(row.hash, "0xdeadbeefdeadbeefdeadbeef");
        assert_eq!(row.display, "0xdead…dbeef");
        assert_eq!(
            row.correlation,
            Correlation::Unmatched { hash: "0xdeadbeefdeadbeefdeadbeef" }
        );
    }

    #[test]
    fn test_empty_discovery_hash_has_no_row() {
        let explorers = BlockExplorers::default();
        let asset = Asset::new("FOO", "0x1").with_metadata(AssetMetadata::discovered_in(""));
        let panel = panel_for(&asset, &explorers, None, true);

        assert!(panel.details().discovery.is_none());
        assert_eq!(panel.correlation(), Correlation::None);
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::AssetUpdated.to_string(), "Asset updated");
        assert_eq!(Notice::CopiedToClipboard.to_string(), "Copied to clipboard");
    }
}
