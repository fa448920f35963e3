//! Wallet snapshot file
//!
//! A JSON export of the wallet state the panel needs: the active network,
//! the asset registry and the loaded activity window. `FileSnapshotStore`
//! writes metadata decisions back into the same file.

use async_trait::async_trait;
use lib_assets::{
    ActivityRecord, Asset, AssetError, AssetKey, AssetMetadata, AssetMetadataStore, AssetResult,
    Network,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Current account activity, newest first
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    /// Sections owned by other wallet components, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WalletSnapshot {
    /// Find an asset by symbol or contract address
    pub fn find_asset(&self, query: &str) -> CliResult<&Asset> {
        self.assets
            .iter()
            .find(|asset| asset.matches(query))
            .ok_or_else(|| CliError::AssetNotFound(query.to_string()))
    }

    /// Replace the metadata of the asset with `key`; false if absent
    pub fn set_metadata(&mut self, key: &AssetKey, metadata: AssetMetadata) -> bool {
        match self.assets.iter_mut().find(|asset| &asset.key() == key) {
            Some(asset) => {
                asset.metadata = Some(metadata);
                true
            }
            None => false,
        }
    }
}

pub async fn read_snapshot(path: &Path) -> CliResult<WalletSnapshot> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::SnapshotReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    serde_json::from_str(&raw).map_err(|e| CliError::SnapshotReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write the snapshot through a sibling temp file and rename it into place
pub async fn write_snapshot(path: &Path, snapshot: &WalletSnapshot) -> CliResult<()> {
    let write_failed = |reason: String| CliError::SnapshotWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let body = serde_json::to_string_pretty(snapshot)?;
    let tmp_path = temp_path_for(path);

    tokio::fs::write(&tmp_path, body)
        .await
        .map_err(|e| write_failed(e.to_string()))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| write_failed(e.to_string()))?;

    debug!(path = %path.display(), "snapshot written");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot.json".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Metadata store backed by a snapshot file
///
/// Each update re-reads the file, so writes from earlier calls are always
/// visible. Updates are serialized by an async mutex.
pub struct FileSnapshotStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AssetMetadataStore for FileSnapshotStore {
    async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> AssetResult<()> {
        let _guard = self.lock.lock().await;
        let key = asset.key();

        let mut snapshot = read_snapshot(&self.path)
            .await
            .map_err(|e| AssetError::Persistence(e.to_string()))?;

        if !snapshot.set_metadata(&key, metadata) {
            return Err(AssetError::AssetNotFound(key.to_string()));
        }

        write_snapshot(&self.path, &snapshot)
            .await
            .map_err(|e| AssetError::Persistence(e.to_string()))?;

        info!(asset = %key, path = %self.path.display(), "metadata persisted to snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_snapshot() -> WalletSnapshot {
        serde_json::from_value(json!({
            "network": { "chainId": "1", "name": "Ethereum" },
            "assets": [
                {
                    "symbol": "SCAM",
                    "contractAddress": "0xAAAA000000000000000000000000000000000001",
                    "metadata": { "discoveryTxHash": "0xDEAD", "tokenLists": [] }
                },
                { "symbol": "ETH" }
            ],
            "activities": [
                { "hash": "0xDEAD", "blockHeight": 17000000 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_fixture_snapshot_parses() {
        let snapshot: WalletSnapshot =
            serde_json::from_str(include_str!("../fixtures/wallet.json")).unwrap();
        assert_eq!(snapshot.assets.len(), 4);

        let dai = snapshot.find_asset("dai").unwrap();
        assert!(dai.metadata.as_ref().unwrap().is_verified());
        assert!(dai.metadata.as_ref().unwrap().extra.contains_key("tokenLists"));

        let airdrop = snapshot.find_asset("AIRDROP").unwrap();
        let hash = airdrop.discovery_tx_hash().unwrap();
        assert!(snapshot.activities.iter().any(|a| a.hash == hash));
    }

    #[test]
    fn test_find_asset_by_symbol_or_address() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.find_asset("scam").unwrap().symbol, "SCAM");
        assert_eq!(
            snapshot
                .find_asset("0xaaaa000000000000000000000000000000000001")
                .unwrap()
                .symbol,
            "SCAM"
        );
        assert!(matches!(
            snapshot.find_asset("DAI"),
            Err(CliError::AssetNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        write_snapshot(&path, &sample_snapshot()).await.unwrap();

        let store = FileSnapshotStore::new(&path);
        let snapshot = read_snapshot(&path).await.unwrap();
        let asset = snapshot.find_asset("SCAM").unwrap();

        let mut metadata = asset.metadata.clone().unwrap();
        metadata.verified = Some(true);
        store
            .update_asset_metadata(asset, metadata)
            .await
            .unwrap();

        let reloaded = read_snapshot(&path).await.unwrap();
        let saved = reloaded.find_asset("SCAM").unwrap().metadata.clone().unwrap();
        assert_eq!(saved.verified, Some(true));
        assert_eq!(saved.discovery_tx_hash.as_deref(), Some("0xDEAD"));
        assert!(saved.extra.contains_key("tokenLists"));
        assert!(!dir.path().join(".wallet.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_update_leaves_unrelated_fields_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        let raw = json!({
            "network": { "chainId": "1", "name": "Ethereum", "family": "EVM" },
            "assets": [
                {
                    "symbol": "SCAM",
                    "contractAddress": "0xAAAA000000000000000000000000000000000001",
                    "decimals": 18,
                    "metadata": { "discoveryTxHash": "0xDEAD" }
                },
                {
                    "symbol": "DAI",
                    "contractAddress": "0x6b175474e89094c44da98b954eedeac495271d0f",
                    "decimals": 18,
                    "metadata": { "verified": true }
                }
            ],
            "activities": [],
            "accountAddress": "0x1111111111111111111111111111111111111111"
        });
        tokio::fs::write(&path, raw.to_string()).await.unwrap();

        let before = read_snapshot(&path).await.unwrap();
        let scam = before.find_asset("SCAM").unwrap();
        let mut metadata = scam.metadata.clone().unwrap();
        metadata.hidden = Some(true);
        FileSnapshotStore::new(&path)
            .update_asset_metadata(scam, metadata)
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(written["network"]["family"], json!("EVM"));
        assert_eq!(written["assets"][0]["decimals"], json!(18));
        assert_eq!(written["assets"][0]["metadata"]["hidden"], json!(true));
        assert_eq!(written["assets"][1], raw["assets"][1]);
        assert_eq!(written["accountAddress"], raw["accountAddress"]);
    }

    #[tokio::test]
    async fn test_store_rejects_unknown_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        write_snapshot(&path, &sample_snapshot()).await.unwrap();

        let store = FileSnapshotStore::new(&path);
        let stranger = Asset::new("DAI", "0x6b175474e89094c44da98b954eedeac495271d0f");
        let result = store
            .update_asset_metadata(&stranger, AssetMetadata::default())
            .await;
        assert!(matches!(result, Err(AssetError::AssetNotFound(_))));
    }

    #[tokio::test]
    async fn test_store_surfaces_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("missing.json"));
        let asset = Asset::new("SCAM", "0x1");
        let result = store
            .update_asset_metadata(&asset, AssetMetadata::default())
            .await;
        assert!(matches!(result, Err(AssetError::Persistence(_))));
    }
}
