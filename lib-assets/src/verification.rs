//! Verification Status
//!
//! Decides how an asset is presented given its metadata and whether the
//! unverified-asset workflow is enabled. The flag is always passed in; nothing
//! here reads process-wide state.

use crate::types::{Asset, AssetMetadata, VerificationDisplayMode};

/// Resolve the display mode for an asset
///
/// # Rules
///
/// 1. Feature disabled: always `LegacyUnsupported`, whatever `verified` says
/// 2. No metadata, or `verified` other than `Some(true)`: `Unverified`
/// 3. Otherwise: `Verified`
pub fn resolve_display_mode(
    metadata: Option<&AssetMetadata>,
    feature_enabled: bool,
) -> VerificationDisplayMode {
    if !feature_enabled {
        return VerificationDisplayMode::LegacyUnsupported;
    }

    match metadata {
        Some(m) if m.is_verified() => VerificationDisplayMode::Verified,
        _ => VerificationDisplayMode::Unverified,
    }
}

/// Whether the user has not (yet) trusted this asset
///
/// Independent of the feature flag: the banner title uses it even in legacy mode.
pub fn is_unverified_by_user(asset: &Asset) -> bool {
    !asset
        .metadata
        .as_ref()
        .map(AssetMetadata::is_verified)
        .unwrap_or(false)
}

/// Whether the asset should appear in asset listings
pub fn is_listed(asset: &Asset) -> bool {
    !asset
        .metadata
        .as_ref()
        .map(AssetMetadata::is_hidden)
        .unwrap_or(false)
}

/// Assets that survive the "don't show" decision
pub fn listed_assets<'a>(assets: &'a [Asset]) -> impl Iterator<Item = &'a Asset> + 'a {
    assets.iter().filter(|asset| is_listed(asset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(verified: Option<bool>) -> AssetMetadata {
        AssetMetadata {
            verified,
            ..AssetMetadata::default()
        }
    }

    #[test]
    fn test_feature_disabled_is_always_legacy() {
        for m in [None, Some(metadata(None)), Some(metadata(Some(false))), Some(metadata(Some(true)))] {
            assert_eq!(
                resolve_display_mode(m.as_ref(), false),
                VerificationDisplayMode::LegacyUnsupported
            );
        }
    }

    #[test]
    fn test_missing_metadata_is_unverified() {
        assert_eq!(
            resolve_display_mode(None, true),
            VerificationDisplayMode::Unverified
        );
    }

    #[test]
    fn test_explicit_flags() {
        assert_eq!(
            resolve_display_mode(Some(&metadata(Some(true))), true),
            VerificationDisplayMode::Verified
        );
        assert_eq!(
            resolve_display_mode(Some(&metadata(Some(false))), true),
            VerificationDisplayMode::Unverified
        );
        assert_eq!(
            resolve_display_mode(Some(&AssetMetadata::default()), true),
            VerificationDisplayMode::Unverified
        );
    }

    #[test]
    fn test_unverified_by_user() {
        let asset = Asset::new("FOO", "0x1");
        assert!(is_unverified_by_user(&asset));

        let trusted = asset.with_metadata(metadata(Some(true)));
        assert!(!is_unverified_by_user(&trusted));
    }

    #[test]
    fn test_hidden_assets_are_not_listed() {
        let shown = Asset::new("FOO", "0x1");
        let hidden = Asset::new("BAR", "0x2").with_metadata(AssetMetadata {
            hidden: Some(true),
            ..AssetMetadata::default()
        });
        let not_hidden = Asset::new("BAZ", "0x3").with_metadata(AssetMetadata {
            hidden: Some(false),
            ..AssetMetadata::default()
        });

        let assets = vec![shown, hidden, not_hidden];
        let symbols: Vec<&str> = listed_assets(&assets).map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["FOO", "BAZ"]);
    }
}
