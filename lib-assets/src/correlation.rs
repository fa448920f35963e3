//! Discovery Correlation
//!
//! Resolves an asset's discovery transaction hash against the activity window
//! that is currently loaded for the account. The window is a recent page, not
//! full history, so a miss only means "not loaded", never "does not exist".

use serde::Serialize;

use crate::types::ActivityRecord;

/// Outcome of looking up a discovery hash
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Correlation<'a> {
    /// Asset carries no discovery hash
    None,
    /// A loaded activity has exactly this hash
    Matched { activity: &'a ActivityRecord },
    /// Hash not present in the loaded window; treat it as opaque
    Unmatched { hash: &'a str },
}

/// What clicking the discovery row should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscoveryAction<'a> {
    OpenActivity(&'a ActivityRecord),
    CopyHash(&'a str),
    Nothing,
}

impl<'a> Correlation<'a> {
    pub fn discovery_action(&self) -> DiscoveryAction<'a> {
        match *self {
            Correlation::Matched { activity } => DiscoveryAction::OpenActivity(activity),
            Correlation::Unmatched { hash } => DiscoveryAction::CopyHash(hash),
            Correlation::None => DiscoveryAction::Nothing,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Correlation::Matched { .. })
    }
}

/// Correlate a discovery hash with the loaded activities
///
/// Exact string comparison on `hash`. The slice is scanned in the order given
/// (newest first from the feed) and the first match wins. An empty hash is
/// treated as no hash.
pub fn correlate<'a>(
    discovery_tx_hash: Option<&'a str>,
    activities: &'a [ActivityRecord],
) -> Correlation<'a> {
    let Some(hash) = discovery_tx_hash.filter(|hash| !hash.is_empty()) else {
        return Correlation::None;
    };

    match activities.iter().find(|activity| activity.hash == hash) {
        Some(activity) => Correlation::Matched { activity },
        None => Correlation::Unmatched { hash },
    }
}
