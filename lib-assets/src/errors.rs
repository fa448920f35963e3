//! Asset Warning Errors

use thiserror::Error;

use crate::types::VerificationDisplayMode;
use crate::warning::PanelAction;

/// Error during asset warning operations
///
/// The decision functions themselves are total; these errors only come from
/// collaborators (store, clipboard) or from asking the panel for an action
/// it does not offer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Metadata write rejected: {0}")]
    Persistence(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Action {action:?} is not offered in {mode:?} mode")]
    ActionUnavailable {
        action: PanelAction,
        mode: VerificationDisplayMode,
    },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}

/// Result type for asset warning operations
pub type AssetResult<T> = Result<T, AssetError>;
