//! Unverified Asset Warning
//!
//! Decision logic behind the panel a wallet shows when it meets a fungible
//! token contract that is not on a curated list.
//!
//! # Key Types
//!
//! - [`AssetMetadata`]: Stored verification flag and discovery provenance
//! - [`VerificationDisplayMode`]: Verified, unverified or legacy presentation
//! - [`Correlation`]: Discovery hash resolved against the loaded activity window
//! - [`AssetWarning`]: Panel view-model and action handlers
//!
//! # Decisions
//!
//! [`resolve_display_mode`], [`correlate`] and [`apply_verification`] are pure.
//! Persistence and UI effects go through [`AssetMetadataStore`] and
//! [`PanelHost`], implemented by the embedding application.

pub mod correlation;
pub mod errors;
pub mod explorer;
pub mod format;
pub mod metadata;
pub mod types;
pub mod verification;
pub mod warning;

pub use correlation::{correlate, Correlation, DiscoveryAction};
pub use errors::*;
pub use explorer::BlockExplorers;
pub use format::truncate_address;
pub use metadata::{apply_verification, VerificationDecision};
pub use types::*;
pub use verification::{is_listed, is_unverified_by_user, listed_assets, resolve_display_mode};
pub use warning::{
    available_actions, ActionOutcome, AssetDetails, AssetMetadataStore, AssetWarning, Banner,
    BannerDescription, BannerTitle, DiscoveryOutcome, DiscoveryRow, Notice, PanelAction, PanelHost,
};
