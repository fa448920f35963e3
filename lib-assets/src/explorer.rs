//! Block explorer registry
//!
//! Maps chain ids to explorer base URLs so the panel can link a contract
//! address. Networks without an entry get no link.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Network;

/// Explorers for the built-in networks, keyed by chain id
pub const BUILT_IN_EXPLORERS: &[(&str, &str)] = &[
    ("1", "https://etherscan.io"),
    ("5", "https://goerli.etherscan.io"),
    ("10", "https://optimistic.etherscan.io"),
    ("30", "https://explorer.rsk.co"),
    ("56", "https://bscscan.com"),
    ("137", "https://polygonscan.com"),
    ("42161", "https://arbiscan.io"),
    ("43114", "https://snowtrace.io"),
];

/// Chain id -> explorer base URL
///
/// Deserialized entries go through [`BlockExplorers::insert`], so URLs read
/// from config are trimmed the same way as programmatic ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct BlockExplorers {
    urls: HashMap<String, String>,
}

impl From<HashMap<String, String>> for BlockExplorers {
    fn from(urls: HashMap<String, String>) -> Self {
        let mut explorers = Self::empty();
        for (chain_id, url) in urls {
            explorers.insert(chain_id, url);
        }
        explorers
    }
}

impl From<BlockExplorers> for HashMap<String, String> {
    fn from(explorers: BlockExplorers) -> Self {
        explorers.urls
    }
}

impl Default for BlockExplorers {
    fn default() -> Self {
        let mut explorers = Self::empty();
        for (chain_id, url) in BUILT_IN_EXPLORERS {
            explorers.insert(*chain_id, *url);
        }
        explorers
    }
}

impl BlockExplorers {
    /// Registry with no explorers at all
    pub fn empty() -> Self {
        Self {
            urls: HashMap::new(),
        }
    }

    /// Add or replace an explorer
    pub fn insert(&mut self, chain_id: impl Into<String>, url: impl Into<String>) {
        let url = url.into();
        self.urls
            .insert(chain_id.into(), url.trim_end_matches('/').to_string());
    }

    /// Overlay `overrides` on top of this registry
    pub fn extend(&mut self, overrides: &BlockExplorers) {
        for (chain_id, url) in &overrides.urls {
            self.insert(chain_id.clone(), url.clone());
        }
    }

    pub fn url_for(&self, network: &Network) -> Option<&str> {
        self.urls.get(&network.chain_id).map(String::as_str)
    }

    /// `{explorer}/token/{address}`, if the network has an explorer and the address is set
    pub fn token_url(&self, network: &Network, contract_address: &str) -> Option<String> {
        if contract_address.is_empty() {
            return None;
        }
        self.url_for(network)
            .map(|base| format!("{}/token/{}", base, contract_address))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
