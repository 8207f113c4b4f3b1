//! Persisted settings aggregate

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

use super::{lenient, NodeProfile};

/// The single settings blob kept in the secure store.
///
/// Field names are a durable compatibility surface: renaming one breaks existing installs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, deserialize_with = "lenient::list")]
    pub nodes: Vec<NodeProfile>,
    /// Raw selection. Negative values (or values that were not an index) select nothing.
    #[serde(
        default,
        deserialize_with = "lenient::index",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_node: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_chain_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lurker_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    /// Top-level fields this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Parse a persisted blob.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        serde_json::from_str(raw).map_err(|e| CoreError::MalformedPersistedData(e.to_string()))
    }

    /// Serialize for the secure store.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// The selected index, with an absent selection meaning the first profile.
    ///
    /// `None` when the stored selection is negative.
    pub fn selected_index(&self) -> Option<usize> {
        match self.selected_node {
            None => Some(0),
            Some(raw) => usize::try_from(raw).ok(),
        }
    }

    /// Point the selection at `index`.
    pub fn select(&mut self, index: usize) {
        self.selected_node = Some(i64::try_from(index).unwrap_or(i64::MAX));
    }

    /// The profile at the selected index, if it exists.
    pub fn active_node(&self) -> Option<&NodeProfile> {
        self.nodes.get(self.selected_index()?)
    }
}
