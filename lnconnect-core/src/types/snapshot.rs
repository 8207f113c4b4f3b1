use super::{ActiveProfile, Settings};

/// Point-in-time view of a [`NodeProfileStore`](crate::services::NodeProfileStore),
/// published to subscribers after every load or mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub settings: Settings,
    /// Projection of the selected profile; `None` when the selection is out of range.
    pub active: Option<ActiveProfile>,
    /// Mirror of `settings.on_chain_address`.
    pub chain_address: Option<String>,
    pub loading: bool,
}

impl StoreSnapshot {
    /// Rebuild the derived fields from `settings`.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            active: ActiveProfile::project(&settings),
            chain_address: settings.on_chain_address.clone(),
            settings,
            loading: false,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(ActiveProfile::has_credentials)
    }
}
