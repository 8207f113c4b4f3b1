//! Node profile store
//!
//! Owns the in-memory settings aggregate, keeps the active-profile projection in step with it
//! and writes every mutation back through the [`CredentialVault`].

use tokio::sync::{watch, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::types::{ActiveProfile, NodeProfile, Settings, StoreSnapshot};

use super::CredentialVault;

/// Node profile store
///
/// Vault operations are serialized by an internal mutex, so a load never interleaves with a
/// write. `set_settings` replaces the whole aggregate (last writer wins); use
/// [`NodeProfileStore::update_settings`] to change a part of it without losing concurrent
/// changes to other parts.
pub struct NodeProfileStore {
    vault: CredentialVault,
    op_lock: Mutex<()>,
    state: watch::Sender<StoreSnapshot>,
}

impl NodeProfileStore {
    #[must_use]
    pub fn new(vault: CredentialVault) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            vault,
            op_lock: Mutex::new(()),
            state,
        }
    }

    // === Read side ===

    /// Current state, including the derived projection.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    /// Receive a new snapshot after every load or mutation.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    pub fn settings(&self) -> Settings {
        self.state.borrow().settings.clone()
    }

    pub fn active_profile(&self) -> Option<ActiveProfile> {
        self.state.borrow().active.clone()
    }

    pub fn chain_address(&self) -> Option<String> {
        self.state.borrow().chain_address.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Whether the active profile carries a non-empty macaroon or access key.
    pub fn has_credentials(&self) -> bool {
        self.state.borrow().has_credentials()
    }

    // === Load / store ===

    /// Reload settings from the vault.
    ///
    /// Returns the stored settings, or `None` on a first run, an unreadable keystore or a
    /// malformed blob. In every `None` case the in-memory state is reset to empty.
    pub async fn get_settings(&self) -> Option<Settings> {
        let _guard = self.op_lock.lock().await;
        self.set_loading(true);

        let loaded = match self.vault.load().await {
            Ok(Some(raw)) => match Settings::from_json(&raw) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Ignoring stored settings: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Settings unavailable, starting without a profile: {e}");
                None
            }
        };

        let settings = loaded.clone().unwrap_or_default();
        log::info!(
            "Loaded {} node profile(s), active index {:?}",
            settings.nodes.len(),
            settings.selected_node
        );
        self.publish(settings);
        loaded
    }

    /// Persist `settings` as the whole aggregate.
    pub async fn set_settings(&self, settings: &Settings) -> CoreResult<()> {
        let _guard = self.op_lock.lock().await;
        self.persist_locked(settings.clone()).await
    }

    /// Apply `f` to the current aggregate and persist the result atomically.
    ///
    /// Nothing is written when `f` fails.
    pub async fn update_settings<F>(&self, f: F) -> CoreResult<Settings>
    where
        F: FnOnce(&mut Settings) -> CoreResult<()>,
    {
        let _guard = self.op_lock.lock().await;
        let mut settings = self.settings();
        f(&mut settings)?;
        self.persist_locked(settings.clone()).await?;
        Ok(settings)
    }

    // === Profile list ===

    /// Make the profile at `index` the active one.
    pub async fn select_node(&self, index: usize) -> CoreResult<()> {
        self.update_settings(|settings| {
            ensure_index(settings, index)?;
            settings.select(index);
            Ok(())
        })
        .await?;
        log::info!("Selected node profile {index}");
        Ok(())
    }

    /// Append a profile, optionally selecting it. Returns its index.
    pub async fn add_node(&self, profile: NodeProfile, select: bool) -> CoreResult<usize> {
        let settings = self
            .update_settings(|settings| {
                settings.nodes.push(profile);
                if select {
                    settings.select(settings.nodes.len() - 1);
                }
                Ok(())
            })
            .await?;
        let index = settings.nodes.len() - 1;
        log::info!("Added node profile {index}");
        Ok(index)
    }

    /// Remove the profile at `index`, keeping the selection on the same profile when possible.
    ///
    /// Removing the active profile falls back to the first one.
    pub async fn remove_node(&self, index: usize) -> CoreResult<NodeProfile> {
        let mut removed = None;
        self.update_settings(|settings| {
            ensure_index(settings, index)?;
            removed = Some(settings.nodes.remove(index));

            match settings.selected_index() {
                Some(selected) if selected > index => settings.select(selected - 1),
                Some(selected) if selected == index => settings.select(0),
                _ => {}
            }
            Ok(())
        })
        .await?;
        log::info!("Removed node profile {index}");
        removed.ok_or_else(|| CoreError::ValidationError(format!("no node at index {index}")))
    }

    // === Internals ===

    async fn persist_locked(&self, settings: Settings) -> CoreResult<()> {
        self.set_loading(true);

        let raw = match settings.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                self.set_loading(false);
                return Err(e);
            }
        };

        if let Err(e) = self.vault.save(&raw).await {
            self.set_loading(false);
            return Err(e);
        }

        self.publish(settings);
        Ok(())
    }

    fn publish(&self, settings: Settings) {
        self.state.send_replace(StoreSnapshot::from_settings(settings));
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|snapshot| snapshot.loading = loading);
    }
}

fn ensure_index(settings: &Settings, index: usize) -> CoreResult<()> {
    if index < settings.nodes.len() {
        Ok(())
    } else {
        Err(CoreError::ValidationError(format!(
            "node index {index} out of range ({} profiles)",
            settings.nodes.len()
        )))
    }
}
