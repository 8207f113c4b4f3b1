//! Subcommand handlers

use anyhow::{bail, Context, Result};
use lnconnect_app::AppState;
use lnconnect_core::lnconnect_backend::log_sanitizer::mask_secret;
use lnconnect_core::types::NodeProfile;

pub fn show(state: &AppState) {
    let snapshot = state.profile_store.snapshot();
    let active_index = snapshot.active.as_ref().map(|a| a.index);

    if snapshot.settings.nodes.is_empty() {
        println!("No node profiles saved.");
    }
    for (index, node) in snapshot.settings.nodes.iter().enumerate() {
        let marker = if Some(index) == active_index { "*" } else { " " };
        println!("{marker} [{index}] {}", describe(node));
    }

    if let Some(address) = snapshot.chain_address {
        println!("On-chain address: {address}");
    }
    if !snapshot.settings.nodes.is_empty() && snapshot.active.is_none() {
        println!("No usable profile is selected.");
    }
}

pub async fn import(state: &AppState, input: &str) -> Result<()> {
    let index = state
        .import_remote_config(input)
        .await
        .context("Failed to save imported profile")?;

    match index {
        Some(index) => {
            println!("Imported profile [{index}] and made it active.");
            Ok(())
        }
        None => match state.importer.last_error().await {
            Some(e) => bail!(e),
            None => bail!("Remote configuration import failed"),
        },
    }
}

pub async fn select(state: &AppState, index: usize) -> Result<()> {
    state.profile_store.select_node(index).await?;
    println!("Profile [{index}] is now active.");
    Ok(())
}

pub async fn remove(state: &AppState, index: usize) -> Result<()> {
    let removed = state.profile_store.remove_node(index).await?;
    println!("Removed [{index}] {}", describe(&removed));
    Ok(())
}

pub async fn new_address(state: &AppState) -> Result<()> {
    let address = state
        .address_manager
        .get_new_address()
        .await
        .context("Failed to get a new address")?;
    println!("{address}");
    Ok(())
}

pub async fn create_account(
    state: &AppState,
    host: &str,
    ssl_verification: bool,
    save: bool,
) -> Result<()> {
    let Some(credentials) = state.provisioner.create_account(host, ssl_verification).await else {
        let error = state.provisioner.state().await.error;
        bail!(error.unwrap_or_else(|| "Account creation failed".to_string()));
    };

    println!("Created account {}", credentials.login);
    if save {
        let index = state.adopt_hosted_account(host, ssl_verification).await?;
        println!("Saved as profile [{index}] and made it active.");
    } else {
        println!("Password: {}", credentials.password);
        println!("Not saved; rerun with --save to keep it as a profile.");
    }
    Ok(())
}

fn describe(node: &NodeProfile) -> String {
    let location = node
        .url
        .clone()
        .or_else(|| match (&node.host, &node.port) {
            (Some(host), Some(port)) => Some(format!("{host}:{port}")),
            (Some(host), None) => Some(host.clone()),
            _ => None,
        })
        .unwrap_or_else(|| "<no address>".to_string());

    let credential = node
        .macaroon_hex
        .as_deref()
        .or(node.access_key.as_deref())
        .filter(|s| !s.is_empty())
        .map_or_else(|| "no credentials".to_string(), mask_secret);

    let implementation = node
        .unrecognized_implementation
        .as_ref()
        .map_or_else(|| node.implementation.to_string(), |raw| format!("unsupported {raw}"));

    format!("{implementation} {location} ({credential})")
}
