//! lnconnect command-line front-end
//!
//! Manages the node profiles stored in the system keychain: inspect them, import a remote
//! configuration, switch profiles, fetch a receive address and create hosted accounts.

mod commands;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use lnconnect_app::adapters::KeyringSecureStore;
use lnconnect_app::AppStateBuilder;
use lnconnect_core::ImporterConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lnconnect", version, about = "Lightning node profile manager")]
struct Cli {
    /// Keychain service name the settings are stored under.
    #[arg(long, env = "LNCONNECT_KEYRING_SERVICE", default_value = "lnconnect")]
    keyring_service: String,

    /// Timeout for remote configuration requests, in seconds.
    #[arg(long, env = "LNCONNECT_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the saved profiles and the active one.
    Show,
    /// Import a remote configuration (`config=<url>`) and make it active.
    Import {
        /// Text containing a `config=<url>` reference.
        input: String,
    },
    /// Select the profile at INDEX.
    Select { index: usize },
    /// Remove the profile at INDEX.
    Remove { index: usize },
    /// Ask the active node for a new on-chain address.
    NewAddress,
    /// Create an account on a hosted backend.
    CreateAccount {
        /// Hosted backend address.
        #[arg(long, env = "LNCONNECT_HUB_HOST")]
        host: String,
        /// Accept invalid TLS certificates.
        #[arg(long)]
        insecure: bool,
        /// Save the new account as the active profile.
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();

    let state = match AppStateBuilder::new()
        .secure_store(Arc::new(KeyringSecureStore::with_service(
            cli.keyring_service.clone(),
        )))
        .importer_config(ImporterConfig {
            request_timeout: Duration::from_secs(cli.timeout),
            ..ImporterConfig::default()
        })
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize: {e}");
            return ExitCode::FAILURE;
        }
    };

    state.run_startup().await;

    let result = match cli.command {
        Commands::Show => {
            commands::show(&state);
            Ok(())
        }
        Commands::Import { input } => commands::import(&state, &input).await,
        Commands::Select { index } => commands::select(&state, index).await,
        Commands::Remove { index } => commands::remove(&state, index).await,
        Commands::NewAddress => commands::new_address(&state).await,
        Commands::CreateAccount {
            host,
            insecure,
            save,
        } => commands::create_account(&state, &host, !insecure, save).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
