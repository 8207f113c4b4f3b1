//! # lnconnect-backend
//!
//! A small abstraction over the Lightning node APIs a wallet client can be pointed at.
//!
//! ## Supported Backends
//!
//! | Backend | Feature Flag | Auth Method |
//! |---------|-------------|-------------|
//! | [lnd](https://github.com/lightningnetwork/lnd) REST | `lnd` | `Grpc-Metadata-macaroon` header (hex) |
//! | [c-lightning-REST](https://github.com/Ride-The-Lightning/c-lightning-REST) | `clightning` | `macaroon` header (hex) |
//! | [LndHub](https://github.com/BlueWallet/LndHub) | `lndhub` | Bearer access key |
//!
//! ## Feature Flags
//!
//! - **`all-backends`** *(default)* - Enable all backends listed above.
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lnconnect_backend::{create_backend, BackendConnection, Implementation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(BackendConnection {
//!         host: Some("127.0.0.1".to_string()),
//!         port: Some("8080".to_string()),
//!         macaroon_hex: Some("0201036c6e64".to_string()),
//!         implementation: Implementation::Lnd,
//!         ..BackendConnection::default()
//!     })?;
//!
//!     let address = backend.new_address().await?;
//!     println!("{}", address.address);
//!     Ok(())
//! }
//! ```

mod backends;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{BackendError, Result};
pub use factory::{create_backend, enabled_implementations};
pub use http_client::HttpUtils;
pub use traits::NodeBackend;
pub use types::{BackendConnection, HostedAccountCredentials, Implementation, NewAddress};
pub use utils::log_sanitizer;

#[cfg(feature = "clightning")]
pub use backends::ClightningRestBackend;
#[cfg(feature = "lnd")]
pub use backends::LndRestBackend;
#[cfg(feature = "lndhub")]
pub use backends::LndHubBackend;
