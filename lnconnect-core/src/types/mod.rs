//! Type definition module

mod lenient;
mod node;
mod remote_config;
mod settings;
mod snapshot;

pub use node::{ActiveProfile, NodeProfile};
pub use remote_config::{
    implementation_for_remote_type, RemoteConfigDocument, RemoteConfiguration,
    SUPPORTED_REMOTE_TYPES,
};
pub use settings::Settings;
pub use snapshot::StoreSnapshot;

// Re-export backend library types
pub use lnconnect_backend::{HostedAccountCredentials, Implementation, NewAddress};
