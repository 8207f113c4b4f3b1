//! Shared test helpers

#![allow(dead_code)]

use std::sync::Arc;

use lnconnect_backend::{BackendConnection, Implementation, NodeBackend, create_backend};
use wiremock::MockServer;

pub const TEST_MACAROON: &str = "0201036c6e640258030a10";
pub const TEST_ACCESS_KEY: &str = "hub-access-token";

/// Connection pointed at a mock server through the explicit `url` override.
pub fn connection_for(server: &MockServer, implementation: Implementation) -> BackendConnection {
    let (macaroon_hex, access_key) = if implementation.uses_access_key() {
        (None, Some(TEST_ACCESS_KEY.to_string()))
    } else {
        (Some(TEST_MACAROON.to_string()), None)
    };

    BackendConnection {
        url: Some(server.uri()),
        macaroon_hex,
        access_key,
        implementation,
        ssl_verification: true,
        ..BackendConnection::default()
    }
}

/// Build a backend against a mock server (fails the test if creation fails).
pub fn backend_for(server: &MockServer, implementation: Implementation) -> Arc<dyn NodeBackend> {
    match create_backend(connection_for(server, implementation)) {
        Ok(backend) => backend,
        Err(e) => panic!("failed to create {implementation} backend: {e}"),
    }
}
