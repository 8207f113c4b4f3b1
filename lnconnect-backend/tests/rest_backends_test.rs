#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Backend request/response tests against a local mock node.

mod common;

use lnconnect_backend::{BackendConnection, BackendError, Implementation, create_backend};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TEST_ACCESS_KEY, TEST_MACAROON, backend_for, connection_for};

#[tokio::test]
async fn lnd_new_address_sends_macaroon_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/newaddress"))
        .and(header("Grpc-Metadata-macaroon", TEST_MACAROON))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "bc1qlnd000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::Lnd);
    let address = backend.new_address().await.unwrap();
    assert_eq!(address.address, "bc1qlnd000");
}

#[tokio::test]
async fn lnd_rejected_macaroon_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/newaddress"))
        .respond_with(ResponseTemplate::new(401).set_body_string("verification failed"))
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::Lnd);
    let result = backend.new_address().await;
    assert!(
        matches!(result, Err(BackendError::InvalidCredentials { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn clightning_new_address_uses_hex_encoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/newaddr"))
        .and(header("macaroon", TEST_MACAROON))
        .and(header("encodingtype", "hex"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bech32": "bc1qcln000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::ClightningRest);
    let address = backend.new_address().await.unwrap();
    assert_eq!(address.address, "bc1qcln000");
}

#[tokio::test]
async fn clightning_cannot_create_accounts() {
    let server = MockServer::start().await;
    let backend = backend_for(&server, Implementation::ClightningRest);

    let result = backend.create_account().await;
    assert!(
        matches!(&result, Err(BackendError::Unsupported { operation, .. }) if operation == "create_account"),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn lndhub_create_account_posts_partner_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .and(body_json(json!({
            "partnerid": "bluewallet",
            "accounttype": "common"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "alice",
            "password": "s3cret"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::LndHub);
    let creds = backend.create_account().await.unwrap();
    assert_eq!(creds.login, "alice");
    assert_eq!(creds.password, "s3cret");
}

#[tokio::test]
async fn lndhub_new_address_takes_first_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getbtc"))
        .and(header("authorization", format!("Bearer {TEST_ACCESS_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "address": "bc1qhub001" },
            { "address": "bc1qhub002" }
        ])))
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::LndHub);
    let address = backend.new_address().await.unwrap();
    assert_eq!(address.address, "bc1qhub001");
}

fn hub_account_connection(server: &MockServer, access_key: &str) -> BackendConnection {
    BackendConnection {
        access_key: Some(access_key.to_string()),
        ..connection_for(server, Implementation::LndHub)
    }
}

#[tokio::test]
async fn lndhub_login_password_is_exchanged_for_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(query_param("type", "auth"))
        .and(body_json(json!({ "login": "alice", "password": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "hub-session",
            "refresh_token": "hub-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getbtc"))
        .and(header("authorization", "Bearer hub-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "address": "bc1qhub777" }])))
        .expect(1)
        .mount(&server)
        .await;

    let backend = create_backend(hub_account_connection(&server, "alice:s3cret")).unwrap();
    let address = backend.new_address().await.unwrap();
    assert_eq!(address.address, "bc1qhub777");
}

#[tokio::test]
async fn lndhub_rejected_login_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad auth"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getbtc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "address": "bc1qnever" }])))
        .expect(0)
        .mount(&server)
        .await;

    let backend = create_backend(hub_account_connection(&server, "alice:wrong")).unwrap();
    let result = backend.new_address().await;
    assert!(
        matches!(result, Err(BackendError::InvalidCredentials { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn lndhub_empty_address_list_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getbtc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::LndHub);
    let result = backend.new_address().await;
    assert!(
        matches!(result, Err(BackendError::ParseError { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/newaddress"))
        .respond_with(ResponseTemplate::new(503).set_body_string("wallet locked"))
        .mount(&server)
        .await;

    let backend = backend_for(&server, Implementation::Lnd);
    let result = backend.new_address().await;
    assert!(
        matches!(&result, Err(BackendError::Api { status: 503, raw_message: Some(m), .. }) if m == "wallet locked"),
        "unexpected result: {result:?}"
    );
}
