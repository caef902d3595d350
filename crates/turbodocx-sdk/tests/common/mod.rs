/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for turbodocx-sdk tests

#![allow(dead_code)]

use turbodocx_sdk::{
    ClientConfig, PartnerCredentials, SignatureCredentials, TurboPartner, TurboSign,
};
use wiremock::MockServer;

pub const PARTNER_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const PARTNER_KEY: &str = "TDXP-abc";
pub const API_KEY: &str = "tdx-test-key";
pub const ORG_ID: &str = "org-123";
pub const SENDER_EMAIL: &str = "sender@example.com";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{addr}")
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

pub fn signature_credentials() -> SignatureCredentials {
    SignatureCredentials::builder()
        .api_key(API_KEY)
        .org_id(ORG_ID)
        .sender_email(SENDER_EMAIL)
        .sender_name("Sender Co")
        .build()
        .expect("valid signature credentials")
}

pub fn turbosign(server: &MockServer) -> TurboSign {
    TurboSign::with_config(signature_credentials(), config_for(server))
        .expect("turbosign client")
}

pub fn turbopartner(server: &MockServer) -> TurboPartner {
    let credentials = PartnerCredentials::new(PARTNER_KEY, PARTNER_ID).expect("partner credentials");
    TurboPartner::with_config(credentials, config_for(server)).expect("turbopartner client")
}

pub fn partner_path(suffix: &str) -> String {
    format!("/partner/{PARTNER_ID}{suffix}")
}

/// Minimal bytes the file sniffer recognises as a PDF
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n".to_vec()
}
