/*
[INPUT]:  Credentials, client configuration and request payloads
[OUTPUT]: HTTP responses as unwrapped JSON, or typed errors
[POS]:    HTTP layer - shared REST transport
[UPDATE]: When adding new verbs or changing client behavior
*/

pub mod client;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod upload;

pub use error::{Result, TurboDocxError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, TurboDocxClient};
pub use credentials::{
    Credentials, PartnerCredentials, SenderConfig, SignatureCredentials,
    SignatureCredentialsBuilder,
};
