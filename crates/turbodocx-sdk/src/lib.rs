/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public TurboDocx SDK surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the TurboDocx APIs.
//!
//! [`TurboSign`] sends documents out for e-signature and tracks them;
//! [`TurboPartner`] administers the organizations, users and API keys
//! owned by a partner account. Both share one [`TurboDocxClient`].

pub mod file_type;
pub mod http;
pub mod turbopartner;
pub mod turbosign;
pub mod types;

pub use file_type::FileType;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    DEFAULT_BASE_URL,
    PartnerCredentials,
    Result,
    SenderConfig,
    SignatureCredentials,
    SignatureCredentialsBuilder,
    TurboDocxClient,
    TurboDocxError,
};

pub use turbopartner::TurboPartner;
pub use turbosign::TurboSign;

// Re-export all types
pub use types::*;
