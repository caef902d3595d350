/*
[INPUT]:  API keys, tokens, partner ids, sender identity (explicit or from env)
[OUTPUT]: Validated, immutable credential variants for the transport
[POS]:    HTTP layer - credential validation and environment fallback
[UPDATE]: When credential rules or environment variable names change
*/

use uuid::Uuid;

use crate::http::{Result, TurboDocxError};

pub const ENV_API_KEY: &str = "TURBODOCX_API_KEY";
pub const ENV_ACCESS_TOKEN: &str = "TURBODOCX_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "TURBODOCX_BASE_URL";
pub const ENV_ORG_ID: &str = "TURBODOCX_ORG_ID";
pub const ENV_SENDER_EMAIL: &str = "TURBODOCX_SENDER_EMAIL";
pub const ENV_SENDER_NAME: &str = "TURBODOCX_SENDER_NAME";
pub const ENV_PARTNER_API_KEY: &str = "TURBODOCX_PARTNER_API_KEY";
pub const ENV_PARTNER_ID: &str = "TURBODOCX_PARTNER_ID";

pub const PARTNER_KEY_PREFIX: &str = "TDXP-";

/// Credentials for one configured client. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Signature(SignatureCredentials),
    Partner(PartnerCredentials),
}

impl From<SignatureCredentials> for Credentials {
    fn from(credentials: SignatureCredentials) -> Self {
        Credentials::Signature(credentials)
    }
}

impl From<PartnerCredentials> for Credentials {
    fn from(credentials: PartnerCredentials) -> Self {
        Credentials::Partner(credentials)
    }
}

/// Reply-to identity used on signature requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub sender_email: String,
    pub sender_name: Option<String>,
}

/// Credentials for the TurboSign API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCredentials {
    api_key: Option<String>,
    access_token: Option<String>,
    org_id: Option<String>,
    sender: SenderConfig,
}

impl SignatureCredentials {
    pub fn builder() -> SignatureCredentialsBuilder {
        SignatureCredentialsBuilder::default()
    }

    /// Load from `TURBODOCX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();
        builder.api_key = lookup(ENV_API_KEY);
        builder.access_token = lookup(ENV_ACCESS_TOKEN);
        builder.org_id = lookup(ENV_ORG_ID);
        builder.sender_email = lookup(ENV_SENDER_EMAIL);
        builder.sender_name = lookup(ENV_SENDER_NAME);
        builder.build()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    pub fn sender(&self) -> &SenderConfig {
        &self.sender
    }

    /// Token sent as bearer; the access token wins over the API key
    pub fn bearer_token(&self) -> &str {
        self.access_token
            .as_deref()
            .or(self.api_key.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignatureCredentialsBuilder {
    api_key: Option<String>,
    access_token: Option<String>,
    org_id: Option<String>,
    sender_email: Option<String>,
    sender_name: Option<String>,
}

impl SignatureCredentialsBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    pub fn sender_email(mut self, sender_email: impl Into<String>) -> Self {
        self.sender_email = Some(sender_email.into());
        self
    }

    pub fn sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    pub fn build(self) -> Result<SignatureCredentials> {
        let api_key = non_empty(self.api_key);
        let access_token = non_empty(self.access_token);
        if api_key.is_none() && access_token.is_none() {
            return Err(TurboDocxError::authentication(
                "API key or access token is required",
            ));
        }

        let sender_email = non_empty(self.sender_email).ok_or_else(|| {
            TurboDocxError::validation(
                "senderEmail is required. This email will be used as the reply-to address \
                 for signature requests. Without it, emails will default to \
                 \"API Service User via TurboSign\".",
            )
        })?;

        Ok(SignatureCredentials {
            api_key,
            access_token,
            org_id: non_empty(self.org_id),
            sender: SenderConfig {
                sender_email,
                sender_name: non_empty(self.sender_name),
            },
        })
    }
}

/// Credentials for the TurboPartner API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerCredentials {
    partner_api_key: String,
    partner_id: String,
}

impl PartnerCredentials {
    pub fn new(partner_api_key: impl Into<String>, partner_id: impl Into<String>) -> Result<Self> {
        let partner_api_key = partner_api_key.into();
        let partner_id = partner_id.into();

        if partner_api_key.is_empty() {
            return Err(TurboDocxError::authentication("Partner API key is required"));
        }
        if !partner_api_key.starts_with(PARTNER_KEY_PREFIX) {
            return Err(TurboDocxError::authentication(format!(
                "Partner API key must start with {PARTNER_KEY_PREFIX} prefix"
            )));
        }
        if partner_id.is_empty() {
            return Err(TurboDocxError::validation("Partner ID is required"));
        }
        if !is_hyphenated_uuid(&partner_id) {
            return Err(TurboDocxError::validation("Partner ID must be a valid UUID"));
        }

        Ok(Self {
            partner_api_key,
            partner_id,
        })
    }

    /// Load from `TURBODOCX_PARTNER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::new(
            lookup(ENV_PARTNER_API_KEY).unwrap_or_default(),
            lookup(ENV_PARTNER_ID).unwrap_or_default(),
        )
    }

    pub fn partner_api_key(&self) -> &str {
        &self.partner_api_key
    }

    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 8-4-4-4-12 hex form only; the simple, braced and URN forms are rejected.
pub(crate) fn is_hyphenated_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PARTNER_ID: &str = "11111111-1111-1111-1111-111111111111";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_signature_credentials_with_api_key() {
        let credentials = SignatureCredentials::builder()
            .api_key("test-api-key")
            .org_id("test-org-id")
            .sender_email("test@example.com")
            .sender_name("Test Company")
            .build()
            .unwrap();

        assert_eq!(credentials.api_key(), Some("test-api-key"));
        assert_eq!(credentials.org_id(), Some("test-org-id"));
        assert_eq!(credentials.sender().sender_email, "test@example.com");
        assert_eq!(credentials.sender().sender_name.as_deref(), Some("Test Company"));
        assert_eq!(credentials.bearer_token(), "test-api-key");
    }

    #[test]
    fn test_access_token_wins_over_api_key() {
        let credentials = SignatureCredentials::builder()
            .api_key("key")
            .access_token("token")
            .sender_email("a@example.com")
            .build()
            .unwrap();
        assert_eq!(credentials.bearer_token(), "token");
    }

    #[test]
    fn test_missing_key_and_token_is_auth_error() {
        let err = SignatureCredentials::builder()
            .org_id("org")
            .sender_email("a@example.com")
            .build()
            .unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(err.message(), "API key or access token is required");
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let err = SignatureCredentials::builder()
            .api_key("")
            .access_token("")
            .sender_email("a@example.com")
            .build()
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_missing_sender_email_is_validation_error() {
        let err = SignatureCredentials::builder()
            .api_key("key")
            .build()
            .unwrap_err();
        assert!(matches!(err, TurboDocxError::Validation { .. }));
        assert!(err.message().starts_with("senderEmail is required"));
    }

    #[test]
    fn test_partner_credentials_valid() {
        let credentials = PartnerCredentials::new("TDXP-abc", PARTNER_ID).unwrap();
        assert_eq!(credentials.partner_api_key(), "TDXP-abc");
        assert_eq!(credentials.partner_id(), PARTNER_ID);
    }

    #[test]
    fn test_partner_uuid_is_case_insensitive() {
        assert!(
            PartnerCredentials::new("TDXP-abc", "ABCDEF01-2345-6789-ABCD-EF0123456789").is_ok()
        );
    }

    #[test]
    fn test_partner_bad_prefix_names_prefix() {
        let err = PartnerCredentials::new("bad-prefix-key", PARTNER_ID).unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.message().contains("TDXP-"));
    }

    #[test]
    fn test_partner_empty_key() {
        let err = PartnerCredentials::new("", PARTNER_ID).unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(err.message(), "Partner API key is required");
    }

    #[test]
    fn test_partner_invalid_uuid() {
        let err = PartnerCredentials::new("TDXP-abc", "not-a-uuid").unwrap_err();
        assert!(matches!(err, TurboDocxError::Validation { .. }));
        assert!(err.message().contains("valid UUID"));
    }

    #[test]
    fn test_partner_simple_uuid_form_rejected() {
        let err =
            PartnerCredentials::new("TDXP-abc", "11111111111111111111111111111111").unwrap_err();
        assert!(err.message().contains("valid UUID"));
    }

    #[test]
    fn test_partner_empty_id() {
        let err = PartnerCredentials::new("TDXP-abc", "").unwrap_err();
        assert_eq!(err.message(), "Partner ID is required");
    }

    #[test]
    fn test_signature_from_lookup() {
        let credentials = SignatureCredentials::from_lookup(lookup_from(&[
            (ENV_API_KEY, "env-api-key"),
            (ENV_ORG_ID, "env-org-id"),
            (ENV_SENDER_EMAIL, "env@example.com"),
            (ENV_SENDER_NAME, "Env Company"),
        ]))
        .unwrap();

        assert_eq!(credentials.api_key(), Some("env-api-key"));
        assert_eq!(credentials.access_token(), None);
        assert_eq!(credentials.org_id(), Some("env-org-id"));
        assert_eq!(credentials.sender().sender_name.as_deref(), Some("Env Company"));
    }

    #[test]
    fn test_signature_from_empty_lookup_fails_eagerly() {
        let err = SignatureCredentials::from_lookup(|_| None).unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_partner_from_lookup() {
        let credentials = PartnerCredentials::from_lookup(lookup_from(&[
            (ENV_PARTNER_API_KEY, "TDXP-env"),
            (ENV_PARTNER_ID, PARTNER_ID),
        ]))
        .unwrap();
        assert_eq!(credentials.partner_api_key(), "TDXP-env");

        let err = PartnerCredentials::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.message(), "Partner API key is required");
    }
}
