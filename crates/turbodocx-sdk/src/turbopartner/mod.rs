/*
[INPUT]:  Partner credentials and typed partner requests
[OUTPUT]: Typed TurboPartner responses
[POS]:    Facade layer - multi-tenant partner administration endpoints
[UPDATE]: When adding partner endpoint groups
*/

mod audit_logs;
mod org_api_keys;
mod org_users;
mod organizations;
mod partner_api_keys;
mod partner_users;

use serde::Serialize;
use serde_json::Value;

use crate::http::{ClientConfig, PartnerCredentials, Result, TurboDocxClient, TurboDocxError};

/// Client for the TurboPartner administration API.
///
/// Every path is scoped to the partner id from the credentials.
#[derive(Debug, Clone)]
pub struct TurboPartner {
    client: TurboDocxClient,
    partner_id: String,
}

impl TurboPartner {
    pub fn new(credentials: PartnerCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    pub fn with_config(credentials: PartnerCredentials, config: ClientConfig) -> Result<Self> {
        let partner_id = credentials.partner_id().to_string();
        Ok(Self {
            client: TurboDocxClient::with_config(credentials, config)?,
            partner_id,
        })
    }

    /// Build from `TURBODOCX_PARTNER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(PartnerCredentials::from_env()?, ClientConfig::from_env())
    }

    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    pub fn client(&self) -> &TurboDocxClient {
        &self.client
    }

    fn path(&self, suffix: &str) -> String {
        format!("/partner/{}{}", self.partner_id, suffix)
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value> {
    serde_json::to_value(request)
        .map_err(|e| TurboDocxError::validation(format!("Failed to serialize request: {e}")))
}


#[cfg(test)]
mod tests {
    use super::test_support::PARTNER_ID;
    use super::*;

    #[test]
    fn test_paths_are_partner_scoped() {
        let credentials = PartnerCredentials::new("TDXP-abc", PARTNER_ID).unwrap();
        let partner = TurboPartner::new(credentials).unwrap();
        assert_eq!(partner.partner_id(), PARTNER_ID);
        assert_eq!(
            partner.path("/organizations"),
            format!("/partner/{PARTNER_ID}/organizations")
        );
        assert!(partner.client().sender_config().is_none());
    }
}
