/*
[INPUT]:  Organization and key ids, API key requests
[OUTPUT]: Organization API keys and acknowledgements
[POS]:    Facade layer - organization API key endpoints
[UPDATE]: When organization API key endpoints change
*/

// ### Organization API Key Endpoints

use super::{TurboPartner, to_body};
use crate::http::Result;
use crate::types::{
    CreateOrgApiKeyRequest, ListOrgApiKeysRequest, OrgApiKeyListResponse, OrgApiKeyResponse,
    SuccessResponse, UpdateOrgApiKeyRequest,
};

impl TurboPartner {
    fn org_keys_path(&self, organization_id: &str, suffix: &str) -> String {
        self.path(&format!("/organizations/{organization_id}/apikeys{suffix}"))
    }

    /// GET /partner/{pid}/organizations/{id}/apikeys
    pub async fn list_organization_api_keys(
        &self,
        organization_id: &str,
        request: Option<&ListOrgApiKeysRequest>,
    ) -> Result<OrgApiKeyListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self
            .client
            .get(&self.org_keys_path(organization_id, ""), &params)
            .await?;
        OrgApiKeyListResponse::from_value(value)
    }

    /// The plaintext key is only present in this response.
    ///
    /// POST /partner/{pid}/organizations/{id}/apikeys
    pub async fn create_organization_api_key(
        &self,
        organization_id: &str,
        request: &CreateOrgApiKeyRequest,
    ) -> Result<OrgApiKeyResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .post(&self.org_keys_path(organization_id, ""), Some(&body))
            .await?;
        OrgApiKeyResponse::from_value(value)
    }

    /// PATCH /partner/{pid}/organizations/{id}/apikeys/{kid}
    pub async fn update_organization_api_key(
        &self,
        organization_id: &str,
        key_id: &str,
        request: &UpdateOrgApiKeyRequest,
    ) -> Result<OrgApiKeyResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(
                &self.org_keys_path(organization_id, &format!("/{key_id}")),
                Some(&body),
            )
            .await?;
        OrgApiKeyResponse::from_value(value)
    }

    /// DELETE /partner/{pid}/organizations/{id}/apikeys/{kid}
    pub async fn revoke_organization_api_key(
        &self,
        organization_id: &str,
        key_id: &str,
    ) -> Result<SuccessResponse> {
        let value = self
            .client
            .delete(&self.org_keys_path(organization_id, &format!("/{key_id}")))
            .await?;
        SuccessResponse::from_value(value)
    }
}
