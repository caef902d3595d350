/*
[INPUT]:  Key ids and partner API key requests
[OUTPUT]: Partner API keys and acknowledgements
[POS]:    Facade layer - partner API key endpoints
[UPDATE]: When partner API key endpoints change
*/

// ### Partner API Key Endpoints

use super::{TurboPartner, to_body};
use crate::http::Result;
use crate::types::{
    CreatePartnerApiKeyRequest, ListPartnerApiKeysRequest, PartnerApiKeyListResponse,
    PartnerApiKeyResponse, SuccessResponse, UpdatePartnerApiKeyRequest,
};

impl TurboPartner {
    /// GET /partner/{pid}/api-keys
    pub async fn list_partner_api_keys(
        &self,
        request: Option<&ListPartnerApiKeysRequest>,
    ) -> Result<PartnerApiKeyListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self.client.get(&self.path("/api-keys"), &params).await?;
        PartnerApiKeyListResponse::from_value(value)
    }

    /// POST /partner/{pid}/api-keys
    pub async fn create_partner_api_key(
        &self,
        request: &CreatePartnerApiKeyRequest,
    ) -> Result<PartnerApiKeyResponse> {
        let body = to_body(request)?;
        let value = self.client.post(&self.path("/api-keys"), Some(&body)).await?;
        PartnerApiKeyResponse::from_value(value)
    }

    /// PATCH /partner/{pid}/api-keys/{kid}
    pub async fn update_partner_api_key(
        &self,
        key_id: &str,
        request: &UpdatePartnerApiKeyRequest,
    ) -> Result<PartnerApiKeyResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(&self.path(&format!("/api-keys/{key_id}")), Some(&body))
            .await?;
        PartnerApiKeyResponse::from_value(value)
    }

    /// DELETE /partner/{pid}/api-keys/{kid}
    pub async fn revoke_partner_api_key(&self, key_id: &str) -> Result<SuccessResponse> {
        let value = self
            .client
            .delete(&self.path(&format!("/api-keys/{key_id}")))
            .await?;
        SuccessResponse::from_value(value)
    }
}
