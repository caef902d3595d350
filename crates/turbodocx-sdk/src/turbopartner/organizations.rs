/*
[INPUT]:  Organization ids and organization requests
[OUTPUT]: Organization records, pages and entitlements
[POS]:    Facade layer - partner organization endpoints
[UPDATE]: When organization endpoints change
*/

// ### Organization Endpoints

use super::{TurboPartner, to_body};
use crate::http::Result;
use crate::types::{
    CreateOrganizationRequest, EntitlementsResponse, ListOrganizationsRequest,
    OrganizationDetailResponse, OrganizationListResponse, OrganizationResponse, SuccessResponse,
    UpdateEntitlementsRequest, UpdateOrganizationRequest,
};

impl TurboPartner {
    /// POST /partner/{pid}/organization
    pub async fn create_organization(
        &self,
        request: &CreateOrganizationRequest,
    ) -> Result<OrganizationResponse> {
        let body = to_body(request)?;
        let value = self.client.post(&self.path("/organization"), Some(&body)).await?;
        OrganizationResponse::from_value(value)
    }

    /// GET /partner/{pid}/organizations?limit={limit}&offset={offset}&search={search}
    pub async fn list_organizations(
        &self,
        request: Option<&ListOrganizationsRequest>,
    ) -> Result<OrganizationListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self.client.get(&self.path("/organizations"), &params).await?;
        OrganizationListResponse::from_value(value)
    }

    /// Organization record together with its features and usage tracking
    ///
    /// GET /partner/{pid}/organizations/{id}
    pub async fn get_organization_details(
        &self,
        organization_id: &str,
    ) -> Result<OrganizationDetailResponse> {
        let value = self
            .client
            .get(&self.path(&format!("/organizations/{organization_id}")), &[])
            .await?;
        OrganizationDetailResponse::from_value(value)
    }

    /// PATCH /partner/{pid}/organizations/{id}
    pub async fn update_organization_info(
        &self,
        organization_id: &str,
        request: &UpdateOrganizationRequest,
    ) -> Result<OrganizationResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(&self.path(&format!("/organizations/{organization_id}")), Some(&body))
            .await?;
        OrganizationResponse::from_value(value)
    }

    /// DELETE /partner/{pid}/organizations/{id}
    pub async fn delete_organization(&self, organization_id: &str) -> Result<SuccessResponse> {
        let value = self
            .client
            .delete(&self.path(&format!("/organizations/{organization_id}")))
            .await?;
        SuccessResponse::from_value(value)
    }

    /// PATCH /partner/{pid}/organizations/{id}/entitlements
    pub async fn update_organization_entitlements(
        &self,
        organization_id: &str,
        request: &UpdateEntitlementsRequest,
    ) -> Result<EntitlementsResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(
                &self.path(&format!("/organizations/{organization_id}/entitlements")),
                Some(&body),
            )
            .await?;
        EntitlementsResponse::from_value(value)
    }
}
