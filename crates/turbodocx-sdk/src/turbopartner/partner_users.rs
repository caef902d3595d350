/*
[INPUT]:  Partner portal user ids and membership requests
[OUTPUT]: Partner portal users and acknowledgements
[POS]:    Facade layer - partner portal user endpoints
[UPDATE]: When partner portal user endpoints change
*/

// ### Partner Portal User Endpoints

use super::{TurboPartner, to_body};
use crate::http::Result;
use crate::types::{
    AddPartnerUserRequest, ListPartnerUsersRequest, PartnerUserListResponse, PartnerUserResponse,
    SuccessResponse, UpdatePartnerUserRequest,
};

impl TurboPartner {
    /// GET /partner/{pid}/users
    pub async fn list_partner_portal_users(
        &self,
        request: Option<&ListPartnerUsersRequest>,
    ) -> Result<PartnerUserListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self.client.get(&self.path("/users"), &params).await?;
        PartnerUserListResponse::from_value(value)
    }

    /// POST /partner/{pid}/users
    pub async fn add_user_to_partner_portal(
        &self,
        request: &AddPartnerUserRequest,
    ) -> Result<PartnerUserResponse> {
        let body = to_body(request)?;
        let value = self.client.post(&self.path("/users"), Some(&body)).await?;
        PartnerUserResponse::from_value(value)
    }

    /// Change role and/or permissions; unset parts are left as they are.
    ///
    /// PATCH /partner/{pid}/users/{uid}
    pub async fn update_partner_user_permissions(
        &self,
        user_id: &str,
        request: &UpdatePartnerUserRequest,
    ) -> Result<PartnerUserResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(&self.path(&format!("/users/{user_id}")), Some(&body))
            .await?;
        PartnerUserResponse::from_value(value)
    }

    /// DELETE /partner/{pid}/users/{uid}
    pub async fn remove_user_from_partner_portal(&self, user_id: &str) -> Result<SuccessResponse> {
        let value = self
            .client
            .delete(&self.path(&format!("/users/{user_id}")))
            .await?;
        SuccessResponse::from_value(value)
    }

    /// POST /partner/{pid}/users/{uid}/resend-invitation
    pub async fn resend_partner_portal_invitation_to_user(
        &self,
        user_id: &str,
    ) -> Result<SuccessResponse> {
        let value = self
            .client
            .post(&self.path(&format!("/users/{user_id}/resend-invitation")), None)
            .await?;
        SuccessResponse::from_value(value)
    }
}
