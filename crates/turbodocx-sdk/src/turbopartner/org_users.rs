/*
[INPUT]:  Organization and user ids, membership requests
[OUTPUT]: Organization users and acknowledgements
[POS]:    Facade layer - organization membership endpoints
[UPDATE]: When organization user endpoints change
*/

// ### Organization User Endpoints

use super::{TurboPartner, to_body};
use crate::http::Result;
use crate::types::{
    AddOrgUserRequest, ListOrgUsersRequest, OrgUserListResponse, OrgUserResponse,
    SuccessResponse, UpdateOrgUserRequest,
};

impl TurboPartner {
    fn org_users_path(&self, organization_id: &str, suffix: &str) -> String {
        self.path(&format!("/organizations/{organization_id}/users{suffix}"))
    }

    /// GET /partner/{pid}/organizations/{id}/users
    pub async fn list_organization_users(
        &self,
        organization_id: &str,
        request: Option<&ListOrgUsersRequest>,
    ) -> Result<OrgUserListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self
            .client
            .get(&self.org_users_path(organization_id, ""), &params)
            .await?;
        OrgUserListResponse::from_value(value)
    }

    /// Invite a user by email into the organization
    ///
    /// POST /partner/{pid}/organizations/{id}/users
    pub async fn add_user_to_organization(
        &self,
        organization_id: &str,
        request: &AddOrgUserRequest,
    ) -> Result<OrgUserResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .post(&self.org_users_path(organization_id, ""), Some(&body))
            .await?;
        OrgUserResponse::from_value(value)
    }

    /// PATCH /partner/{pid}/organizations/{id}/users/{uid}
    pub async fn update_organization_user_role(
        &self,
        organization_id: &str,
        user_id: &str,
        request: &UpdateOrgUserRequest,
    ) -> Result<OrgUserResponse> {
        let body = to_body(request)?;
        let value = self
            .client
            .patch(
                &self.org_users_path(organization_id, &format!("/{user_id}")),
                Some(&body),
            )
            .await?;
        OrgUserResponse::from_value(value)
    }

    /// DELETE /partner/{pid}/organizations/{id}/users/{uid}
    pub async fn remove_user_from_organization(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> Result<SuccessResponse> {
        let value = self
            .client
            .delete(&self.org_users_path(organization_id, &format!("/{user_id}")))
            .await?;
        SuccessResponse::from_value(value)
    }

    /// POST /partner/{pid}/organizations/{id}/users/{uid}/resend-invitation
    pub async fn resend_organization_invitation_to_user(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> Result<SuccessResponse> {
        let value = self
            .client
            .post(
                &self.org_users_path(organization_id, &format!("/{user_id}/resend-invitation")),
                None,
            )
            .await?;
        SuccessResponse::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{partner, partner_path};
    use crate::http::TurboDocxError;
    use crate::types::{AddOrgUserRequest, ListOrgUsersRequest, OrgUserRole, UpdateOrgUserRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_organization_users_keeps_user_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(partner_path("/organizations/org-1/users")))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "results": [
                        {"id": "u-1", "email": "a@example.com", "role": "admin"},
                        {"userId": "u-2", "email": "b@example.com", "role": "viewer"}
                    ],
                    "totalRecords": "2",
                    "limit": 5,
                    "offset": 10
                },
                "userLimit": {"max": 25, "current": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ListOrgUsersRequest::new(5, 10);
        let response = partner(&server)
            .list_organization_users("org-1", Some(&request))
            .await
            .unwrap();

        assert_eq!(response.page.total_records, 2);
        assert_eq!(response.page.offset, 10);
        let ids: Vec<_> = response.page.results.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["u-1", "u-2"]);
        assert_eq!(response.user_limit, Some(json!({"max": 25, "current": 2})));
    }

    #[tokio::test]
    async fn test_add_and_update_organization_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(partner_path("/organizations/org-1/users")))
            .and(body_json(json!({"email": "new@example.com", "role": "contributor"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"id": "u-9", "email": "new@example.com", "role": "contributor"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(partner_path("/organizations/org-1/users/u-9")))
            .and(body_json(json!({"role": "admin"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "u-9", "email": "new@example.com", "role": "admin"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let partner = partner(&server);
        let request = AddOrgUserRequest::new("new@example.com", OrgUserRole::Contributor).unwrap();
        let added = partner.add_user_to_organization("org-1", &request).await.unwrap();
        assert_eq!(added.data.id, "u-9");

        let updated = partner
            .update_organization_user_role("org-1", "u-9", &UpdateOrgUserRequest::new(OrgUserRole::Admin))
            .await
            .unwrap();
        assert!(updated.success);
        assert_eq!(updated.data.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_remove_and_reinvite_user() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(partner_path("/organizations/org-1/users/u-9")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(partner_path("/organizations/org-1/users/u-9/resend-invitation")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Invitation resent"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let partner = partner(&server);
        let removed = partner.remove_user_from_organization("org-1", "u-9").await.unwrap();
        assert!(removed.success);
        assert_eq!(removed.message, None);

        let resent = partner
            .resend_organization_invitation_to_user("org-1", "u-9")
            .await
            .unwrap();
        assert_eq!(resent.message.as_deref(), Some("Invitation resent"));
    }

    #[tokio::test]
    async fn test_seat_limit_conflict_surfaces_as_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(partner_path("/organizations/org-1/users")))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "User limit reached"})))
            .mount(&server)
            .await;

        let request = AddOrgUserRequest::new("x@example.com", OrgUserRole::User).unwrap();
        let err = partner(&server)
            .add_user_to_organization("org-1", &request)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TurboDocxError::Api {
                status: Some(409),
                message: "User limit reached".to_string()
            }
        );
    }
}
