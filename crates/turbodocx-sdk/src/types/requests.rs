/*
[INPUT]:  Caller-built request parameters
[OUTPUT]: Validated request structs, JSON bodies and query pairs
[POS]:    Data layer - outgoing request definitions
[UPDATE]: When API schema changes or new types added
*/

use serde::Serialize;

use super::enums::{OrgUserRole, PartnerScope, PartnerUserRole};
use super::models::{Features, Field, PartnerPermissions, Recipient, Tracking};
use super::validation;
use crate::http::{Result, TurboDocxError};

pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// ### Signature requests

/// Where the document to be signed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Raw bytes uploaded as multipart; the type is sniffed from the content
    File {
        bytes: Vec<u8>,
        file_name: Option<String>,
    },
    FileLink(String),
    DeliverableId(String),
    TemplateId(String),
}

impl DocumentSource {
    pub fn file(bytes: impl Into<Vec<u8>>) -> Self {
        DocumentSource::File {
            bytes: bytes.into(),
            file_name: None,
        }
    }

    pub fn named_file(bytes: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        DocumentSource::File {
            bytes: bytes.into(),
            file_name: Some(file_name.into()),
        }
    }
}

/// Request for both review-link creation and direct sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRequest {
    pub source: DocumentSource,
    pub recipients: Vec<Recipient>,
    pub fields: Vec<Field>,
    pub document_name: Option<String>,
    pub document_description: Option<String>,
    /// Overrides the configured sender name for this request
    pub sender_name: Option<String>,
    /// Overrides the configured sender email for this request
    pub sender_email: Option<String>,
    pub cc_emails: Option<Vec<String>>,
}

pub type CreateSignatureReviewLinkRequest = SignatureRequest;
pub type SendSignatureRequest = SignatureRequest;

impl SignatureRequest {
    pub fn new(source: DocumentSource, recipients: Vec<Recipient>, fields: Vec<Field>) -> Self {
        Self {
            source,
            recipients,
            fields,
            document_name: None,
            document_description: None,
            sender_name: None,
            sender_email: None,
            cc_emails: None,
        }
    }

    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    pub fn with_document_description(mut self, description: impl Into<String>) -> Self {
        self.document_description = Some(description.into());
        self
    }

    pub fn with_sender(mut self, email: impl Into<String>, name: Option<String>) -> Self {
        self.sender_email = Some(email.into());
        self.sender_name = name;
        self
    }

    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    pub fn with_cc_emails(mut self, cc_emails: Vec<String>) -> Self {
        self.cc_emails = Some(cc_emails);
        self
    }
}

// ### Partner requests

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<Features>,
}

impl CreateOrganizationRequest {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "Organization")?;
        Ok(Self {
            name,
            metadata: None,
            features: None,
        })
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOrganizationRequest {
    name: String,
}

impl UpdateOrganizationRequest {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "Organization")?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntitlementsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOrgUserRequest {
    email: String,
    role: OrgUserRole,
}

impl AddOrgUserRequest {
    pub fn new(email: impl Into<String>, role: OrgUserRole) -> Result<Self> {
        let email = email.into();
        validation::email(&email)?;
        Ok(Self { email, role })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> OrgUserRole {
        self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOrgUserRequest {
    pub role: OrgUserRole,
}

impl UpdateOrgUserRequest {
    pub fn new(role: OrgUserRole) -> Self {
        Self { role }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrgApiKeyRequest {
    name: String,
    role: String,
}

impl CreateOrgApiKeyRequest {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "API key")?;
        Ok(Self {
            name,
            role: role.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateOrgApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl UpdateOrgApiKeyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "API key")?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePartnerApiKeyRequest {
    name: String,
    scopes: Vec<PartnerScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreatePartnerApiKeyRequest {
    pub fn new(name: impl Into<String>, scopes: Vec<PartnerScope>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "API key")?;
        if scopes.is_empty() {
            return Err(TurboDocxError::validation("At least one scope is required"));
        }
        Ok(Self {
            name,
            scopes,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn scopes(&self) -> &[PartnerScope] {
        &self.scopes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePartnerApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<Vec<PartnerScope>>,
}

impl UpdatePartnerApiKeyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::name(&name, "API key")?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scopes(mut self, scopes: Vec<PartnerScope>) -> Result<Self> {
        if scopes.is_empty() {
            return Err(TurboDocxError::validation(
                "At least one scope is required when updating scopes",
            ));
        }
        self.scopes = Some(scopes);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddPartnerUserRequest {
    email: String,
    role: PartnerUserRole,
    permissions: PartnerPermissions,
}

impl AddPartnerUserRequest {
    pub fn new(
        email: impl Into<String>,
        role: PartnerUserRole,
        permissions: PartnerPermissions,
    ) -> Result<Self> {
        let email = email.into();
        validation::email(&email)?;
        Ok(Self {
            email,
            role,
            permissions,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePartnerUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<PartnerUserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PartnerPermissions>,
}

/// Paging shared by every partner list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            search: None,
        }
    }
}

impl ListRequest {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

pub type ListOrganizationsRequest = ListRequest;
pub type ListOrgUsersRequest = ListRequest;
pub type ListOrgApiKeysRequest = ListRequest;
pub type ListPartnerApiKeysRequest = ListRequest;
pub type ListPartnerUsersRequest = ListRequest;

/// Audit log query; filters are sent only when set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAuditLogsRequest {
    pub page: ListRequest,
    pub action: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub success: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListAuditLogsRequest {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.page.to_query_params();
        let filters = [
            ("action", self.action.clone()),
            ("resourceType", self.resource_type.clone()),
            ("resourceId", self.resource_id.clone()),
            ("success", self.success.map(|s| s.to_string())),
            ("startDate", self.start_date.clone()),
            ("endDate", self.end_date.clone()),
        ];
        params.extend(
            filters
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );
        params
    }
}
