/*
[INPUT]:  TurboSign and TurboPartner wire vocabularies
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed value sets used by requests and responses
[UPDATE]: When the backend adds field types, roles or scopes
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of field placed on a signature document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureFieldType {
    Signature,
    Initial,
    Date,
    Text,
    FullName,
    Title,
    Company,
    FirstName,
    LastName,
    Email,
    Checkbox,
}

/// Where a template-anchored field lands relative to its anchor text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPlacement {
    Replace,
    Before,
    After,
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    SetupComplete,
    ReviewReady,
    UnderReview,
    Completed,
    Voided,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::SetupComplete => "setup_complete",
            DocumentStatus::ReviewReady => "review_ready",
            DocumentStatus::UnderReview => "under_review",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Voided => "voided",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            DocumentStatus::Draft,
            DocumentStatus::SetupComplete,
            DocumentStatus::ReviewReady,
            DocumentStatus::UnderReview,
            DocumentStatus::Completed,
            DocumentStatus::Voided,
        ]
        .into_iter()
        .find(|status| status.as_str() == value)
    }
}

/// Role of a user inside a partner-managed organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgUserRole {
    Admin,
    Contributor,
    User,
    Viewer,
}

/// Role of a user on the partner portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerUserRole {
    Admin,
    Member,
    Viewer,
}

/// Permission scope granted to a partner API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerScope {
    #[serde(rename = "org:create")]
    OrgCreate,
    #[serde(rename = "org:read")]
    OrgRead,
    #[serde(rename = "org:update")]
    OrgUpdate,
    #[serde(rename = "org:delete")]
    OrgDelete,
    #[serde(rename = "entitlements:update")]
    EntitlementsUpdate,
    #[serde(rename = "org-users:create")]
    OrgUsersCreate,
    #[serde(rename = "org-users:read")]
    OrgUsersRead,
    #[serde(rename = "org-users:update")]
    OrgUsersUpdate,
    #[serde(rename = "org-users:delete")]
    OrgUsersDelete,
    #[serde(rename = "partner-users:create")]
    PartnerUsersCreate,
    #[serde(rename = "partner-users:read")]
    PartnerUsersRead,
    #[serde(rename = "partner-users:update")]
    PartnerUsersUpdate,
    #[serde(rename = "partner-users:delete")]
    PartnerUsersDelete,
    #[serde(rename = "org-apikeys:create")]
    OrgApiKeysCreate,
    #[serde(rename = "org-apikeys:read")]
    OrgApiKeysRead,
    #[serde(rename = "org-apikeys:update")]
    OrgApiKeysUpdate,
    #[serde(rename = "org-apikeys:delete")]
    OrgApiKeysDelete,
    #[serde(rename = "partner-apikeys:create")]
    PartnerApiKeysCreate,
    #[serde(rename = "partner-apikeys:read")]
    PartnerApiKeysRead,
    #[serde(rename = "partner-apikeys:update")]
    PartnerApiKeysUpdate,
    #[serde(rename = "partner-apikeys:delete")]
    PartnerApiKeysDelete,
    #[serde(rename = "audit:read")]
    AuditRead,
}

impl PartnerScope {
    pub const ALL: [PartnerScope; 22] = [
        PartnerScope::OrgCreate,
        PartnerScope::OrgRead,
        PartnerScope::OrgUpdate,
        PartnerScope::OrgDelete,
        PartnerScope::EntitlementsUpdate,
        PartnerScope::OrgUsersCreate,
        PartnerScope::OrgUsersRead,
        PartnerScope::OrgUsersUpdate,
        PartnerScope::OrgUsersDelete,
        PartnerScope::PartnerUsersCreate,
        PartnerScope::PartnerUsersRead,
        PartnerScope::PartnerUsersUpdate,
        PartnerScope::PartnerUsersDelete,
        PartnerScope::OrgApiKeysCreate,
        PartnerScope::OrgApiKeysRead,
        PartnerScope::OrgApiKeysUpdate,
        PartnerScope::OrgApiKeysDelete,
        PartnerScope::PartnerApiKeysCreate,
        PartnerScope::PartnerApiKeysRead,
        PartnerScope::PartnerApiKeysUpdate,
        PartnerScope::PartnerApiKeysDelete,
        PartnerScope::AuditRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerScope::OrgCreate => "org:create",
            PartnerScope::OrgRead => "org:read",
            PartnerScope::OrgUpdate => "org:update",
            PartnerScope::OrgDelete => "org:delete",
            PartnerScope::EntitlementsUpdate => "entitlements:update",
            PartnerScope::OrgUsersCreate => "org-users:create",
            PartnerScope::OrgUsersRead => "org-users:read",
            PartnerScope::OrgUsersUpdate => "org-users:update",
            PartnerScope::OrgUsersDelete => "org-users:delete",
            PartnerScope::PartnerUsersCreate => "partner-users:create",
            PartnerScope::PartnerUsersRead => "partner-users:read",
            PartnerScope::PartnerUsersUpdate => "partner-users:update",
            PartnerScope::PartnerUsersDelete => "partner-users:delete",
            PartnerScope::OrgApiKeysCreate => "org-apikeys:create",
            PartnerScope::OrgApiKeysRead => "org-apikeys:read",
            PartnerScope::OrgApiKeysUpdate => "org-apikeys:update",
            PartnerScope::OrgApiKeysDelete => "org-apikeys:delete",
            PartnerScope::PartnerApiKeysCreate => "partner-apikeys:create",
            PartnerScope::PartnerApiKeysRead => "partner-apikeys:read",
            PartnerScope::PartnerApiKeysUpdate => "partner-apikeys:update",
            PartnerScope::PartnerApiKeysDelete => "partner-apikeys:delete",
            PartnerScope::AuditRead => "audit:read",
        }
    }
}

impl fmt::Display for PartnerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
