/*
[INPUT]:  Unwrapped JSON values returned by the transport
[OUTPUT]: Typed response structs with lenient defaults for missing fields
[POS]:    Data layer - incoming response definitions
[UPDATE]: When API schema changes or new types added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::DocumentStatus;
use super::models::serde_helpers::{self, value_to_bool, value_to_i64};
use super::models::{
    AuditLogEntry, AuditTrailDocument, AuditTrailEntry, Features, OrgApiKey, Organization,
    OrganizationUser, PartnerApiKey, PartnerUser, RecipientResponse, Tracking,
};
use super::requests::DEFAULT_PAGE_LIMIT;
use crate::http::{Result, TurboDocxError};

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(TurboDocxError::decode)
}

// ### Signature responses

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignatureReviewLinkResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<RecipientResponse>>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSignatureResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatusResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub status: String,
}

impl DocumentStatusResponse {
    /// Typed status, `None` for values this crate does not know
    pub fn document_status(&self) -> Option<DocumentStatus> {
        DocumentStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidDocumentResponse {
    pub success: bool,
    pub message: String,
}

pub const VOID_SUCCESS_MESSAGE: &str = "Document has been voided successfully";

impl VoidDocumentResponse {
    pub(crate) fn voided() -> Self {
        Self {
            success: true,
            message: VOID_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendEmailResponse {
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::null_as_true"
    )]
    pub success: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub recipient_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub document: AuditTrailDocument,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub audit_trail: Vec<AuditTrailEntry>,
}

fn default_true() -> bool {
    true
}

pub(crate) fn parse_signature_response<T: DeserializeOwned>(value: Value) -> Result<T> {
    decode(value)
}

// ### Partner responses
//
// The partner API may or may not wrap payloads in `{success, data}`; the
// payload is read from `data` when present and from the object itself
// otherwise. A missing `success` reads as true.

fn payload(value: &Value) -> &Value {
    match value.get("data") {
        Some(data) if !data.is_null() => data,
        _ => value,
    }
}

fn success(value: &Value) -> bool {
    value.get("success").and_then(value_to_bool).unwrap_or(true)
}

fn message(value: &Value) -> Option<String> {
    value.get("message").and_then(Value::as_str).map(str::to_string)
}

fn optional<T: DeserializeOwned>(value: &Value, key: &str) -> Result<Option<T>> {
    match value.get(key) {
        Some(inner) if !inner.is_null() => decode(inner.clone()).map(Some),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub success: bool,
    pub data: Organization,
}

impl OrganizationResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            data: decode(payload(&value).clone())?,
        })
    }
}

/// Organization plus its entitlements, read from the same payload object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDetailResponse {
    pub success: bool,
    pub organization: Organization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
}

impl OrganizationDetailResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        let data = payload(&value);
        Ok(Self {
            success: success(&value),
            organization: decode(data.clone())?,
            features: optional(data, "features")?,
            tracking: optional(data, "tracking")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
}

impl EntitlementsResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        let data = payload(&value);
        Ok(Self {
            success: success(&value),
            features: optional(data, "features")?,
            tracking: optional(data, "tracking")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgUserResponse {
    pub success: bool,
    pub data: OrganizationUser,
}

impl OrgUserResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            data: OrganizationUser::from_value(payload(&value))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUserResponse {
    pub success: bool,
    pub data: PartnerUser,
}

impl PartnerUserResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            data: decode(payload(&value).clone())?,
        })
    }
}

/// Key payload may sit under `data`, under `apiKey`, or at the top level
fn api_key_payload(value: &Value) -> &Value {
    ["data", "apiKey"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find(|inner| !inner.is_null())
        .unwrap_or(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgApiKeyResponse {
    pub success: bool,
    pub data: OrgApiKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OrgApiKeyResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            data: decode(api_key_payload(&value).clone())?,
            message: message(&value),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerApiKeyResponse {
    pub success: bool,
    pub data: PartnerApiKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PartnerApiKeyResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            data: decode(api_key_payload(&value).clone())?,
            message: message(&value),
        })
    }
}

/// Acknowledgement for deletes, revocations and resent invitations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            success: success(&value),
            message: message(&value),
        })
    }
}

/// One page of a partner list endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub success: bool,
    pub results: Vec<T>,
    pub total_records: u64,
    pub limit: u32,
    pub offset: u32,
}

pub type OrganizationListResponse = ListResponse<Organization>;
pub type OrgApiKeyListResponse = ListResponse<OrgApiKey>;
pub type PartnerApiKeyListResponse = ListResponse<PartnerApiKey>;
pub type PartnerUserListResponse = ListResponse<PartnerUser>;
pub type AuditLogListResponse = ListResponse<AuditLogEntry>;

impl<T> ListResponse<T> {
    fn parse_with(value: &Value, parse_item: impl Fn(&Value) -> Result<T>) -> Result<Self> {
        let data = payload(value);
        let results = match data.get("results") {
            Some(Value::Array(items)) => items.iter().map(parse_item).collect::<Result<_>>()?,
            _ => Vec::new(),
        };
        let count = |key: &str, default: i64| {
            data.get(key)
                .and_then(value_to_i64)
                .unwrap_or(default)
                .max(0)
        };

        Ok(Self {
            success: success(value),
            results,
            total_records: count("totalRecords", 0) as u64,
            limit: u32::try_from(count("limit", i64::from(DEFAULT_PAGE_LIMIT)))
                .unwrap_or(DEFAULT_PAGE_LIMIT),
            offset: u32::try_from(count("offset", 0)).unwrap_or_default(),
        })
    }
}

impl<T: DeserializeOwned> ListResponse<T> {
    pub fn from_value(value: Value) -> Result<Self> {
        Self::parse_with(&value, |item| decode(item.clone()))
    }
}

/// Organization users page, plus the seat limit the backend reports
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgUserListResponse {
    #[serde(flatten)]
    pub page: ListResponse<OrganizationUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<Value>,
}

impl OrgUserListResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self {
            page: ListResponse::parse_with(&value, OrganizationUser::from_value)?,
            user_limit: value.get("userLimit").filter(|v| !v.is_null()).cloned(),
        })
    }
}
