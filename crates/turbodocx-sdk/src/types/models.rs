/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared by requests and responses
[POS]:    Data layer - signature and partner domain models
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{FieldPlacement, SignatureFieldType};
use super::validation;
use crate::http::{Result, TurboDocxError};

// ### Signature models

/// Person asked to sign, validated at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    name: String,
    email: String,
    signing_order: u32,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>, signing_order: u32) -> Result<Self> {
        let email = email.into();
        validation::email(&email)?;
        if signing_order < 1 {
            return Err(TurboDocxError::validation("Signing order must be >= 1"));
        }

        Ok(Self {
            name: name.into(),
            email,
            signing_order,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn signing_order(&self) -> u32 {
        self.signing_order
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

/// Anchor-text placement for a field, used instead of coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<FieldPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub case_sensitive: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_regex: bool,
}

impl TemplateConfig {
    pub fn anchor(anchor: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor.into()),
            ..Self::default()
        }
    }

    pub fn with_placement(mut self, placement: FieldPlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.size = Some(Size { width, height });
        self
    }

    pub fn with_offset(mut self, x: i64, y: i64) -> Self {
        self.offset = Some(Offset { x, y });
        self
    }
}

/// Field placed on the document for one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: SignatureFieldType,
    pub recipient_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_multiline: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_readonly: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Field {
    pub fn new(field_type: SignatureFieldType, recipient_email: impl Into<String>) -> Self {
        Self {
            field_type,
            recipient_email: recipient_email.into(),
            page: None,
            x: None,
            y: None,
            width: None,
            height: None,
            template: None,
            default_value: None,
            is_multiline: false,
            is_readonly: false,
            required: false,
            background_color: None,
        }
    }

    /// Place by page coordinates
    pub fn at(mut self, page: i64, x: i64, y: i64) -> Self {
        self.page = Some(page);
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Place by anchor text
    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn multiline(mut self) -> Self {
        self.is_multiline = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailDocument {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailUser {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
}

/// One hash-chained event in a document's audit trail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailEntry {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub action_type: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuditTrailUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<AuditTrailUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
}

// ### Partner models

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_count: Option<i64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_used: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Organization entitlements: limits and feature flags.
///
/// Used both when setting entitlements and when reading them back; unset
/// fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_users: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_projectspaces: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_templates: Option<i64>,
    /// Bytes
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_storage: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_generated_deliverables: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub max_signatures: Option<i64>,
    #[serde(
        rename = "maxAICredits",
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_ai_credits: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub rd_watermark: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_file_download: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_advanced_date_formats: Option<bool>,
    #[serde(
        rename = "hasGDrive",
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_gdrive: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_sharepoint: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_sharepoint_only: Option<bool>,
    #[serde(
        rename = "hasTDAI",
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_tdai: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_pptx: Option<bool>,
    #[serde(
        rename = "hasTDWriter",
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_td_writer: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_salesforce: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_wrike: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_variable_stack: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_subvariables: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_zapier: Option<bool>,
    #[serde(
        rename = "hasBYOM",
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_byom: Option<bool>,
    #[serde(
        rename = "hasBYOVS",
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_byovs: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub has_beta_features: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool", skip_serializing_if = "Option::is_none")]
    pub enable_bulk_sending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Current usage counters for an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub num_users: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub num_projectspaces: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub num_templates: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub storage_used: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub num_generated_deliverables: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_i64", skip_serializing_if = "Option::is_none")]
    pub num_signatures_used: Option<i64>,
    #[serde(
        rename = "currentAICredits",
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_ai_credits: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUser {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
}

impl OrganizationUser {
    /// Decode one user; some endpoints send `userId` instead of `id`
    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let mut user: OrganizationUser =
            serde_json::from_value(value.clone()).map_err(TurboDocxError::decode)?;
        if user.id.is_empty() {
            if let Some(user_id) = value.get("userId").and_then(Value::as_str) {
                user.id = user_id.to_string();
            }
        }
        Ok(user)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgApiKey {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    /// Full key on create, masked preview afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_on: Option<String>,
    #[serde(rename = "lastUsedIP", default, skip_serializing_if = "Option::is_none")]
    pub last_used_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerApiKey {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    /// Full key on create, masked preview afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sent by the backend either as a list or as JSON-encoded text
    #[serde(
        default,
        deserialize_with = "serde_helpers::string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_on: Option<String>,
    #[serde(rename = "lastUsedIP", default, skip_serializing_if = "Option::is_none")]
    pub last_used_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

/// Capabilities of a partner portal user. Missing flags read as false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPermissions {
    #[serde(default, deserialize_with = "serde_helpers::bool_or_false")]
    pub can_manage_orgs: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_or_false")]
    pub can_manage_org_users: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_or_false")]
    pub can_manage_partner_users: bool,
    #[serde(
        rename = "canManageOrgAPIKeys",
        default,
        deserialize_with = "serde_helpers::bool_or_false"
    )]
    pub can_manage_org_api_keys: bool,
    #[serde(
        rename = "canManagePartnerAPIKeys",
        default,
        deserialize_with = "serde_helpers::bool_or_false"
    )]
    pub can_manage_partner_api_keys: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_or_false")]
    pub can_update_entitlements: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_or_false")]
    pub can_view_audit_logs: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUser {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PartnerPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub partner_id: String,
    #[serde(rename = "partnerAPIKeyId", default, skip_serializing_if = "Option::is_none")]
    pub partner_api_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
}

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Missing or `null` becomes `T::default()`
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Missing or `null` reads as true
    pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
    }

    pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_i64(&value))
    }

    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_bool(&value))
    }

    pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_bool(deserializer).map(Option::unwrap_or_default)
    }

    /// A list of strings, or the same list encoded as JSON text
    pub fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(None),
            Value::String(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            other => serde_json::from_value(other)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }

    pub(crate) fn value_to_i64(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub(crate) fn value_to_bool(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0),
            Value::String(s) => Some(!matches!(s.as_str(), "" | "0" | "false")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipient_serializes_camel_case() {
        let recipient = Recipient::new("John Doe", "john@example.com", 1).unwrap();
        assert_eq!(
            serde_json::to_value(&recipient).unwrap(),
            json!({"name": "John Doe", "email": "john@example.com", "signingOrder": 1})
        );
    }

    #[test]
    fn test_recipient_rejects_bad_input() {
        let err = Recipient::new("John", "not-an-email", 1).unwrap_err();
        assert_eq!(err.message(), "Invalid email address: not-an-email");

        let err = Recipient::new("John", "john@example.com", 0).unwrap_err();
        assert_eq!(err.message(), "Signing order must be >= 1");
    }

    #[test]
    fn test_field_omits_unset_and_false_values() {
        let field = Field::new(SignatureFieldType::Signature, "john@example.com").at(1, 100, 200);
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "type": "signature",
                "recipientEmail": "john@example.com",
                "page": 1,
                "x": 100,
                "y": 200
            })
        );
    }

    #[test]
    fn test_field_with_template_and_flags() {
        let template = TemplateConfig::anchor("{signature1}")
            .with_placement(FieldPlacement::Replace)
            .with_size(100, 30)
            .with_offset(0, 5);
        let field = Field::new(SignatureFieldType::Text, "jane@example.com")
            .with_template(template)
            .with_default_value("N/A")
            .multiline()
            .required();

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "type": "text",
                "recipientEmail": "jane@example.com",
                "template": {
                    "anchor": "{signature1}",
                    "placement": "replace",
                    "size": {"width": 100, "height": 30},
                    "offset": {"x": 0, "y": 5}
                },
                "defaultValue": "N/A",
                "isMultiline": true,
                "required": true
            })
        );
    }

    #[test]
    fn test_template_config_flags_only_when_true() {
        let template = TemplateConfig {
            search_text: Some("Sign here".to_string()),
            case_sensitive: true,
            use_regex: false,
            ..TemplateConfig::default()
        };
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({"searchText": "Sign here", "caseSensitive": true})
        );
    }

    #[test]
    fn test_organization_user_accepts_user_id() {
        let user = OrganizationUser::from_value(&json!({
            "userId": "u-1",
            "email": "user@example.com",
            "role": "admin",
            "isActive": 1
        }))
        .unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.is_active, Some(true));
        assert_eq!(user.first_name, None);

        let user = OrganizationUser::from_value(&json!({"id": "m-1", "userId": "u-1"})).unwrap();
        assert_eq!(user.id, "m-1");
    }

    #[test]
    fn test_partner_api_key_scopes_from_json_text() {
        let key: PartnerApiKey = serde_json::from_value(json!({
            "id": "pk-1",
            "name": "Integration",
            "scopes": "[\"org:read\",\"audit:read\"]",
            "lastUsedIP": "10.0.0.1"
        }))
        .unwrap();
        assert_eq!(
            key.scopes,
            Some(vec!["org:read".to_string(), "audit:read".to_string()])
        );
        assert_eq!(key.last_used_ip.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_partner_permissions_default_false() {
        let permissions: PartnerPermissions = serde_json::from_value(json!({
            "canManageOrgs": true,
            "canManageOrgAPIKeys": true,
            "canViewAuditLogs": null
        }))
        .unwrap();
        assert!(permissions.can_manage_orgs);
        assert!(permissions.can_manage_org_api_keys);
        assert!(!permissions.can_manage_partner_api_keys);
        assert!(!permissions.can_view_audit_logs);

        let value = serde_json::to_value(PartnerPermissions::default()).unwrap();
        assert_eq!(value["canManagePartnerAPIKeys"], json!(false));
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_features_wire_names_and_lenient_numbers() {
        let features: Features = serde_json::from_value(json!({
            "maxUsers": "25",
            "maxStorage": 10737418240_i64,
            "maxAICredits": 500,
            "hasTDAI": true,
            "hasGDrive": false,
            "hasBYOVS": 1
        }))
        .unwrap();
        assert_eq!(features.max_users, Some(25));
        assert_eq!(features.max_storage, Some(10_737_418_240));
        assert_eq!(features.max_ai_credits, Some(500));
        assert_eq!(features.has_tdai, Some(true));
        assert_eq!(features.has_gdrive, Some(false));
        assert_eq!(features.has_byovs, Some(true));

        let out = serde_json::to_value(Features {
            has_td_writer: Some(true),
            max_signatures: Some(10),
            ..Features::default()
        })
        .unwrap();
        assert_eq!(out, json!({"maxSignatures": 10, "hasTDWriter": true}));
    }

    #[test]
    fn test_null_strings_read_as_empty() {
        let org: Organization = serde_json::from_value(json!({"id": null, "name": "Acme"})).unwrap();
        assert_eq!(org.id, "");
        assert_eq!(org.name, "Acme");

        let entry: AuditLogEntry = serde_json::from_value(json!({
            "id": "log-1",
            "partnerAPIKeyId": "pk-1",
            "success": true
        }))
        .unwrap();
        assert_eq!(entry.partner_id, "");
        assert_eq!(entry.partner_api_key_id.as_deref(), Some("pk-1"));
        assert_eq!(entry.success, Some(true));
    }
}
