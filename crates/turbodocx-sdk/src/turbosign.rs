/*
[INPUT]:  Signature credentials and typed signature requests
[OUTPUT]: Typed TurboSign responses and downloaded documents
[POS]:    Facade layer - document signature workflow endpoints
[UPDATE]: When adding signature endpoints or changing form fields
*/

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::http::upload::{DEFAULT_FIELD_NAME, FILE_NAME_KEY};
use crate::http::{
    ClientConfig, Result, SenderConfig, SignatureCredentials, TurboDocxClient, TurboDocxError,
};
use crate::types::responses::parse_signature_response;
use crate::types::{
    AuditTrailResponse, CreateSignatureReviewLinkResponse, DocumentSource, DocumentStatusResponse,
    ResendEmailResponse, SendSignatureResponse, SignatureRequest, VoidDocumentResponse,
};

const REVIEW_PATH: &str = "/turbosign/single/prepare-for-review";
const SEND_PATH: &str = "/turbosign/single/prepare-for-signing";

/// Client for the TurboSign document signature API
#[derive(Debug, Clone)]
pub struct TurboSign {
    client: TurboDocxClient,
}

impl TurboSign {
    pub fn new(credentials: SignatureCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    pub fn with_config(credentials: SignatureCredentials, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: TurboDocxClient::with_config(credentials, config)?,
        })
    }

    /// Build from `TURBODOCX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(SignatureCredentials::from_env()?, ClientConfig::from_env())
    }

    pub fn client(&self) -> &TurboDocxClient {
        &self.client
    }

    /// Upload a document and get a preview link without emailing anyone
    ///
    /// POST /turbosign/single/prepare-for-review
    pub async fn create_signature_review_link(
        &self,
        request: &SignatureRequest,
    ) -> Result<CreateSignatureReviewLinkResponse> {
        let value = self.submit(REVIEW_PATH, request).await?;
        parse_signature_response(value)
    }

    /// Upload a document and email the recipients
    ///
    /// POST /turbosign/single/prepare-for-signing
    pub async fn send_signature(&self, request: &SignatureRequest) -> Result<SendSignatureResponse> {
        let value = self.submit(SEND_PATH, request).await?;
        parse_signature_response(value)
    }

    /// GET /turbosign/documents/{id}/status
    pub async fn get_status(&self, document_id: &str) -> Result<DocumentStatusResponse> {
        let value = self
            .client
            .get(&document_path(document_id, "status"), &[])
            .await?;
        parse_signature_response(value)
    }

    /// Download the signed document.
    ///
    /// Resolves a presigned URL first, then fetches the file from it.
    pub async fn download(&self, document_id: &str) -> Result<Vec<u8>> {
        let value = self
            .client
            .get(&document_path(document_id, "download"), &[])
            .await?;
        let download_url = value
            .get("downloadUrl")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| TurboDocxError::Api {
                status: None,
                message: "No download URL in response".to_string(),
            })?;

        debug!(document_id, "downloading signed document");
        self.client.fetch_bytes(download_url).await
    }

    /// POST /turbosign/documents/{id}/void
    pub async fn void_document(
        &self,
        document_id: &str,
        reason: &str,
    ) -> Result<VoidDocumentResponse> {
        let body = serde_json::json!({ "reason": reason });
        self.client
            .post(&document_path(document_id, "void"), Some(&body))
            .await?;
        Ok(VoidDocumentResponse::voided())
    }

    /// Resend signature emails; an empty list resends to every recipient
    ///
    /// POST /turbosign/documents/{id}/resend-email
    pub async fn resend_email(
        &self,
        document_id: &str,
        recipient_ids: &[String],
    ) -> Result<ResendEmailResponse> {
        let body = serde_json::json!({ "recipientIds": recipient_ids });
        let value = self
            .client
            .post(&document_path(document_id, "resend-email"), Some(&body))
            .await?;
        parse_signature_response(value)
    }

    /// GET /turbosign/documents/{id}/audit-trail
    pub async fn get_audit_trail(&self, document_id: &str) -> Result<AuditTrailResponse> {
        let value = self
            .client
            .get(&document_path(document_id, "audit-trail"), &[])
            .await?;
        parse_signature_response(value)
    }

    async fn submit(&self, path: &str, request: &SignatureRequest) -> Result<Value> {
        let mut fields = form_fields(request, self.client.sender_config())?;

        match &request.source {
            DocumentSource::File { bytes, file_name } => {
                if let Some(file_name) = file_name {
                    fields.insert(FILE_NAME_KEY.to_string(), Value::from(file_name.as_str()));
                }
                self.client
                    .upload_file(path, bytes.clone(), DEFAULT_FIELD_NAME, fields)
                    .await
            }
            DocumentSource::FileLink(link) => {
                fields.insert("fileLink".to_string(), Value::from(link.as_str()));
                self.client.post(path, Some(&Value::Object(fields))).await
            }
            DocumentSource::DeliverableId(id) => {
                fields.insert("deliverableId".to_string(), Value::from(id.as_str()));
                self.client.post(path, Some(&Value::Object(fields))).await
            }
            DocumentSource::TemplateId(id) => {
                fields.insert("templateId".to_string(), Value::from(id.as_str()));
                self.client.post(path, Some(&Value::Object(fields))).await
            }
        }
    }
}

fn document_path(document_id: &str, action: &str) -> String {
    format!("/turbosign/documents/{document_id}/{action}")
}

/// Form fields shared by the upload and JSON variants.
///
/// `recipients`, `fields` and `ccEmails` travel as JSON text in both cases.
pub(crate) fn form_fields(
    request: &SignatureRequest,
    sender: Option<&SenderConfig>,
) -> Result<Map<String, Value>> {
    let mut form = Map::new();
    form.insert("recipients".to_string(), json_text("recipients", &request.recipients)?);
    form.insert("fields".to_string(), json_text("fields", &request.fields)?);

    if let Some(name) = &request.document_name {
        form.insert("documentName".to_string(), Value::from(name.as_str()));
    }
    if let Some(description) = &request.document_description {
        form.insert("documentDescription".to_string(), Value::from(description.as_str()));
    }

    let sender_email = request
        .sender_email
        .as_deref()
        .or(sender.map(|s| s.sender_email.as_str()));
    if let Some(email) = sender_email {
        form.insert("senderEmail".to_string(), Value::from(email));
    }
    let sender_name = request
        .sender_name
        .as_deref()
        .or(sender.and_then(|s| s.sender_name.as_deref()));
    if let Some(name) = sender_name {
        form.insert("senderName".to_string(), Value::from(name));
    }

    if let Some(cc_emails) = &request.cc_emails {
        form.insert("ccEmails".to_string(), json_text("ccEmails", cc_emails)?);
    }

    Ok(form)
}

fn json_text<T: Serialize + ?Sized>(label: &str, value: &T) -> Result<Value> {
    serde_json::to_string(value)
        .map(Value::String)
        .map_err(|e| TurboDocxError::validation(format!("Failed to serialize {label}: {e}")))
}
