/*
[INPUT]:  Credentials, base URL and timeout; request paths and payloads
[OUTPUT]: Unwrapped JSON values or typed TurboDocxError failures
[POS]:    HTTP layer - shared transport for both TurboSign and TurboPartner
[UPDATE]: When adding verbs, headers or changing response normalization
*/

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::http::credentials::{Credentials, ENV_BASE_URL, SenderConfig};
use crate::http::envelope::{decode_body, error_message, unwrap_envelope};
use crate::http::upload::UploadPayload;
use crate::http::{Result, TurboDocxError};

/// Base URL for the TurboDocx API
pub const DEFAULT_BASE_URL: &str = "https://api.turbodocx.com";
pub const ORG_ID_HEADER: &str = "x-rapiddocx-org-id";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `TURBODOCX_BASE_URL` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|url| !url.is_empty()) {
            config.base_url = base_url;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shared HTTP transport.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// can be used concurrently.
#[derive(Debug, Clone)]
pub struct TurboDocxClient {
    http_client: Client,
    download_client: Client,
    base_url: Url,
    headers: HeaderMap,
    sender: Option<SenderConfig>,
}

impl TurboDocxClient {
    /// Create a new client with default configuration
    pub fn new(credentials: impl Into<Credentials>) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: impl Into<Credentials>, config: ClientConfig) -> Result<Self> {
        let credentials = credentials.into();
        let headers = build_headers(&credentials)?;
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            TurboDocxError::validation(format!("Invalid base URL {}: {e}", config.base_url))
        })?;

        let http_client = Client::builder()
            .default_headers(headers.clone())
            .timeout(config.timeout)
            .build()
            .map_err(client_build_error)?;
        // Presigned storage URLs reject extra auth headers.
        let download_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(client_build_error)?;

        let sender = match &credentials {
            Credentials::Signature(signature) => Some(signature.sender().clone()),
            Credentials::Partner(_) => None,
        };

        Ok(Self {
            http_client,
            download_client,
            base_url,
            headers,
            sender,
        })
    }

    /// Sender identity, present only for signature credentials
    pub fn sender_config(&self) -> Option<&SenderConfig> {
        self.sender.as_ref()
    }

    /// Headers attached to every API request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET with query pairs appended to the URL
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut builder = self.request(Method::GET, path)?;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.send(Method::GET, path, builder).await
    }

    /// POST with an optional JSON body
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_with_body(Method::POST, path, body).await
    }

    /// PATCH with an optional JSON body
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_with_body(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(Method::DELETE, path, builder).await
    }

    /// Multipart POST of a document plus form fields.
    ///
    /// A `fileName` entry in `additional_fields` names the file part and is
    /// not sent as its own field.
    pub async fn upload_file(
        &self,
        path: &str,
        file: Vec<u8>,
        field_name: &str,
        additional_fields: Map<String, Value>,
    ) -> Result<Value> {
        let payload = UploadPayload::new(field_name, file, additional_fields);
        debug!(
            path,
            file_name = %payload.file_name,
            mime_type = payload.mime_type,
            size = payload.file_bytes.len(),
            "uploading document"
        );
        let builder = self.request(Method::POST, path)?.multipart(payload.into_form()?);
        self.send(Method::POST, path, builder).await
    }

    /// Fetch raw bytes from an absolute URL without API headers
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)
            .map_err(|e| TurboDocxError::validation(format!("Invalid download URL: {e}")))?;
        debug!(host = url.host_str().unwrap_or_default(), "fetching file");

        let host = url.host_str().unwrap_or_default().to_string();
        execute(self.download_client.get(url))
            .await
            .inspect_err(|err| {
                warn!(%host, status = err.status_code(), error = %err, "file download failed");
            })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path).map_err(|e| {
            TurboDocxError::validation(format!("Invalid request path {path}: {e}"))
        })?;
        Ok(self.http_client.request(method, url))
    }

    async fn send_with_body(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let mut builder = self.request(method.clone(), path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(method, path, builder).await
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Value> {
        debug!(%method, path, "sending request");
        let body = execute(builder).await.inspect_err(|err| {
            warn!(
                %method,
                path,
                status = err.status_code(),
                code = err.error_code(),
                error = %err,
                "request failed"
            );
        })?;
        Ok(unwrap_envelope(decode_body(&body)?))
    }
}

/// Build the headers for the active credential variant
pub(crate) fn build_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    match credentials {
        Credentials::Partner(partner) => {
            headers.insert(AUTHORIZATION, bearer(partner.partner_api_key())?);
        }
        Credentials::Signature(signature) => {
            headers.insert(AUTHORIZATION, bearer(signature.bearer_token())?);
            if let Some(org_id) = signature.org_id() {
                headers.insert(HeaderName::from_static(ORG_ID_HEADER), header_value(org_id)?);
            }
        }
    }

    Ok(headers)
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = header_value(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        TurboDocxError::authentication("Credentials contain characters not allowed in HTTP headers")
    })
}

/// Send a request and read its body; failures with no response become Network
async fn execute(builder: RequestBuilder) -> Result<Vec<u8>> {
    let response = builder.send().await.map_err(TurboDocxError::network)?;
    read_body(response).await
}

/// Read the body of a response, mapping 4xx/5xx statuses to typed errors
async fn read_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let raw_failure = response.error_for_status_ref().err().map(|e| e.to_string());
        let body = response.bytes().await.unwrap_or_default();
        let message = error_message(&body).or(raw_failure);
        return Err(TurboDocxError::from_status(status.as_u16(), message));
    }

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(TurboDocxError::network)
}

fn client_build_error(err: reqwest::Error) -> TurboDocxError {
    TurboDocxError::Api {
        status: None,
        message: format!("Failed to build HTTP client: {err}"),
    }
}
