/*
[INPUT]:  Document bytes, form field name, additional form fields
[OUTPUT]: Multipart form with a sniffed file part and text parts
[POS]:    HTTP layer - multipart encoding for document uploads
[UPDATE]: When upload field conventions change on the backend
*/

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::file_type::FileType;
use crate::http::{Result, TurboDocxError};

/// Key in the additional fields that names the file instead of becoming a part
pub const FILE_NAME_KEY: &str = "fileName";
pub const DEFAULT_FIELD_NAME: &str = "file";

/// Everything needed for one multipart upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayload {
    pub field_name: String,
    pub file_bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
    pub additional_fields: Vec<(String, String)>,
}

impl UploadPayload {
    pub fn new(
        field_name: impl Into<String>,
        file_bytes: Vec<u8>,
        mut additional_fields: Map<String, Value>,
    ) -> Self {
        let file_type = FileType::detect(&file_bytes);
        let file_name = match additional_fields.remove(FILE_NAME_KEY) {
            Some(Value::Null) | None => file_type.default_file_name(),
            Some(value) => form_text(value),
        };

        Self {
            field_name: field_name.into(),
            file_bytes,
            file_name,
            mime_type: file_type.mime_type,
            additional_fields: additional_fields
                .into_iter()
                .map(|(key, value)| (key, form_text(value)))
                .collect(),
        }
    }

    pub fn into_form(self) -> Result<Form> {
        let file_part = Part::bytes(self.file_bytes)
            .file_name(self.file_name)
            .mime_str(self.mime_type)
            .map_err(|e| TurboDocxError::validation(format!("Invalid MIME type: {e}")))?;

        let form = self
            .additional_fields
            .into_iter()
            .fold(Form::new().part(self.field_name, file_part), |form, (key, text)| {
                form.text(key, text)
            });

        Ok(form)
    }
}

/// Composite values go out as JSON text, strings verbatim, other scalars as-is.
fn form_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_explicit_file_name_is_not_a_part() {
        let payload = UploadPayload::new(
            DEFAULT_FIELD_NAME,
            b"%PDF-1.4".to_vec(),
            fields(json!({"fileName": "c.pdf", "documentName": "X"})),
        );

        assert_eq!(payload.file_name, "c.pdf");
        assert_eq!(payload.mime_type, "application/pdf");
        assert_eq!(
            payload.additional_fields,
            vec![("documentName".to_string(), "X".to_string())]
        );
    }

    #[test]
    fn test_default_file_name_uses_sniffed_extension() {
        let payload = UploadPayload::new("document", b"PK\x03\x04ppt/".to_vec(), Map::new());
        assert_eq!(payload.field_name, "document");
        assert_eq!(payload.file_name, "document.pptx");
        assert!(payload.additional_fields.is_empty());
    }

    #[test]
    fn test_composite_values_become_json_text() {
        let payload = UploadPayload::new(
            DEFAULT_FIELD_NAME,
            b"raw".to_vec(),
            fields(json!({
                "ccEmails": ["a@example.com", "b@example.com"],
                "meta": {"k": 1},
                "count": 3,
                "flag": true,
            })),
        );

        let lookup = |key: &str| {
            payload
                .additional_fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(lookup("ccEmails"), Some(r#"["a@example.com","b@example.com"]"#));
        assert_eq!(lookup("meta"), Some(r#"{"k":1}"#));
        assert_eq!(lookup("count"), Some("3"));
        assert_eq!(lookup("flag"), Some("true"));
        assert_eq!(payload.file_name, "document.bin");
        assert_eq!(payload.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_into_form_builds() {
        let payload = UploadPayload::new(
            DEFAULT_FIELD_NAME,
            b"%PDF".to_vec(),
            fields(json!({"documentName": "X"})),
        );
        let form = payload.into_form().unwrap();
        assert!(!form.boundary().is_empty());
    }
}
