/*
[INPUT]:  Mock TurboSign responses
[OUTPUT]: Test results for the signature workflow
[POS]:    Integration tests - TurboSign endpoints
[UPDATE]: When TurboSign endpoints change
*/

mod common;

use common::{API_KEY, ORG_ID, SENDER_EMAIL, pdf_bytes, setup_mock_server, turbosign};
use serde_json::json;
use tokio_test::assert_ok;
use turbodocx_sdk::{
    DocumentSource, DocumentStatus, Field, FieldPlacement, Recipient, SignatureFieldType,
    SignatureRequest, TemplateConfig,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn recipients() -> Vec<Recipient> {
    vec![
        assert_ok!(Recipient::new("Alice", "alice@example.com", 1)),
        assert_ok!(Recipient::new("Bob", "bob@example.com", 2)),
    ]
}

fn fields() -> Vec<Field> {
    vec![
        Field::new(SignatureFieldType::Signature, "alice@example.com").at(1, 100, 200),
        Field::new(SignatureFieldType::Date, "bob@example.com").with_template(
            TemplateConfig::anchor("{date}").with_placement(FieldPlacement::Replace),
        ),
    ]
}

#[tokio::test]
async fn test_upload_sends_multipart_with_sniffed_file_part() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/turbosign/single/prepare-for-review"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("x-rapiddocx-org-id", ORG_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "success": true,
                "documentId": "doc-1",
                "status": "review_ready",
                "previewUrl": "https://app.turbodocx.com/preview/doc-1",
                "message": "Ready for review"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SignatureRequest::new(
        DocumentSource::named_file(pdf_bytes(), "c.pdf"),
        recipients(),
        fields(),
    )
    .with_document_name("X");
    let response = assert_ok!(turbosign(&server).create_signature_review_link(&request).await);
    assert_eq!(response.document_id, "doc-1");
    assert_eq!(
        response.preview_url.as_deref(),
        Some("https://app.turbodocx.com/preview/doc-1")
    );

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="file"; filename="c.pdf""#));
    assert!(body.contains("Content-Type: application/pdf"));
    assert!(body.contains("name=\"documentName\"\r\n\r\nX"));
    assert!(body.contains(&format!("name=\"senderEmail\"\r\n\r\n{SENDER_EMAIL}")));
    assert!(body.contains("alice@example.com"));
    assert!(!body.contains(r#"name="fileName""#));
}

#[tokio::test]
async fn test_send_by_template_posts_json() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/turbosign/single/prepare-for-signing"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "templateId": "tpl-1",
            "senderEmail": SENDER_EMAIL,
            "senderName": "Sender Co"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "documentId": "doc-2",
            "message": "Sent"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SignatureRequest::new(
        DocumentSource::TemplateId("tpl-1".to_string()),
        recipients(),
        fields(),
    );
    let response = assert_ok!(turbosign(&server).send_signature(&request).await);
    assert!(response.success);
    assert_eq!(response.document_id, "doc-2");
}

#[tokio::test]
async fn test_status_then_download() {
    let server = setup_mock_server().await;
    let file_url = format!("{}/files/doc-3.pdf", server.uri());

    Mock::given(method("GET"))
        .and(path("/turbosign/documents/doc-3/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"status": "completed"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/turbosign/documents/doc-3/download"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"downloadUrl": file_url})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/doc-3.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf_bytes()))
        .expect(1)
        .mount(&server)
        .await;

    let sign = turbosign(&server);
    let status = assert_ok!(sign.get_status("doc-3").await);
    assert_eq!(status.document_status(), Some(DocumentStatus::Completed));

    let bytes = assert_ok!(sign.download("doc-3").await);
    assert_eq!(bytes, pdf_bytes());
}

#[tokio::test]
async fn test_void_resend_and_audit_trail() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/turbosign/documents/doc-4/void"))
        .and(body_partial_json(json!({"reason": "Wrong contract"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "doc-4"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/turbosign/documents/doc-4/resend-email"))
        .and(body_partial_json(json!({"recipientIds": ["r-1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipientCount": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/turbosign/documents/doc-4/audit-trail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "document": {"id": "doc-4", "name": "Contract"},
                "auditTrail": [{
                    "id": "evt-1",
                    "documentId": "doc-4",
                    "actionType": "document_voided",
                    "timestamp": "2026-01-01T00:00:00Z"
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sign = turbosign(&server);
    let voided = assert_ok!(sign.void_document("doc-4", "Wrong contract").await);
    assert!(voided.success);

    let resent = assert_ok!(sign.resend_email("doc-4", &["r-1".to_string()]).await);
    assert!(resent.success);
    assert_eq!(resent.recipient_count, 1);

    let trail = assert_ok!(sign.get_audit_trail("doc-4").await);
    assert_eq!(trail.document.name, "Contract");
    assert_eq!(trail.audit_trail[0].action_type, "document_voided");
}
