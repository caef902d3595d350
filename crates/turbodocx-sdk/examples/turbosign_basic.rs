/*
[INPUT]:  TURBODOCX_* environment variables and a PDF path
[OUTPUT]: Review link, status and signed document for one request
[POS]:    Examples - TurboSign signature workflow
[UPDATE]: When TurboSign operations change
*/

use std::env;

use tracing_subscriber::EnvFilter;
use turbodocx_sdk::*;

/// Example: prepare a PDF for review, then check its status.
///
/// Requires `TURBODOCX_API_KEY`, `TURBODOCX_ORG_ID` and
/// `TURBODOCX_SENDER_EMAIL`. Run with `RUST_LOG=turbodocx_sdk=debug`
/// to see each request.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== TurboSign Example ===\n");

    let sign = match TurboSign::from_env() {
        Ok(sign) => sign,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pdf_path = env::args().nth(1).unwrap_or_else(|| "contract.pdf".to_string());
    let bytes = match std::fs::read(&pdf_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read {}: {}", pdf_path, e);
            return;
        }
    };

    let recipient = match Recipient::new("Jane Signer", "jane@example.com", 1) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid recipient: {}", e);
            return;
        }
    };
    let fields = vec![
        Field::new(SignatureFieldType::Signature, "jane@example.com").with_template(
            TemplateConfig::anchor("{signature}")
                .with_placement(FieldPlacement::Replace)
                .with_size(200, 60),
        ),
        Field::new(SignatureFieldType::Date, "jane@example.com").at(1, 350, 700),
    ];

    let request = SignatureRequest::new(DocumentSource::file(bytes), vec![recipient], fields)
        .with_document_name("Service Agreement");

    println!("Creating review link...");
    let document_id = match sign.create_signature_review_link(&request).await {
        Ok(response) => {
            println!("✓ Document {} is {}", response.document_id, response.status);
            if let Some(url) = &response.preview_url {
                println!("  Preview: {}", url);
            }
            response.document_id
        }
        Err(e) => {
            println!("✗ Error: {} ({:?})", e, e.error_code());
            return;
        }
    };

    println!("\nChecking status...");
    match sign.get_status(&document_id).await {
        Ok(status) => println!("✓ Status: {}", status.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ TurboSign example complete");
}
