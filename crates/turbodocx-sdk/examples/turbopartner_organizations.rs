/*
[INPUT]:  TURBODOCX_PARTNER_* environment variables
[OUTPUT]: A provisioned organization with entitlements and an API key
[POS]:    Examples - TurboPartner organization onboarding
[UPDATE]: When TurboPartner operations change
*/

use tracing_subscriber::EnvFilter;
use turbodocx_sdk::*;

/// Example: onboard a customer organization.
///
/// Requires `TURBODOCX_PARTNER_API_KEY` and `TURBODOCX_PARTNER_ID`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== TurboPartner Organization Example ===\n");

    let partner = match TurboPartner::from_env() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Partner client created for {}\n", partner.partner_id());

    let request = match CreateOrganizationRequest::new("Acme Corporation") {
        Ok(r) => r.with_features(Features {
            max_users: Some(25),
            has_tdai: Some(true),
            ..Features::default()
        }),
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return;
        }
    };

    println!("Creating organization...");
    let organization_id = match partner.create_organization(&request).await {
        Ok(response) => {
            println!("✓ Created {} ({})", response.data.name, response.data.id);
            response.data.id
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nRaising entitlements...");
    let entitlements = UpdateEntitlementsRequest {
        features: Some(Features {
            max_users: Some(50),
            max_signatures: Some(1000),
            ..Features::default()
        }),
        tracking: None,
    };
    match partner
        .update_organization_entitlements(&organization_id, &entitlements)
        .await
    {
        Ok(response) => println!("✓ Features: {:?}", response.features),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nInviting an admin...");
    match AddOrgUserRequest::new("admin@acme.example", OrgUserRole::Admin) {
        Ok(invite) => match partner.add_user_to_organization(&organization_id, &invite).await {
            Ok(response) => println!("✓ Invited {}", response.data.email),
            Err(e) => println!("✗ Error: {}", e),
        },
        Err(e) => println!("✗ Invalid invite: {}", e),
    }

    println!("\nCreating an organization API key...");
    match CreateOrgApiKeyRequest::new("Integration", "admin") {
        Ok(key) => match partner
            .create_organization_api_key(&organization_id, &key)
            .await
        {
            Ok(response) => println!("✓ Key {} created", response.data.id),
            Err(e) => println!("✗ Error: {}", e),
        },
        Err(e) => println!("✗ Invalid key request: {}", e),
    }

    println!("\nListing organizations...");
    let page = ListOrganizationsRequest::new(10, 0).with_search("Acme");
    match partner.list_organizations(Some(&page)).await {
        Ok(list) => println!("✓ {} of {} organizations", list.results.len(), list.total_records),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ TurboPartner example complete");
}
