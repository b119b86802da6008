//! API integration tests
//!
//! These tests run against a live server with a fresh database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Unique suffix so tests can run repeatedly against the same database
fn unique_suffix() -> String {
    format!("{}", chrono::Utc::now().timestamp_micros())
}

/// Helper to create an admin account and get its token
async fn get_admin_token(client: &Client) -> String {
    let suffix = unique_suffix();
    let username = format!("admin_{}", suffix);

    let response = client
        .post(format!("{}/admin_signup/", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass",
            "confirm_password": "testpass",
            "department": "IT"
        }))
        .send()
        .await
        .expect("Failed to send signup request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/admin_login/", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to create an asset through the multipart form, returning its id
async fn create_asset(client: &Client, token: &str, name: &str) -> i64 {
    let form = reqwest::multipart::Form::new()
        .text("name", name.to_string())
        .text("quantity", "3")
        .text("make", "TestMake");

    let response = client
        .post(format!("{}/admin/assets/add/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send create asset request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No asset ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_admin_login() {
    let client = Client::new();
    let suffix = unique_suffix();
    let username = format!("login_{}", suffix);

    let response = client
        .post(format!("{}/admin_signup/", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass",
            "confirm_password": "testpass",
            "department": "Ops"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/admin_login/", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_admin_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin_login/", BASE_URL))
        .json(&json!({
            "username": "nobody",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_admin_signup_duplicate_username() {
    let client = Client::new();
    let suffix = unique_suffix();
    let username = format!("dup_{}", suffix);
    let payload = json!({
        "username": username,
        "password": "testpass",
        "confirm_password": "testpass",
        "department": "IT"
    });

    let response = client
        .post(format!("{}/admin_signup/", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/admin_signup/", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_signup_password_mismatch() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin_signup/", BASE_URL))
        .json(&json!({
            "username": format!("mismatch_{}", unique_suffix()),
            "password": "testpass",
            "confirm_password": "different",
            "department": "IT"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin/assets/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_vendor_cannot_use_admin_routes() {
    let client = Client::new();
    let suffix = unique_suffix();
    let email = format!("vendor_{}@example.com", suffix);

    let response = client
        .post(format!("{}/vendor-signup/", BASE_URL))
        .json(&json!({
            "name": format!("Vendor {}", suffix),
            "email": email,
            "password": "testpass",
            "confirm_password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/vendor-login/", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("No token").to_string();

    let response = client
        .get(format!("{}/admin/assets/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_vendor_login_wrong_password() {
    let client = Client::new();
    let suffix = unique_suffix();
    let email = format!("wrongpw_{}@example.com", suffix);

    let response = client
        .post(format!("{}/vendor-signup/", BASE_URL))
        .json(&json!({
            "name": format!("Vendor {}", suffix),
            "email": email,
            "password": "rightpass",
            "confirm_password": "rightpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/vendor-login/", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "wrongpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_asset() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let asset_id = create_asset(&client, &token, "Test Laptop").await;

    // New assets start in inventory
    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset"]["current_status"], "inventory");

    // Delete
    let response = client
        .post(format!("{}/admin/assets/delete/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Gone afterwards
    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_status_change_records_history() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let asset_id = create_asset(&client, &token, "Monitor").await;

    let response = client
        .post(format!("{}/admin/assets/status/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("status", "repair"), ("note", "Cracked panel")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "repair");
    assert_eq!(body["note"], "Cracked panel");

    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset"]["current_status"], "repair");
    let history = body["history"].as_array().expect("history not an array");
    assert_eq!(history[0]["status"], "repair");
}

#[tokio::test]
#[ignore]
async fn test_invalid_status_rejected() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let asset_id = create_asset(&client, &token, "Keyboard").await;

    let response = client
        .post(format!("{}/admin/assets/status/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("status", "lost")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Status and history must be untouched
    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset"]["current_status"], "inventory");
    assert_eq!(body["history"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_assign_asset() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let asset_id = create_asset(&client, &token, "Dock").await;

    let response = client
        .post(format!("{}/admin/assignments/assign/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("assigned_to", "Jordan"), ("note", "Desk 4")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["assignment"]["assigned_to"], "Jordan");
    assert_eq!(body["history"]["status"], "assigned");

    // Asset now assigned with holder set, one assignment, one history row
    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset"]["current_status"], "assigned");
    assert_eq!(body["asset"]["current_holder"], "Jordan");
    assert_eq!(body["assignments"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["history"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore]
async fn test_repair_after_assign_keeps_holder() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let asset_id = create_asset(&client, &token, "Tablet").await;

    let response = client
        .post(format!("{}/admin/assignments/assign/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("assigned_to", "Alice"), ("note", "initial issue")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/admin/assets/status/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("status", "repair"), ("note", "screen cracked")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset"]["current_status"], "repair");
    // The holder is only written by the assign flow, never cleared
    assert_eq!(body["asset"]["current_holder"], "Alice");
    let history = body["history"].as_array().expect("history not an array");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["status"], "repair");
}

#[tokio::test]
#[ignore]
async fn test_assign_requires_holder_name() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let asset_id = create_asset(&client, &token, "Headset").await;

    let response = client
        .post(format!("{}/admin/assignments/assign/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .form(&[("assigned_to", "   ")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Nothing recorded
    let response = client
        .get(format!("{}/admin/history/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["assignments"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_vendor_with_assets_cannot_be_deleted() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let suffix = unique_suffix();

    // Create vendor from the admin side
    let response = client
        .post(format!("{}/admin/vendors/add/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": format!("Acme {}", suffix),
            "email": format!("acme_{}@example.com", suffix),
            "password": "testpass",
            "confirm_password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let vendor_id = body["id"].as_i64().expect("No vendor ID");

    // Give the vendor an asset
    let form = reqwest::multipart::Form::new()
        .text("name", "Vendor-owned printer")
        .text("quantity", "1")
        .text("vendor_id", vendor_id.to_string());
    let response = client
        .post(format!("{}/admin/assets/add/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let asset: Value = response.json().await.expect("Failed to parse response");
    let asset_id = asset["id"].as_i64().expect("No asset ID");

    // Delete is refused while the asset exists
    let response = client
        .post(format!("{}/admin/vendors/delete/{}/", BASE_URL, vendor_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // After removing the asset the vendor can go
    let response = client
        .post(format!("{}/admin/assets/delete/{}/", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .post(format!("{}/admin/vendors/delete/{}/", BASE_URL, vendor_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_category_duplicate_name() {
    let client = Client::new();
    let token = get_admin_token(&client).await;
    let name = format!("Laptops {}", unique_suffix());

    let response = client
        .post(format!("{}/admin/categories/add/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/admin/categories/add/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_vendor_portal_add_and_list_assets() {
    let client = Client::new();
    let suffix = unique_suffix();
    let email = format!("portal_{}@example.com", suffix);

    let response = client
        .post(format!("{}/vendor-signup/", BASE_URL))
        .json(&json!({
            "name": format!("Portal Vendor {}", suffix),
            "email": email,
            "password": "testpass",
            "confirm_password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/vendor-login/", BASE_URL))
        .json(&json!({ "email": email, "password": "testpass" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("No token").to_string();
    let vendor_id = body["account_id"].as_i64().expect("No account_id");

    // vendor_id in the form is ignored; the token decides ownership
    let form = reqwest::multipart::Form::new()
        .text("name", "Scanner")
        .text("quantity", "2")
        .text("vendor_id", "999999");
    let response = client
        .post(format!("{}/vendor-add-asset/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let asset: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(asset["vendor_id"].as_i64(), Some(vendor_id));

    let response = client
        .get(format!("{}/vendor/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["assets"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["total_quantity"].as_i64(), Some(2));
}

#[tokio::test]
#[ignore]
async fn test_dashboard_counts() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .get(format!("{}/admin/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_assets"].is_number());
    assert!(body["total_vendors"].is_number());
    assert!(body["status_counts"]["inventory"].is_number());
    assert!(body["latest_assets"].is_array());
}
