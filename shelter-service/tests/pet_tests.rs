mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_list_pets_starts_empty() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/pets").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_pet_requires_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/pets")
        .json(&json!({ "name": "Rex", "breed": "Mixed", "age": "2 years" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Headers Malformed");
}

#[tokio::test]
async fn test_create_pet_applies_defaults() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;

    assert_eq!(pet["name"], "Rex");
    assert_eq!(pet["species"], "Dog");
    assert_eq!(pet["gender"], "Male");
    assert_eq!(pet["status"], "Available");
    assert!(pet["id"].is_string());
    assert!(pet["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_pet_missing_required_field() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let response = app
        .post("/api/pets")
        .bearer_auth(&token)
        .json(&json!({ "breed": "Mixed", "age": "2 years" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Name is required");
}

#[tokio::test]
async fn test_create_pet_rejects_unknown_species() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let response = app
        .post("/api/pets")
        .bearer_auth(&token)
        .json(&json!({
            "name": "Smaug",
            "breed": "Fire drake",
            "age": "171 years",
            "species": "Dragon"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["errorMessage"].as_str().unwrap().contains("species"));
}

#[tokio::test]
async fn test_get_pet_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get(&format!("/api/pets/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Pet not found");
}

#[tokio::test]
async fn test_update_pet() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    let response = app
        .put(&format!("/api/pets/{}", pet_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Adopted", "description": "Found a home" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Adopted");
    assert_eq!(body["description"], "Found a home");
    // Untouched fields survive
    assert_eq!(body["name"], "Rex");
}

#[tokio::test]
async fn test_delete_pet_is_admin_only() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;
    let admin_token = app
        .spawn_admin("shelter_admin", "admin@example.com", "Admin123!")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    // A regular user cannot delete
    let response = app
        .delete(&format!("/api/pets/{}", pet_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // An admin can
    let response = app
        .delete(&format!("/api/pets/{}", pet_id))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Pet deleted successfully");

    let response = app
        .get(&format!("/api/pets/{}", pet_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pets_newest_first() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    app.create_pet(&token, "Rex").await;
    app.create_pet(&token, "Whiskers").await;

    let response = app.get("/api/pets").send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let pets = body.as_array().unwrap();
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0]["name"], "Whiskers");
    assert_eq!(pets[1]["name"], "Rex");
}
