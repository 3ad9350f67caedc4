mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_adoption_reserves_the_pet() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    let response = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": pet_id, "notes": "We have a garden" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["notes"], "We have a garden");
    // Populated references
    assert_eq!(body["user"]["username"], "ark_fan");
    assert_eq!(body["user"]["email"], "fan@example.com");
    assert_eq!(body["pet"]["name"], "Rex");
    assert_eq!(body["pet"]["status"], "Pending");

    // The listing itself flipped to Pending
    let pet: serde_json::Value = app
        .get(&format!("/api/pets/{}", pet_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pet["status"], "Pending");
}

#[tokio::test]
async fn test_create_adoption_unknown_pet() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let response = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": Uuid::new_v4().to_string() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Pet not found");
}

#[tokio::test]
async fn test_create_adoption_missing_pet_field() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let response = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "notes": "no pet given" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Pet is required");
}

#[tokio::test]
async fn test_create_adoption_pet_not_available() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    // Mark the pet Adopted through a direct edit
    app.put(&format!("/api/pets/{}", pet_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Adopted" }))
        .send()
        .await
        .unwrap();

    let response = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Pet is not available for adoption");
}

#[tokio::test]
async fn test_second_request_for_reserved_pet_fails() {
    let app = TestApp::spawn().await;
    let (first_token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;
    let (second_token, _) = app
        .signup_and_login("other_fan", "other@example.com", "password123")
        .await;

    let pet = app.create_pet(&first_token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    let first = app
        .post("/api/adoptions")
        .bearer_auth(&first_token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // The pet is now Pending, so another user's request bounces
    let second = app
        .post("/api/adoptions")
        .bearer_auth(&second_token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["errorMessage"], "Pet is not available for adoption");
}

#[tokio::test]
async fn test_duplicate_active_request_for_same_pair() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    let first = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Staff put the listing back to Available while the request is still
    // Pending; the same user asking again trips the duplicate check.
    app.put(&format!("/api/pets/{}", pet_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Available" }))
        .send()
        .await
        .unwrap();

    let second = app
        .post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(
        body["errorMessage"],
        "You already have an active adoption request for this pet"
    );
}

#[tokio::test]
async fn test_adoption_routes_require_auth() {
    let app = TestApp::spawn().await;

    let create = app
        .post("/api/adoptions")
        .json(&json!({ "pet": Uuid::new_v4().to_string() }))
        .send()
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let list = app.get("/api/adoptions").send().await.unwrap();
    assert_eq!(list.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_adoptions_is_populated() {
    let app = TestApp::spawn().await;
    let (token, _) = app
        .signup_and_login("ark_fan", "fan@example.com", "password123")
        .await;

    let pet = app.create_pet(&token, "Rex").await;
    let pet_id = pet["id"].as_str().unwrap();

    app.post("/api/adoptions")
        .bearer_auth(&token)
        .json(&json!({ "pet": pet_id }))
        .send()
        .await
        .unwrap();

    let response = app
        .get("/api/adoptions")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let adoptions = body.as_array().unwrap();
    assert_eq!(adoptions.len(), 1);
    assert_eq!(adoptions[0]["user"]["username"], "ark_fan");
    assert_eq!(adoptions[0]["pet"]["name"], "Rex");
    assert_eq!(adoptions[0]["status"], "Pending");
}
