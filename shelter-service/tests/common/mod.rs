#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use serde_json::json;
use shelter_service::domain::adoption::service::AdoptionService;
use shelter_service::domain::comment::service::CommentService;
use shelter_service::domain::pet::service::PetService;
use shelter_service::domain::user::service::UserService;
use shelter_service::domain::wild_animal::service::WildAnimalService;
use shelter_service::inbound::http::router::create_router;
use shelter_service::inbound::http::router::AppState;

use self::memory::InMemoryAdoptionRepository;
use self::memory::InMemoryCommentRepository;
use self::memory::InMemoryPetRepository;
use self::memory::InMemoryUserRepository;
use self::memory::InMemoryWildAnimalRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application: the real router served on a random port, backed by
/// in-memory repositories so the suite needs no external infrastructure.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub user_store: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let pet_repo = Arc::new(InMemoryPetRepository::new());
        let wild_animal_repo = Arc::new(InMemoryWildAnimalRepository::new());
        let adoption_repo = Arc::new(InMemoryAdoptionRepository::new(
            Arc::clone(&user_repo),
            Arc::clone(&pet_repo),
        ));
        let comment_repo = Arc::new(InMemoryCommentRepository::new(Arc::clone(&user_repo)));

        let state = AppState {
            users: Arc::new(UserService::new(Arc::clone(&user_repo))),
            pets: Arc::new(PetService::new(Arc::clone(&pet_repo))),
            wild_animals: Arc::new(WildAnimalService::new(wild_animal_repo)),
            adoptions: Arc::new(AdoptionService::new(adoption_repo, pet_repo)),
            comments: Arc::new(CommentService::new(comment_repo)),
            authenticator: Arc::new(Authenticator::new(JWT_SECRET)),
            jwt_expiration_hours: 6,
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            user_store: user_repo,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an account and return the created document.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/signup")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute signup request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse signup body")
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["authToken"]
            .as_str()
            .expect("login response missing authToken")
            .to_string()
    }

    /// Register, log in, and return (token, user id).
    pub async fn signup_and_login(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> (String, String) {
        let created = self.signup(username, email, password).await;
        let token = self.login(email, password).await;
        (token, created["id"].as_str().unwrap().to_string())
    }

    /// Register an account, flip it to Admin directly in the store (the
    /// production equivalent happens outside the HTTP surface), and log in
    /// again so the token carries the Admin role.
    pub async fn spawn_admin(&self, username: &str, email: &str, password: &str) -> String {
        self.signup(username, email, password).await;
        self.user_store.promote_to_admin(email);
        self.login(email, password).await
    }

    /// Create a pet listing as the given user and return the document.
    pub async fn create_pet(&self, token: &str, name: &str) -> serde_json::Value {
        let response = self
            .post("/api/pets")
            .bearer_auth(token)
            .json(&json!({
                "name": name,
                "breed": "Mixed",
                "age": "2 years",
            }))
            .send()
            .await
            .expect("Failed to execute create pet request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response
            .json()
            .await
            .expect("Failed to parse create pet body")
    }
}
