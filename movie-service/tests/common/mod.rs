pub mod db;

use std::sync::Arc;

use auth::AuthConfig;
use auth::Authenticator;
use auth::HashingCost;
use auth::JwtHandler;
use movie_service::inbound::http::router::create_router;
use movie_service::inbound::http::router::AppState;
use movie_service::outbound::repositories::memory::InMemoryMovieRepository;
use movie_service::outbound::repositories::memory::InMemoryReviewRepository;
use movie_service::outbound::repositories::memory::InMemoryUserRepository;
use movie_service::user::models::UserId;
use movie_service::user::models::Username;
use movie_service::user::ports::UserRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap Argon2 cost keeps the suite fast
        let auth_config = AuthConfig::new(TEST_SECRET, 60)
            .expect("Invalid test auth config")
            .with_hashing_cost(HashingCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .expect("Invalid test hashing cost");

        let users = Arc::new(InMemoryUserRepository::new());
        let state = AppState::new(
            Arc::clone(&users),
            Arc::new(InMemoryMovieRepository::new()),
            Arc::new(InMemoryReviewRepository::new()),
            Arc::new(Authenticator::new(&auth_config)),
        );

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::from_config(&auth_config),
            users,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path)).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }

    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/users/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/users/login")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning the access token
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        self.register(username, password).await;
        let body: serde_json::Value = self
            .login(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Look up a stored user's id directly; the API never exposes it
    pub async fn user_id(&self, username: &str) -> UserId {
        let username = Username::new(username.to_string()).expect("Invalid username");
        self.users
            .find_by_username(&username)
            .await
            .expect("Store failure")
            .expect("User not found")
            .id
    }
}
