use std::sync::Arc;

use auth::Identity;
use auth::TokenCodec;
use auth::TokenVerifier;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use profile_service::domain::profile::service::ProfileService;
use profile_service::inbound::http::router::create_router;
use profile_service::outbound::repositories::SqliteProfileRepository;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory database
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // A single connection keeps every query on the same in-memory
        // database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(SqliteProfileRepository::new(pool));
        let profile_service = Arc::new(ProfileService::new(repository));
        let verifier = Arc::new(TokenVerifier::new(
            TokenCodec::new(TEST_SECRET, Algorithm::HS256).unwrap(),
        ));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(profile_service, verifier);
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_SECRET, Algorithm::HS256).unwrap(),
        }
    }

    /// Mint a bearer token for the given user id, as the issuing service
    /// would.
    pub fn token_for(&self, user_id: i64) -> String {
        self.token_codec
            .encode(Identity(user_id), Duration::minutes(30))
            .unwrap()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }
}
