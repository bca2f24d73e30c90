use camphub::config::cors::CorsConfig;
use camphub::config::gating::GatingConfig;
use camphub::config::jwt::JwtConfig;
use camphub::router::init_router;
use camphub::state::AppState;
use camphub::utils::jwt::create_access_token;
use mongodb::{Client, Database};
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Database handle for tests. The driver connects lazily, so building the
/// app does not require a running server; only tests that actually perform
/// store operations do (those are `#[ignore]`d).
pub async fn test_database() -> Database {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    Client::with_uri_str(&uri)
        .await
        .unwrap()
        .database("camphub_test")
}

pub async fn setup_test_app() -> axum::Router {
    setup_test_app_with(GatingConfig::default()).await
}

#[allow(dead_code)]
pub async fn setup_test_app_with(gating_config: GatingConfig) -> axum::Router {
    let state = AppState {
        db: test_database().await,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        gating_config,
    };

    init_router(state)
}

pub fn bearer_token_for(email: &str) -> String {
    create_access_token(email, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Insert a user document directly, bypassing the HTTP surface.
#[allow(dead_code)]
pub async fn seed_user(db: &Database, email: &str, role: Option<&str>) {
    db.collection::<camphub::modules::users::model::User>("users")
        .insert_one(&camphub::modules::users::model::User {
            id: None,
            name: "Test User".to_string(),
            email: email.to_string(),
            photo_url: None,
            role: role.map(|r| r.to_string()),
        })
        .await
        .unwrap();
}
