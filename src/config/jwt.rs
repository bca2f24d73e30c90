use std::env;

/// Token signing configuration. Issued tokens expire
/// `access_token_expiry` seconds after issuance; there are no refresh
/// tokens, clients simply request a new one.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "camphub-dev-secret-do-not-deploy".to_string());

        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600); // 1 hour

        Self {
            secret,
            access_token_expiry,
        }
    }
}
