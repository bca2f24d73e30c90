use mongodb::Database;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db;
use crate::config::gating::GatingConfig;
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub gating_config: GatingConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        gating_config: GatingConfig::from_env(),
    }
}
