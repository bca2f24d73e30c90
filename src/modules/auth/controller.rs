use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;

use super::model::{TokenRequest, TokenResponse};

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

/// Issue a one-hour bearer token for the given email
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(dto): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = create_access_token(&dto.email, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
