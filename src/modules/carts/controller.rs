use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::carts::model::{AddCartItemDto, CartItem, CartQuery};
use crate::modules::carts::service::CartService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::responses::{DeletedResponse, InsertedResponse};

/// List the authenticated user's cart
///
/// No `email` query yields an empty list without touching the store; an
/// `email` that differs from the token's claim is rejected.
#[utoipa::path(
    get,
    path = "/carts",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart items for the email", body = Vec<CartItem>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not match the token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
#[instrument]
pub async fn get_cart(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let Some(email) = params.email else {
        return Ok(Json(Vec::new()));
    };

    if auth_user.email() != email {
        return Err(AppError::forbidden("forbidden message"));
    }

    let items = CartService::items_for_email(&state.db, &email).await?;
    Ok(Json(items))
}

/// Add an item to a cart
#[utoipa::path(
    post,
    path = "/carts",
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Carts"
)]
#[instrument]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(dto): Json<AddCartItemDto>,
) -> Result<Json<InsertedResponse>, AppError> {
    let result = CartService::add_item(&state.db, dto).await?;
    Ok(Json(InsertedResponse::from(result)))
}

/// Remove an item from a cart
#[utoipa::path(
    delete,
    path = "/carts/{id}",
    params(("id" = String, Path, description = "Cart item document id")),
    responses(
        (status = 200, description = "Deleted count", body = DeletedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Carts"
)]
#[instrument]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = CartService::remove_item(&state.db, &id).await?;
    Ok(Json(DeletedResponse::from(result)))
}
