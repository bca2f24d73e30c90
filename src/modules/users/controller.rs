use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, StrictGate};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    AdminCheckResponse, CreateUserDto, InstructorCheckResponse, User, UserRole,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::responses::{DeletedResponse, InsertedResponse, MessageResponse, UpdatedResponse};

/// Sign up a user; duplicate emails are reported, not inserted
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Insert acknowledgment, or a message when the email already exists", body = InsertedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<Response, AppError> {
    match UserService::create_user(&state.db, dto).await? {
        Some(result) => Ok(Json(InsertedResponse::from(result)).into_response()),
        None => Ok(Json(MessageResponse {
            message: "user already exists".to_string(),
        })
        .into_response()),
    }
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user documents", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Authenticated but not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Check whether the authenticated user is an admin
///
/// Fail-open self-check: querying an email other than the token's reports
/// `admin: false` instead of rejecting.
#[utoipa::path(
    get,
    path = "/users/admin/{id}",
    params(("id" = String, Path, description = "Email to check, must match the token's claim")),
    responses(
        (status = 200, description = "Admin flag", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(AdminCheckResponse { admin: false }));
    }

    let role = UserService::role_for_email(&state.db, &email).await?;
    Ok(Json(AdminCheckResponse {
        admin: role == UserRole::Admin,
    }))
}

/// Check whether the authenticated user is an instructor
#[utoipa::path(
    get,
    path = "/users/instructor/{id}",
    params(("id" = String, Path, description = "Email to check, must match the token's claim")),
    responses(
        (status = 200, description = "Instructor flag", body = InstructorCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<InstructorCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorCheckResponse { instructor: false }));
    }

    let role = UserService::role_for_email(&state.db, &email).await?;
    Ok(Json(InstructorCheckResponse {
        instructor: role == UserRole::Instructor,
    }))
}

/// Promote a user to admin
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Update counts", body = UpdatedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn promote_to_admin(
    State(state): State<AppState>,
    _gate: StrictGate,
    Path(id): Path<String>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let result = UserService::set_role(&state.db, &id, UserRole::Admin).await?;
    Ok(Json(UpdatedResponse::from(result)))
}

/// Promote a user to instructor
#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Update counts", body = UpdatedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn promote_to_instructor(
    State(state): State<AppState>,
    _gate: StrictGate,
    Path(id): Path<String>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let result = UserService::set_role(&state.db, &id, UserRole::Instructor).await?;
    Ok(Json(UpdatedResponse::from(result)))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Deleted count", body = DeletedResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Authenticated but not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = UserService::delete_user(&state.db, &id).await?;
    Ok(Json(DeletedResponse::from(result)))
}
