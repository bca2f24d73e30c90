use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::StrictGate;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::{ClassStatus, ClassSubmission, InstructorQuery, NewClassDto};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::responses::{InsertedResponse, UpdatedResponse};

/// Public catalog of approved classes, most available seats first
#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "Approved classes", body = Vec<ClassSubmission>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument]
pub async fn get_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassSubmission>>, AppError> {
    let classes = ClassService::approved_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Submit a class for moderation (instructor only)
#[utoipa::path(
    post,
    path = "/instructor",
    request_body = NewClassDto,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertedResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Authenticated but not an instructor", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn submit_class(
    State(state): State<AppState>,
    Json(dto): Json<NewClassDto>,
) -> Result<Json<InsertedResponse>, AppError> {
    let result = ClassService::submit(&state.db, dto).await?;
    Ok(Json(InsertedResponse::from(result)))
}

/// List the authenticated instructor's own submissions
///
/// No `email` query yields an empty list without querying the classes
/// collection; an `email` that differs from the token's claim is rejected.
#[utoipa::path(
    get,
    path = "/instructor",
    params(InstructorQuery),
    responses(
        (status = 200, description = "Submissions for the instructor", body = Vec<ClassSubmission>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not match the token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn get_instructor_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<InstructorQuery>,
) -> Result<Json<Vec<ClassSubmission>>, AppError> {
    let Some(email) = params.email else {
        return Ok(Json(Vec::new()));
    };

    if auth_user.email() != email {
        return Err(AppError::forbidden("forbidden message"));
    }

    let classes = ClassService::submissions_for_instructor(&state.db, &email).await?;
    Ok(Json(classes))
}

/// Moderation queue: every submission, any status (admin only)
#[utoipa::path(
    get,
    path = "/added_classes",
    responses(
        (status = 200, description = "All submissions", body = Vec<ClassSubmission>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Authenticated but not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn get_added_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassSubmission>>, AppError> {
    let classes = ClassService::all_submissions(&state.db).await?;
    Ok(Json(classes))
}

/// Approve a submission
#[utoipa::path(
    patch,
    path = "/added_classes/approved/{id}",
    params(("id" = String, Path, description = "Submission document id")),
    responses(
        (status = 200, description = "Update counts", body = UpdatedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument]
pub async fn approve_class(
    State(state): State<AppState>,
    _gate: StrictGate,
    Path(id): Path<String>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let result = ClassService::set_status(&state.db, &id, ClassStatus::Approved).await?;
    Ok(Json(UpdatedResponse::from(result)))
}

/// Deny a submission
#[utoipa::path(
    patch,
    path = "/added_classes/denied/{id}",
    params(("id" = String, Path, description = "Submission document id")),
    responses(
        (status = 200, description = "Update counts", body = UpdatedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument]
pub async fn deny_class(
    State(state): State<AppState>,
    _gate: StrictGate,
    Path(id): Path<String>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let result = ClassService::set_status(&state.db, &id, ClassStatus::Denied).await?;
    Ok(Json(UpdatedResponse::from(result)))
}
