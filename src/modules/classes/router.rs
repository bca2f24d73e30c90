use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::role::{require_admin, require_instructor};
use crate::modules::classes::controller::{
    approve_class, deny_class, get_added_classes, get_classes, get_instructor_classes,
    submit_class,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new().route("/", get(get_classes))
}

/// The moderation queue listing is admin-gated; the status transitions ship
/// open (StrictGate inside the handlers).
pub fn init_added_classes_router(state: AppState) -> Router<AppState> {
    let queue = Router::new()
        .route("/", get(get_added_classes))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/approved/{id}", patch(approve_class))
        .route("/denied/{id}", patch(deny_class))
        .merge(queue)
}

pub fn init_instructor_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(submit_class).get(get_instructor_classes))
        .route_layer(middleware::from_fn_with_state(state, require_instructor))
}
