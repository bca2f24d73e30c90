use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_admin;
use crate::modules::users::controller::{
    check_admin, check_instructor, create_user, delete_user, get_users, promote_to_admin,
    promote_to_instructor,
};
use crate::state::AppState;

/// `GET /` is admin-gated inside the handler (the sibling `POST /` signup is
/// open); the promotion PATCHes are open by default and guarded by
/// `StrictGate`. The GET on `/admin/{id}` takes an email, the PATCH a
/// document id.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/admin/{id}", get(check_admin).patch(promote_to_admin))
        .route(
            "/instructor/{id}",
            get(check_instructor).patch(promote_to_instructor),
        )
        .merge(admin_routes)
}
