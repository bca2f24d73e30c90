use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::carts::controller::{add_to_cart, get_cart, remove_from_cart};
use crate::state::AppState;

pub fn init_carts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).post(add_to_cart))
        .route("/{id}", delete(remove_from_cart))
}
