use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{TokenRequest, TokenResponse};
use crate::modules::carts::model::{AddCartItemDto, CartItem};
use crate::modules::classes::model::{ClassStatus, ClassSubmission, NewClassDto};
use crate::modules::users::model::{
    AdminCheckResponse, CreateUserDto, InstructorCheckResponse, User, UserRole,
};
use crate::utils::responses::{
    DeletedResponse, InsertedResponse, MessageResponse, UpdatedResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_instructor,
        crate::modules::users::controller::promote_to_admin,
        crate::modules::users::controller::promote_to_instructor,
        crate::modules::users::controller::delete_user,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::submit_class,
        crate::modules::classes::controller::get_instructor_classes,
        crate::modules::classes::controller::get_added_classes,
        crate::modules::classes::controller::approve_class,
        crate::modules::classes::controller::deny_class,
        crate::modules::carts::controller::get_cart,
        crate::modules::carts::controller::add_to_cart,
        crate::modules::carts::controller::remove_from_cart,
    ),
    components(
        schemas(
            TokenRequest,
            TokenResponse,
            User,
            UserRole,
            CreateUserDto,
            AdminCheckResponse,
            InstructorCheckResponse,
            ClassSubmission,
            ClassStatus,
            NewClassDto,
            CartItem,
            AddCartItemDto,
            MessageResponse,
            InsertedResponse,
            UpdatedResponse,
            DeletedResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Bearer token issuance"),
        (name = "Users", description = "Signup, roles, and self-checks"),
        (name = "Classes", description = "Catalog, submissions, and moderation"),
        (name = "Carts", description = "Shopping cart endpoints")
    ),
    info(
        title = "Camphub API",
        version = "0.1.0",
        description = "Course-enrollment backend with JWT authentication and role-gated moderation.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
