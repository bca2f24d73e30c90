//! User documents and DTOs.
//!
//! A user is keyed by email and carries at most one role. The `role` field
//! is stored as a free string (documents predate this service); every
//! authorization decision goes through [`UserRole::parse`], which maps
//! anything unrecognized (including an absent field) to [`UserRole::None`].

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Privilege level. Exactly one per user; [`UserRole::None`] is the default
/// for plain signups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Instructor,
    None,
}

impl UserRole {
    /// Maps a stored role string to a role. Absent and unrecognized values
    /// resolve to [`UserRole::None`]; this never fails.
    pub fn parse(role: Option<&str>) -> Self {
        match role {
            Some("admin") => UserRole::Admin,
            Some("instructor") => UserRole::Instructor,
            _ => UserRole::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Instructor => "instructor",
            UserRole::None => "none",
        }
    }
}

/// A user document in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::parse(self.role.as_deref())
    }
}

/// Signup payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: Option<String>,
}

/// Result of the admin self-check. `admin` is false both for non-admins and
/// when the queried email does not match the authenticated identity.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Result of the instructor self-check; same fail-open contract as
/// [`AdminCheckResponse`].
#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}
