//! Class submission documents.
//!
//! Instructor submissions land in the `classes` collection without a
//! `status` field; absence reads as pending. Moderation writes `approved` or
//! `denied`, both terminal. The public catalog only ever sees approved
//! documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Pending,
    Approved,
    Denied,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Pending => "pending",
            ClassStatus::Approved => "approved",
            ClassStatus::Denied => "denied",
        }
    }
}

/// A class submission document in the `classes` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassSubmission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub title: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub available_seats: i64,
    /// Absent until a moderation decision is recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassStatus>,
}

/// Instructor submission payload. No `status`: the document is created
/// without one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClassDto {
    pub title: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub photo_url: Option<String>,
    pub available_seats: i64,
}

/// Owner-scoped listing filter.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct InstructorQuery {
    pub email: Option<String>,
}
