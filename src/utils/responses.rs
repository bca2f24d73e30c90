//! Shared response DTOs echoing the store's acknowledgment shapes.
//!
//! Handlers return the store outcome to the caller unmodified; these structs
//! mirror the driver's result types with the field casing the original
//! clients expect (`insertedId`, `matchedCount`, `deletedCount`).

use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertedResponse {
    fn from(result: InsertOneResult) -> Self {
        let inserted_id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdatedResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeletedResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_response_serializes_camel_case() {
        let response = InsertedResponse {
            acknowledged: true,
            inserted_id: "64b0f0a1c2d3e4f5a6b7c8d9".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("insertedId"));
        assert!(json.contains("64b0f0a1c2d3e4f5a6b7c8d9"));
    }

    #[test]
    fn counts_serialize_camel_case() {
        let response = UpdatedResponse {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("matchedCount"));
        assert!(json.contains("modifiedCount"));

        let response = DeletedResponse {
            acknowledged: true,
            deleted_count: 0,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"deletedCount\":0"));
    }
}
