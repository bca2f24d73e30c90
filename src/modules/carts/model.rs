use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A cart item in the `carts` collection, keyed by the owning user's email.
/// Items are inserted and deleted, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub class_id: String,
    pub title: String,
    pub price: f64,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemDto {
    pub class_id: String,
    pub title: String,
    pub price: f64,
    pub email: String,
}

/// Owner-scoped listing filter.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CartQuery {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_serializes_camel_case() {
        let item = CartItem {
            id: None,
            class_id: "64b0f0a1c2d3e4f5a6b7c8d9".to_string(),
            title: "Violin for Beginners".to_string(),
            price: 120.0,
            email: "jane@example.com".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("classId"));
        assert!(!json.contains("_id"));
    }

    #[test]
    fn add_cart_item_dto_deserializes() {
        let json = r#"{
            "classId": "64b0f0a1c2d3e4f5a6b7c8d9",
            "title": "Violin for Beginners",
            "price": 120.0,
            "email": "jane@example.com"
        }"#;

        let dto: AddCartItemDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.email, "jane@example.com");
        assert_eq!(dto.class_id, "64b0f0a1c2d3e4f5a6b7c8d9");
    }
}
