//! Cart tests against a live MongoDB. Run with `cargo test -- --ignored`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{bearer_token_for, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn add_list_and_remove_a_cart_item() {
    let app = setup_test_app().await;
    let email = generate_unique_email();

    // Adding is open; no token needed.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/carts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "classId": "64b0f0a1c2d3e4f5a6b7c8d9",
                        "title": "Cello Basics",
                        "price": 99.0,
                        "email": email
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["acknowledged"], true);
    let id = body["insertedId"].as_str().unwrap().to_string();

    // Listing needs the owner's token.
    let token = bearer_token_for(&email);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/carts?email={email}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["title"], "Cello Basics");

    // Removal is open, like the original surface.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/carts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deletedCount"], 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/carts?email={email}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}
