//! Class catalog and moderation tests against a live MongoDB.
//! Run with `cargo test -- --ignored`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{bearer_token_for, generate_unique_email, seed_user, setup_test_app, test_database};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn submission_request(token: &str, email: &str, title: &str, seats: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/instructor")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": title,
                "instructorName": "Test Instructor",
                "instructorEmail": email,
                "price": 99.0,
                "availableSeats": seats
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn submission_requires_the_instructor_role() {
    let app = setup_test_app().await;
    let db = test_database().await;
    let email = generate_unique_email();
    seed_user(&db, &email, None).await;

    let token = bearer_token_for(&email);
    let response = app
        .oneshot(submission_request(&token, &email, "Cello Basics", 10))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["message"], "forbidden message");
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn moderation_flow_puts_approved_classes_in_the_catalog() {
    let app = setup_test_app().await;
    let db = test_database().await;

    let instructor_email = generate_unique_email();
    seed_user(&db, &instructor_email, Some("instructor")).await;
    let token = bearer_token_for(&instructor_email);

    // Submit two classes; both start without a status.
    let title_a = format!("Cello Basics {}", uuid::Uuid::new_v4());
    let title_b = format!("Violin Basics {}", uuid::Uuid::new_v4());

    let response = app
        .clone()
        .oneshot(submission_request(&token, &instructor_email, &title_a, 5))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id_a = body_json(response).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(submission_request(&token, &instructor_email, &title_b, 50))
        .await
        .unwrap();
    let id_b = body_json(response).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string();

    // The instructor sees both in their own listing.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/instructor?email={instructor_email}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mine = body_json(response).await;
    assert_eq!(mine.as_array().unwrap().len(), 2);
    assert!(mine[0].get("status").is_none());

    // Approve one, deny the other (open by default).
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/added_classes/approved/{id_b}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["modifiedCount"], 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/added_classes/denied/{id_a}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Only the approved class is in the public catalog.
    let response = app
        .oneshot(Request::builder().uri("/classes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let catalog = body_json(response).await;
    let titles: Vec<&str> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&title_b.as_str()));
    assert!(!titles.contains(&title_a.as_str()));
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn catalog_sorts_by_available_seats_descending() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/classes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let catalog = body_json(response).await;
    let seats: Vec<i64> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["availableSeats"].as_i64().unwrap())
        .collect();

    let mut sorted = seats.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(seats, sorted);
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn moderation_queue_is_admin_only() {
    let app = setup_test_app().await;
    let db = test_database().await;

    let admin_email = generate_unique_email();
    seed_user(&db, &admin_email, Some("admin")).await;
    let token = bearer_token_for(&admin_email);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/added_classes")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().is_some());
}
