mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    common::app("http://127.0.0.1:1")
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn location_of(uri: &str) -> String {
    let response = get(uri).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn legacy_club_pages_redirect_to_canonical_paths() {
    let cases = [
        ("/campus-life/clubs/chess", "/clubs/chess"),
        ("/campus-life/clubs/chess/alumni", "/clubs/chess/alumni"),
        ("/campus-life/clubs/chess/gallery", "/clubs/chess/gallery"),
        ("/campus-life/clubs/chess/members", "/clubs/chess/members"),
    ];

    for (from, to) in cases {
        assert_eq!(location_of(from).await, to);
    }
}

#[tokio::test]
async fn reserved_characters_in_id_are_passed_through() {
    assert_eq!(
        location_of("/campus-life/clubs/chess%20club/members").await,
        "/clubs/chess%20club/members"
    );
    assert_eq!(
        location_of("/campus-life/clubs/a%2Fb").await,
        "/clubs/a%2Fb"
    );
    assert_eq!(
        location_of("/campus-life/clubs/caf%C3%A9/gallery").await,
        "/clubs/caf%C3%A9/gallery"
    );
}

#[tokio::test]
async fn query_string_is_not_carried_over() {
    assert_eq!(
        location_of("/campus-life/clubs/42/alumni?year=2020").await,
        "/clubs/42/alumni"
    );
}

#[tokio::test]
async fn redirect_body_is_empty() {
    let response = get("/campus-life/clubs/42").await;
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_suffix_and_missing_id_are_not_routed() {
    assert_eq!(
        get("/campus-life/clubs/42/events").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get("/campus-life/clubs/").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn health_check_works() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
