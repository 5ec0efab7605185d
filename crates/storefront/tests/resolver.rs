//! Resolver routes: website name in, `303 See Other` to the viewer out.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

use common::{LOOKUP_PATH, body_text, business_json, get, header, router};

#[tokio::test]
async fn test_known_business_redirects_to_first_page() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(LOOKUP_PATH)
                .query_param("websiteName", "AmritMobiles");
            then.status(200).json_body(business_json(42));
        })
        .await;

    let response = get(&router(&server), "/AmritMobiles").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=42&skip=0&take=20&sortBy=Newest")
    );
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_unknown_business_redirects_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LOOKUP_PATH);
            then.status(200).json_body(json!({}));
        })
        .await;

    let response = get(&router(&server), "/Nobody").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=not-found")
    );
}

#[tokio::test]
async fn test_lookup_failure_redirects_to_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LOOKUP_PATH);
            then.status(500).body("upstream exploded");
        })
        .await;

    let response = get(&router(&server), "/AmritMobiles").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), Some("/inventory?userId=error"));
}

#[tokio::test]
async fn test_path_name_wins_over_query_name() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(LOOKUP_PATH)
                .query_param("websiteName", "FromPath");
            then.status(200).json_body(business_json(7));
        })
        .await;

    let response = get(&router(&server), "/FromPath?websiteName=FromQuery").await;

    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=7&skip=0&take=20&sortBy=Newest")
    );
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_root_uses_query_name_then_fallback() {
    let server = MockServer::start_async().await;
    let by_query = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(LOOKUP_PATH)
                .query_param("websiteName", "FromQuery");
            then.status(200).json_body(business_json(8));
        })
        .await;
    let fallback = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(LOOKUP_PATH)
                .query_param("websiteName", "Amrittest");
            then.status(200).json_body(business_json(9));
        })
        .await;

    let app = router(&server);

    let response = get(&app, "/?websiteName=FromQuery").await;
    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=8&skip=0&take=20&sortBy=Newest")
    );

    let response = get(&app, "/").await;
    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=9&skip=0&take=20&sortBy=Newest")
    );

    by_query.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn test_encoded_path_name_is_decoded_once() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(LOOKUP_PATH)
                .query_param("websiteName", "My Shop");
            then.status(200).json_body(business_json(11));
        })
        .await;

    let response = get(&router(&server), "/My%20Shop").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_resolved_business_header_shows_on_viewer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LOOKUP_PATH);
            then.status(200).json_body(business_json(42));
        })
        .await;

    let app = router(&server);
    let redirect = get(&app, "/AmritMobiles").await;
    let location = header(&redirect, "location").unwrap().to_string();

    let body = body_text(get(&app, &location).await).await;
    assert!(body.contains("<h1>Amrit Mobiles</h1>"));
    assert!(body.contains("1 Main St"));
}

#[tokio::test]
async fn test_favicon_is_not_a_website_name() {
    let server = MockServer::start_async().await;

    // Would be a 303 if it reached the resolver
    let response = get(&router(&server), "/favicon.ico").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_numeric_contact_fields_still_resolve() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(LOOKUP_PATH);
            then.status(200)
                .json_body(json!({ "userId": "42", "mobileNumber": 9_876_543_210_u64 }));
        })
        .await;

    let app = router(&server);
    let response = get(&app, "/AmritMobiles").await;

    assert_eq!(
        header(&response, "location"),
        Some("/inventory?userId=42&skip=0&take=20&sortBy=Newest")
    );

    let body = body_text(get(&app, "/inventory?userId=42").await).await;
    assert!(body.contains("9876543210"));
}
