use std::sync::Arc;

use axum::{body::Body, Router};
use demo_webapps::{build_app, chat::ChatClient, AppState};
use http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn build_test_app() -> Router {
    // The counter never touches the chat client; any base URL works.
    build_app(Arc::new(AppState {
        chat: ChatClient::new("http://127.0.0.1:1", "gpt-4o-mini"),
    }))
}

fn count_request(form_body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/counter")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn e2e_counter_page_serves_the_form() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/counter")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form"), "body was: {body}");
}

#[tokio::test]
async fn e2e_count_reports_ascii_length() {
    let app = build_test_app();

    let response = app.oneshot(count_request("text=hello")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<strong>5</strong>"), "body was: {body}");
}

#[tokio::test]
async fn e2e_count_reports_code_points_for_japanese() {
    let app = build_test_app();

    // text=こんにちは
    let response = app
        .oneshot(count_request(
            "text=%E3%81%93%E3%82%93%E3%81%AB%E3%81%A1%E3%81%AF",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<strong>5</strong>"), "body was: {body}");
}

#[tokio::test]
async fn e2e_empty_text_counts_zero() {
    let app = build_test_app();

    let response = app.oneshot(count_request("text=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<strong>0</strong>"), "body was: {body}");
}

#[tokio::test]
async fn e2e_health_reports_ok() {
    let app = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
