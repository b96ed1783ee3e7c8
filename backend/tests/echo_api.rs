//! End-to-end checks for the published echo API wire contract.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use support::full_app;

#[actix_web::test]
async fn health_reports_healthy() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(res.status().is_success());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn get_item_echoes_parameters_verbatim() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/items/widget-7?skip=5&limit=25")
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "item_id": "widget-7",
            "skip": 5,
            "limit": 25,
            "message": "GET request processed successfully"
        })
    );
}

#[actix_web::test]
async fn negative_skip_is_rejected_before_handler_logic() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/items/abc?skip=-1")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn post_items_returns_the_exact_published_shape() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "name": "Widget" }))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "item_id": "new_item",
            "name": "Widget",
            "description": null,
            "message": "POST request processed successfully"
        })
    );
}

#[actix_web::test]
async fn put_items_echoes_the_path_id() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/items/123")
            .set_json(json!({ "name": "Widget", "description": "Updated" }))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "item_id": "123",
            "name": "Widget",
            "description": "Updated",
            "message": "PUT request processed successfully"
        })
    );
}

#[rstest]
#[case::health("/health")]
#[case::item("/items/abc")]
#[case::summary("/api/v1/dashboard/summary")]
#[case::users("/api/v1/users")]
#[actix_web::test]
async fn every_response_carries_a_trace_id_header(#[case] uri: &str) {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert!(
        res.headers().contains_key("trace-id"),
        "missing trace-id on {uri}"
    );
}

#[actix_web::test]
async fn error_responses_also_carry_a_trace_id_header() {
    let app = test::init_service(full_app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/items/abc?limit=500")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key("trace-id"));
}
