use actix_web::http::StatusCode;
use actix_web::test;
use guessr::state::app_state::AppState;
use guessr::AppError;
use serde_json::Value;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_database_and_migration() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    // no identity needed
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251017_000001_init");
    assert!(body.get("db_error").is_none());
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body["db_error"].as_str().is_some());
}
