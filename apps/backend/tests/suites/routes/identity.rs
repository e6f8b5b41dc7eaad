use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use guessr::AppError;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn api_without_caller_is_unauthorized() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
    Ok(())
}

#[actix_web::test]
async fn malformed_caller_is_unauthorized() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for bad in ["abc", "0", "-4", ""] {
        let req = test::TestRequest::get()
            .uri("/api/games")
            .insert_header(("X-User-Id", bad))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn missing_caller_wins_over_bad_path() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/games/not-a-number").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
    Ok(())
}
