use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use guessr::AppError;
use serde_json::{json, Value};

use super::{delete, get, new_game, post_json, put_json};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn phrases_are_normalized_and_scoped() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let game_id = new_game(&app).await;
    let other_id = new_game(&app).await;

    let resp = test::call_service(
        &app,
        post_json(
            &format!("/api/games/{game_id}/phrases"),
            &json!({"value": "  hello world "}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let phrase: Value = test::read_body_json(resp).await;
    assert_eq!(phrase["value"], "HELLO WORLD");
    let phrase_id = phrase["id"].as_i64().expect("phrase id");

    let resp = test::call_service(
        &app,
        get(&format!("/api/games/{game_id}/phrases/{phrase_id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        get(&format!("/api/games/{other_id}/phrases/{phrase_id}")).to_request(),
    )
    .await;
    assert_problem_details(resp, "PHRASE_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    let resp = test::call_service(
        &app,
        get(&format!("/api/games/{game_id}/phrases")).to_request(),
    )
    .await;
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["pagination"]["total_entries_size"], 1);
    assert_eq!(page["items"][0]["id"], phrase_id);

    let resp = test::call_service(
        &app,
        delete(&format!("/api/games/{game_id}/phrases/{phrase_id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[actix_web::test]
async fn blank_phrase_is_validation_error() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let game_id = new_game(&app).await;

    let resp = test::call_service(
        &app,
        post_json(&format!("/api/games/{game_id}/phrases"), &json!({"value": "   "}))
            .to_request(),
    )
    .await;
    assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn teams_crud_round_trip() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let game_id = new_game(&app).await;

    let resp = test::call_service(
        &app,
        post_json(&format!("/api/games/{game_id}/teams"), &json!({"name": "Owls"})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let team: Value = test::read_body_json(resp).await;
    assert_eq!(team["name"], "Owls");
    let team_id = team["id"].as_i64().expect("team id");

    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/games/{game_id}/teams/{team_id}"),
            &json!({"name": "Night Owls"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let renamed: Value = test::read_body_json(resp).await;
    assert_eq!(renamed, json!({"id": team_id, "name": "Night Owls"}));

    let resp = test::call_service(
        &app,
        delete(&format!("/api/games/{game_id}/teams/{team_id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        get(&format!("/api/games/{game_id}/teams/{team_id}")).to_request(),
    )
    .await;
    assert_problem_details(resp, "TEAM_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}

#[actix_web::test]
async fn teams_of_missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, get("/api/games/9999/teams").to_request()).await;
    assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}
