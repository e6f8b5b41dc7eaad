use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use guessr::AppError;
use serde_json::{json, Value};

use super::{get, new_game, post_json};
use crate::support::{build_test_state, create_test_app};

async fn create<S>(app: &S, uri: &str, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, post_json(uri, &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "POST {uri}");
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn full_round_over_http() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let game_id = new_game(&app).await;
    let teams_uri = format!("/api/games/{game_id}/teams");
    let a = create(&app, &teams_uri, json!({"name": "A"})).await["id"].as_i64().expect("id");
    let b = create(&app, &teams_uri, json!({"name": "B"})).await["id"].as_i64().expect("id");
    let phrase = create(
        &app,
        &format!("/api/games/{game_id}/phrases"),
        json!({"value": "cat dog"}),
    )
    .await;

    let rounds_uri = format!("/api/games/{game_id}/rounds");
    let round = create(&app, &rounds_uri, json!({"name": "Opening", "starting_team_id": b})).await;
    assert_eq!(round["is_ended"], false);
    assert_eq!(round["phrase_id"], phrase["id"]);
    assert_eq!(round["team_ordering"], json!([b, a]));
    let round_id = round["id"].as_i64().expect("round id");

    let resp = test::call_service(
        &app,
        post_json(&rounds_uri, &json!({"name": "Too soon", "starting_team_id": a})).to_request(),
    )
    .await;
    assert_problem_details(resp, "ANY_ROUND_STILL_ONGOING", StatusCode::CONFLICT, None).await;

    let guesses_uri = format!("/api/games/{game_id}/rounds/{round_id}/guesses");
    let outcome = create(&app, &guesses_uri, json!({"team_id": b, "type": "letter", "value": "o"})).await;
    assert_eq!(
        outcome,
        json!({"status": "correct", "score": 10, "team_id": b, "should_end": false})
    );

    let outcome = create(&app, &guesses_uri, json!({"team_id": a, "type": "phrase", "value": "cat cod"})).await;
    assert_eq!(outcome["status"], "wrong");
    assert_eq!(outcome["score"], -30);

    let outcome = create(&app, &guesses_uri, json!({"team_id": b, "type": "phrase", "value": "Cat Dog"})).await;
    assert_eq!(
        outcome,
        json!({"status": "correct", "score": 50, "team_id": b, "should_end": true})
    );

    let resp = test::call_service(
        &app,
        post_json(&guesses_uri, &json!({"team_id": a, "type": "letter", "value": "c"})).to_request(),
    )
    .await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("ended")).await;

    let resp = test::call_service(&app, get(&guesses_uri).to_request()).await;
    let history: Value = test::read_body_json(resp).await;
    assert_eq!(history["pagination"]["total_entries_size"], 3);
    assert_eq!(
        history["items"][0],
        json!({
            "id": history["items"][0]["id"],
            "team_id": b,
            "type": "letter",
            "status": "correct",
            "value": "O",
            "score": 10
        })
    );

    let resp = test::call_service(
        &app,
        get(&format!("/api/games/{game_id}/rounds/{round_id}")).to_request(),
    )
    .await;
    let ended: Value = test::read_body_json(resp).await;
    assert_eq!(ended["is_ended"], true);

    let resp = test::call_service(&app, get(&format!("/api/games/{game_id}")).to_request()).await;
    let details: Value = test::read_body_json(resp).await;
    let mut board: Vec<(i64, i64)> = details["leaderboard"]
        .as_array()
        .expect("leaderboard array")
        .iter()
        .map(|row| {
            (
                row["team_id"].as_i64().expect("team_id"),
                row["total_score"].as_i64().expect("total_score"),
            )
        })
        .collect();
    board.sort_unstable();
    let mut expected = vec![(a, -30), (b, 60)];
    expected.sort_unstable();
    assert_eq!(board, expected);

    let resp = test::call_service(
        &app,
        post_json(&rounds_uri, &json!({"name": "Encore", "starting_team_id": a})).to_request(),
    )
    .await;
    assert_problem_details(resp, "PHRASES_ALL_USED", StatusCode::CONFLICT, None).await;
    Ok(())
}

#[actix_web::test]
async fn round_needs_teams() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let game_id = new_game(&app).await;
    create(
        &app,
        &format!("/api/games/{game_id}/phrases"),
        json!({"value": "lonely"}),
    )
    .await;

    let resp = test::call_service(
        &app,
        post_json(
            &format!("/api/games/{game_id}/rounds"),
            &json!({"name": "r", "starting_team_id": 1}),
        )
        .to_request(),
    )
    .await;
    assert_problem_details(resp, "EMPTY_TEAMS", StatusCode::CONFLICT, None).await;
    Ok(())
}

#[actix_web::test]
async fn guess_body_is_validated() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let game_id = new_game(&app).await;
    let team = create(&app, &format!("/api/games/{game_id}/teams"), json!({"name": "A"})).await;
    let team_id = team["id"].as_i64().expect("team id");
    create(&app, &format!("/api/games/{game_id}/phrases"), json!({"value": "cat"})).await;
    let round = create(
        &app,
        &format!("/api/games/{game_id}/rounds"),
        json!({"name": "r", "starting_team_id": team_id}),
    )
    .await;
    let guesses_uri = format!("/api/games/{game_id}/rounds/{}/guesses", round["id"]);

    let resp = test::call_service(
        &app,
        post_json(&guesses_uri, &json!({"team_id": team_id, "type": "word", "value": "c"})).to_request(),
    )
    .await;
    assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, Some("unknown variant")).await;

    let resp = test::call_service(
        &app,
        post_json(&guesses_uri, &json!({"team_id": team_id, "type": "letter", "value": "ca"})).to_request(),
    )
    .await;
    assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, None).await;

    let resp = test::call_service(
        &app,
        post_json(&guesses_uri, &json!({"team_id": 999_999, "type": "letter", "value": "c"})).to_request(),
    )
    .await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}
