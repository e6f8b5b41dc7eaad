use guessr::db::require_db;
use guessr::db::txn::with_txn;
use guessr::domain::{GuessStatus, GuessType};
use guessr::repos::rounds as round_repo;
use guessr::repos::PageRequest;
use guessr::services::guesses::{self, GuessInput, GuessOutcome};
use guessr::services::rounds;
use guessr::state::app_state::AppState;
use guessr::{AppError, ErrorCode};

use crate::support::build_test_state;
use crate::support::factory::{create_ordered_game, create_round, create_team, setup_game, ACTOR};

async fn guess(
    state: &AppState,
    game_id: i64,
    round_id: i64,
    team_id: i64,
    guess_type: GuessType,
    value: &str,
) -> Result<GuessOutcome, AppError> {
    let input = GuessInput {
        team_id,
        guess_type,
        value: value.to_string(),
    };
    with_txn(state, move |txn| {
        Box::pin(async move { guesses::create_guess(txn, ACTOR, game_id, round_id, input).await })
    })
    .await
}

fn outcome(status: GuessStatus, score: i32, team_id: i64, should_end: bool) -> GuessOutcome {
    GuessOutcome {
        status,
        score,
        team_id,
        should_end,
    }
}

#[tokio::test]
async fn cat_dog_round_plays_out() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat dog"]).await?;
    let game_id = setup.game.id;
    let (a, b) = (setup.team_a.id, setup.team_b.id);
    let round = create_round(&state, game_id, a).await?;
    let r = round.id;

    use GuessStatus::{Correct, Wrong};
    use GuessType::{Letter, Phrase};

    assert_eq!(guess(&state, game_id, r, a, Letter, "c").await?, outcome(Correct, 10, a, false));
    assert_eq!(guess(&state, game_id, r, b, Letter, "C").await?, outcome(Wrong, 0, b, false));
    assert_eq!(guess(&state, game_id, r, b, Letter, "x").await?, outcome(Wrong, 0, b, false));
    assert_eq!(guess(&state, game_id, r, a, Phrase, "cat cow").await?, outcome(Wrong, -30, a, false));
    assert_eq!(guess(&state, game_id, r, b, Letter, "o").await?, outcome(Correct, 10, b, false));
    // remaining hidden: A T D G
    assert_eq!(guess(&state, game_id, r, a, Phrase, " cat dog ").await?, outcome(Correct, 40, a, true));

    let db = require_db(&state)?;
    let ended = rounds::get_round(db, game_id, r).await?;
    assert!(ended.is_ended);
    Ok(())
}

#[tokio::test]
async fn last_hidden_letter_ends_the_round() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["aha"]).await?;
    let game_id = setup.game.id;
    let a = setup.team_a.id;
    let round = create_round(&state, game_id, a).await?;

    let first = guess(&state, game_id, round.id, a, GuessType::Letter, "h").await?;
    assert_eq!(first, outcome(GuessStatus::Correct, 10, a, false));

    let last = guess(&state, game_id, round.id, a, GuessType::Letter, "a").await?;
    assert_eq!(last, outcome(GuessStatus::Correct, 20, a, true));
    Ok(())
}

#[tokio::test]
async fn ended_round_rejects_further_guesses() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let game_id = setup.game.id;
    let round = create_round(&state, game_id, setup.team_a.id).await?;

    guess(&state, game_id, round.id, setup.team_a.id, GuessType::Phrase, "cat").await?;

    let err = guess(&state, game_id, round.id, setup.team_b.id, GuessType::Letter, "c")
        .await
        .expect_err("round already ended");
    assert_eq!(err.code(), ErrorCode::BadRequest);

    let db = require_db(&state)?;
    let page = guesses::list_guesses(db, game_id, round.id, PageRequest { page: 1, per_page: 10 }).await?;
    assert_eq!(page.total_items, 1);
    Ok(())
}

#[tokio::test]
async fn winning_guess_losing_the_end_race_is_rolled_back() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let game_id = setup.game.id;
    let round = create_round(&state, game_id, setup.team_a.id).await?;

    // Team B's request loaded the round while it was still open.
    let db = require_db(&state)?;
    let snapshot = round_repo::require_in_game(db, game_id, round.id).await?;
    assert!(!snapshot.is_ended);

    // Team A's winning guess commits first.
    let round_id = round.id;
    let flipped = with_txn(&state, move |txn| {
        Box::pin(async move { Ok::<_, AppError>(round_repo::mark_ended(txn, round_id, ACTOR).await?) })
    })
    .await?;
    assert!(flipped);

    let input = GuessInput {
        team_id: setup.team_b.id,
        guess_type: GuessType::Phrase,
        value: "cat".into(),
    };
    let err = with_txn(&state, move |txn| {
        Box::pin(async move { guesses::submit_guess(txn, ACTOR, &snapshot, input).await })
    })
    .await
    .expect_err("second winner must lose the compare-and-set");
    assert_eq!(err.code(), ErrorCode::BadRequest);

    let page = guesses::list_guesses(db, game_id, round.id, PageRequest { page: 1, per_page: 10 }).await?;
    assert_eq!(page.total_items, 0, "losing guess must not be persisted");
    let after = round_repo::require_in_game(db, game_id, round.id).await?;
    assert!(after.is_ended);
    Ok(())
}

#[tokio::test]
async fn team_from_another_game_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let other = create_ordered_game(&state).await?;
    let stranger = create_team(&state, other.id).await?;
    let round = create_round(&state, setup.game.id, setup.team_a.id).await?;

    let err = guess(&state, setup.game.id, round.id, stranger.id, GuessType::Letter, "c")
        .await
        .expect_err("team is not part of this game");
    assert_eq!(err.code(), ErrorCode::BadRequest);
    Ok(())
}

#[tokio::test]
async fn letter_expanding_under_upper_case_is_a_wrong_guess() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["strasse"]).await?;
    let round = create_round(&state, setup.game.id, setup.team_a.id).await?;

    let got = guess(&state, setup.game.id, round.id, setup.team_a.id, GuessType::Letter, "ß").await?;
    assert_eq!(got, outcome(GuessStatus::Wrong, 0, setup.team_a.id, false));
    Ok(())
}

#[tokio::test]
async fn multi_character_letter_is_a_validation_error() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let round = create_round(&state, setup.game.id, setup.team_a.id).await?;

    let err = guess(&state, setup.game.id, round.id, setup.team_a.id, GuessType::Letter, "ca")
        .await
        .expect_err("letters are single characters");
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let db = require_db(&state)?;
    let page = guesses::list_guesses(db, setup.game.id, round.id, PageRequest { page: 1, per_page: 10 }).await?;
    assert_eq!(page.total_items, 0);
    Ok(())
}

#[tokio::test]
async fn round_of_another_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let other = create_ordered_game(&state).await?;
    let round = create_round(&state, setup.game.id, setup.team_a.id).await?;

    let err = guess(&state, other.id, round.id, setup.team_a.id, GuessType::Letter, "c")
        .await
        .expect_err("round is scoped to its game");
    assert_eq!(err.code(), ErrorCode::RoundNotFound);
    Ok(())
}

#[tokio::test]
async fn history_lists_guesses_in_submission_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let setup = setup_game(&state, &["cat"]).await?;
    let game_id = setup.game.id;
    let a = setup.team_a.id;
    let round = create_round(&state, game_id, a).await?;

    for value in ["t", "q", "a"] {
        guess(&state, game_id, round.id, a, GuessType::Letter, value).await?;
    }

    let db = require_db(&state)?;
    let page = guesses::list_guesses(db, game_id, round.id, PageRequest { page: 1, per_page: 10 }).await?;
    let seen: Vec<(&str, GuessStatus, i32)> = page
        .items
        .iter()
        .map(|g| (g.value.as_str(), g.status, g.score))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("T", GuessStatus::Correct, 10),
            ("Q", GuessStatus::Wrong, 0),
            ("A", GuessStatus::Correct, 10),
        ]
    );
    assert!(page.items.iter().all(|g| g.created_by == ACTOR));
    Ok(())
}
