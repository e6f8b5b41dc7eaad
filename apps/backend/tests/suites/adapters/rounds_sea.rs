use guessr::adapters::rounds_sea::{self, RoundCreate};
use guessr::db::require_db;
use guessr::db::txn::with_txn;
use guessr::{AppError, ErrorCode};
use serde_json::json;

use crate::support::build_test_state;
use crate::support::factory::{create_ordered_game, create_phrase};

fn round_dto(game_id: i64, phrase_id: i64, name: &str) -> RoundCreate {
    RoundCreate {
        game_id,
        phrase_id,
        name: name.into(),
        configs: json!({"team_ids_ordering": []}),
        actor_id: 1,
    }
}

#[tokio::test]
async fn mark_ended_only_closes_an_open_round_once() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let phrase = create_phrase(&state, game.id, "cat dog").await?;

    let (first, second) = with_txn(&state, move |txn| {
        Box::pin(async move {
            let round = rounds_sea::create_round(txn, round_dto(game.id, phrase.id, "r1")).await?;
            let first = rounds_sea::mark_ended(txn, round.id, 9).await?;
            let second = rounds_sea::mark_ended(txn, round.id, 9).await?;
            Ok::<_, AppError>((first, second))
        })
    })
    .await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    let db = require_db(&state)?;
    assert!(rounds_sea::find_active_by_game(db, game.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn second_open_round_violates_active_round_index() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let phrase_a = create_phrase(&state, game.id, "alpha").await?;
    let phrase_b = create_phrase(&state, game.id, "beta").await?;

    with_txn(&state, move |txn| {
        Box::pin(async move {
            rounds_sea::create_round(txn, round_dto(game.id, phrase_a.id, "r1")).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    let err = with_txn(&state, move |txn| {
        Box::pin(async move {
            rounds_sea::create_round(txn, round_dto(game.id, phrase_b.id, "r2")).await?;
            Ok::<_, AppError>(())
        })
    })
    .await
    .expect_err("second open round must be rejected");

    assert_eq!(err.code(), ErrorCode::AnyRoundStillOngoing);
    Ok(())
}

#[tokio::test]
async fn ended_rounds_do_not_block_a_new_one() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let phrase_a = create_phrase(&state, game.id, "alpha").await?;
    let phrase_b = create_phrase(&state, game.id, "beta").await?;

    with_txn(&state, move |txn| {
        Box::pin(async move {
            let r1 = rounds_sea::create_round(txn, round_dto(game.id, phrase_a.id, "r1")).await?;
            rounds_sea::mark_ended(txn, r1.id, 1).await?;
            rounds_sea::create_round(txn, round_dto(game.id, phrase_b.id, "r2")).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    let db = require_db(&state)?;
    let mut used = rounds_sea::used_phrase_ids(db, game.id).await?;
    used.sort_unstable();
    assert_eq!(used, vec![phrase_a.id, phrase_b.id]);

    let active = rounds_sea::find_active_by_game(db, game.id)
        .await?
        .expect("r2 should be open");
    assert_eq!(active.name, "r2");
    Ok(())
}

#[tokio::test]
async fn find_in_game_scopes_by_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let other = create_ordered_game(&state).await?;
    let phrase = create_phrase(&state, game.id, "alpha").await?;

    let round = with_txn(&state, move |txn| {
        Box::pin(async move {
            Ok::<_, AppError>(
                rounds_sea::create_round(txn, round_dto(game.id, phrase.id, "r1")).await?,
            )
        })
    })
    .await?;

    let db = require_db(&state)?;
    assert!(rounds_sea::find_in_game(db, game.id, round.id).await?.is_some());
    assert!(rounds_sea::find_in_game(db, other.id, round.id).await?.is_none());
    Ok(())
}
