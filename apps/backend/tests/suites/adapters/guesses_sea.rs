use guessr::adapters::guesses_sea::{self, GuessCreate, TeamScoreRow};
use guessr::adapters::rounds_sea::{self, RoundCreate};
use guessr::db::require_db;
use guessr::db::txn::with_txn;
use guessr::entities::guesses::{GuessStatus, GuessType};
use guessr::AppError;
use serde_json::json;

use crate::support::build_test_state;
use crate::support::factory::{create_ordered_game, create_phrase, create_team};

fn guess(
    round_id: i64,
    team_id: i64,
    guess_type: GuessType,
    status: GuessStatus,
    value: &str,
    score: i32,
) -> GuessCreate {
    GuessCreate {
        round_id,
        team_id,
        guess_type,
        status,
        value: value.into(),
        score,
        actor_id: 1,
    }
}

#[tokio::test]
async fn scores_aggregate_per_team_across_rounds() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let other_game = create_ordered_game(&state).await?;
    let team_a = create_team(&state, game.id).await?;
    let team_b = create_team(&state, game.id).await?;
    let outsider = create_team(&state, other_game.id).await?;
    let p1 = create_phrase(&state, game.id, "cat").await?;
    let p2 = create_phrase(&state, game.id, "dog").await?;
    let p3 = create_phrase(&state, other_game.id, "emu").await?;

    with_txn(&state, move |txn| {
        Box::pin(async move {
            let r1 = rounds_sea::create_round(
                txn,
                RoundCreate {
                    game_id: game.id,
                    phrase_id: p1.id,
                    name: "r1".into(),
                    configs: json!({}),
                    actor_id: 1,
                },
            )
            .await?;
            guesses_sea::create_guess(txn, guess(r1.id, team_a.id, GuessType::Letter, GuessStatus::Correct, "C", 10)).await?;
            guesses_sea::create_guess(txn, guess(r1.id, team_b.id, GuessType::Phrase, GuessStatus::Wrong, "COT", -30)).await?;
            rounds_sea::mark_ended(txn, r1.id, 1).await?;

            let r2 = rounds_sea::create_round(
                txn,
                RoundCreate {
                    game_id: game.id,
                    phrase_id: p2.id,
                    name: "r2".into(),
                    configs: json!({}),
                    actor_id: 1,
                },
            )
            .await?;
            guesses_sea::create_guess(txn, guess(r2.id, team_a.id, GuessType::Letter, GuessStatus::Correct, "D", 10)).await?;

            let foreign = rounds_sea::create_round(
                txn,
                RoundCreate {
                    game_id: other_game.id,
                    phrase_id: p3.id,
                    name: "x".into(),
                    configs: json!({}),
                    actor_id: 1,
                },
            )
            .await?;
            guesses_sea::create_guess(txn, guess(foreign.id, outsider.id, GuessType::Letter, GuessStatus::Correct, "E", 10)).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    let db = require_db(&state)?;
    let scores = guesses_sea::team_scores_by_game(db, game.id).await?;
    let mut expected = vec![
        TeamScoreRow {
            team_id: team_a.id,
            total_score: 20,
        },
        TeamScoreRow {
            team_id: team_b.id,
            total_score: -30,
        },
    ];
    expected.sort_by_key(|row| row.team_id);
    assert_eq!(scores, expected);
    Ok(())
}

#[tokio::test]
async fn correct_letters_ignore_wrong_and_phrase_guesses() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = create_ordered_game(&state).await?;
    let team = create_team(&state, game.id).await?;
    let phrase = create_phrase(&state, game.id, "cat dog").await?;

    let round_id = with_txn(&state, move |txn| {
        Box::pin(async move {
            let round = rounds_sea::create_round(
                txn,
                RoundCreate {
                    game_id: game.id,
                    phrase_id: phrase.id,
                    name: "r".into(),
                    configs: json!({}),
                    actor_id: 1,
                },
            )
            .await?;
            guesses_sea::create_guess(txn, guess(round.id, team.id, GuessType::Letter, GuessStatus::Correct, "C", 10)).await?;
            guesses_sea::create_guess(txn, guess(round.id, team.id, GuessType::Letter, GuessStatus::Wrong, "Z", 0)).await?;
            guesses_sea::create_guess(txn, guess(round.id, team.id, GuessType::Phrase, GuessStatus::Wrong, "CAT", -30)).await?;
            guesses_sea::create_guess(txn, guess(round.id, team.id, GuessType::Letter, GuessStatus::Correct, "A", 20)).await?;
            Ok::<_, AppError>(round.id)
        })
    })
    .await?;

    let db = require_db(&state)?;
    let letters = guesses_sea::correct_letter_values(db, round_id).await?;
    assert_eq!(letters, vec!["C".to_string(), "A".to_string()]);

    let page = guesses_sea::list_page_by_round(db, round_id, 1, 3).await?;
    assert_eq!(page.total_items, 4);
    assert_eq!(page.total_pages, 2);
    let values: Vec<_> = page.items.iter().map(|g| g.value.as_str()).collect();
    assert_eq!(values, ["C", "Z", "CAT"]);
    Ok(())
}
