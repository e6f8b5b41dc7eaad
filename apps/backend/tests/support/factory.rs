//! Fixture builders that go through the service layer in committed transactions.

use backend_test_support::unique_helpers::unique_name;
use guessr::db::txn::with_txn;
use guessr::domain::Ordering;
use guessr::repos::games::Game;
use guessr::repos::phrases::Phrase;
use guessr::repos::rounds::Round;
use guessr::repos::teams::Team;
use guessr::services::games::GameInput;
use guessr::services::{games, phrases, rounds, teams};
use guessr::state::app_state::AppState;
use guessr::AppError;

pub const ACTOR: i64 = 7;

pub async fn create_game(
    state: &AppState,
    phrase_order: Ordering,
    team_order: Ordering,
) -> Result<Game, AppError> {
    let input = GameInput {
        name: unique_name("game"),
        phrase_order,
        team_order,
    };
    with_txn(state, move |txn| {
        Box::pin(async move { games::create_game(txn, ACTOR, input).await })
    })
    .await
}

pub async fn create_ordered_game(state: &AppState) -> Result<Game, AppError> {
    create_game(state, Ordering::Ordered, Ordering::Ordered).await
}

pub async fn create_team(state: &AppState, game_id: i64) -> Result<Team, AppError> {
    let name = unique_name("team");
    with_txn(state, move |txn| {
        Box::pin(async move { teams::create_team(txn, ACTOR, game_id, &name).await })
    })
    .await
}

pub async fn create_phrase(
    state: &AppState,
    game_id: i64,
    value: &str,
) -> Result<Phrase, AppError> {
    let value = value.to_string();
    with_txn(state, move |txn| {
        Box::pin(async move { phrases::create_phrase(txn, ACTOR, game_id, &value).await })
    })
    .await
}

pub async fn create_round(
    state: &AppState,
    game_id: i64,
    starting_team_id: i64,
) -> Result<Round, AppError> {
    let name = unique_name("round");
    with_txn(state, move |txn| {
        Box::pin(async move {
            rounds::create_round(txn, ACTOR, game_id, &name, starting_team_id).await
        })
    })
    .await
}

/// Ordered game with two teams and the given phrases, in insertion order.
pub struct GameSetup {
    pub game: Game,
    pub team_a: Team,
    pub team_b: Team,
    pub phrases: Vec<Phrase>,
}

pub async fn setup_game(state: &AppState, phrase_values: &[&str]) -> Result<GameSetup, AppError> {
    let game = create_ordered_game(state).await?;
    let team_a = create_team(state, game.id).await?;
    let team_b = create_team(state, game.id).await?;
    let mut phrases = Vec::with_capacity(phrase_values.len());
    for value in phrase_values {
        phrases.push(create_phrase(state, game.id, value).await?);
    }
    Ok(GameSetup {
        game,
        team_a,
        team_b,
        phrases,
    })
}
