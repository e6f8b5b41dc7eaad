use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::normalize::validate_name;
use crate::domain::{GameConfigs, Ordering};
use crate::error::AppError;
use crate::repos::games::{self, Game};
use crate::repos::guesses::{self, TeamScore};
use crate::repos::{Page, PageRequest};

/// Name and orderings for create and full update.
#[derive(Debug, Clone)]
pub struct GameInput {
    pub name: String,
    pub phrase_order: Ordering,
    pub team_order: Ordering,
}

impl GameInput {
    fn configs(&self) -> GameConfigs {
        GameConfigs {
            phrase_order: self.phrase_order,
            team_order: self.team_order,
        }
    }
}

/// A game with its running scores.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetails {
    pub game: Game,
    pub leaderboard: Vec<TeamScore>,
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    actor_id: i64,
    input: GameInput,
) -> Result<Game, AppError> {
    let name = validate_name(&input.name)?;
    let game = games::create_game(txn, name, input.configs(), actor_id).await?;
    info!(game_id = game.id, actor_id, "game created");
    Ok(game)
}

/// Games newest first.
pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    paging: PageRequest,
) -> Result<Page<Game>, AppError> {
    let paging = paging.validate()?;
    Ok(games::list_page(conn, paging.page, paging.per_page).await?)
}

pub async fn get_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<GameDetails, AppError> {
    let game = games::require_game(conn, game_id).await?;
    let leaderboard = guesses::leaderboard(conn, game_id).await?;
    Ok(GameDetails { game, leaderboard })
}

/// Replace name and orderings. Rounds already created keep their frozen order.
pub async fn update_game(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    input: GameInput,
) -> Result<Game, AppError> {
    let name = validate_name(&input.name)?;
    games::require_game(txn, game_id).await?;
    let game = games::update_game(txn, game_id, name, input.configs(), actor_id).await?;
    info!(game_id, actor_id, "game updated");
    Ok(game)
}

pub async fn delete_game(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
) -> Result<(), AppError> {
    games::delete_game(txn, game_id).await?;
    info!(game_id, actor_id, "game deleted");
    Ok(())
}
