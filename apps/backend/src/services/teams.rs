use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::normalize::validate_name;
use crate::error::AppError;
use crate::repos::teams::{self, Team};
use crate::repos::{games, Page, PageRequest};

pub async fn create_team(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    raw_name: &str,
) -> Result<Team, AppError> {
    games::require_game(txn, game_id).await?;
    let name = validate_name(raw_name)?;
    let team = teams::create_team(txn, game_id, name, actor_id).await?;
    info!(game_id, team_id = team.id, actor_id, "team created");
    Ok(team)
}

pub async fn list_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    paging: PageRequest,
) -> Result<Page<Team>, AppError> {
    let paging = paging.validate()?;
    games::require_game(conn, game_id).await?;
    Ok(teams::list_page_by_game(conn, game_id, paging.page, paging.per_page).await?)
}

pub async fn get_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    team_id: i64,
) -> Result<Team, AppError> {
    Ok(teams::require_in_game(conn, game_id, team_id).await?)
}

pub async fn update_team(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    team_id: i64,
    raw_name: &str,
) -> Result<Team, AppError> {
    let name = validate_name(raw_name)?;
    teams::require_in_game(txn, game_id, team_id).await?;
    let team = teams::rename_team(txn, team_id, name, actor_id).await?;
    info!(game_id, team_id, actor_id, "team renamed");
    Ok(team)
}

/// Deleting a team drops its guesses too; existing round orderings keep the stale id.
pub async fn delete_team(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    team_id: i64,
) -> Result<(), AppError> {
    teams::require_in_game(txn, game_id, team_id).await?;
    teams::delete_team(txn, team_id).await?;
    info!(game_id, team_id, actor_id, "team deleted");
    Ok(())
}
