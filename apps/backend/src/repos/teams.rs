//! Team repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use super::Page;
use crate::adapters::teams_sea as teams_adapter;
use crate::entities::teams;
use crate::errors::domain::DomainError;

/// Team domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub game_id: i64,
    pub name: String,
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
        }
    }
}

pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let team = teams_adapter::find_in_game(conn, game_id, team_id).await?;
    Ok(team.map(Team::from))
}

pub async fn require_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_in_game(conn, game_id, team_id)
        .await?
        .ok_or_else(|| DomainError::team_not_found(team_id))
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<Team>, DomainError> {
    let rows = teams_adapter::list_page_by_game(conn, game_id, page, per_page).await?;
    Ok(Page::from_rows(rows))
}

/// Team ids ascending (creation order)
pub async fn ids_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(teams_adapter::ids_by_game(conn, game_id).await?)
}

pub async fn create_team(
    txn: &DatabaseTransaction,
    game_id: i64,
    name: String,
    actor_id: i64,
) -> Result<Team, DomainError> {
    let dto = teams_adapter::TeamCreate {
        game_id,
        name,
        actor_id,
    };
    let team = teams_adapter::create_team(txn, dto).await?;
    Ok(Team::from(team))
}

pub async fn rename_team(
    txn: &DatabaseTransaction,
    team_id: i64,
    name: String,
    actor_id: i64,
) -> Result<Team, DomainError> {
    let dto = teams_adapter::TeamRename {
        id: team_id,
        name,
        actor_id,
    };
    let team = teams_adapter::rename_team(txn, dto).await?;
    Ok(Team::from(team))
}

pub async fn delete_team(txn: &DatabaseTransaction, team_id: i64) -> Result<(), DomainError> {
    match teams_adapter::delete_by_id(txn, team_id).await? {
        0 => Err(DomainError::team_not_found(team_id)),
        _ => Ok(()),
    }
}
