//! SeaORM adapter for teams repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{fetch_page, PageRows};
use crate::entities::teams;

pub mod dto;

pub use dto::{TeamCreate, TeamRename};

/// Find a team scoped to its game
pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id)
        .filter(teams::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<PageRows<teams::Model>, sea_orm::DbErr> {
    let select = teams::Entity::find()
        .filter(teams::Column::GameId.eq(game_id))
        .order_by_asc(teams::Column::Id);
    fetch_page(conn, select, page, per_page).await
}

/// Team ids of a game in creation order
pub async fn ids_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    teams::Entity::find()
        .select_only()
        .column(teams::Column::Id)
        .filter(teams::Column::GameId.eq(game_id))
        .order_by_asc(teams::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await
}

pub async fn create_team(
    txn: &DatabaseTransaction,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let team = teams::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        name: Set(dto.name),
        created_by: Set(dto.actor_id),
        updated_by: Set(dto.actor_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    team.insert(txn).await
}

pub async fn rename_team(
    txn: &DatabaseTransaction,
    dto: TeamRename,
) -> Result<teams::Model, sea_orm::DbErr> {
    let team = teams::Entity::find_by_id(dto.id)
        .one(txn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))?;

    let mut team: teams::ActiveModel = team.into();
    team.name = Set(dto.name);
    team.updated_by = Set(dto.actor_id);
    team.updated_at = Set(time::OffsetDateTime::now_utc());

    team.update(txn).await
}

pub async fn delete_by_id(txn: &DatabaseTransaction, team_id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = teams::Entity::delete_by_id(team_id).exec(txn).await?;
    Ok(res.rows_affected)
}
