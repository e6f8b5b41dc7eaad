//! SeaORM adapter for guesses repository.
//!
//! Guesses are append-only: there is no update or delete here.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::{fetch_page, PageRows};
use crate::entities::guesses::{self, GuessStatus, GuessType};
use crate::entities::rounds;

pub mod dto;

pub use dto::{GuessCreate, TeamScoreRow};

pub async fn list_page_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    page: u64,
    per_page: u64,
) -> Result<PageRows<guesses::Model>, sea_orm::DbErr> {
    let select = guesses::Entity::find()
        .filter(guesses::Column::RoundId.eq(round_id))
        .order_by_asc(guesses::Column::Id);
    fetch_page(conn, select, page, per_page).await
}

/// Values of the round's correct letter guesses
pub async fn correct_letter_values<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<String>, sea_orm::DbErr> {
    guesses::Entity::find()
        .select_only()
        .column(guesses::Column::Value)
        .filter(guesses::Column::RoundId.eq(round_id))
        .filter(guesses::Column::GuessType.eq(GuessType::Letter))
        .filter(guesses::Column::Status.eq(GuessStatus::Correct))
        .order_by_asc(guesses::Column::Id)
        .into_tuple::<String>()
        .all(conn)
        .await
}

/// Sum of guess scores per team over every round of the game, by team id
pub async fn team_scores_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<TeamScoreRow>, sea_orm::DbErr> {
    guesses::Entity::find()
        .select_only()
        .column(guesses::Column::TeamId)
        .column_as(guesses::Column::Score.sum(), "total_score")
        .join(JoinType::InnerJoin, guesses::Relation::Round.def())
        .filter(rounds::Column::GameId.eq(game_id))
        .group_by(guesses::Column::TeamId)
        .order_by_asc(guesses::Column::TeamId)
        .into_model::<TeamScoreRow>()
        .all(conn)
        .await
}

pub async fn create_guess(
    txn: &DatabaseTransaction,
    dto: GuessCreate,
) -> Result<guesses::Model, sea_orm::DbErr> {
    let guess = guesses::ActiveModel {
        id: NotSet,
        round_id: Set(dto.round_id),
        team_id: Set(dto.team_id),
        guess_type: Set(dto.guess_type),
        status: Set(dto.status),
        value: Set(dto.value),
        score: Set(dto.score),
        created_by: Set(dto.actor_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    guess.insert(txn).await
}
