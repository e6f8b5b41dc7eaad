//! DTOs for rounds_sea adapter.

use sea_orm::prelude::Json;

/// DTO for creating a round with its frozen turn order.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub game_id: i64,
    pub phrase_id: i64,
    pub name: String,
    pub configs: Json,
    pub actor_id: i64,
}

#[derive(Debug, Clone)]
pub struct RoundRename {
    pub id: i64,
    pub name: String,
    pub actor_id: i64,
}
