//! DTOs for games_sea adapter.

use sea_orm::prelude::Json;

/// DTO for creating a game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
    pub configs: Json,
    pub actor_id: i64,
}

/// DTO for replacing a game's name and configuration.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub name: String,
    pub configs: Json,
    pub actor_id: i64,
}
