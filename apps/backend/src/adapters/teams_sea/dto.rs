//! DTOs for teams_sea adapter.

#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub game_id: i64,
    pub name: String,
    pub actor_id: i64,
}

#[derive(Debug, Clone)]
pub struct TeamRename {
    pub id: i64,
    pub name: String,
    pub actor_id: i64,
}
