//! DTOs for phrases_sea adapter.

#[derive(Debug, Clone)]
pub struct PhraseCreate {
    pub game_id: i64,
    /// Already normalized
    pub value: String,
    pub actor_id: i64,
}
