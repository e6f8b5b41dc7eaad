//! Team turn order for a new round.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::configs::Ordering;
use crate::errors::domain::{ConflictKind, DomainError};

/// Order the game's teams for a round.
///
/// `team_ids` must be ascending (creation order). With `Random` the ids are
/// shuffled first. The result is the circular left-rotation that starts with
/// `starting_team_id`; an unknown starting team leaves the sequence as is.
pub fn resolve_turn_order<R: Rng + ?Sized>(
    team_ids: &[i64],
    mode: Ordering,
    starting_team_id: i64,
    rng: &mut R,
) -> Result<Vec<i64>, DomainError> {
    if team_ids.is_empty() {
        return Err(DomainError::conflict(
            ConflictKind::EmptyTeams,
            "Game has no teams",
        ));
    }

    let mut order = team_ids.to_vec();
    if mode == Ordering::Random {
        order.shuffle(rng);
    }

    if let Some(pos) = order.iter().position(|&id| id == starting_team_id) {
        order.rotate_left(pos);
    }
    Ok(order)
}
