//! Phrase choice for a new round.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::configs::Ordering;
use crate::errors::domain::{ConflictKind, DomainError};

/// Pick the phrase for the next round from those no earlier round used.
pub fn select_phrase<R: Rng + ?Sized>(
    phrase_ids: &[i64],
    used_phrase_ids: &[i64],
    mode: Ordering,
    rng: &mut R,
) -> Result<i64, DomainError> {
    let used: HashSet<i64> = used_phrase_ids.iter().copied().collect();
    let mut candidates: Vec<i64> = phrase_ids
        .iter()
        .copied()
        .filter(|id| !used.contains(id))
        .collect();
    candidates.sort_unstable();

    if mode == Ordering::Random {
        candidates.shuffle(rng);
    }

    candidates.first().copied().ok_or_else(|| {
        DomainError::conflict(
            ConflictKind::PhrasesAllUsed,
            "Every phrase of this game was already used",
        )
    })
}
