//! Guess scoring.
//!
//! A round's state is its phrase plus the letters revealed by earlier
//! correct letter guesses. Adjudication is pure: the same history and guess
//! always give the same judgement.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const SCORE_PER_LETTER: i32 = 10;
pub const WRONG_PHRASE_PENALTY: i32 = -30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessType {
    Letter,
    Phrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessStatus {
    Correct,
    Wrong,
}

/// Outcome of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub status: GuessStatus,
    pub score: i32,
    /// The guess finishes the round
    pub should_end: bool,
}

/// Phrase characters still hidden, in order and with duplicates. Spaces never count.
pub fn unguessed_letters(phrase: &str, revealed: &HashSet<char>) -> Vec<char> {
    phrase
        .chars()
        .filter(|c| *c != ' ' && !revealed.contains(c))
        .collect()
}

fn letter_score(count: usize) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX / SCORE_PER_LETTER)
        .saturating_mul(SCORE_PER_LETTER)
}

impl GuessType {
    /// Judge a normalized `value` against `phrase` given the revealed letters.
    pub fn adjudicate(self, phrase: &str, revealed: &HashSet<char>, value: &str) -> Judgement {
        let unguessed = unguessed_letters(phrase, revealed);
        match self {
            GuessType::Phrase => {
                if value == phrase {
                    Judgement {
                        status: GuessStatus::Correct,
                        score: letter_score(unguessed.len()),
                        should_end: true,
                    }
                } else {
                    Judgement {
                        status: GuessStatus::Wrong,
                        score: WRONG_PHRASE_PENALTY,
                        should_end: false,
                    }
                }
            }
            GuessType::Letter => {
                let mut chars = value.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                };
                let count = letter
                    .map(|l| unguessed.iter().filter(|&&c| c == l).count())
                    .unwrap_or(0);

                if count == 0 {
                    Judgement {
                        status: GuessStatus::Wrong,
                        score: 0,
                        should_end: false,
                    }
                } else {
                    Judgement {
                        status: GuessStatus::Correct,
                        score: letter_score(count),
                        should_end: count == unguessed.len(),
                    }
                }
            }
        }
    }
}
