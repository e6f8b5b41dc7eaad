//! Typed views over the JSON `configs` column of games and rounds.
//!
//! Decoding never fails: rows written before a field existed (or holding a
//! code this build does not know) read back with defaults.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

const PHRASE_ORDER: &str = "phrase_order";
const TEAM_ORDER: &str = "team_order";
const TEAM_IDS_ORDERING: &str = "team_ids_ordering";

/// Selection policy for phrases or team turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Stable, id ascending
    #[default]
    Ordered,
    /// Uniform shuffle
    Random,
}

impl Ordering {
    /// Integer code persisted in config documents.
    pub fn as_code(self) -> i64 {
        match self {
            Ordering::Ordered => 1,
            Ordering::Random => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Ordering::Ordered),
            2 => Some(Ordering::Random),
            _ => None,
        }
    }
}

fn ordering_field(doc: &Value, key: &'static str) -> Ordering {
    match doc.get(key) {
        None | Some(Value::Null) => Ordering::default(),
        Some(raw) => raw.as_i64().and_then(Ordering::from_code).unwrap_or_else(|| {
            warn!(field = key, value = %raw, "unrecognised ordering code, using ordered");
            Ordering::default()
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfigs {
    pub phrase_order: Ordering,
    pub team_order: Ordering,
}

impl GameConfigs {
    pub fn from_document(doc: &Value) -> Self {
        Self {
            phrase_order: ordering_field(doc, PHRASE_ORDER),
            team_order: ordering_field(doc, TEAM_ORDER),
        }
    }

    pub fn to_document(&self) -> Value {
        json!({
            PHRASE_ORDER: self.phrase_order.as_code(),
            TEAM_ORDER: self.team_order.as_code(),
        })
    }
}

/// Turn order frozen into a round at creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundConfigs {
    pub team_ids_ordering: Vec<i64>,
}

impl RoundConfigs {
    pub fn from_document(doc: &Value) -> Self {
        let team_ids_ordering = doc
            .get(TEAM_IDS_ORDERING)
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default();
        Self { team_ids_ordering }
    }

    pub fn to_document(&self) -> Value {
        json!({ TEAM_IDS_ORDERING: self.team_ids_ordering })
    }
}
