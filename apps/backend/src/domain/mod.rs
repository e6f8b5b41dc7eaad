//! Domain layer: pure game rules, free of HTTP and persistence.

pub mod adjudication;
pub mod configs;
pub mod normalize;
pub mod phrase_selection;
pub mod turn_order;

pub use adjudication::{GuessStatus, GuessType, Judgement};
pub use configs::{GameConfigs, Ordering, RoundConfigs};
