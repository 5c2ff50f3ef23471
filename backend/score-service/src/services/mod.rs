pub mod scoring;

pub use scoring::{compute_score, score_vote, PointTable, NEUTRAL_SCORE};
