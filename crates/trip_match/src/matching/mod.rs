pub mod algorithm;
pub mod config;
pub mod evaluator;
pub mod types;

pub use algorithm::TripMatcher;
pub use config::MatchConfig;
pub use evaluator::{departure_gap_minutes, TripEvaluator};
pub use types::{MatchVerdict, MismatchReason, TripMatch};
