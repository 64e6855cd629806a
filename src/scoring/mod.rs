pub mod config;
pub mod engine;
pub mod signals;
pub mod validation;

pub use config::*;
pub use engine::{compute_propensity_score, score_lead, ScoreResult, SignalContribution};
pub use validation::validate_scoring;
