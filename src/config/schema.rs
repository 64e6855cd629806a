use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides for the built-in scoring weights.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Maximum number of leads pulled from the live source per run.
    #[serde(default)]
    pub live_limit: Option<usize>,
}
