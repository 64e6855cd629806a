use crate::sources::types::Lead;

/// Default cap on leads pulled from a live source per run.
pub const DEFAULT_LIVE_LIMIT: usize = 15;

/// Inputs for one pipeline invocation.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Free-text query: seeds the live search and filters the final list.
    pub query: String,
    /// Optional location filter matched against person location or company HQ.
    pub location_filter: String,
    /// Minimum propensity score to include (0-100).
    pub min_score: u32,
    /// If true, live data providers run alongside the static catalogs.
    pub use_live_sources: bool,
    /// Result-count limit passed to live sources.
    pub live_limit: usize,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            location_filter: String::new(),
            min_score: 0,
            use_live_sources: false,
            live_limit: DEFAULT_LIVE_LIMIT,
        }
    }
}

/// A lead after enrichment: the untouched input record plus derived fields.
#[derive(Debug, Clone)]
pub struct ScoredLead {
    pub lead: Lead,
    /// Propensity score in [0, 100].
    pub propensity_score: u32,
    /// `"; "`-joined publication titles, empty when the lead has none.
    pub publications_display: String,
}
