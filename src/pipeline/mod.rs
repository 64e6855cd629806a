pub mod stages;
pub mod types;

pub use stages::{enrich, filter_and_rank, identify, run};
pub use types::{PipelineRequest, ScoredLead, DEFAULT_LIVE_LIMIT};
