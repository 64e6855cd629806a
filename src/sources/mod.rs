pub mod catalog;
pub mod pubmed;
pub mod types;

pub use catalog::{DemoCatalog, FundedCompanyCatalog};
pub use pubmed::PubMedSource;
pub use types::Lead;

use async_trait::async_trait;

use crate::pipeline::types::PipelineRequest;

/// A provider of candidate leads.
///
/// Sources never fail outward: a provider that cannot produce results
/// (network error, parse error, upstream outage) logs the problem and returns
/// an empty list, and the pipeline keeps running on whatever the remaining
/// sources supplied.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Decide if this source should run for the given request.
    fn enable(&self, _request: &PipelineRequest) -> bool {
        true
    }

    /// Fetch candidate leads for the given query, up to `limit` results.
    /// Static catalogs may ignore both arguments.
    async fn fetch(&self, query: &str, limit: usize) -> Vec<Lead>;

    /// Returns a stable name for log lines.
    fn name(&self) -> &str;
}
