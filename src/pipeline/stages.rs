use std::collections::HashSet;

use super::types::{PipelineRequest, ScoredLead};
use crate::scoring::{compute_propensity_score, ScoringConfig};
use crate::sources::types::Lead;
use crate::sources::LeadSource;

/// Stage 1: Identification. Pull raw leads from every enabled source in
/// slice order, preserving each source's own result order. A source that
/// produces nothing contributes nothing; it cannot fail the stage.
pub async fn identify(
    request: &PipelineRequest,
    sources: &[Box<dyn LeadSource>],
    verbose: bool,
) -> Vec<Lead> {
    let mut collected = Vec::new();
    for source in sources {
        if !source.enable(request) {
            continue;
        }
        let leads = source.fetch(&request.query, request.live_limit).await;
        if verbose {
            eprintln!("  {}: {} leads", source.name(), leads.len());
        }
        collected.extend(leads);
    }
    collected
}

/// Stage 2: Enrichment. Drop repeat names (exact match, first seen wins),
/// score the survivors, and flatten publications into a display string.
/// Input order is preserved; the Lead itself is never mutated.
pub fn enrich(leads: Vec<Lead>, scoring: &ScoringConfig) -> Vec<ScoredLead> {
    let mut seen_names = HashSet::new();
    leads
        .into_iter()
        .filter(|lead| seen_names.insert(lead.name.clone()))
        .map(|lead| {
            let propensity_score = compute_propensity_score(&lead, scoring);
            let publications_display = lead.joined_publications();
            ScoredLead {
                lead,
                propensity_score,
                publications_display,
            }
        })
        .collect()
}

/// Stage 3: Filter and rank. Applies the score threshold, then the optional
/// location and query filters, then sorts by score descending. The sort key
/// is the score alone and the sort is stable, so ties keep their pre-sort
/// relative order.
pub fn filter_and_rank(scored: Vec<ScoredLead>, request: &PipelineRequest) -> Vec<ScoredLead> {
    let mut kept: Vec<ScoredLead> = scored
        .into_iter()
        .filter(|s| s.propensity_score >= request.min_score)
        .collect();

    if !request.location_filter.is_empty() {
        let lf = request.location_filter.to_lowercase();
        kept.retain(|s| {
            s.lead.person_location.to_lowercase().contains(&lf)
                || s.lead.company_hq.to_lowercase().contains(&lf)
        });
    }

    if !request.query.is_empty() {
        let q = request.query.to_lowercase();
        kept.retain(|s| {
            s.lead.title.to_lowercase().contains(&q)
                || s.lead.company.to_lowercase().contains(&q)
                || s.publications_display.to_lowercase().contains(&q)
                || s.lead.name.to_lowercase().contains(&q)
        });
    }

    kept.sort_by(|a, b| b.propensity_score.cmp(&a.propensity_score));
    kept
}

/// Run the full Identify -> Enrich -> FilterRank pipeline.
///
/// Zero leads out is a normal empty result, not an error: an empty pool
/// still flows through every stage.
pub async fn run(
    request: &PipelineRequest,
    sources: &[Box<dyn LeadSource>],
    scoring: &ScoringConfig,
    verbose: bool,
) -> Vec<ScoredLead> {
    let raw = identify(request, sources, verbose).await;
    let enriched = enrich(raw, scoring);
    if verbose {
        eprintln!("After deduplication: {} unique leads", enriched.len());
    }
    filter_and_rank(enriched, request)
}
