use super::config::ScoringConfig;
use super::signals::{
    score_company_intent, score_conference_signal, score_location, score_role_fit,
    score_scientific_intent, score_technographic,
};
use crate::sources::types::Lead;

/// Ceiling for the final propensity score.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone)]
pub struct SignalContribution {
    pub label: &'static str, // e.g. "Role fit", "Location"
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Propensity score clamped to [0, 100].
    pub score: u32,
    /// Sum of the sub-scores before the clamp.
    pub raw_total: u32,
    /// Per-signal contributions, in fixed signal order.
    pub signals: Vec<SignalContribution>,
}

/// Score a lead with a per-signal breakdown.
///
/// Pure and side-effect-free: the same lead and config always produce the
/// same result, and the lead is never mutated.
pub fn score_lead(lead: &Lead, config: &ScoringConfig) -> ScoreResult {
    let signals = vec![
        SignalContribution {
            label: "Role fit",
            points: score_role_fit(&lead.title, &config.role),
        },
        SignalContribution {
            label: "Company intent",
            points: score_company_intent(lead.funding_stage.as_deref(), &config.funding),
        },
        SignalContribution {
            label: "Technographic",
            points: score_technographic(
                lead.uses_similar_tech,
                lead.open_to_nams,
                &config.technographic,
            ),
        },
        SignalContribution {
            label: "Location",
            points: score_location(&lead.person_location, &lead.company_hq, &config.location),
        },
        SignalContribution {
            label: "Scientific intent",
            points: score_scientific_intent(&lead.recent_publications, &config.scientific),
        },
        SignalContribution {
            label: "Conference",
            points: score_conference_signal(
                lead.is_conference_attendee,
                lead.is_conference_speaker_or_presenter,
                &config.conference,
            ),
        },
    ];

    // Sub-scores are non-negative, so the clamp is the only ceiling needed.
    let raw_total: u32 = signals.iter().map(|s| s.points).sum();
    ScoreResult {
        score: raw_total.min(MAX_SCORE),
        raw_total,
        signals,
    }
}

/// Propensity score in [0, 100] for a lead.
pub fn compute_propensity_score(lead: &Lead, config: &ScoringConfig) -> u32 {
    score_lead(lead, config).score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            name: "Test Lead".to_string(),
            title: "Scientist".to_string(),
            company: "Testco".to_string(),
            person_location: "Nowhere".to_string(),
            company_hq: "Nowhere".to_string(),
            email: None,
            linkedin_url: None,
            funding_stage: None,
            uses_similar_tech: false,
            open_to_nams: false,
            recent_publications: vec![],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        }
    }

    #[test]
    fn test_score_is_bounded() {
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "Chief Toxicologist, Preclinical 3D Hepatic Safety".to_string();
        lead.funding_stage = Some("Series B".to_string());
        lead.uses_similar_tech = true;
        lead.open_to_nams = true;
        lead.person_location = "Cambridge, MA".to_string();
        lead.recent_publications = vec![
            "Drug-induced liver injury in 3D models".to_string(),
            "Hepatic spheroids at scale".to_string(),
        ];
        lead.is_conference_speaker_or_presenter = true;

        let result = score_lead(&lead, &config);
        assert_eq!(result.score, 100);
        assert!(result.raw_total > 100);
    }

    #[test]
    fn test_weakest_lead_scores_zero() {
        // Junior title, no funding stage, no tech signals, no hub location,
        // no publications, no conference presence
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "Junior Scientist, Cell Biology".to_string();
        lead.person_location = "Austin, TX".to_string();
        lead.company_hq = "Austin, TX".to_string();

        assert_eq!(compute_propensity_score(&lead, &config), 0);
    }

    #[test]
    fn test_pre_seed_junior_scores_zero() {
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "Junior Scientist, Cell Biology".to_string();
        lead.funding_stage = Some("Pre-seed".to_string());
        lead.person_location = "Austin, TX".to_string();
        lead.company_hq = "Austin, TX".to_string();

        assert_eq!(compute_propensity_score(&lead, &config), 0);
    }

    #[test]
    fn test_strong_lead_clamps_at_hundred() {
        // role(10+15=25) + intent(20) + tech(25) + location(10) + sci(30)
        // + conference(15) = 125, clamped to 100
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "Director of Safety Assessment".to_string();
        lead.funding_stage = Some("Series B".to_string());
        lead.uses_similar_tech = true;
        lead.open_to_nams = true;
        lead.person_location = "Cambridge, MA".to_string();
        lead.company_hq = "Cambridge, MA".to_string();
        lead.recent_publications =
            vec!["Drug-induced liver injury assessment using 3D hepatic spheroids".to_string()];
        lead.is_conference_speaker_or_presenter = true;

        let result = score_lead(&lead, &config);
        assert_eq!(result.raw_total, 125);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_breakdown_matches_expected_signals() {
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "Head of Investigative Toxicology".to_string();
        lead.funding_stage = Some("Series A".to_string());
        lead.uses_similar_tech = true;
        lead.is_conference_attendee = true;

        let result = score_lead(&lead, &config);
        let points: Vec<u32> = result.signals.iter().map(|s| s.points).collect();
        // role: head(10) + toxicology(20) = 30; intent: 15; tech: 15;
        // location: 0; scientific: 0; conference: attendee 8
        assert_eq!(points, vec![30, 15, 15, 0, 0, 8]);
        assert_eq!(result.score, 68);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let config = ScoringConfig::default();
        let mut lead = sample_lead();
        lead.title = "VP Preclinical Development".to_string();
        lead.funding_stage = Some("Series C".to_string());

        let first = compute_propensity_score(&lead, &config);
        let second = compute_propensity_score(&lead, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_optional_fields_are_valid() {
        let config = ScoringConfig::default();
        let lead = sample_lead();
        // No email, no linkedin, no funding stage, no publications: still a
        // well-formed input, just the weakest one
        let result = score_lead(&lead, &config);
        assert_eq!(result.score, 0);
        assert_eq!(result.signals.len(), 6);
    }
}
