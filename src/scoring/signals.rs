use regex::Regex;

use super::config::{
    ConferenceConfig, FundingRule, LocationConfig, RoleConfig, ScientificConfig,
    TechnographicConfig,
};

/// Role fit: each keyword group contributes its weight once if any of its
/// keywords appears in the title. Groups stack; the sum clamps to the cap.
pub fn score_role_fit(title: &str, config: &RoleConfig) -> u32 {
    let title_lower = title.to_lowercase();
    let score: u32 = config
        .groups
        .iter()
        .filter(|group| {
            group
                .keywords
                .iter()
                .any(|k| title_lower.contains(&k.to_lowercase()))
        })
        .map(|group| group.weight)
        .sum();
    score.min(config.cap)
}

/// Company intent from the funding stage. Rules are checked in order and the
/// first substring match wins; a missing or unmatched stage scores zero.
pub fn score_company_intent(funding_stage: Option<&str>, rules: &[FundingRule]) -> u32 {
    let Some(stage) = funding_stage else {
        return 0;
    };
    let stage_lower = stage.to_lowercase();
    rules
        .iter()
        .find(|rule| stage_lower.contains(&rule.contains.to_lowercase()))
        .map(|rule| rule.weight)
        .unwrap_or(0)
}

/// Technology adoption: both flags stack, clamped to the cap.
pub fn score_technographic(
    uses_similar_tech: bool,
    open_to_nams: bool,
    config: &TechnographicConfig,
) -> u32 {
    let mut score = 0;
    if uses_similar_tech {
        score += config.uses_similar_tech;
    }
    if open_to_nams {
        score += config.open_to_nams;
    }
    score.min(config.cap)
}

/// Location: flat bonus if any hub appears in either location string.
/// Binary, not additive across hubs.
pub fn score_location(person_location: &str, company_hq: &str, config: &LocationConfig) -> u32 {
    let locs = format!("{} {}", person_location, company_hq).to_lowercase();
    if config
        .hubs
        .iter()
        .any(|hub| locs.contains(&hub.to_lowercase()))
    {
        config.weight
    } else {
        0
    }
}

/// Scientific intent from recent publications: a whole-word/phrase keyword
/// match over the joined titles is the strong signal; two or more papers add
/// the publishing-activity bonus on top. Clamped to the cap.
///
/// Multi-word keywords match as contiguous phrases with word boundaries at
/// both ends, so "new approach methodologies" does not match when the words
/// appear scattered across a title.
pub fn score_scientific_intent(publication_titles: &[String], config: &ScientificConfig) -> u32 {
    let blob = publication_titles.join(" ").to_lowercase();
    let mut score = 0;
    let keyword_hit = config.keywords.iter().any(|keyword| {
        let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
        match Regex::new(&pattern) {
            Ok(re) => re.is_match(&blob),
            Err(_) => false,
        }
    });
    if keyword_hit {
        score += config.keyword_weight;
    }
    if publication_titles.len() >= config.min_publications {
        score += config.activity_weight;
    }
    score.min(config.cap)
}

/// Conference presence: speaking takes priority over attendance; the two
/// signals are never summed.
pub fn score_conference_signal(attendee: bool, speaker: bool, config: &ConferenceConfig) -> u32 {
    if speaker {
        config.speaker
    } else if attendee {
        config.attendee
    } else {
        0
    }
}
