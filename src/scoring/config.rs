use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Defines how lead propensity scores are calculated. Every keyword list and
/// weight is data rather than control flow, so the tuning is auditable and
/// can be overridden per-signal from the config file. Omitted sections fall
/// back to the built-in weights.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   role:
///     cap: 30
///     groups:
///       - { keywords: ["director", "head", "vp"], weight: 10 }
///       - { keywords: ["toxicology"], weight: 20 }
///   conference:
///     speaker: 15
///     attendee: 8
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Role-fit keyword groups matched against the job title.
    #[serde(default = "default_role")]
    pub role: RoleConfig,

    /// Funding-stage rules, checked in order; the first match wins.
    #[serde(default = "default_funding")]
    pub funding: Vec<FundingRule>,

    /// Technology-adoption weights.
    #[serde(default = "default_technographic")]
    pub technographic: TechnographicConfig,

    /// Industry-hub location bonus.
    #[serde(default = "default_location")]
    pub location: LocationConfig,

    /// Publication-signal weights.
    #[serde(default = "default_scientific")]
    pub scientific: ScientificConfig,

    /// Conference-presence weights.
    #[serde(default = "default_conference")]
    pub conference: ConferenceConfig,
}

/// Role-fit configuration: keyword groups that stack, with an overall cap.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoleConfig {
    /// Ceiling for the summed group weights.
    pub cap: u32,
    /// Each group contributes its weight once if any of its keywords appears
    /// in the title (case-insensitive substring match).
    pub groups: Vec<KeywordGroup>,
}

/// A set of interchangeable keywords sharing one weight.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordGroup {
    pub keywords: Vec<String>,
    pub weight: u32,
}

/// One funding-stage rule: `contains` is matched case-insensitively as a
/// substring of the lead's funding stage.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FundingRule {
    pub contains: String,
    pub weight: u32,
}

/// Technology-adoption weights, capped so both flags together land exactly
/// on the cap.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TechnographicConfig {
    pub uses_similar_tech: u32,
    pub open_to_nams: u32,
    pub cap: u32,
}

/// Flat bonus when either location string mentions an industry hub.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub hubs: Vec<String>,
    pub weight: u32,
}

/// Publication-signal weights. Keywords are matched as whole words/phrases
/// (word boundaries at both ends) against the joined publication titles.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScientificConfig {
    pub keywords: Vec<String>,
    pub keyword_weight: u32,
    /// Publication count at which the publishing-activity bonus applies.
    pub min_publications: usize,
    pub activity_weight: u32,
    pub cap: u32,
}

/// Conference-presence weights. Speaking takes priority over attendance;
/// the two are never summed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConferenceConfig {
    pub speaker: u32,
    pub attendee: u32,
}

fn default_role() -> RoleConfig {
    let group = |keywords: &[&str], weight: u32| KeywordGroup {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        weight,
    };
    RoleConfig {
        cap: 30,
        groups: vec![
            group(&["director", "head", "vp", "vice president", "chief"], 10),
            group(&["toxicology", "toxicologist"], 20),
            group(&["safety", "preclinical", "nonclinical"], 15),
            group(&["hepatic", "liver"], 10),
            group(&["3d"], 10),
        ],
    }
}

fn default_funding() -> Vec<FundingRule> {
    // Order matters: "series b"/"series c" outrank "series a", and
    // "pre-seed" must come before "seed".
    let rule = |contains: &str, weight: u32| FundingRule {
        contains: contains.to_string(),
        weight,
    };
    vec![
        rule("series b", 20),
        rule("series c", 20),
        rule("series a", 15),
        rule("pre-seed", 0),
        rule("seed", 8),
        rule("ipo", 12),
        rule("public", 12),
        rule("grant", 10),
    ]
}

fn default_technographic() -> TechnographicConfig {
    TechnographicConfig {
        uses_similar_tech: 15,
        open_to_nams: 10,
        cap: 25,
    }
}

fn default_location() -> LocationConfig {
    LocationConfig {
        hubs: [
            "Boston",
            "Cambridge",
            "Massachusetts",
            "Bay Area",
            "San Francisco",
            "San Diego",
            "Basel",
            "Cambridge UK",
            "Oxford",
            "London",
            "Golden Triangle",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect(),
        weight: 10,
    }
}

fn default_scientific() -> ScientificConfig {
    ScientificConfig {
        keywords: [
            "drug-induced liver injury",
            "DILI",
            "hepatic toxicity",
            "liver toxicity",
            "investigative toxicology",
            "3D cell culture",
            "organ-on-chip",
            "hepatic spheroids",
            "NAMs",
            "new approach methodologies",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect(),
        keyword_weight: 30,
        min_publications: 2,
        activity_weight: 10,
        cap: 40,
    }
}

fn default_conference() -> ConferenceConfig {
    ConferenceConfig {
        speaker: 15,
        attendee: 8,
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
            funding: default_funding(),
            technographic: default_technographic(),
            location: default_location(),
            scientific: default_scientific(),
            conference: default_conference(),
        }
    }
}
