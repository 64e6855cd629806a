use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Role groups: at least one group, no empty or blank keyword lists
    if config.role.groups.is_empty() {
        errors.push("scoring.role.groups: at least one keyword group is required".to_string());
    }
    for (i, group) in config.role.groups.iter().enumerate() {
        if group.keywords.is_empty() {
            errors.push(format!(
                "scoring.role.groups[{}].keywords: must not be empty",
                i
            ));
        }
        for (j, keyword) in group.keywords.iter().enumerate() {
            if keyword.trim().is_empty() {
                errors.push(format!(
                    "scoring.role.groups[{}].keywords[{}]: blank keyword",
                    i, j
                ));
            }
        }
    }

    // Funding rules: blank patterns would match every stage
    for (i, rule) in config.funding.iter().enumerate() {
        if rule.contains.trim().is_empty() {
            errors.push(format!("scoring.funding[{}].contains: blank pattern", i));
        }
    }

    // Hub list: blank hubs would match every location
    for (i, hub) in config.location.hubs.iter().enumerate() {
        if hub.trim().is_empty() {
            errors.push(format!("scoring.location.hubs[{}]: blank hub name", i));
        }
    }

    // Scientific keywords
    if config.scientific.keywords.is_empty() {
        errors.push("scoring.scientific.keywords: must not be empty".to_string());
    }
    for (i, keyword) in config.scientific.keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            errors.push(format!("scoring.scientific.keywords[{}]: blank keyword", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FundingRule, KeywordGroup};

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_empty_role_groups() {
        let mut config = ScoringConfig::default();
        config.role.groups.clear();
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("scoring.role.groups"));
    }

    #[test]
    fn test_blank_role_keyword() {
        let mut config = ScoringConfig::default();
        config.role.groups.push(KeywordGroup {
            keywords: vec!["  ".to_string()],
            weight: 5,
        });
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("blank keyword"));
    }

    #[test]
    fn test_blank_funding_pattern() {
        let mut config = ScoringConfig::default();
        config.funding.push(FundingRule {
            contains: String::new(),
            weight: 5,
        });
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("scoring.funding[8].contains"));
    }

    #[test]
    fn test_blank_hub() {
        let mut config = ScoringConfig::default();
        config.location.hubs.push(" ".to_string());
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("scoring.location.hubs[11]"));
    }

    #[test]
    fn test_empty_scientific_keywords() {
        let mut config = ScoringConfig::default();
        config.scientific.keywords.clear();
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("scoring.scientific.keywords"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig::default();
        config.scientific.keywords.clear(); // Error 1
        config.location.hubs.push(String::new()); // Error 2
        let result = validate_scoring(&config);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
