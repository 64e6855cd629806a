use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::pipeline::types::ScoredLead;
use crate::scoring::ScoreResult;

/// Score bands from the propensity model: high-probability leads sit at 70+.
const HIGH_BAND: u32 = 70;
const MEDIUM_BAND: u32 = 40;

const EMPTY_MESSAGE: &str = "No leads matched the current filters. \
Try broadening your query, lowering the min score, or clearing the location filter.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Color a padded score string by band: green for high-probability leads,
/// yellow for the middle band, red below.
fn paint_score(padded: &str, score: u32) -> String {
    if score >= HIGH_BAND {
        padded.green().bold().to_string()
    } else if score >= MEDIUM_BAND {
        padded.yellow().bold().to_string()
    } else {
        padded.red().bold().to_string()
    }
}

/// Format leads as a ranked table with columns: Index, Score, Name - Title,
/// Company, Location. No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 3 chars wide (fits "100")
pub fn format_scored_table(leads: &[ScoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 3;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", scored.propensity_score, width = score_width);

            let who = format!("{} - {}", scored.lead.name, scored.lead.title);
            let company = scored.lead.company.as_str();
            let location = scored.lead.person_location.as_str();

            // Leave the rest of the line for the name/title column
            let fixed_width = index_width
                + 1
                + score_width
                + separator.len() * 3
                + company.chars().count()
                + location.chars().count();
            let who = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&who, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_text(&who, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                who
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    paint_score(&score_padded, scored.propensity_score),
                    separator,
                    who,
                    separator,
                    company.cyan(),
                    separator,
                    location.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, who, separator, company, separator,
                    location
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single lead with detailed multi-line output (for verbose mode),
/// including the per-signal score breakdown.
pub fn format_lead_detail(scored: &ScoredLead, result: &ScoreResult, use_colors: bool) -> String {
    let lead = &scored.lead;
    let email = lead.email.as_deref().unwrap_or("-");
    let linkedin = lead.linkedin_url.as_deref().unwrap_or("-");
    let funding = lead.funding_stage.as_deref().unwrap_or("Unknown");
    let publications = if scored.publications_display.is_empty() {
        "-"
    } else {
        scored.publications_display.as_str()
    };

    let breakdown = result
        .signals
        .iter()
        .map(|s| format!("    {}: +{}", s.label, s.points))
        .collect::<Vec<_>>()
        .join("\n");

    let header = if use_colors {
        format!(
            "{} ({})",
            lead.name.bold(),
            lead.company.cyan()
        )
    } else {
        format!("{} ({})", lead.name, lead.company)
    };

    format!(
        "{}\n  Title: {}\n  Person location: {}\n  Company HQ: {}\n  Funding stage: {}\n  Email: {}\n  LinkedIn: {}\n  Publications: {}\n  Score: {} (raw {})\n{}",
        header,
        lead.title,
        lead.person_location,
        lead.company_hq,
        funding,
        email,
        linkedin,
        publications,
        scored.propensity_score,
        result.raw_total,
        breakdown
    )
}

/// Format leads as tab-separated values for scripting
/// Columns: score, name, title, company, person_location, company_hq, email,
/// linkedin (no headers, no colors)
pub fn format_tsv(leads: &[ScoredLead]) -> String {
    if leads.is_empty() {
        return String::new();
    }

    leads
        .iter()
        .map(|scored| {
            let lead = &scored.lead;
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                scored.propensity_score,
                lead.name,
                lead.title,
                lead.company,
                lead.person_location,
                lead.company_hq,
                lead.email.as_deref().unwrap_or(""),
                lead.linkedin_url.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_lead, ScoringConfig};
    use crate::sources::types::Lead;

    fn sample_scored(name: &str, score: u32) -> ScoredLead {
        ScoredLead {
            lead: Lead {
                name: name.to_string(),
                title: "Director of Toxicology".to_string(),
                company: "Testco Bio".to_string(),
                person_location: "Boston, MA".to_string(),
                company_hq: "Boston, MA".to_string(),
                email: Some("lead@testco.bio".to_string()),
                linkedin_url: Some("https://linkedin.com/in/lead".to_string()),
                funding_stage: Some("Series B".to_string()),
                uses_similar_tech: true,
                open_to_nams: false,
                recent_publications: vec!["Liver toxicity screening".to_string()],
                is_conference_attendee: true,
                is_conference_speaker_or_presenter: false,
            },
            propensity_score: score,
            publications_display: "Liver toxicity screening".to_string(),
        }
    }

    #[test]
    fn test_format_scored_table_empty() {
        let leads: Vec<ScoredLead> = vec![];
        let result = format_scored_table(&leads, false);
        assert!(result.starts_with("No leads matched"));
    }

    #[test]
    fn test_format_scored_table_single() {
        let leads = vec![sample_scored("Alice Smith", 85)];
        let result = format_scored_table(&leads, false);
        // Index should be 1-based
        assert!(result.contains(" 1."));
        assert!(result.contains(" 85"));
        assert!(result.contains("Alice Smith - Director of Toxicology"));
        assert!(result.contains("Testco Bio"));
        assert!(result.contains("Boston, MA"));
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let leads = vec![sample_scored("Alice Smith", 85), sample_scored("Bob Jones", 12)];
        let result = format_scored_table(&leads, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        // Check indices are sequential
        assert!(lines[0].contains(" 1."));
        assert!(lines[1].contains(" 2."));
        assert!(lines[0].contains("Alice Smith"));
        assert!(lines[1].contains("Bob Jones"));
    }

    #[test]
    fn test_format_lead_detail() {
        let scored = sample_scored("Alice Smith", 85);
        let result = score_lead(&scored.lead, &ScoringConfig::default());
        let detail = format_lead_detail(&scored, &result, false);
        assert!(detail.contains("Alice Smith (Testco Bio)"));
        assert!(detail.contains("Title: Director of Toxicology"));
        assert!(detail.contains("Person location: Boston, MA"));
        assert!(detail.contains("Funding stage: Series B"));
        assert!(detail.contains("Role fit: +30"));
        assert!(detail.contains("Conference: +8"));
    }

    #[test]
    fn test_format_lead_detail_missing_optionals() {
        let mut scored = sample_scored("Alice Smith", 85);
        scored.lead.email = None;
        scored.lead.linkedin_url = None;
        scored.lead.funding_stage = None;
        scored.publications_display = String::new();
        let result = score_lead(&scored.lead, &ScoringConfig::default());
        let detail = format_lead_detail(&scored, &result, false);
        assert!(detail.contains("Email: -"));
        assert!(detail.contains("LinkedIn: -"));
        assert!(detail.contains("Funding stage: Unknown"));
        assert!(detail.contains("Publications: -"));
    }

    #[test]
    fn test_format_tsv_empty() {
        let leads: Vec<ScoredLead> = vec![];
        assert_eq!(format_tsv(&leads), "");
    }

    #[test]
    fn test_format_tsv_single() {
        let leads = vec![sample_scored("Alice Smith", 85)];
        let result = format_tsv(&leads);
        assert!(result.starts_with("85\tAlice Smith\t"));
        assert_eq!(result.split('\t').count(), 8);
    }

    #[test]
    fn test_format_tsv_blank_optionals() {
        let mut scored = sample_scored("Alice Smith", 85);
        scored.lead.email = None;
        scored.lead.linkedin_url = None;
        let result = format_tsv(&[scored]);
        // Trailing optional columns are empty, not "None"
        assert!(result.ends_with("\t\t"));
    }

    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Short title", 20), "Short title");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_text_very_narrow() {
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_paint_score_bands() {
        // Bands only change the color wrapper; the digits survive untouched
        assert!(paint_score("100", 100).contains("100"));
        assert!(paint_score(" 50", 50).contains(" 50"));
        assert!(paint_score("  5", 5).contains("  5"));
    }
}
