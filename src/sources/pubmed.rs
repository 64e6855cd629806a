use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use regex::Regex;

use super::types::Lead;
use super::LeadSource;
use crate::pipeline::types::PipelineRequest;

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// One request-response per endpoint; no retry on failure.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Fallback search when the user gave no query of their own.
const DEFAULT_QUERY: &str = "drug induced liver injury 3D cell culture toxicology";

/// Take at most this many authors per article.
const AUTHORS_PER_ARTICLE: usize = 3;

/// Live lead source backed by the free NCBI E-Utilities.
///
/// Recent authors publishing on relevant topics become leads tagged with
/// publication signals. Failures of any kind (network, status, parse)
/// degrade to an empty result so the rest of the pipeline keeps running.
pub struct PubMedSource {
    client: reqwest::Client,
}

impl PubMedSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to create PubMed HTTP client")?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, query: &str, limit: usize) -> Result<Vec<Lead>> {
        // Restrict to papers from the last couple of publication years
        let year = Utc::now().year();
        let term = format!(
            "{} AND (\"{}\"[Date - Publication] OR \"{}\"[Date - Publication] OR \"{}\"[Date - Publication])",
            query,
            year - 2,
            year - 1,
            year
        );
        let retmax = limit.to_string();

        let search: serde_json::Value = self
            .client
            .get(ESEARCH_URL)
            .query(&[
                ("db", "pubmed"),
                ("retmode", "json"),
                ("term", term.as_str()),
                ("sort", "date"),
                ("retmax", retmax.as_str()),
            ])
            .send()
            .await
            .context("PubMed search request failed")?
            .error_for_status()
            .context("PubMed search returned an error status")?
            .json()
            .await
            .context("PubMed search response was not valid JSON")?;

        let ids: Vec<String> = search["esearchresult"]["idlist"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = ids.join(",");
        let xml = self
            .client
            .get(EFETCH_URL)
            .query(&[
                ("db", "pubmed"),
                ("id", id_list.as_str()),
                ("retmode", "xml"),
            ])
            .send()
            .await
            .context("PubMed fetch request failed")?
            .error_for_status()
            .context("PubMed fetch returned an error status")?
            .text()
            .await
            .context("PubMed fetch response could not be read")?;

        Ok(parse_pubmed_articles(&xml))
    }
}

#[async_trait]
impl LeadSource for PubMedSource {
    fn enable(&self, request: &PipelineRequest) -> bool {
        request.use_live_sources
    }

    async fn fetch(&self, query: &str, limit: usize) -> Vec<Lead> {
        let query = if query.trim().is_empty() {
            DEFAULT_QUERY
        } else {
            query
        };
        match self.try_fetch(query, limit).await {
            Ok(leads) => leads,
            Err(e) => {
                eprintln!(
                    "Warning: PubMed fetch failed, continuing without live leads: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    fn name(&self) -> &str {
        "pubmed"
    }
}

struct ArticleRegexes {
    article: Regex,
    title: Regex,
    year: Regex,
    author: Regex,
    last_name: Regex,
    fore_name: Regex,
    affiliation: Regex,
    tag: Regex,
}

impl ArticleRegexes {
    fn build() -> Option<Self> {
        Some(Self {
            article: Regex::new(r"(?s)<PubmedArticle>(.*?)</PubmedArticle>").ok()?,
            title: Regex::new(r"(?s)<ArticleTitle>(.*?)</ArticleTitle>").ok()?,
            year: Regex::new(r"(?s)<PubDate>.*?<Year>(\d{4})</Year>.*?</PubDate>").ok()?,
            author: Regex::new(r"(?s)<Author[^>]*>(.*?)</Author>").ok()?,
            last_name: Regex::new(r"<LastName>(.*?)</LastName>").ok()?,
            fore_name: Regex::new(r"<ForeName>(.*?)</ForeName>").ok()?,
            affiliation: Regex::new(r"(?s)<Affiliation>(.*?)</Affiliation>").ok()?,
            tag: Regex::new(r"<[^>]+>").ok()?,
        })
    }

    fn strip_tags(&self, text: &str) -> String {
        self.tag.replace_all(text, "").trim().to_string()
    }
}

/// Parse PubMed efetch XML into leads.
///
/// Regex-based on purpose rather than a full XML parse: the handful of
/// fields needed sit in stable tags, and partial or malformed records must
/// degrade to skipped entries, never errors.
fn parse_pubmed_articles(xml: &str) -> Vec<Lead> {
    let Some(re) = ArticleRegexes::build() else {
        return Vec::new();
    };

    let current_year = Utc::now().year().to_string();
    let mut leads = Vec::new();
    let mut seen_names = HashSet::new();

    for article in re.article.captures_iter(xml) {
        let chunk = &article[1];

        let title = re
            .title
            .captures(chunk)
            .map(|c| re.strip_tags(&c[1]))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Recent publication".to_string());
        let pub_year = re
            .year
            .captures(chunk)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| current_year.clone());

        let authors: Vec<&str> = re
            .author
            .captures_iter(chunk)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        let author_count = authors.len();

        for (i, author) in authors.into_iter().take(AUTHORS_PER_ARTICLE).enumerate() {
            let fore = re.fore_name.captures(author).map(|c| c[1].to_string());
            let last = re.last_name.captures(author).map(|c| c[1].to_string());
            let name = [fore, last]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() || !seen_names.insert(name.clone()) {
                continue;
            }

            let affiliation = re
                .affiliation
                .captures(author)
                .map(|c| re.strip_tags(&c[1]))
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "Research Institution".to_string());
            let location = location_from_affiliation(&affiliation);

            let role = if i == 0 {
                "First Author / Researcher"
            } else if i == author_count - 1 {
                "Corresponding Author / PI"
            } else {
                "Researcher / Author"
            };

            leads.push(Lead {
                name,
                title: role.to_string(),
                company: affiliation.chars().take(100).collect(),
                person_location: location.clone(),
                company_hq: location,
                email: None,
                linkedin_url: None,
                funding_stage: Some("Grant".to_string()),
                // Publishing in the area implies working with comparable models
                uses_similar_tech: true,
                open_to_nams: true,
                recent_publications: vec![format!("{} ({})", title, pub_year)],
                is_conference_attendee: false,
                is_conference_speaker_or_presenter: false,
            });
        }
    }

    leads
}

/// Map a free-text affiliation to a hub-normalized location, falling back to
/// the trailing comma-separated parts of the affiliation string.
fn location_from_affiliation(affiliation: &str) -> String {
    let aff = affiliation.to_lowercase();
    if ["boston", "cambridge", "massachusetts"]
        .iter()
        .any(|l| aff.contains(l))
    {
        return "Boston, MA".to_string();
    }
    if ["san francisco", "bay area", "california"]
        .iter()
        .any(|l| aff.contains(l))
    {
        return "San Francisco, CA".to_string();
    }
    if ["basel", "switzerland"].iter().any(|l| aff.contains(l)) {
        return "Basel, Switzerland".to_string();
    }
    if ["oxford", "london", "united kingdom", "england"]
        .iter()
        .any(|l| aff.contains(l))
    {
        return "United Kingdom".to_string();
    }

    let parts: Vec<&str> = affiliation.split(',').map(str::trim).collect();
    if parts.len() >= 2 {
        let tail = parts[parts.len() - 2..].join(", ");
        tail.chars().take(50).collect()
    } else {
        "Unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"
<PubmedArticleSet>
<PubmedArticle>
  <ArticleTitle>Hepatic spheroid models for <i>in vitro</i> DILI prediction</ArticleTitle>
  <Journal><JournalIssue><PubDate><Year>2025</Year></PubDate></JournalIssue></Journal>
  <AuthorList>
    <Author ValidYN="Y">
      <LastName>Nguyen</LastName>
      <ForeName>Linh</ForeName>
      <Affiliation>Department of Toxicology, Harvard University, Boston, MA, USA.</Affiliation>
    </Author>
    <Author ValidYN="Y">
      <LastName>Okafor</LastName>
      <ForeName>Chidi</ForeName>
      <Affiliation>Institute of Pharmacology, University of Basel, Switzerland.</Affiliation>
    </Author>
  </AuthorList>
</PubmedArticle>
<PubmedArticle>
  <ArticleTitle>Organ-on-chip toxicity screening</ArticleTitle>
  <Journal><JournalIssue><PubDate><Year>2024</Year></PubDate></JournalIssue></Journal>
  <AuthorList>
    <Author ValidYN="Y">
      <LastName>Nguyen</LastName>
      <ForeName>Linh</ForeName>
      <Affiliation>Department of Toxicology, Harvard University, Boston, MA, USA.</Affiliation>
    </Author>
    <Author ValidYN="Y">
      <CollectiveName>The Screening Consortium</CollectiveName>
    </Author>
  </AuthorList>
</PubmedArticle>
</PubmedArticleSet>
"#;

    #[test]
    fn test_parse_extracts_authors() {
        let leads = parse_pubmed_articles(SAMPLE_XML);
        // Two named authors in article one; the repeat of Linh Nguyen in
        // article two is deduped and the collective name has no person name
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].name, "Linh Nguyen");
        assert_eq!(leads[1].name, "Chidi Okafor");
    }

    #[test]
    fn test_parse_strips_markup_from_title() {
        let leads = parse_pubmed_articles(SAMPLE_XML);
        assert_eq!(
            leads[0].recent_publications,
            vec!["Hepatic spheroid models for in vitro DILI prediction (2025)".to_string()]
        );
    }

    #[test]
    fn test_parse_assigns_roles_by_position() {
        let leads = parse_pubmed_articles(SAMPLE_XML);
        assert_eq!(leads[0].title, "First Author / Researcher");
        assert_eq!(leads[1].title, "Corresponding Author / PI");
    }

    #[test]
    fn test_parse_normalizes_hub_locations() {
        let leads = parse_pubmed_articles(SAMPLE_XML);
        assert_eq!(leads[0].person_location, "Boston, MA");
        assert_eq!(leads[1].person_location, "Basel, Switzerland");
    }

    #[test]
    fn test_parse_tags_publication_signals() {
        let leads = parse_pubmed_articles(SAMPLE_XML);
        for lead in &leads {
            assert_eq!(lead.funding_stage.as_deref(), Some("Grant"));
            assert!(lead.uses_similar_tech);
            assert!(lead.open_to_nams);
            assert!(lead.email.is_none());
        }
    }

    #[test]
    fn test_parse_garbage_yields_empty() {
        assert!(parse_pubmed_articles("not xml at all").is_empty());
        assert!(parse_pubmed_articles("").is_empty());
    }

    #[test]
    fn test_location_fallback_uses_affiliation_tail() {
        let loc = location_from_affiliation("Department of Biology, University of Tokyo, Japan");
        assert_eq!(loc, "University of Tokyo, Japan");
    }

    #[test]
    fn test_location_unknown_for_short_affiliation() {
        assert_eq!(location_from_affiliation("Research Institution"), "Unknown");
    }

    #[test]
    fn test_source_disabled_without_live_flag() {
        let source = PubMedSource::new().unwrap();
        let request = PipelineRequest::default();
        assert!(!source.enable(&request));

        let live = PipelineRequest {
            use_live_sources: true,
            ..Default::default()
        };
        assert!(source.enable(&live));
    }
}
