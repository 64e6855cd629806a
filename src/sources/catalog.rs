use async_trait::async_trait;

use super::types::Lead;
use super::LeadSource;

/// Hand-curated demo pool of named prospects. Deterministic: same leads,
/// same order, every call.
pub struct DemoCatalog;

#[async_trait]
impl LeadSource for DemoCatalog {
    async fn fetch(&self, _query: &str, _limit: usize) -> Vec<Lead> {
        demo_leads()
    }

    fn name(&self) -> &str {
        "demo-catalog"
    }
}

/// Lead profiles derived from recently funded biotech companies.
pub struct FundedCompanyCatalog;

#[async_trait]
impl LeadSource for FundedCompanyCatalog {
    async fn fetch(&self, _query: &str, _limit: usize) -> Vec<Lead> {
        funded_company_leads()
    }

    fn name(&self) -> &str {
        "funded-companies"
    }
}

pub fn demo_leads() -> Vec<Lead> {
    vec![
        Lead {
            name: "Alice Smith".to_string(),
            title: "Director of Safety Assessment".to_string(),
            company: "HepatoThera Biotech".to_string(),
            person_location: "Remote - Colorado".to_string(),
            company_hq: "Cambridge, MA".to_string(),
            email: Some("alice.smith@hepatothera.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/alicesmith".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Drug-induced liver injury assessment using 3D hepatic spheroids".to_string(),
                "New approach methodologies for investigative toxicology".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Bob Johnson".to_string(),
            title: "Junior Scientist, Cell Biology".to_string(),
            company: "NanoLiver Startups".to_string(),
            person_location: "Austin, TX".to_string(),
            company_hq: "Austin, TX".to_string(),
            email: Some("bob.johnson@nanoliver.io".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/bobjohnson".to_string()),
            funding_stage: Some("Pre-seed".to_string()),
            uses_similar_tech: false,
            open_to_nams: false,
            recent_publications: vec![],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Carla Gomez".to_string(),
            title: "Head of Investigative Toxicology".to_string(),
            company: "BayBridge Pharma".to_string(),
            person_location: "San Francisco Bay Area".to_string(),
            company_hq: "South San Francisco, CA".to_string(),
            email: Some("carla.gomez@baybridgepharma.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/carlagomez".to_string()),
            funding_stage: Some("Series A".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Hepatic toxicity profiling in organ-on-chip models".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Deepa Nair".to_string(),
            title: "VP Preclinical Development".to_string(),
            company: "Cambridge HepatoTech".to_string(),
            person_location: "Cambridge, MA".to_string(),
            company_hq: "Cambridge, MA".to_string(),
            email: Some("deepa.nair@hepatotech.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/deepanair".to_string()),
            funding_stage: Some("Series C".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Organ-on-chip approaches for drug-induced liver injury".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Ethan Lee".to_string(),
            title: "Director, Investigative Toxicology".to_string(),
            company: "BaySphere Therapeutics".to_string(),
            person_location: "South San Francisco, CA".to_string(),
            company_hq: "South San Francisco, CA".to_string(),
            email: Some("ethan.lee@baysphere.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/ethanlee".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "In-vitro hepatic spheroids for mechanistic toxicity".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Farah Khan".to_string(),
            title: "Head of Safety Pharmacology".to_string(),
            company: "GoldenTriangle Bio".to_string(),
            person_location: "Oxford, UK".to_string(),
            company_hq: "Oxford, UK".to_string(),
            email: Some("farah.khan@goldentrianglebio.co.uk".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/farahkhan".to_string()),
            funding_stage: Some("Series A".to_string()),
            uses_similar_tech: false,
            open_to_nams: true,
            recent_publications: vec!["NAMs in preclinical safety pipelines".to_string()],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Gabriel Rossi".to_string(),
            title: "Senior Scientist, DMPK".to_string(),
            company: "Milan Bioinnovations".to_string(),
            person_location: "Milan, Italy".to_string(),
            company_hq: "Milan, Italy".to_string(),
            email: Some("gabriel.rossi@milanbio.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/gabrielrossi".to_string()),
            funding_stage: Some("Seed".to_string()),
            uses_similar_tech: false,
            open_to_nams: false,
            recent_publications: vec![],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Hannah Wright".to_string(),
            title: "Director of Nonclinical Safety".to_string(),
            company: "Basel Therapeutics".to_string(),
            person_location: "Basel, Switzerland".to_string(),
            company_hq: "Basel, Switzerland".to_string(),
            email: Some("hannah.wright@baselthera.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/hannahwright".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Cross-species liver toxicity assessment using 3D cultures".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Ivan Petrov".to_string(),
            title: "Principal Scientist, Liver Models".to_string(),
            company: "OrganChip Labs".to_string(),
            person_location: "Remote - Colorado".to_string(),
            company_hq: "Boston, MA".to_string(),
            email: Some("ivan.petrov@organchip.com".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/ivanpetrov".to_string()),
            funding_stage: Some("Series A".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec!["Hepatocyte spheroids in NAM workflows".to_string()],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
    ]
}

pub fn funded_company_leads() -> Vec<Lead> {
    vec![
        Lead {
            name: "Dr. Sarah Chen".to_string(),
            title: "Director of Safety Assessment".to_string(),
            company: "Iambic Therapeutics".to_string(),
            person_location: "San Diego, CA".to_string(),
            company_hq: "San Diego, CA".to_string(),
            email: Some("sarah.chen@iambic.ai".to_string()),
            linkedin_url: Some("https://linkedin.com/in/sarah-chen-tox".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "AI-driven drug discovery and safety assessment (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Dr. Emily Watson".to_string(),
            title: "Head of Investigative Toxicology".to_string(),
            company: "QSimulate".to_string(),
            person_location: "Boston, MA".to_string(),
            company_hq: "Boston, MA".to_string(),
            email: Some("emily.watson@qsimulate.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/emily-watson-tox".to_string()),
            funding_stage: Some("Seed".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Quantum simulation for drug toxicity prediction (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "James Park".to_string(),
            title: "Senior Scientist, DMPK".to_string(),
            company: "Neros Technologies".to_string(),
            person_location: "Remote - Colorado".to_string(),
            company_hq: "Cambridge, MA".to_string(),
            email: Some("james.park@neros.tech".to_string()),
            linkedin_url: Some("https://linkedin.com/in/james-park-dmpk".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: false,
            open_to_nams: true,
            recent_publications: vec![],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Dr. Anna Kowalski".to_string(),
            title: "Director of Liver Models".to_string(),
            company: "OrganTech Pharma".to_string(),
            person_location: "Basel, Switzerland".to_string(),
            company_hq: "Basel, Switzerland".to_string(),
            email: Some("anna.kowalski@organtech.ch".to_string()),
            linkedin_url: Some("https://linkedin.com/in/anna-kowalski-liver".to_string()),
            funding_stage: Some("Series A".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "3D hepatic spheroids for DILI assessment (2024)".to_string(),
                "Organ-on-chip liver toxicity models (2023)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Lisa Martinez".to_string(),
            title: "Principal Scientist, Hepatic Safety".to_string(),
            company: "Pfizer".to_string(),
            person_location: "Groton, CT".to_string(),
            company_hq: "New York, NY".to_string(),
            email: Some("lisa.martinez@pfizer.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/lisa-martinez-safety".to_string()),
            funding_stage: Some("Public".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "NAMs in pharmaceutical safety assessment (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Dr. Thomas Brown".to_string(),
            title: "Head of Preclinical Safety".to_string(),
            company: "Novartis".to_string(),
            person_location: "Basel, Switzerland".to_string(),
            company_hq: "Basel, Switzerland".to_string(),
            email: Some("thomas.brown@novartis.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/thomas-brown-safety".to_string()),
            funding_stage: Some("Public".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "In-vitro hepatotoxicity screening advances (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Dr. Maria Santos".to_string(),
            title: "Director of In-Vitro Models".to_string(),
            company: "BioTissue Dynamics".to_string(),
            person_location: "London, UK".to_string(),
            company_hq: "Cambridge, UK".to_string(),
            email: Some("maria.santos@biotissue.co.uk".to_string()),
            linkedin_url: Some("https://linkedin.com/in/maria-santos-invitro".to_string()),
            funding_stage: Some("Series A".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Hepatic spheroid models for drug screening (2024)".to_string(),
                "Microphysiological systems in toxicology (2023)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Kevin Zhang".to_string(),
            title: "Scientist II, Cell Biology".to_string(),
            company: "StartupLiver Inc".to_string(),
            person_location: "Austin, TX".to_string(),
            company_hq: "Austin, TX".to_string(),
            email: Some("kevin.zhang@startupliver.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/kevin-zhang-cell".to_string()),
            funding_stage: Some("Pre-seed".to_string()),
            uses_similar_tech: false,
            open_to_nams: false,
            recent_publications: vec![],
            is_conference_attendee: false,
            is_conference_speaker_or_presenter: false,
        },
        Lead {
            name: "Dr. Rachel Green".to_string(),
            title: "Head of Safety Pharmacology".to_string(),
            company: "AstraZeneca".to_string(),
            person_location: "Cambridge, UK".to_string(),
            company_hq: "Cambridge, UK".to_string(),
            email: Some("rachel.green@astrazeneca.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/rachel-green-pharm".to_string()),
            funding_stage: Some("Public".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Alternative methods in safety pharmacology (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: true,
        },
        Lead {
            name: "Dr. Hiroshi Tanaka".to_string(),
            title: "Director of DMPK".to_string(),
            company: "Tokyo Pharma Research".to_string(),
            person_location: "Tokyo, Japan".to_string(),
            company_hq: "Tokyo, Japan".to_string(),
            email: Some("hiroshi.tanaka@tokyopharma.jp".to_string()),
            linkedin_url: Some("https://linkedin.com/in/hiroshi-tanaka-dmpk".to_string()),
            funding_stage: Some("Series B".to_string()),
            uses_similar_tech: true,
            open_to_nams: true,
            recent_publications: vec![
                "Hepatocyte models for metabolism studies (2024)".to_string(),
            ],
            is_conference_attendee: true,
            is_conference_speaker_or_presenter: false,
        },
    ]
}
