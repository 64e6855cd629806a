/// One person/company pairing considered as a sales target.
///
/// Every field is an immutable scoring input. Optional contact and funding
/// fields may be absent; scorers treat "missing" as the weakest signal.
#[derive(Debug, Clone)]
pub struct Lead {
    pub name: String,
    pub title: String,
    pub company: String,
    pub person_location: String, // where the person sits (may be remote)
    pub company_hq: String,      // where the company is headquartered
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub funding_stage: Option<String>, // e.g. "Seed", "Series A", "Public", "Grant"
    pub uses_similar_tech: bool,       // already working with comparable in-vitro models
    pub open_to_nams: bool,            // signals from site / pubs / job posts
    pub recent_publications: Vec<String>, // titles of recent papers (last ~2 years)
    pub is_conference_attendee: bool,
    pub is_conference_speaker_or_presenter: bool,
}

impl Lead {
    /// Publication titles joined for display and text filtering.
    /// Empty string when the lead has no publications.
    pub fn joined_publications(&self) -> String {
        self.recent_publications.join("; ")
    }

    /// Return a short reference in the format "Name @ Company"
    pub fn contact_ref(&self) -> String {
        format!("{} @ {}", self.name, self.company)
    }
}
