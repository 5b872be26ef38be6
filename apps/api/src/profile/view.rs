use serde::Serialize;
use serde_json::Value;

/// Presentation-ready projection of one candidate record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileView {
    pub person: PersonView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonView {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub follower_count: u64,
    pub follower_count_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<CurrentPositionView>,
    pub personality: Vec<TraitView>,
    pub positions: CollectionView<PositionView>,
    pub education: CollectionView<EducationView>,
    pub certifications: CollectionView<CertificationView>,
    pub volunteering: CollectionView<VolunteeringView>,
    pub test_scores: CollectionView<Value>,
    pub recommendations: CollectionView<Value>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageView>,
}

/// A history collection. `count` is always `items.len()`; `stated_count` is
/// whatever the record claimed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionView<T> {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stated_count: Option<u64>,
    pub items: Vec<T>,
}

impl<T> CollectionView<T> {
    pub fn new(stated_count: Option<u64>, items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            stated_count,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TraitSlot {
    Mind,
    Energy,
    Nature,
    Tactics,
}

impl TraitSlot {
    /// Display order. The set is closed.
    pub const ALL: [TraitSlot; 4] = [
        TraitSlot::Mind,
        TraitSlot::Energy,
        TraitSlot::Nature,
        TraitSlot::Tactics,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TraitSlot::Mind => "mind",
            TraitSlot::Energy => "energy",
            TraitSlot::Nature => "nature",
            TraitSlot::Tactics => "tactics",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraitView {
    pub slot: TraitSlot,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "trait", skip_serializing_if = "Option::is_none")]
    pub trait_name: Option<String>,
    pub score: u8, // 0 – 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentPositionView {
    pub title: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    /// "{company} · {date range}"
    pub line: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionView {
    pub title: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub ongoing: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EducationView {
    pub school_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub ongoing: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CertificationView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VolunteeringView {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageView {
    pub language: String,
    pub proficiency: String,
    pub score: u8,
    pub flag: &'static str,
    /// False when the proficiency label is outside the known set (score is then 0).
    pub recognized: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompanyView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub employee_count: u64,
    pub employee_count_text: String,
    pub follower_count: u64,
    pub follower_count_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_host: Option<String>,
    pub specialities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FundingView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announced_text: Option<String>,
}
