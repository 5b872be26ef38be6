#![allow(dead_code)]

//! Candidate record as stored on disk: `{ "data": { "person": ..., "company": ... } }`.
//!
//! Every field below the top level is lenient. A missing key, an explicit
//! `null`, or a value of the wrong JSON type all deserialize to `None`, zero,
//! or empty, so one odd field never rejects the whole record. Numbers and
//! numeric strings are accepted interchangeably where a count, date part,
//! or amount is expected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any value that does not fit `T` becomes `T::default()`.
fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the array elements that fit `T`; anything but an array is empty.
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn value_as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_text(Value::deserialize(deserializer)?))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed: Option<f64> = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn value_as_count(value: &Value) -> Option<u64> {
    let exact = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    exact.or_else(|| {
        value_as_f64(value)
            .filter(|f| *f >= 0.0)
            .map(|f| f.round() as u64)
    })
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_count(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_count(&Value::deserialize(deserializer)?))
}

/// Whole numbers only: 3, 3.0 and "3" are accepted, 3.5 is not.
fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    let whole = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .or_else(|| {
        value_as_f64(&value)
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    });
    Ok(whole.and_then(|n| T::try_from(n).ok()))
}

fn score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_f64(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CandidateRecord {
    #[serde(default, deserialize_with = "nested")]
    pub data: Option<RecordData>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RecordData {
    #[serde(default, deserialize_with = "nested")]
    pub person: Option<Person>,
    #[serde(default, deserialize_with = "nested")]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    // Internal identifiers, carried as-is and never checked against the lookup id.
    pub id: Option<Value>,
    pub public_identifier: Option<Value>,
    pub linked_in_identifier: Option<Value>,
    pub member_identifier: Option<Value>,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub linked_in_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub background_url: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub follower_count: u64,

    #[serde(default, deserialize_with = "text")]
    pub summary: Option<String>,
    #[serde(rename = "profile_summary", default, deserialize_with = "text")]
    pub profile_summary: Option<String>,
    #[serde(default, deserialize_with = "nested")]
    pub personality: Option<Personality>,

    #[serde(default, deserialize_with = "nested")]
    pub positions: Positions,
    #[serde(default, deserialize_with = "nested")]
    pub schools: Schools,
    #[serde(default, deserialize_with = "nested")]
    pub certifications: Certifications,
    #[serde(default, deserialize_with = "nested")]
    pub volunteering_experiences: VolunteeringExperiences,
    #[serde(default, deserialize_with = "nested")]
    pub test_scores: TestScores,
    #[serde(default, deserialize_with = "nested")]
    pub recommendations: Recommendations,

    #[serde(default, deserialize_with = "list")]
    pub skills: Vec<String>,
    /// Plain language names. The projection reads `languages_with_proficiency`.
    #[serde(default, deserialize_with = "list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "list")]
    pub languages_with_proficiency: Vec<LanguageProficiency>,
    pub interests: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Personality {
    #[serde(default, deserialize_with = "nested")]
    pub mind: Option<PersonalityTrait>,
    #[serde(default, deserialize_with = "nested")]
    pub energy: Option<PersonalityTrait>,
    #[serde(default, deserialize_with = "nested")]
    pub nature: Option<PersonalityTrait>,
    #[serde(default, deserialize_with = "nested")]
    pub tactics: Option<PersonalityTrait>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PersonalityTrait {
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub kind: Option<String>,
    #[serde(rename = "trait", default, deserialize_with = "text")]
    pub trait_name: Option<String>,
    #[serde(default, deserialize_with = "score")]
    pub score: f64,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct YearMonth {
    #[serde(default, deserialize_with = "opt_int")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "opt_int")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DateRange {
    #[serde(default, deserialize_with = "nested")]
    pub start: Option<YearMonth>,
    /// `None` means the entry is ongoing.
    #[serde(default, deserialize_with = "nested")]
    pub end: Option<YearMonth>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Positions {
    #[serde(default, deserialize_with = "opt_count")]
    pub positions_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub position_history: Vec<Position>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "text")]
    pub company_location: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nested")]
    pub start_end_date: Option<DateRange>,
    #[serde(default, deserialize_with = "text")]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub linked_in_url: Option<String>,
    pub linked_in_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schools {
    #[serde(default, deserialize_with = "opt_count")]
    pub educations_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub education_history: Vec<Education>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "text")]
    pub degree_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub linked_in_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub school_logo: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub school_name: String,
    #[serde(default, deserialize_with = "nested")]
    pub start_end_date: Option<DateRange>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certifications {
    #[serde(default, deserialize_with = "opt_count")]
    pub certifications_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub certification_history: Vec<Certification>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub organization_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub issued_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolunteeringExperiences {
    #[serde(default, deserialize_with = "opt_count")]
    pub volunteering_experiences_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub volunteering_experience_history: Vec<VolunteeringExperience>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolunteeringExperience {
    #[serde(default, deserialize_with = "text")]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "text")]
    pub cause: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestScores {
    #[serde(default, deserialize_with = "opt_count")]
    pub test_scores_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub test_score_history: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default, deserialize_with = "opt_count")]
    pub recommendations_count: Option<u64>,
    #[serde(default, deserialize_with = "list")]
    pub recommendation_history: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LanguageProficiency {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub language: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub employee_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub follower_count: u64,
    #[serde(default, deserialize_with = "nested")]
    pub headquarter: Option<Headquarter>,
    #[serde(default, deserialize_with = "text")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub specialities: Vec<String>,
    #[serde(default, deserialize_with = "nested")]
    pub funding_data: Option<FundingData>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Headquarter {
    #[serde(default, deserialize_with = "text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingData {
    #[serde(default, deserialize_with = "nested")]
    pub last_funding_round: Option<FundingRound>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    #[serde(default, deserialize_with = "text")]
    pub funding_type: Option<String>,
    #[serde(default, deserialize_with = "nested")]
    pub money_raised: Option<MoneyRaised>,
    #[serde(default, deserialize_with = "text")]
    pub announced_on: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyRaised {
    /// Decimal amount; a JSON number is taken in its textual form.
    #[serde(default, deserialize_with = "text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub currency_code: Option<String>,
}
