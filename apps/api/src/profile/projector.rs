//! Record → view model projection.
//!
//! Only a missing `data` wrapper or a missing `person` is an error. Every
//! other absent or malformed field degrades to an omitted value.

use thiserror::Error;
use tracing::debug;

use crate::models::record::{
    CandidateRecord, Certification, Company, DateRange, Education, FundingRound,
    LanguageProficiency, Person, Personality, PersonalityTrait, Position, VolunteeringExperience,
};
use crate::profile::format::{
    abbreviate_money, format_count, format_date_range, format_month_year, format_month_year_long,
    initials, is_known_proficiency, join_place, language_flag, present_text, proficiency_score,
    website_host,
};
use crate::profile::view::{
    CertificationView, CollectionView, CompanyView, CurrentPositionView, EducationView,
    FundingView, LanguageView, PersonView, PositionView, ProfileView, TraitSlot, TraitView,
    VolunteeringView,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("record has no `data` object")]
    MissingData,

    #[error("record has no `data.person` object")]
    MissingPerson,
}

pub fn project(record: &CandidateRecord) -> Result<ProfileView, ProjectionError> {
    let data = record.data.as_ref().ok_or(ProjectionError::MissingData)?;
    let person = data.person.as_ref().ok_or(ProjectionError::MissingPerson)?;

    Ok(ProfileView {
        person: project_person(person),
        company: data.company.as_ref().map(project_company),
    })
}

fn project_person(person: &Person) -> PersonView {
    let positions: Vec<PositionView> = person
        .positions
        .position_history
        .iter()
        .map(project_position)
        .collect();

    PersonView {
        first_name: person.first_name.clone(),
        last_name: person.last_name.clone(),
        display_name: join_name(&person.first_name, &person.last_name),
        initials: initials(&person.first_name, &person.last_name),
        headline: present_text(person.headline.as_deref()),
        location: present_text(person.location.as_deref()),
        email: present_text(person.email.as_deref()),
        linkedin_url: present_text(person.linked_in_url.as_deref()),
        follower_count: person.follower_count,
        follower_count_text: format_count(person.follower_count),
        summary: present_text(person.summary.as_deref()),
        profile_summary: present_text(person.profile_summary.as_deref()),
        current_position: positions.first().map(current_position),
        personality: person
            .personality
            .as_ref()
            .map(project_personality)
            .unwrap_or_default(),
        positions: collection(
            "positions",
            person.positions.positions_count,
            positions,
        ),
        education: collection(
            "education",
            person.schools.educations_count,
            person
                .schools
                .education_history
                .iter()
                .map(project_education)
                .collect(),
        ),
        certifications: collection(
            "certifications",
            person.certifications.certifications_count,
            person
                .certifications
                .certification_history
                .iter()
                .map(project_certification)
                .collect(),
        ),
        volunteering: collection(
            "volunteering",
            person.volunteering_experiences.volunteering_experiences_count,
            person
                .volunteering_experiences
                .volunteering_experience_history
                .iter()
                .map(project_volunteering)
                .collect(),
        ),
        test_scores: collection(
            "test_scores",
            person.test_scores.test_scores_count,
            person.test_scores.test_score_history.clone(),
        ),
        recommendations: collection(
            "recommendations",
            person.recommendations.recommendations_count,
            person.recommendations.recommendation_history.clone(),
        ),
        skills: person.skills.clone(),
        languages: person
            .languages_with_proficiency
            .iter()
            .map(project_language)
            .collect(),
    }
}

fn join_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts are recomputed from the items; the stated count is kept for diagnostics.
fn collection<T>(name: &str, stated_count: Option<u64>, items: Vec<T>) -> CollectionView<T> {
    if let Some(stated) = stated_count {
        if stated != items.len() as u64 {
            debug!(
                "{name}: record states {stated} items but carries {}",
                items.len()
            );
        }
    }
    CollectionView::new(stated_count, items)
}

fn render_range(range: Option<&DateRange>) -> (Option<String>, bool) {
    let Some(range) = range else {
        return (None, false);
    };
    let ongoing = range.end.is_none();
    let rendered = range
        .start
        .as_ref()
        .filter(|start| format_month_year(start).is_some())
        .map(|start| format_date_range(start, range.end.as_ref()));
    (rendered, ongoing)
}

fn project_position(position: &Position) -> PositionView {
    let (date_range, ongoing) = render_range(position.start_end_date.as_ref());
    PositionView {
        title: position.title.clone(),
        company_name: position.company_name.clone(),
        company_location: present_text(position.company_location.as_deref()),
        company_logo: present_text(position.company_logo.as_deref()),
        contract_type: present_text(position.contract_type.as_deref()),
        description: present_text(position.description.as_deref()),
        date_range,
        ongoing,
    }
}

fn current_position(position: &PositionView) -> CurrentPositionView {
    let line = match &position.date_range {
        Some(range) => format!("{} · {}", position.company_name, range),
        None => position.company_name.clone(),
    };
    CurrentPositionView {
        title: position.title.clone(),
        company_name: position.company_name.clone(),
        date_range: position.date_range.clone(),
        line,
    }
}

fn project_education(education: &Education) -> EducationView {
    let (date_range, ongoing) = render_range(education.start_end_date.as_ref());
    EducationView {
        school_name: education.school_name.clone(),
        school_logo: present_text(education.school_logo.as_deref()),
        degree_name: present_text(education.degree_name.as_deref()),
        field_of_study: present_text(education.field_of_study.as_deref()),
        description: present_text(education.description.as_deref()),
        date_range,
        ongoing,
    }
}

fn project_certification(certification: &Certification) -> CertificationView {
    CertificationView {
        name: certification.name.clone(),
        organization_name: present_text(certification.organization_name.as_deref()),
        organization_url: present_text(certification.organization_url.as_deref()),
        issued_date: present_text(certification.issued_date.as_deref()),
    }
}

fn project_volunteering(experience: &VolunteeringExperience) -> VolunteeringView {
    VolunteeringView {
        role: experience.role.clone(),
        organization_name: present_text(experience.organization_name.as_deref()),
        cause: present_text(experience.cause.as_deref()),
        period: present_text(experience.period.as_deref()),
    }
}

fn project_language(language: &LanguageProficiency) -> LanguageView {
    LanguageView {
        language: language.language.clone(),
        proficiency: language.proficiency.clone(),
        score: proficiency_score(&language.proficiency),
        flag: language_flag(&language.language),
        recognized: is_known_proficiency(&language.proficiency),
    }
}

fn project_personality(personality: &Personality) -> Vec<TraitView> {
    TraitSlot::ALL
        .iter()
        .filter_map(|slot| {
            let personality_trait = match slot {
                TraitSlot::Mind => personality.mind.as_ref(),
                TraitSlot::Energy => personality.energy.as_ref(),
                TraitSlot::Nature => personality.nature.as_ref(),
                TraitSlot::Tactics => personality.tactics.as_ref(),
            }?;
            Some(project_trait(*slot, personality_trait))
        })
        .collect()
}

fn project_trait(slot: TraitSlot, personality_trait: &PersonalityTrait) -> TraitView {
    let score = if personality_trait.score.is_finite() {
        personality_trait.score.round().clamp(0.0, 100.0) as u8
    } else {
        0
    };
    TraitView {
        slot,
        kind: present_text(personality_trait.kind.as_deref()),
        trait_name: present_text(personality_trait.trait_name.as_deref()),
        score,
        description: present_text(personality_trait.description.as_deref()),
        scenario: present_text(personality_trait.scenario.as_deref()),
    }
}

fn project_company(company: &Company) -> CompanyView {
    let headquarter = company.headquarter.as_ref().and_then(|hq| {
        join_place(&[hq.city.as_deref(), hq.country.as_deref()])
    });
    let website_url = present_text(company.website_url.as_deref());
    CompanyView {
        name: company.name.clone(),
        logo: present_text(company.logo.as_deref()),
        tagline: present_text(company.tagline.as_deref()),
        industry: present_text(company.industry.as_deref()),
        employee_count: company.employee_count,
        employee_count_text: format_count(company.employee_count),
        follower_count: company.follower_count,
        follower_count_text: format_count(company.follower_count),
        headquarter,
        website_host: website_url.as_deref().and_then(website_host),
        website_url,
        specialities: company.specialities.clone(),
        funding: company
            .funding_data
            .as_ref()
            .and_then(|funding| funding.last_funding_round.as_ref())
            .map(project_funding),
    }
}

fn project_funding(round: &FundingRound) -> FundingView {
    let money = round.money_raised.as_ref();
    FundingView {
        funding_type: present_text(round.funding_type.as_deref()),
        amount_text: money
            .and_then(|m| m.amount.as_deref())
            .and_then(abbreviate_money),
        currency_code: money.and_then(|m| present_text(m.currency_code.as_deref())),
        announced_text: round
            .announced_on
            .as_deref()
            .and_then(format_month_year_long),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> CandidateRecord {
        serde_json::from_value(value).unwrap()
    }

    fn full_record() -> CandidateRecord {
        record(json!({
            "data": {
                "person": {
                    "id": "ACoAA123",
                    "publicIdentifier": "ada-lovelace",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "headline": "Principal Engineer",
                    "location": "London, United Kingdom",
                    "email": "ada@example.com",
                    "linkedInUrl": "https://www.linkedin.com/in/ada-lovelace",
                    "followerCount": 12500,
                    "summary": "Builds analytical engines.",
                    "profile_summary": "Strong systems background.",
                    "personality": {
                        "tactics": { "type": "Tactics", "trait": "Judging", "score": 61, "description": "Plans ahead", "scenario": "Sets milestones" },
                        "mind": { "type": "Mind", "trait": "Introverted", "score": 72.4, "description": "Recharges alone", "scenario": "Prefers written specs" },
                        "energy": { "type": "Energy", "trait": "Intuitive", "score": 140 },
                        "nature": { "type": "Nature", "trait": "Thinking", "score": -3 }
                    },
                    "positions": {
                        "positionsCount": 3,
                        "positionHistory": [
                            {
                                "title": "Principal Engineer",
                                "companyName": "Engines Ltd",
                                "companyLocation": "London",
                                "description": "Led the compiler team.",
                                "startEndDate": { "start": { "month": 3, "year": 2020 }, "end": null }
                            },
                            {
                                "title": "Engineer",
                                "companyName": "Difference Co",
                                "startEndDate": { "start": { "month": 1, "year": 2015 }, "end": { "month": 2, "year": 2020 } }
                            }
                        ]
                    },
                    "schools": {
                        "educationsCount": 1,
                        "educationHistory": [
                            {
                                "degreeName": "BSc",
                                "fieldOfStudy": null,
                                "schoolName": "University of London",
                                "schoolLogo": null,
                                "startEndDate": { "start": { "month": 9, "year": 2010 }, "end": { "month": 6, "year": 2013 } }
                            }
                        ]
                    },
                    "certifications": { "certificationsCount": 0, "certificationHistory": [] },
                    "volunteeringExperiences": {
                        "volunteeringExperiencesCount": 1,
                        "volunteeringExperienceHistory": [
                            { "organizationName": "Code Club", "role": "Mentor", "period": "2019 - 2021" }
                        ]
                    },
                    "skills": ["Rust", "Compilers", "Mathematics"],
                    "languagesWithProficiency": [
                        { "language": "English", "proficiency": "Native or bilingual proficiency" },
                        { "language": "Klingon", "proficiency": "Fluent-ish" }
                    ]
                },
                "company": {
                    "name": "Engines Ltd",
                    "tagline": "Computing, mechanically",
                    "industry": "Software Development",
                    "employeeCount": 1800,
                    "followerCount": 250000,
                    "headquarter": { "city": "London", "country": "GB" },
                    "websiteUrl": "https://www.engines.example/",
                    "specialities": ["Compilers", "Hardware"],
                    "fundingData": {
                        "lastFundingRound": {
                            "fundingType": "Series C",
                            "moneyRaised": { "amount": "2500000000", "currencyCode": "USD" },
                            "announcedOn": "2023-05-10"
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_names_pass_through_unchanged() {
        let view = project(&full_record()).unwrap();
        assert_eq!(view.person.first_name, "Ada");
        assert_eq!(view.person.last_name, "Lovelace");
        assert_eq!(view.person.display_name, "Ada Lovelace");
        assert_eq!(view.person.initials, "AL");
        assert_eq!(view.person.follower_count_text, "12,500");
    }

    #[test]
    fn test_missing_data_is_projection_error() {
        let err = project(&record(json!({}))).unwrap_err();
        assert_eq!(err, ProjectionError::MissingData);
    }

    #[test]
    fn test_missing_person_is_projection_error() {
        let err = project(&record(json!({ "data": { "company": { "name": "X" } } }))).unwrap_err();
        assert_eq!(err, ProjectionError::MissingPerson);
    }

    #[test]
    fn test_missing_company_is_tolerated() {
        let view = project(&record(json!({ "data": { "person": { "firstName": "Ada" } } }))).unwrap();
        assert!(view.company.is_none());
        assert!(view.person.positions.items.is_empty());
        assert!(view.person.current_position.is_none());
        assert!(view.person.personality.is_empty());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let rec = full_record();
        assert_eq!(project(&rec).unwrap(), project(&rec).unwrap());
    }

    #[test]
    fn test_empty_certifications_stay_a_list() {
        let view = project(&full_record()).unwrap();
        assert_eq!(view.person.certifications.count, 0);
        assert!(view.person.certifications.items.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["person"]["certifications"]["items"], json!([]));
    }

    #[test]
    fn test_counts_are_recomputed() {
        let view = project(&full_record()).unwrap();
        assert_eq!(view.person.positions.count, 2);
        assert_eq!(view.person.positions.stated_count, Some(3));
    }

    #[test]
    fn test_positions_and_current_role() {
        let view = project(&full_record()).unwrap();
        let first = &view.person.positions.items[0];
        assert_eq!(first.date_range.as_deref(), Some("Mar 2020 - Present"));
        assert!(first.ongoing);
        let second = &view.person.positions.items[1];
        assert_eq!(second.date_range.as_deref(), Some("Jan 2015 - Feb 2020"));
        assert!(second.company_location.is_none());
        assert!(second.description.is_none());

        let current = view.person.current_position.unwrap();
        assert_eq!(current.line, "Engines Ltd · Mar 2020 - Present");
    }

    #[test]
    fn test_education_omits_missing_field_of_study() {
        let view = project(&full_record()).unwrap();
        let edu = &view.person.education.items[0];
        assert_eq!(edu.degree_name.as_deref(), Some("BSc"));
        assert!(edu.field_of_study.is_none());
        assert!(edu.school_logo.is_none());
        assert_eq!(edu.date_range.as_deref(), Some("Sep 2010 - Jun 2013"));

        let json = serde_json::to_value(edu).unwrap();
        assert!(json.get("field_of_study").is_none());
    }

    #[test]
    fn test_personality_fixed_order_and_clamped() {
        let view = project(&full_record()).unwrap();
        let slots: Vec<TraitSlot> = view.person.personality.iter().map(|t| t.slot).collect();
        assert_eq!(slots, TraitSlot::ALL.to_vec());
        let scores: Vec<u8> = view.person.personality.iter().map(|t| t.score).collect();
        assert_eq!(scores, vec![72, 100, 0, 61]);
    }

    #[test]
    fn test_languages_scored_and_flagged() {
        let view = project(&full_record()).unwrap();
        let english = &view.person.languages[0];
        assert_eq!(english.score, 100);
        assert_eq!(english.flag, "🇬🇧");
        assert!(english.recognized);

        let klingon = &view.person.languages[1];
        assert_eq!(klingon.score, 0);
        assert_eq!(klingon.flag, "🌐");
        assert!(!klingon.recognized);
    }

    #[test]
    fn test_volunteering_without_cause() {
        let view = project(&full_record()).unwrap();
        let vol = &view.person.volunteering.items[0];
        assert_eq!(vol.role, "Mentor");
        assert!(vol.cause.is_none());
    }

    #[test]
    fn test_company_projection() {
        let company = project(&full_record()).unwrap().company.unwrap();
        assert_eq!(company.headquarter.as_deref(), Some("London, GB"));
        assert_eq!(company.employee_count_text, "1,800");
        assert_eq!(company.follower_count_text, "250,000");
        assert_eq!(company.website_host.as_deref(), Some("www.engines.example"));

        let funding = company.funding.unwrap();
        assert_eq!(funding.funding_type.as_deref(), Some("Series C"));
        assert_eq!(funding.amount_text.as_deref(), Some("$2.5B"));
        assert_eq!(funding.currency_code.as_deref(), Some("USD"));
        assert_eq!(funding.announced_text.as_deref(), Some("May 2023"));
    }

    #[test]
    fn test_company_without_funding_or_logo() {
        let view = project(&record(json!({
            "data": {
                "person": { "firstName": "Ada", "lastName": "Lovelace" },
                "company": { "name": "Bootstrapped", "websiteUrl": "not a url", "fundingData": {} }
            }
        })))
        .unwrap();
        let company = view.company.unwrap();
        assert!(company.funding.is_none());
        assert!(company.logo.is_none());
        assert!(company.website_host.is_none());
        assert!(company.headquarter.is_none());
    }

    #[test]
    fn test_malformed_funding_amount_degrades() {
        let view = project(&record(json!({
            "data": {
                "person": { "firstName": "Ada" },
                "company": {
                    "name": "Acme",
                    "fundingData": { "lastFundingRound": { "fundingType": "Seed", "moneyRaised": { "amount": "lots" } } }
                }
            }
        })))
        .unwrap();
        let funding = view.company.unwrap().funding.unwrap();
        assert_eq!(funding.funding_type.as_deref(), Some("Seed"));
        assert!(funding.amount_text.is_none());
        assert!(funding.announced_text.is_none());
    }
}
