//! Markdown rendering of a projected profile.

use crate::profile::view::{CompanyView, PersonView, ProfileView};

/// Renders the whole profile page as a Markdown document. Omitted fields produce no line.
pub fn render_profile_markdown(view: &ProfileView) -> String {
    let mut md = String::new();
    render_header(&mut md, &view.person);
    render_summaries(&mut md, &view.person);
    render_personality(&mut md, &view.person);
    render_experience(&mut md, &view.person);
    render_education(&mut md, &view.person);
    render_skills(&mut md, &view.person);
    render_languages(&mut md, &view.person);
    render_certifications(&mut md, &view.person);
    render_volunteering(&mut md, &view.person);
    if let Some(company) = &view.company {
        render_company(&mut md, company);
    }
    md
}

fn render_header(md: &mut String, person: &PersonView) {
    md.push_str(&format!("# {}\n\n", person.display_name));
    if let Some(headline) = &person.headline {
        md.push_str(&format!("**{headline}**\n\n"));
    }
    match &person.location {
        Some(location) => md.push_str(&format!(
            "{location} • {} followers\n\n",
            person.follower_count_text
        )),
        None => md.push_str(&format!("{} followers\n\n", person.follower_count_text)),
    }
    if let Some(current) = &person.current_position {
        md.push_str(&format!("{} at {}\n\n", current.title, current.line));
    }
    if let Some(email) = &person.email {
        md.push_str(&format!("- **Email:** {email}\n"));
    }
    if let Some(url) = &person.linkedin_url {
        md.push_str(&format!("- **LinkedIn:** {url}\n"));
    }
    if person.email.is_some() || person.linkedin_url.is_some() {
        md.push('\n');
    }
}

fn render_summaries(md: &mut String, person: &PersonView) {
    if let Some(summary) = &person.summary {
        md.push_str(&format!("## Personal Summary\n\n{summary}\n\n"));
    }
    if let Some(analysis) = &person.profile_summary {
        md.push_str(&format!("## Profile Analysis\n\n{analysis}\n\n"));
    }
}

fn render_personality(md: &mut String, person: &PersonView) {
    if person.personality.is_empty() {
        return;
    }
    md.push_str("## Personality\n\n");
    for t in &person.personality {
        let name = t.trait_name.as_deref().unwrap_or(t.slot.key());
        md.push_str(&format!("### {name} ({}%)\n", t.score));
        if let Some(kind) = &t.kind {
            md.push_str(&format!("_{kind}_\n"));
        }
        if let Some(description) = &t.description {
            md.push_str(&format!("\n{description}\n"));
        }
        if let Some(scenario) = &t.scenario {
            md.push_str(&format!("\n> In practice: {scenario}\n"));
        }
        md.push('\n');
    }
}

fn render_experience(md: &mut String, person: &PersonView) {
    if person.positions.is_empty() {
        return;
    }
    md.push_str("## Professional Experience\n\n");
    for position in &person.positions.items {
        md.push_str(&format!("### {}\n", position.title));
        match &position.company_location {
            Some(location) => {
                md.push_str(&format!("{} · {location}\n", position.company_name))
            }
            None => md.push_str(&format!("{}\n", position.company_name)),
        }
        if let Some(range) = &position.date_range {
            md.push_str(&format!("\n_{range}_\n"));
        }
        if let Some(description) = &position.description {
            md.push_str(&format!("\n{description}\n"));
        }
        md.push('\n');
    }
}

fn render_education(md: &mut String, person: &PersonView) {
    if person.education.is_empty() {
        return;
    }
    md.push_str("## Education\n\n");
    for edu in &person.education.items {
        md.push_str(&format!("### {}\n", edu.school_name));
        let degree: Vec<&str> = [edu.degree_name.as_deref(), edu.field_of_study.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !degree.is_empty() {
            md.push_str(&format!("{}\n", degree.join(", ")));
        }
        if let Some(range) = &edu.date_range {
            md.push_str(&format!("\n_{range}_\n"));
        }
        if let Some(description) = &edu.description {
            md.push_str(&format!("\n{description}\n"));
        }
        md.push('\n');
    }
}

fn render_skills(md: &mut String, person: &PersonView) {
    if person.skills.is_empty() {
        return;
    }
    md.push_str(&format!("## Skills ({} skills)\n\n", person.skills.len()));
    md.push_str(&person.skills.join(", "));
    md.push_str("\n\n");
}

fn render_languages(md: &mut String, person: &PersonView) {
    if person.languages.is_empty() {
        return;
    }
    md.push_str("## Languages\n\n");
    for lang in &person.languages {
        md.push_str(&format!(
            "- {} **{}**: {} ({}/100)\n",
            lang.flag, lang.language, lang.proficiency, lang.score
        ));
    }
    md.push('\n');
}

fn render_certifications(md: &mut String, person: &PersonView) {
    md.push_str("## Certifications\n\n");
    if person.certifications.is_empty() {
        md.push_str("No certifications listed\n\n");
        return;
    }
    for cert in &person.certifications.items {
        let mut line = format!("- **{}**", cert.name);
        match (&cert.organization_name, &cert.organization_url) {
            (Some(name), Some(url)) => line.push_str(&format!(" · [{name}]({url})")),
            (Some(name), None) => line.push_str(&format!(" · {name}")),
            _ => {}
        }
        if let Some(issued) = &cert.issued_date {
            line.push_str(&format!(" · {issued}"));
        }
        md.push_str(&line);
        md.push('\n');
    }
    md.push('\n');
}

fn render_volunteering(md: &mut String, person: &PersonView) {
    if person.volunteering.is_empty() {
        return;
    }
    md.push_str("## Volunteering\n\n");
    for vol in &person.volunteering.items {
        let mut line = format!("- **{}**", vol.role);
        if let Some(org) = &vol.organization_name {
            line.push_str(&format!(" · {org}"));
        }
        if let Some(cause) = &vol.cause {
            line.push_str(&format!(" · {cause}"));
        }
        if let Some(period) = &vol.period {
            line.push_str(&format!(" ({period})"));
        }
        md.push_str(&line);
        md.push('\n');
    }
    md.push('\n');
}

fn render_company(md: &mut String, company: &CompanyView) {
    md.push_str(&format!("## {}\n\n", company.name));
    if let Some(tagline) = &company.tagline {
        md.push_str(&format!("_{tagline}_\n\n"));
    }
    if let Some(industry) = &company.industry {
        md.push_str(&format!("- **Industry:** {industry}\n"));
    }
    md.push_str(&format!(
        "- **Employees:** {}\n",
        company.employee_count_text
    ));
    if let Some(hq) = &company.headquarter {
        md.push_str(&format!("- **Headquarters:** {hq}\n"));
    }
    if let (Some(url), Some(host)) = (&company.website_url, &company.website_host) {
        md.push_str(&format!("- **Website:** [{host}]({url})\n"));
    }
    if !company.specialities.is_empty() {
        md.push_str(&format!(
            "- **Specialities:** {}\n",
            company.specialities.join(", ")
        ));
    }
    if let Some(funding) = &company.funding {
        md.push_str("\n### Latest Funding\n\n");
        if let Some(kind) = &funding.funding_type {
            md.push_str(&format!("**{kind}**\n"));
        }
        let details: Vec<&str> = [funding.amount_text.as_deref(), funding.announced_text.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !details.is_empty() {
            md.push_str(&format!("{}\n", details.join(" • ")));
        }
    }
    md.push('\n');
}
