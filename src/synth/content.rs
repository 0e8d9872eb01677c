use crate::models::listing::JobHighlights;
use crate::synth::catalog::{Catalog, TitleGroup};

/// Trailing role words dropped from the query before templating, so
/// "python developer" becomes the subject "Python".
const ROLE_WORDS: &[&str] = &[
    "Developer",
    "Engineer",
    "Programmer",
    "Designer",
    "Analyst",
    "Scientist",
    "Manager",
    "Specialist",
    "Lead",
];

/// Markers that earn the seniority salary uplift.
const SENIORITY_MARKERS: &[&str] = &["Senior", "Lead", "Manager"];

/// "python DEVELOPER" -> "Python Developer"
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn subject(title_cased: &str) -> &str {
    match title_cased.rsplit_once(' ') {
        Some((head, last)) if ROLE_WORDS.contains(&last) => head,
        _ => title_cased,
    }
}

/// The ordered title set for a query text and (possibly inferred) category.
pub fn titles(catalog: &Catalog, text: &str, category: Option<&str>) -> Vec<String> {
    let cased = title_case(text);
    let subject = subject(&cased);
    catalog
        .title_templates(category)
        .iter()
        .map(|template| template.replace("{X}", subject))
        .collect()
}

pub fn is_senior(title: &str) -> bool {
    SENIORITY_MARKERS.iter().any(|m| title.contains(m))
}

pub fn description(catalog: &Catalog, title: &str, company: &str, location: &str) -> String {
    let group = TitleGroup::of(title);
    let tools = catalog.tools(group);
    let (a, b, c) = (tools[0], tools[1], tools[2]);

    match group {
        TitleGroup::Engineering => format!(
            "{company} is looking for a {title} to build and maintain scalable software. \
             You will work with {a}, {b} and {c} in a collaborative, product-focused team in {location}."
        ),
        TitleGroup::Data => format!(
            "Join {company} as a {title} and turn complex datasets into actionable insights. \
             Our stack includes {a}, {b} and {c}, and your work will shape decisions across {location}."
        ),
        TitleGroup::Design => format!(
            "{company} is hiring a {title} to craft intuitive, accessible user experiences. \
             You will use {a}, {b} and {c} while partnering closely with product and engineering in {location}."
        ),
        TitleGroup::Other => format!(
            "{company} is seeking a motivated {title} to join its growing team in {location}. \
             Familiarity with {a}, {b} and {c} is a plus."
        ),
    }
}

/// Highlights for the listing at generation index `i`.
pub fn highlights(catalog: &Catalog, title: &str, i: i64) -> JobHighlights {
    let tools = catalog.tools(TitleGroup::of(title));

    JobHighlights {
        qualifications: vec![
            format!("{}+ years of professional experience with {}", 3 + i, tools[0]),
            format!("Working knowledge of {} and {}", tools[1], tools[2]),
            "Strong communication and collaboration skills".to_string(),
            "Bachelor's degree or equivalent practical experience".to_string(),
        ],
        responsibilities: vec![
            format!("Deliver {title} work from planning through release"),
            "Collaborate with cross-functional teams on roadmap priorities".to_string(),
            "Mentor teammates and share knowledge across the organization".to_string(),
        ],
        benefits: vec![
            "Competitive salary and annual bonus".to_string(),
            "Health, dental and vision insurance".to_string(),
            "Flexible working hours and remote-friendly culture".to_string(),
            "Learning and development budget".to_string(),
        ],
    }
}
