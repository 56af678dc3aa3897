//! Profile section rendering: headline, about, experience, education, skills.

use crate::models::ProfileRecord;
use crate::profile::schema::{
    section_schema, ProfileSection, ENDORSEMENT_PRIORITY, MAX_SKILLS_PER_CATEGORY,
    SKILL_CATEGORIES,
};

pub const HEADLINE_TEMPLATES: &[&str] = &[
    "{role} specializing in {specialization} | {key_technology} Developer",
    "{role} with focus on {specialization} | {industry} Solutions",
    "{role} passionate about {specialization} | {achievement}",
    "Student {role} building with {key_technology} | {specialization} Enthusiast",
];

const STUDENT_HEADLINE: usize = 3;
const DEFAULT_INDUSTRY: &str = "Technology";

const OPENING_STUDENT: &str =
    "Computer Science student at {institution} passionate about {specialization}";
const OPENING_RECENT_GRAD: &str =
    "Recent Computer Science graduate from {institution} specializing in {specialization}";
const OPENING_INTERN: &str = "Computer Science intern with experience in {specialization}";

fn has_essentials(record: &ProfileRecord, section: ProfileSection) -> bool {
    section_schema(section)
        .map(|s| s.essential.iter().all(|f| record.is_filled(f)))
        .unwrap_or(true)
}

/// Replaces `{field}` placeholders with record values. Returns `None` if a
/// placeholder has no value; `industry` falls back to a generic default.
fn fill_template(template: &str, record: &ProfileRecord) -> Option<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let end = start + rest[start..].find('}')?;
        out.push_str(&rest[..start]);
        let field = &rest[start + 1..end];
        let value = record.text(field).or_else(|| {
            (field == "industry").then(|| DEFAULT_INDUSTRY.to_string())
        })?;
        out.push_str(&value);
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Some(out)
}

/// Headline for the profile, or `None` until role, specialization and key
/// technology are known. Student roles get the student-flavoured template.
pub fn generate_headline(record: &ProfileRecord) -> Option<String> {
    if !has_essentials(record, ProfileSection::Headline) {
        return None;
    }

    let is_student = record
        .text("role")
        .is_some_and(|r| r.to_lowercase().contains("student"));
    let template = if is_student {
        HEADLINE_TEMPLATES[STUDENT_HEADLINE]
    } else {
        HEADLINE_TEMPLATES[0]
    };

    fill_template(template, record)
}

/// Every headline template that can be filled from the record, for offering alternatives.
pub fn headline_options(record: &ProfileRecord) -> Vec<String> {
    if !has_essentials(record, ProfileSection::Headline) {
        return Vec::new();
    }
    HEADLINE_TEMPLATES
        .iter()
        .filter_map(|t| fill_template(t, record))
        .collect()
}

fn block(record: &ProfileRecord, field: &str) -> Option<String> {
    let items = record.list(field);
    match items.len() {
        0 => None,
        1 => Some(items[0].clone()),
        _ => Some(bullets(&items)),
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("• {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_about_section(record: &ProfileRecord) -> String {
    let lower = |field: &str| record.text(field).unwrap_or_default().to_lowercase();

    let status = lower("status");
    let opening = if status.contains("recent_grad") || status.contains("recent grad") {
        OPENING_RECENT_GRAD
    } else if lower("role").contains("intern") {
        OPENING_INTERN
    } else {
        OPENING_STUDENT
    };
    let opening = opening
        .replace("{institution}", &record.text("institution").unwrap_or_default())
        .replace("{specialization}", &record.text("specialization").unwrap_or_default());

    let mut sections = vec![opening];

    if let Some(summary) = record.text("professional_summary") {
        sections.push(summary);
    }

    let skills = record.list("key_skills");
    if !skills.is_empty() {
        sections.push(format!("💡 Key Skills: {}", skills.join(", ")));
    }

    let interests = record.list("interests");
    if !interests.is_empty() {
        sections.push(format!("🎯 Interests: {}", interests.join(", ")));
    }

    let body = [
        ("technical_focus", "🔧 Technical Focus:"),
        ("achievements", "🏆 Achievements:"),
        ("current_projects", "🚀 Current Projects:"),
        ("learning_goals", "📚 Learning Goals:"),
        ("career_goals", "🧭 Career Goals:"),
    ];
    for (field, header) in body {
        if let Some(content) = block(record, field) {
            sections.push(format!("{header}\n{content}"));
        }
    }

    if let Some(seeking) = record.text("seeking_opportunities") {
        sections.push(format!("🔍 {seeking}"));
    }

    sections.join("\n\n")
}

/// One rendered entry per experience; entries missing an essential field are skipped.
pub fn format_experience_section(experiences: &[ProfileRecord]) -> Vec<String> {
    experiences
        .iter()
        .filter(|exp| has_essentials(exp, ProfileSection::Experience))
        .map(|exp| {
            let mut entry = vec![
                format!(
                    "🏢 {} at {}",
                    exp.text("role").unwrap_or_default(),
                    exp.text("company").unwrap_or_default()
                ),
                format!("📅 {}", exp.text("duration").unwrap_or_default()),
                "\nKey Responsibilities:".to_string(),
                bullets(&exp.list("responsibilities")),
            ];

            let achievements = exp.list("achievements");
            if !achievements.is_empty() {
                entry.push("\nKey Achievements:".to_string());
                entry.push(bullets(&achievements));
            }

            let stack = exp.list("tech_stack");
            if !stack.is_empty() {
                entry.push(format!("\n🛠 Tech Stack: {}", stack.join(", ")));
            }

            entry.join("\n")
        })
        .collect()
}

pub fn format_education_section(record: &ProfileRecord) -> Option<String> {
    if !has_essentials(record, ProfileSection::Education) {
        return None;
    }
    let field = |name: &str| record.text(name).unwrap_or_default();

    let mut lines = vec![
        format!("🎓 {} in {}", field("degree"), field("field")),
        format!("📍 {}", field("institution")),
        format!("📅 Graduating: {}", field("graduation_date")),
    ];

    if let Some(gpa) = record.text("gpa") {
        lines.push(format!("📊 GPA: {gpa}"));
    }

    let coursework = record.list("relevant_coursework");
    if !coursework.is_empty() {
        lines.push("\nRelevant Coursework:".to_string());
        lines.push(bullets(&coursework));
    }

    let honors = record.list("honors");
    if !honors.is_empty() {
        lines.push("\nHonors & Awards:".to_string());
        lines.push(bullets(&honors));
    }

    Some(lines.join("\n"))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Skills grouped under technical, soft and domain headers, capped per category.
pub fn organize_skills(skills: &ProfileRecord) -> String {
    let mut lines = Vec::new();

    for category in SKILL_CATEGORIES {
        let items: Vec<String> = skills
            .list(category)
            .into_iter()
            .take(MAX_SKILLS_PER_CATEGORY)
            .collect();
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{} Skills:", title_case(category)));
        lines.push(bullets(&items));
    }

    lines.join("\n")
}

/// Skills to pin at the top of the profile for endorsements, taken in
/// category order (technical first).
pub fn endorsement_priorities(skills: &ProfileRecord) -> Vec<String> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|category| skills.list(category))
        .take(ENDORSEMENT_PRIORITY)
        .collect()
}
