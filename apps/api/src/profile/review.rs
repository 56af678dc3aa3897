//! Profile validation and improvement suggestions.

use serde::{Deserialize, Serialize};

use crate::models::ProfileRecord;
use crate::post::vocabulary::core_tech_terms;
use crate::profile::schema::{section_schema, ProfileSection};
use crate::profile::{GeneratedProfile, ProfileData};

const HEADLINE_MIN_CHARS: usize = 50;
const ABOUT_MIN_CHARS: usize = 200;
const SKILLS_MIN_LINES: usize = 10;

pub const HEADLINE_TOO_SHORT: &str =
    "Your headline could be more descriptive. Consider adding your specialization or key technology.";
pub const HEADLINE_NO_TECH: &str =
    "Including a key technology could make your headline more discoverable.";
pub const HEADLINE_TOO_GENERIC: &str =
    "Try to make your headline more specific to your technical focus.";
pub const ABOUT_TOO_SHORT: &str =
    "Your about section could benefit from more detail about your technical journey.";
pub const ABOUT_NO_ACHIEVEMENTS: &str =
    "Consider adding specific technical achievements or projects.";
pub const ABOUT_NO_GOALS: &str =
    "Including your career goals could make your profile more engaging.";
pub const EXPERIENCE_NO_METRICS: &str =
    "Try adding quantifiable achievements or impact metrics.";
pub const EXPERIENCE_NO_TECH_STACK: &str =
    "Including the technical stack for each role would strengthen your profile.";
pub const EXPERIENCE_VAGUE: &str = "Be more specific about your technical contributions.";

const GENERIC_HEADLINE_WORDS: &[&str] = &["student", "developer", "engineer", "programmer"];
const GOAL_WORDS: &[&str] = &["goal", "seeking", "looking for", "aspire"];
const METRIC_MARKERS: &[&str] = &["%", "increased", "improved", "reduced"];

/// Essential fields still missing from one profile section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGaps {
    pub section: ProfileSection,
    pub missing: Vec<String>,
}

/// Missing essential fields per section. Sections with nothing missing are omitted.
/// For experience, gaps are the union across entries (or every field when there are none).
pub fn validate_profile_data(profile: &ProfileData) -> Vec<SectionGaps> {
    let empty = ProfileRecord::new();
    let mut gaps = Vec::new();

    for section in ProfileSection::ALL {
        let Some(schema) = section_schema(section) else {
            continue;
        };

        let records: Vec<&ProfileRecord> = match section {
            ProfileSection::Headline => vec![&profile.headline],
            ProfileSection::About => vec![&profile.about],
            ProfileSection::Experience if profile.experiences.is_empty() => vec![&empty],
            ProfileSection::Experience => profile.experiences.iter().collect(),
            ProfileSection::Education => vec![profile.education.as_ref().unwrap_or(&empty)],
            ProfileSection::Skills => continue,
        };

        let missing: Vec<String> = schema
            .essential
            .iter()
            .filter(|f| records.iter().any(|r| !r.is_filled(f)))
            .map(|f| f.to_string())
            .collect();

        if !missing.is_empty() {
            gaps.push(SectionGaps { section, missing });
        }
    }

    gaps
}

fn mentions_core_tech(content: &str) -> bool {
    core_tech_terms().any(|t| content.contains(t))
}

/// Canned suggestions for a single rendered section.
pub fn generate_improvement_suggestions(section: ProfileSection, content: &str) -> Vec<&'static str> {
    let lower = content.to_lowercase();
    let mut suggestions = Vec::new();

    match section {
        ProfileSection::Headline => {
            if content.chars().count() < HEADLINE_MIN_CHARS {
                suggestions.push(HEADLINE_TOO_SHORT);
            }
            if !mentions_core_tech(content) {
                suggestions.push(HEADLINE_NO_TECH);
            }
            let words = lower.split_whitespace().count();
            if words <= 3 && GENERIC_HEADLINE_WORDS.iter().any(|w| lower.contains(w)) {
                suggestions.push(HEADLINE_TOO_GENERIC);
            }
        }
        ProfileSection::About => {
            if content.chars().count() < ABOUT_MIN_CHARS {
                suggestions.push(ABOUT_TOO_SHORT);
            }
            if !lower.contains("achieve") {
                suggestions.push(ABOUT_NO_ACHIEVEMENTS);
            }
            if !GOAL_WORDS.iter().any(|w| lower.contains(w)) {
                suggestions.push(ABOUT_NO_GOALS);
            }
        }
        ProfileSection::Experience => {
            if !METRIC_MARKERS.iter().any(|m| lower.contains(m)) {
                suggestions.push(EXPERIENCE_NO_METRICS);
            }
            if !mentions_core_tech(content) {
                suggestions.push(EXPERIENCE_NO_TECH_STACK);
            }
            if !lower.contains("responsibilities") {
                suggestions.push(EXPERIENCE_VAGUE);
            }
        }
        ProfileSection::Education | ProfileSection::Skills => {}
    }

    suggestions
}

/// Whole-profile suggestions computed from the rendered sections.
pub fn suggest_profile_improvements(profile: &GeneratedProfile) -> Vec<String> {
    let mut suggestions = Vec::new();

    let headline = profile.headline.as_deref().unwrap_or_default();
    if headline.chars().count() < HEADLINE_MIN_CHARS {
        suggestions
            .push("Consider adding more detail to your headline to improve visibility".to_string());
    }

    let about_lower = profile.about.to_lowercase();
    if profile.about.chars().count() < ABOUT_MIN_CHARS {
        suggestions.push(
            "Your about section could benefit from more content - aim for 200-2000 characters"
                .to_string(),
        );
    }
    if !about_lower.contains("achievements") {
        suggestions.push("Consider adding specific achievements to your about section".to_string());
    }

    if !profile.experience.is_empty() {
        if !profile
            .experience
            .iter()
            .any(|e| e.to_lowercase().contains("achievement"))
        {
            suggestions.push("Add quantifiable achievements to your experience entries".to_string());
        }
        if !profile
            .experience
            .iter()
            .any(|e| e.to_lowercase().contains("tech stack"))
        {
            suggestions
                .push("Include technical stack details in your experience descriptions".to_string());
        }
    }

    let skills_lines = profile
        .skills
        .as_deref()
        .map(|s| s.lines().count())
        .unwrap_or(0);
    if skills_lines < SKILLS_MIN_LINES {
        suggestions.push("Add more relevant skills to increase profile visibility".to_string());
    }

    suggestions
}
