use std::fmt;

use serde::{Deserialize, Serialize};

use crate::post::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Headline,
    About,
    Experience,
    Education,
    Skills,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 5] = [
        ProfileSection::Headline,
        ProfileSection::About,
        ProfileSection::Experience,
        ProfileSection::Education,
        ProfileSection::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSection::Headline => "headline",
            ProfileSection::About => "about",
            ProfileSection::Experience => "experience",
            ProfileSection::Education => "education",
            ProfileSection::Skills => "skills",
        }
    }
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field schema of a profile section. Skills are grouped by category instead
/// and have no field schema.
pub fn section_schema(section: ProfileSection) -> Option<Schema> {
    match section {
        ProfileSection::Headline => Some(Schema {
            essential: &["role", "specialization", "key_technology"],
            optional: &["industry", "achievement"],
        }),
        ProfileSection::About => Some(Schema {
            essential: &["professional_summary", "key_skills", "interests"],
            optional: &["achievements", "career_goals", "values"],
        }),
        ProfileSection::Experience => Some(Schema {
            essential: &["company", "role", "duration", "responsibilities"],
            optional: &["achievements", "tech_stack", "impact_metrics"],
        }),
        ProfileSection::Education => Some(Schema {
            essential: &["institution", "degree", "field", "graduation_date"],
            optional: &["gpa", "relevant_coursework", "honors"],
        }),
        ProfileSection::Skills => None,
    }
}

pub const SKILL_CATEGORIES: &[&str] = &["technical", "soft", "domain"];
pub const MAX_SKILLS_PER_CATEGORY: usize = 15;
/// Number of top skills worth pinning for endorsements.
pub const ENDORSEMENT_PRIORITY: usize = 5;
