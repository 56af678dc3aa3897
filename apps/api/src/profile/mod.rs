// Profile builder: per-section records, rendering, validation and suggestions.

pub mod render;
pub mod review;
pub mod schema;

use serde::{Deserialize, Serialize};

use crate::models::ProfileRecord;

pub use render::{
    endorsement_priorities, format_about_section, format_education_section,
    format_experience_section, generate_headline, headline_options, organize_skills,
};
pub use review::{
    generate_improvement_suggestions, suggest_profile_improvements, validate_profile_data,
    SectionGaps,
};
pub use schema::{section_schema, ProfileSection};

/// Everything collected for a profile. Each section has its own record so
/// sections can be filled and rendered independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub headline: ProfileRecord,
    pub about: ProfileRecord,
    pub experiences: Vec<ProfileRecord>,
    pub education: Option<ProfileRecord>,
    /// Category (technical, soft, domain) → skill list.
    pub skills: Option<ProfileRecord>,
    /// Project descriptions; only used for skill assessment.
    pub projects: Vec<ProfileRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProfile {
    pub headline: Option<String>,
    pub about: String,
    pub experience: Vec<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    /// Top skills to ask endorsements for.
    #[serde(default)]
    pub endorse_first: Vec<String>,
}

pub fn generate_profile_sections(profile: &ProfileData) -> GeneratedProfile {
    GeneratedProfile {
        headline: generate_headline(&profile.headline),
        about: format_about_section(&profile.about),
        experience: format_experience_section(&profile.experiences),
        education: profile.education.as_ref().and_then(format_education_section),
        skills: profile
            .skills
            .as_ref()
            .map(organize_skills)
            .filter(|s| !s.is_empty()),
        endorse_first: profile
            .skills
            .as_ref()
            .map(endorsement_priorities)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sections_from_json_profile() {
        let json = r#"{
            "headline": {"role": "CS Student", "specialization": "Cloud", "key_technology": "AWS"},
            "about": {"institution": "Georgia Tech", "specialization": "cloud infrastructure"},
            "skills": {"technical": ["Rust", "Terraform"]}
        }"#;
        let profile: ProfileData = serde_json::from_str(json).unwrap();
        let generated = generate_profile_sections(&profile);

        assert_eq!(
            generated.headline.as_deref(),
            Some("Student CS Student building with AWS | Cloud Enthusiast")
        );
        assert!(generated
            .about
            .starts_with("Computer Science student at Georgia Tech"));
        assert!(generated.experience.is_empty());
        assert_eq!(generated.education, None);
        assert_eq!(
            generated.skills.as_deref(),
            Some("Technical Skills:\n• Rust\n• Terraform")
        );
        assert_eq!(generated.endorse_first, vec!["Rust", "Terraform"]);
    }

    #[test]
    fn test_empty_skills_record_renders_nothing() {
        let profile = ProfileData {
            skills: Some(ProfileRecord::new()),
            ..ProfileData::default()
        };
        assert_eq!(generate_profile_sections(&profile).skills, None);
    }
}
