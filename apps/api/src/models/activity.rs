use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of student activity a post is written about.
///
/// Declaration order is the detection priority order used by
/// `post::matcher::detect_activity_type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Hackathon,
    #[default]
    PersonalProject,
    Internship,
    Conference,
    Workshop,
    CourseCompletion,
    Competition,
}

impl ActivityType {
    pub const ALL: [ActivityType; 7] = [
        ActivityType::Hackathon,
        ActivityType::PersonalProject,
        ActivityType::Internship,
        ActivityType::Conference,
        ActivityType::Workshop,
        ActivityType::CourseCompletion,
        ActivityType::Competition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Hackathon => "hackathon",
            ActivityType::PersonalProject => "personal_project",
            ActivityType::Internship => "internship",
            ActivityType::Conference => "conference",
            ActivityType::Workshop => "workshop",
            ActivityType::CourseCompletion => "course_completion",
            ActivityType::Competition => "competition",
        }
    }

    /// Human wording used inside follow-up questions ("How long was the hackathon?").
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Hackathon => "hackathon",
            ActivityType::PersonalProject => "project",
            ActivityType::Internship => "internship",
            ActivityType::Conference => "conference",
            ActivityType::Workshop => "workshop",
            ActivityType::CourseCompletion => "course",
            ActivityType::Competition => "competition",
        }
    }

    /// Parses a name, falling back to the default activity for anything unknown.
    pub fn lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity type '{0}'")]
pub struct UnknownActivity(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        ActivityType::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}
