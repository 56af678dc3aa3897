use serde::Serialize;

use crate::models::{ActivityRecord, ActivityType, FieldValue};

/// Required and nice-to-have fields for one activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub essential: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Schema registry. Field order is the order follow-up questions are asked in.
pub fn schema_for(activity: ActivityType) -> Schema {
    match activity {
        ActivityType::Hackathon => Schema {
            essential: &["project_name", "tech_stack", "team_size", "achievement"],
            optional: &["duration", "demo_link", "github_link", "problem_solved"],
        },
        ActivityType::PersonalProject => Schema {
            essential: &["project_name", "tech_stack", "problem_statement"],
            optional: &["github_link", "demo_link", "duration"],
        },
        ActivityType::Internship => Schema {
            essential: &["company", "role", "technologies", "duration"],
            optional: &["team", "projects", "key_learnings"],
        },
        ActivityType::Conference => Schema {
            essential: &["conference_name", "date_or_duration", "key_learnings"],
            optional: &["key_sessions", "networking_highlights"],
        },
        ActivityType::Workshop => Schema {
            essential: &["workshop_name", "skills_acquired"],
            optional: &["practical_applications", "duration"],
        },
        ActivityType::CourseCompletion => Schema {
            essential: &["course_name", "provider", "skills_acquired"],
            optional: &["projects_completed", "duration"],
        },
        ActivityType::Competition => Schema {
            essential: &["competition_name", "challenge_description", "tech_stack", "result"],
            optional: &["team_size", "duration", "github_link"],
        },
    }
}

enum Slot {
    Text,
    List,
}

const BASE_FIELDS: &[(&str, Slot)] = &[
    ("title", Slot::Text),
    ("date_or_duration", Slot::Text),
    ("organization", Slot::Text),
    ("role_or_participation", Slot::Text),
    ("technical_details", Slot::List),
    ("achievements", Slot::List),
    ("key_learnings", Slot::List),
    ("acknowledgments", Slot::Text),
    ("next_steps", Slot::Text),
    ("hashtags", Slot::List),
];

fn specific_fields(activity: ActivityType) -> &'static [(&'static str, Slot)] {
    match activity {
        ActivityType::Hackathon => &[
            ("project_name", Slot::Text),
            ("team_size", Slot::Text),
            ("problem_solved", Slot::Text),
            ("tech_stack", Slot::List),
            ("demo_link", Slot::Text),
        ],
        ActivityType::PersonalProject => &[
            ("project_name", Slot::Text),
            ("problem_statement", Slot::Text),
            ("tech_stack", Slot::List),
            ("github_link", Slot::Text),
            ("demo_link", Slot::Text),
        ],
        ActivityType::Internship => &[
            ("company", Slot::Text),
            ("team", Slot::Text),
            ("projects", Slot::List),
            ("technologies", Slot::List),
        ],
        ActivityType::Conference => &[
            ("conference_name", Slot::Text),
            ("key_sessions", Slot::List),
            ("networking_highlights", Slot::List),
        ],
        ActivityType::Workshop => &[
            ("workshop_name", Slot::Text),
            ("skills_acquired", Slot::List),
            ("practical_applications", Slot::List),
        ],
        ActivityType::CourseCompletion => &[
            ("course_name", Slot::Text),
            ("provider", Slot::Text),
            ("skills_acquired", Slot::List),
            ("projects_completed", Slot::List),
        ],
        ActivityType::Competition => &[
            ("competition_name", Slot::Text),
            ("challenge_description", Slot::Text),
            ("solution_approach", Slot::Text),
            ("result", Slot::Text),
        ],
    }
}

/// Empty record with every slot the dialogue is expected to fill for `activity`.
pub fn blank_activity_record(activity: ActivityType) -> ActivityRecord {
    let mut record = ActivityRecord::new();
    for (field, slot) in BASE_FIELDS.iter().chain(specific_fields(activity)) {
        let value = match slot {
            Slot::Text => FieldValue::Text(String::new()),
            Slot::List => FieldValue::List(Vec::new()),
        };
        record.set(field, value);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_activity_has_essential_fields() {
        for activity in ActivityType::ALL {
            assert!(
                !schema_for(activity).essential.is_empty(),
                "{activity} has no essential fields"
            );
        }
    }

    #[test]
    fn test_blank_record_has_base_and_specific_slots() {
        let record = blank_activity_record(ActivityType::Hackathon);
        assert!(record.contains("title"));
        assert!(record.contains("hashtags"));
        assert!(record.contains("project_name"));
        assert!(matches!(record.get("tech_stack"), Some(FieldValue::List(_))));
        assert!(!record.is_filled("project_name"));
    }

    #[test]
    fn test_blank_record_is_activity_specific() {
        let record = blank_activity_record(ActivityType::Internship);
        assert!(record.contains("company"));
        assert!(!record.contains("project_name"));
    }
}
