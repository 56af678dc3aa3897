// Follow-up question text for missing activity fields.

use crate::models::ActivityType;
use crate::post::completeness::MissingInfo;

pub const INFO_REQUEST_HEADER: &str = "To create a comprehensive post, I'll need a few key details:";
pub const OPTIONAL_REQUEST_HEADER: &str = "Additional helpful information (optional):";

fn essential_question(field: &str, activity: ActivityType) -> String {
    match field {
        "tech_stack" | "technologies" => "- What technologies did you use?".to_string(),
        "team_size" => "- How many people were on your team?".to_string(),
        "achievement" => "- Did you achieve any notable results or wins?".to_string(),
        "project_name" => "- What did you name your project?".to_string(),
        "problem_statement" => "- What problem were you trying to solve?".to_string(),
        "company" => "- Which company did you intern with?".to_string(),
        "role" => "- What was your role or main responsibilities?".to_string(),
        "duration" => format!("- How long was the {}?", activity.label()),
        other => format!("- Could you share details about the {}?", humanize(other)),
    }
}

fn optional_question(field: &str) -> String {
    match field {
        "github_link" => "- Do you have a GitHub repository to share?".to_string(),
        "demo_link" => "- Is there a demo available?".to_string(),
        "key_learnings" => "- What were your main takeaways?".to_string(),
        other => format!("- Any details about {}?", humanize(other)),
    }
}

fn humanize(field: &str) -> String {
    field.replace('_', " ")
}

/// Turns a missing-fields report into newline-separated follow-up questions.
/// Returns an empty string when nothing is missing.
pub fn generate_info_request(missing: &MissingInfo, activity: ActivityType) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !missing.essential.is_empty() {
        lines.push(INFO_REQUEST_HEADER.to_string());
        lines.extend(
            missing
                .essential
                .iter()
                .map(|f| essential_question(f, activity)),
        );
    }

    if !missing.optional.is_empty() {
        lines.push(format!("\n{OPTIONAL_REQUEST_HEADER}"));
        lines.extend(missing.optional.iter().map(|f| optional_question(f)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(essential: &[&str], optional: &[&str]) -> MissingInfo {
        MissingInfo {
            essential: essential.iter().map(|s| s.to_string()).collect(),
            optional: optional.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_questions_follow_field_order() {
        let text = generate_info_request(
            &missing(&["project_name", "tech_stack"], &[]),
            ActivityType::PersonalProject,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], INFO_REQUEST_HEADER);
        assert_eq!(lines[1], "- What did you name your project?");
        assert_eq!(lines[2], "- What technologies did you use?");
    }

    #[test]
    fn test_internship_technologies_share_the_tech_question() {
        let text = generate_info_request(&missing(&["technologies"], &[]), ActivityType::Internship);
        assert!(text.contains("- What technologies did you use?"));
        assert!(!text.contains("details about the technologies"));
    }

    #[test]
    fn test_duration_question_names_activity() {
        let text = generate_info_request(&missing(&["duration"], &[]), ActivityType::Internship);
        assert!(text.contains("How long was the internship?"));
    }

    #[test]
    fn test_unmapped_field_uses_generic_phrase() {
        let text = generate_info_request(
            &missing(&["challenge_description"], &["networking_highlights"]),
            ActivityType::Competition,
        );
        assert!(text.contains("- Could you share details about the challenge description?"));
        assert!(text.contains(OPTIONAL_REQUEST_HEADER));
        assert!(text.contains("- Any details about networking highlights?"));
    }

    #[test]
    fn test_nothing_missing_yields_empty_request() {
        assert!(generate_info_request(&MissingInfo::default(), ActivityType::Hackathon).is_empty());
    }
}
