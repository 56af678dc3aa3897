use showcase::models::{ActivityRecord, ActivityType};
use showcase::post::{
    apply_quick_edit, check_missing_info, detect_activity_type, extract_technologies, format_post,
    generate_smart_hashtags, schema_for, QuickEdit, ToneStyle,
};
use showcase::post::vocabulary::activity_tags;

fn essentials_only(activity: ActivityType) -> ActivityRecord {
    schema_for(activity)
        .essential
        .iter()
        .fold(ActivityRecord::new(), |record, field| {
            record.with(field, format!("Sample {field}"))
        })
}

#[test]
fn empty_record_is_missing_exactly_the_essentials() {
    for activity in ActivityType::ALL {
        let missing = check_missing_info(activity, &ActivityRecord::new());
        let expected: Vec<String> = schema_for(activity)
            .essential
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(missing.essential, expected, "activity: {activity}");
    }
}

#[test]
fn essential_fields_alone_render_a_finished_post() {
    for activity in ActivityType::ALL {
        for tone in [ToneStyle::Formal, ToneStyle::Balanced, ToneStyle::Narrative] {
            let draft = format_post(&essentials_only(activity), activity, tone);
            assert!(draft.is_ready(), "activity: {activity}, tone: {tone}");
            assert!(!draft.text().trim().is_empty(), "activity: {activity}");
            assert!(
                !draft.text().to_lowercase().contains("please provide"),
                "activity: {activity}"
            );
        }
    }
}

/// Essential value as a one-item list, or as a nested record.
fn shaped_value(field: &str, nested: bool) -> serde_json::Value {
    let value = format!("Sample {field}");
    if nested {
        serde_json::json!({ "value": value })
    } else {
        serde_json::json!([value])
    }
}

#[test]
fn essentials_in_any_value_shape_render_a_finished_post() {
    for activity in ActivityType::ALL {
        for nested in [false, true] {
            let fields: serde_json::Map<String, serde_json::Value> = schema_for(activity)
                .essential
                .iter()
                .map(|field| (field.to_string(), shaped_value(field, nested)))
                .collect();
            let record: ActivityRecord =
                serde_json::from_value(serde_json::Value::Object(fields)).unwrap();

            let draft = format_post(&record, activity, ToneStyle::Balanced);
            assert!(draft.is_ready(), "activity: {activity}, nested: {nested}");
            assert!(
                !draft.text().trim().is_empty(),
                "activity: {activity}, nested: {nested}"
            );
        }
    }
}

#[test]
fn hashtags_are_capped_and_carry_an_activity_tag() {
    let texts = [
        "",
        "Built a Rust and React app on AWS with PostgreSQL, Docker and Kubernetes",
        "Won first place at the hackathon using Python, TensorFlow and Node.js",
    ];
    for activity in ActivityType::ALL {
        for text in texts {
            let tags = generate_smart_hashtags(text, activity);
            assert!(tags.len() <= 5, "{tags:?}");
            assert!(
                tags.iter().any(|t| activity_tags(activity).contains(&t.as_str())),
                "activity: {activity}, tags: {tags:?}"
            );
        }
    }
}

#[test]
fn personal_project_sentence_is_detected() {
    assert_eq!(
        detect_activity_type("I built a personal project using React"),
        ActivityType::PersonalProject
    );
}

#[test]
fn technologies_are_extracted_exactly() {
    let mut found = extract_technologies("I used Python and React with AWS");
    found.sort_unstable();
    assert_eq!(found, vec!["AWS", "Python", "React"]);
}

#[test]
fn rendering_is_idempotent() {
    let record = essentials_only(ActivityType::Hackathon)
        .with("achievements", vec!["1st place overall", "Best use of AI"])
        .with("technical_details", vec!["Realtime sync over WebSockets"])
        .with("github_link", "https://github.com/example/app");
    let first = format_post(&record, ActivityType::Hackathon, ToneStyle::Balanced);
    let second = format_post(&record, ActivityType::Hackathon, ToneStyle::Balanced);
    assert_eq!(first, second);
}

#[test]
fn longer_edit_adds_takeaways() {
    let post = "Just shipped my first open-source crate.\n\n#rust";
    assert!(apply_quick_edit(post, QuickEdit::Longer).contains("Key Takeaways:"));
}
