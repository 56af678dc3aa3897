//! Post renderer: assembles the final post text from a completed activity record.
//!
//! Fragments are emitted in a fixed order and dropped when their source field
//! is unfilled: opening hook, technical details, key takeaways, achievements,
//! acknowledgments, next steps, links, hashtags.

use serde::Serialize;
use tracing::debug;

use crate::models::{ActivityRecord, ActivityType};
use crate::post::completeness::{check_missing_info, MissingInfo};
use crate::post::prompts::generate_info_request;
use crate::post::tone::ToneStyle;

pub const TAKEAWAYS_HEADER: &str = "Key Takeaways:";
pub const ACHIEVEMENTS_HEADER: &str = "Achievements:";
pub const LINKS_PREFIX: &str = "Links: ";

/// Result of asking for a post: either the finished text or the questions
/// that must be answered first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Draft {
    Ready { text: String },
    NeedsInfo { missing: MissingInfo, request: String },
}

impl Draft {
    /// Text to show the user: the post, or the follow-up questions.
    pub fn text(&self) -> &str {
        match self {
            Draft::Ready { text } => text,
            Draft::NeedsInfo { request, .. } => request,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Draft::Ready { .. })
    }
}

pub fn format_post(record: &ActivityRecord, activity: ActivityType, tone: ToneStyle) -> Draft {
    let missing = check_missing_info(activity, record);
    if !missing.is_ready() {
        debug!(
            activity = %activity,
            missing = ?missing.essential,
            "Essential fields missing; returning follow-up questions"
        );
        let request = generate_info_request(&missing, activity);
        return Draft::NeedsInfo { missing, request };
    }

    let depth = tone.preset().technical_depth;
    let details = record.list("technical_details");
    let details: Vec<String> = match depth.detail_limit() {
        Some(limit) => details.into_iter().take(limit).collect(),
        None => details,
    };

    let achievements = record.list("achievements");

    let fragments = [
        opening_hook(record, activity),
        bullet_block(depth.section_header(), &details),
        bullet_block(TAKEAWAYS_HEADER, &record.list("key_learnings")),
        bullet_block(ACHIEVEMENTS_HEADER, achievements.get(1..).unwrap_or_default()),
        record.text("acknowledgments"),
        record.text("next_steps"),
        links_line(record),
        hashtag_line(&record.list("hashtags")),
    ];

    let text = fragments
        .into_iter()
        .flatten()
        .filter(|f| !f.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    Draft::Ready { text }
}

/// Hook built from essential fields only, so any record that passes the
/// completeness check gets one whatever shape its values take.
fn opening_hook(record: &ActivityRecord, activity: ActivityType) -> Option<String> {
    let text = |field: &str| record.phrase(field);

    match activity {
        ActivityType::Hackathon => record
            .list("achievements")
            .into_iter()
            .next()
            .or_else(|| text("achievement"))
            .or_else(|| {
                let place = text("organization").or_else(|| text("project_name"))?;
                Some(format!(
                    "Just completed an intensive hackathon experience at {place}."
                ))
            }),
        ActivityType::PersonalProject => text("project_name")
            .map(|name| format!("Excited to share my latest project: {name}")),
        ActivityType::Internship => text("title").or_else(|| {
            Some(format!(
                "Wrapping up my {} internship at {}.",
                text("role")?,
                text("company")?
            ))
        }),
        ActivityType::Conference | ActivityType::Workshop => {
            let name_field = if activity == ActivityType::Conference {
                "conference_name"
            } else {
                "workshop_name"
            };
            let name = text("title").or_else(|| text(name_field))?;
            Some(match text("organization") {
                Some(org) => format!("Recently participated in {name} at {org}"),
                None => format!("Recently participated in {name}"),
            })
        }
        ActivityType::CourseCompletion => {
            let course = text("course_name")?;
            Some(match text("provider") {
                Some(provider) => format!("Just completed {course} by {provider}."),
                None => format!("Just completed {course}."),
            })
        }
        ActivityType::Competition => Some(format!(
            "Proud to share our result at {}: {}",
            text("competition_name")?,
            text("result")?
        )),
    }
}

fn bullet_block(header: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut lines = vec![header.to_string()];
    lines.extend(items.iter().map(|i| format!("- {i}")));
    Some(lines.join("\n"))
}

fn links_line(record: &ActivityRecord) -> Option<String> {
    let mut links = Vec::new();
    if let Some(github) = record.text("github_link") {
        links.push(format!("GitHub: {github}"));
    }
    if let Some(demo) = record.text("demo_link") {
        links.push(format!("Demo: {demo}"));
    }
    if links.is_empty() {
        return None;
    }
    Some(format!("{LINKS_PREFIX}{}", links.join(" | ")))
}

fn hashtag_line(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|t| format!("#{}", t.trim_start_matches('#')))
            .collect::<Vec<_>>()
            .join(" "),
    )
}
