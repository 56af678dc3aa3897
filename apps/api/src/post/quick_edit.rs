//! Quick edits on already-rendered post text.
//!
//! These work on lines and headers of the rendered string, not on the record
//! that produced it, so they are best-effort and lossy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::post::renderer::{LINKS_PREFIX, TAKEAWAYS_HEADER};
use crate::post::tone::{HIGH_DEPTH_HEADER, MODERATE_DEPTH_HEADER};

/// Posts at or under this many lines are left alone by `Shorter`.
const SHORTEN_THRESHOLD: usize = 10;
/// Leading lines kept by `Shorter` besides links, hashtags and achievements.
const SHORTEN_KEEP: usize = 5;

const SIMPLE_HEADER: &str = "Key Highlights:";
const DETAILS_HEADER: &str = "Technical Details:";

const TAKEAWAY_PLACEHOLDERS: &str =
    "- [Add your key learning point]\n- [Add another learning point]";
const DETAIL_PLACEHOLDERS: &str =
    "- [Add specific technical implementation detail]\n- [Add architecture decision]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickEdit {
    Shorter,
    Longer,
    MoreTechnical,
    LessTechnical,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edit '{0}' (expected shorter, longer, more_technical or less_technical)")]
pub struct UnknownEdit(pub String);

impl FromStr for QuickEdit {
    type Err = UnknownEdit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "shorter" => Ok(QuickEdit::Shorter),
            "longer" => Ok(QuickEdit::Longer),
            "more_technical" => Ok(QuickEdit::MoreTechnical),
            "less_technical" => Ok(QuickEdit::LessTechnical),
            _ => Err(UnknownEdit(s.to_string())),
        }
    }
}

pub fn apply_quick_edit(post: &str, edit: QuickEdit) -> String {
    match edit {
        QuickEdit::Shorter => shorten(post),
        QuickEdit::Longer => {
            if post.contains(TAKEAWAYS_HEADER) {
                post.to_string()
            } else {
                format!("{post}\n\n{TAKEAWAYS_HEADER}\n{TAKEAWAY_PLACEHOLDERS}")
            }
        }
        QuickEdit::MoreTechnical => {
            if post.contains(HIGH_DEPTH_HEADER) {
                post.to_string()
            } else {
                let upgraded = post.replace(MODERATE_DEPTH_HEADER, HIGH_DEPTH_HEADER);
                format!("{upgraded}\n\n{DETAILS_HEADER}\n{DETAIL_PLACEHOLDERS}")
            }
        }
        QuickEdit::LessTechnical => post
            .replace(HIGH_DEPTH_HEADER, SIMPLE_HEADER)
            .replace(MODERATE_DEPTH_HEADER, SIMPLE_HEADER),
    }
}

fn is_bullet(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("- ") || line.starts_with('•')
}

fn shorten(post: &str) -> String {
    let lines: Vec<&str> = post.split('\n').collect();
    if lines.len() <= SHORTEN_THRESHOLD {
        return post.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut in_achievements = false;

    for line in lines {
        if line.starts_with(LINKS_PREFIX) || line.starts_with('🔗') || line.starts_with('#') {
            kept.push(line);
        } else if line.contains("Achievement") {
            in_achievements = true;
            kept.push(line);
        } else if in_achievements && is_bullet(line) {
            kept.push(line);
        } else {
            if !line.trim().is_empty() {
                in_achievements = false;
            }
            if kept.len() < SHORTEN_KEEP {
                kept.push(line);
            }
        }
    }

    kept.join("\n")
}
