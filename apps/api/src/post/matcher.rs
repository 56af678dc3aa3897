//! Keyword matching over the fixed vocabularies: technology extraction,
//! activity auto-detection and hashtag generation.

use crate::models::ActivityType;
use crate::post::vocabulary::{activity_tags, ACTIVITY_KEYWORDS, GENERAL_TAG, TECH_KEYWORDS};

const MAX_HASHTAGS: usize = 5;
const MAX_TECH_HASHTAGS: usize = 3;
const ACTIVITY_HASHTAGS: usize = 2;

/// Returns every vocabulary term contained in `text` (case-insensitive),
/// each once, in vocabulary order.
pub fn extract_technologies(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();

    for (_, terms) in TECH_KEYWORDS {
        for &term in terms.iter() {
            if text_lower.contains(&term.to_lowercase()) && !found.contains(&term) {
                found.push(term);
            }
        }
    }

    found
}

/// First activity whose keywords appear in `text` wins; defaults to a personal project.
pub fn detect_activity_type(text: &str) -> ActivityType {
    let text_lower = text.to_lowercase();

    ACTIVITY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text_lower.contains(w)))
        .map(|(activity, _)| *activity)
        .unwrap_or_default()
}

/// Builds at most five hashtags (without `#`): two activity tags, up to three
/// technology tags found in `text`, then the general CS tag. The general tag
/// only survives when fewer than three distinct technology tags were added.
pub fn generate_smart_hashtags(text: &str, activity: ActivityType) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_HASHTAGS);
    let mut push = |tag: String| {
        if !tag.is_empty() && !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    };

    for tag in activity_tags(activity).iter().take(ACTIVITY_HASHTAGS) {
        push(tag.to_string());
    }

    for tech in extract_technologies(text).into_iter().take(MAX_TECH_HASHTAGS) {
        push(clean_hashtag(tech));
    }

    push(GENERAL_TAG.to_string());

    tags.truncate(MAX_HASHTAGS);
    tags
}

/// Strips spaces, dots and hyphens so "Next.js" becomes "Nextjs".
fn clean_hashtag(term: &str) -> String {
    term.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect()
}
