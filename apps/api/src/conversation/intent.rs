use serde::{Deserialize, Serialize};

use crate::conversation::templates::ConversationState;

/// What the student asked for in their opening message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Profile,
    Post,
    Network,
}

impl Intent {
    pub fn state(&self) -> ConversationState {
        match self {
            Intent::Profile => ConversationState::ProfileStart,
            Intent::Post => ConversationState::PostStart,
            Intent::Network => ConversationState::NetworkStart,
        }
    }
}

/// Checked in order; the first list with a matching phrase decides.
const INTENT_PHRASES: &[(Intent, &[&str])] = &[
    (
        Intent::Profile,
        &[
            "profile",
            "headline",
            "about section",
            "experience",
            "education",
            "improve my profile",
            "create profile",
            "help with my profile",
            "make my profile",
            "update profile",
        ],
    ),
    (
        Intent::Post,
        &[
            "post",
            "write",
            "share",
            "create post",
            "make a post",
            "project post",
            "hackathon post",
            "achievement post",
            "help me write",
            "post about",
        ],
    ),
    (
        Intent::Network,
        &[
            "network",
            "connect",
            "connection",
            "networking",
            "build network",
            "grow network",
            "find connections",
            "meet people",
            "expand network",
            "professional network",
        ],
    ),
];

pub fn detect_initial_intent(message: &str) -> Option<Intent> {
    let message = message.to_lowercase();
    INTENT_PHRASES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| message.contains(p)))
        .map(|(intent, _)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_phrases() {
        assert_eq!(
            detect_initial_intent("Can you help me improve my LinkedIn headline?"),
            Some(Intent::Profile)
        );
    }

    #[test]
    fn test_profile_wins_over_post() {
        assert_eq!(
            detect_initial_intent("I want to write my about section"),
            Some(Intent::Profile)
        );
    }

    #[test]
    fn test_post_phrases() {
        assert_eq!(
            detect_initial_intent("Help me share my hackathon win"),
            Some(Intent::Post)
        );
    }

    #[test]
    fn test_network_phrases() {
        assert_eq!(
            detect_initial_intent("How do I meet people in ML?"),
            Some(Intent::Network)
        );
    }

    #[test]
    fn test_no_intent() {
        assert_eq!(detect_initial_intent("hi!"), None);
    }
}
