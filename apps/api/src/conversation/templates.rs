// Canned conversation messages, the welcome menu and the profile-section transitions.

use serde::{Deserialize, Serialize};

use crate::profile::{section_schema, ProfileSection};

pub const WELCOME_MESSAGE: &str = "\
Welcome! I'm here to help you create a standout LinkedIn presence. I can assist with:

1. Creating/improving your LinkedIn profile 📝
   - Craft an attention-grabbing headline
   - Write a compelling about section
   - Showcase your technical experience
   - Highlight your education and skills

2. Writing engaging posts about your CS activities 📱
   - Hackathon achievements
   - Project showcases
   - Technical learnings
   - Professional milestones

3. Building your technical network strategically 🤝
   - Connect with professionals in your tech stack
   - Join relevant technical communities
   - Engage meaningfully in your domain
   - Grow your professional network

Which of these areas would you like to focus on? Feel free to share your goals, and I'll guide you through the process!";

pub const PROFILE_START_MESSAGE: &str = "\
Great! Let's create a compelling LinkedIn profile. We'll go through each section step by step:

First, let's craft your professional headline. I'll need some key information:

1. Your current role (e.g., CS Student, Software Engineering Intern)
2. Your technical specialization (e.g., Full-Stack, ML/AI, Cloud)
3. Key technologies you work with (e.g., Python, React, AWS)

Please share these details, and I'll help create a headline that catches recruiters' attention!";

pub const POST_START_MESSAGE: &str = "\
Excellent! Let's create an engaging post about your CS activities.

What would you like to post about? Here are some popular options:
1. 🚀 Project showcase
2. 💡 Hackathon experience
3. 📚 Learning achievement
4. 💼 Internship update
5. 🏆 Competition results

Choose a topic, and I'll guide you through crafting a compelling post!";

pub const NETWORK_START_MESSAGE: &str = "\
Let's grow your technical network with intention. To point you at the right people and communities, tell me:

1. Your main technical focus (e.g., Backend, Frontend, ML, DevOps)
2. The languages and frameworks you work with most
3. The kind of role or company you're aiming for

With that, I'll suggest who to connect with first and help you write a personalized connection message!";

pub const HEADLINE_TO_ABOUT_MESSAGE: &str = "\
Great! Your headline looks professional. Now, let's work on your 'About' section.

This is your chance to tell your story. Could you share:
1. Your professional journey and interests
2. Key technical skills and achievements
3. What you're currently working on or learning
4. Your career goals

Don't worry about the format - I'll help structure this information!";

pub const ABOUT_TO_EXPERIENCE_MESSAGE: &str = "\
Perfect! Your 'About' section is looking good. Let's move on to your experience.

For each relevant experience (internships, projects, etc.), please share:
1. Role and organization
2. Duration
3. Key responsibilities
4. Technical stack used
5. Notable achievements

Start with your most recent experience.";

/// Choice that moves the profile flow on to its next section.
pub const SECTION_DONE_CHOICE: &str = "next";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Welcome,
    ProfileStart,
    PostStart,
    NetworkStart,
    HeadlineToAbout,
    AboutToExperience,
}

impl ConversationState {
    pub fn message(&self) -> &'static str {
        match self {
            ConversationState::Welcome => WELCOME_MESSAGE,
            ConversationState::ProfileStart => PROFILE_START_MESSAGE,
            ConversationState::PostStart => POST_START_MESSAGE,
            ConversationState::NetworkStart => NETWORK_START_MESSAGE,
            ConversationState::HeadlineToAbout => HEADLINE_TO_ABOUT_MESSAGE,
            ConversationState::AboutToExperience => ABOUT_TO_EXPERIENCE_MESSAGE,
        }
    }

    /// Profile section whose fields this state's message asks for.
    pub fn collecting(&self) -> Option<ProfileSection> {
        match self {
            ConversationState::ProfileStart => Some(ProfileSection::Headline),
            ConversationState::HeadlineToAbout => Some(ProfileSection::About),
            ConversationState::AboutToExperience => Some(ProfileSection::Experience),
            _ => None,
        }
    }

    /// Essential fields the state's message asks for; empty outside the profile flow.
    pub fn fields(&self) -> &'static [&'static str] {
        self.collecting()
            .and_then(section_schema)
            .map(|schema| schema.essential)
            .unwrap_or(&[])
    }

    /// Menu choices and section transitions reachable from this state.
    fn next_step(&self, choice: &str) -> Option<ConversationState> {
        match (self, choice.trim().to_lowercase().as_str()) {
            (ConversationState::Welcome, "profile") => Some(ConversationState::ProfileStart),
            (ConversationState::Welcome, "post") => Some(ConversationState::PostStart),
            (ConversationState::Welcome, "network") => Some(ConversationState::NetworkStart),
            (ConversationState::ProfileStart, SECTION_DONE_CHOICE) => {
                Some(ConversationState::HeadlineToAbout)
            }
            (ConversationState::HeadlineToAbout, SECTION_DONE_CHOICE) => {
                Some(ConversationState::AboutToExperience)
            }
            _ => None,
        }
    }
}

/// Message for the state reached by `choice`, or the current state's message
/// when the choice leads nowhere.
pub fn next_prompt(state: ConversationState, choice: Option<&str>) -> &'static str {
    choice
        .and_then(|c| state.next_step(c))
        .unwrap_or(state)
        .message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_routes_menu_choices() {
        assert_eq!(
            next_prompt(ConversationState::Welcome, Some("profile")),
            PROFILE_START_MESSAGE
        );
        assert_eq!(
            next_prompt(ConversationState::Welcome, Some(" Network ")),
            NETWORK_START_MESSAGE
        );
    }

    #[test]
    fn test_unknown_choice_repeats_current_message() {
        assert_eq!(
            next_prompt(ConversationState::Welcome, Some("weather")),
            WELCOME_MESSAGE
        );
        assert_eq!(next_prompt(ConversationState::PostStart, None), POST_START_MESSAGE);
    }

    #[test]
    fn test_profile_flow_moves_through_section_transitions() {
        assert_eq!(
            next_prompt(ConversationState::ProfileStart, Some("Next")),
            HEADLINE_TO_ABOUT_MESSAGE
        );
        assert_eq!(
            next_prompt(ConversationState::HeadlineToAbout, Some("next")),
            ABOUT_TO_EXPERIENCE_MESSAGE
        );
        assert_eq!(
            next_prompt(ConversationState::AboutToExperience, Some("next")),
            ABOUT_TO_EXPERIENCE_MESSAGE
        );
    }

    #[test]
    fn test_profile_states_ask_for_section_essentials() {
        assert_eq!(
            ConversationState::ProfileStart.fields(),
            &["role", "specialization", "key_technology"]
        );
        assert_eq!(
            ConversationState::HeadlineToAbout.fields(),
            &["professional_summary", "key_skills", "interests"]
        );
        assert_eq!(
            ConversationState::AboutToExperience.collecting(),
            Some(ProfileSection::Experience)
        );
        assert!(ConversationState::PostStart.fields().is_empty());
    }

    #[test]
    fn test_only_welcome_has_menu_transitions() {
        assert_eq!(
            next_prompt(ConversationState::PostStart, Some("profile")),
            POST_START_MESSAGE
        );
    }
}
