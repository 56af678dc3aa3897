//! Networking helpers: who to connect with, what to say, and a weekly routine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechnicalTargets {
    pub roles: &'static [&'static str],
    pub levels: &'static [&'static str],
    pub specializations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecruitmentTargets {
    pub roles: &'static [&'static str],
    pub companies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommunityTargets {
    pub groups: &'static [&'static str],
    pub events: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkTargets {
    pub technical: TechnicalTargets,
    pub recruitment: RecruitmentTargets,
    pub community: CommunityTargets,
}

pub const NETWORK_TARGETS: NetworkTargets = NetworkTargets {
    technical: TechnicalTargets {
        roles: &["Software Engineer", "Tech Lead", "Engineering Manager", "CTO"],
        levels: &["Senior", "Lead", "Principal", "Junior"],
        specializations: &["Frontend", "Backend", "Full-Stack", "DevOps", "ML"],
    },
    recruitment: RecruitmentTargets {
        roles: &["Technical Recruiter", "Talent Acquisition", "HR Tech"],
        companies: &["FAANG", "Startups", "Tech Companies"],
    },
    community: CommunityTargets {
        groups: &[
            "Open Source",
            "Tech Communities",
            "Programming Languages",
            "Framework-specific",
        ],
        events: &["Meetups", "Conferences", "Hackathons", "Tech Talks"],
    },
};

const RECRUITER_MARKERS: &[&str] = &["recruiter", "talent"];
const SENIOR_MARKERS: &[&str] = &["senior", "lead", "principal"];

const DEFAULT_COMPANY: &str = "your company";
const DEFAULT_SPECIALIZATION: &str = "software development";
const DEFAULT_TECH: &str = "Python";
const DEFAULT_INTEREST: &str = "software development";

/// The person the student wants to connect with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionTarget {
    pub name: String,
    pub role: String,
    pub company: Option<String>,
}

/// What we know about the student sending the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub specialization: Option<String>,
    pub tech_stack: Vec<String>,
    pub interests: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Personalised connection request. Recruiters get an opportunity-focused
/// note, senior engineers a learn-from-you note, everyone else a shared-interest note.
pub fn generate_connection_message(target: &ConnectionTarget, user: &UserContext) -> String {
    let role = target.role.to_lowercase();
    let name = target.name.trim();
    let company = non_blank(target.company.as_deref()).unwrap_or(DEFAULT_COMPANY);

    if RECRUITER_MARKERS.iter().any(|m| role.contains(m)) {
        let specialization =
            non_blank(user.specialization.as_deref()).unwrap_or(DEFAULT_SPECIALIZATION);
        format!(
            "Hi {name}, I'm a CS student focusing on {specialization}. I'm interested in \
             {company}'s opportunities and would love to connect."
        )
    } else if SENIOR_MARKERS.iter().any(|m| role.contains(m)) {
        let tech = user
            .tech_stack
            .iter()
            .find_map(|t| non_blank(Some(t.as_str())))
            .unwrap_or(DEFAULT_TECH);
        format!(
            "Hi {name}, I'm a CS student building projects with {tech}. Your work at {company} \
             is inspiring, and I'd appreciate connecting to learn from your journey."
        )
    } else {
        let interest = user
            .interests
            .iter()
            .find_map(|i| non_blank(Some(i.as_str())))
            .unwrap_or(DEFAULT_INTEREST);
        format!(
            "Hi {name}, I'm a CS student interested in {interest}. I noticed you work with \
             similar technologies at {company}. Would love to connect and learn from your experience!"
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyActions {
    pub connections: &'static str,
    pub content: &'static str,
    pub groups: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngagementPlan {
    pub weekly_actions: WeeklyActions,
    pub focus_areas: Vec<String>,
    pub career_goals: String,
    pub target_roles: Vec<&'static str>,
    pub engagement_tips: Vec<&'static str>,
}

const FOCUS_AREA_LIMIT: usize = 3;

pub fn suggest_engagement_plan(technical_interests: &[String], career_goals: &str) -> EngagementPlan {
    EngagementPlan {
        weekly_actions: WeeklyActions {
            connections: "Reach out to 5-7 professionals in your target companies/roles",
            content: "Engage with 3-5 technical posts related to your interests",
            groups: "Participate in 2-3 technical community discussions",
        },
        focus_areas: technical_interests
            .iter()
            .take(FOCUS_AREA_LIMIT)
            .cloned()
            .collect(),
        career_goals: career_goals.trim().to_string(),
        target_roles: vec!["Software Engineers", "Tech Leads", "Technical Recruiters"],
        engagement_tips: vec![
            "Comment on technical solutions and approaches",
            "Share your project updates and learnings",
            "Ask thoughtful questions about industry practices",
            "Engage with posts from target companies",
        ],
    }
}
