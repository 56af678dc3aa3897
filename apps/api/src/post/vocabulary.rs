//! Fixed keyword tables. Slice order is match priority; do not reorder.

use crate::models::ActivityType;

/// Technology vocabulary grouped by category.
pub const TECH_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "languages",
        &["Python", "JavaScript", "TypeScript", "Java", "C++", "Rust", "Go", "Ruby", "Swift"],
    ),
    (
        "frameworks",
        &["React", "Angular", "Vue", "Django", "Flask", "Spring", "Express", "Next.js", "FastAPI"],
    ),
    ("cloud", &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "Serverless"]),
    (
        "ai_ml",
        &[
            "TensorFlow",
            "PyTorch",
            "OpenAI",
            "Machine Learning",
            "Deep Learning",
            "NLP",
            "Computer Vision",
        ],
    ),
    ("databases", &["PostgreSQL", "MongoDB", "MySQL", "Redis", "Elasticsearch"]),
    ("tools", &["Git", "GitHub", "GitLab", "CI/CD", "Jenkins", "Docker"]),
];

/// Terms from a single category.
pub fn tech_category(name: &str) -> &'static [&'static str] {
    TECH_KEYWORDS
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, terms)| *terms)
        .unwrap_or(&[])
}

/// Languages followed by frameworks. Used wherever "mentions a real technology" matters.
pub fn core_tech_terms() -> impl Iterator<Item = &'static str> {
    tech_category("languages")
        .iter()
        .chain(tech_category("frameworks").iter())
        .copied()
}

/// Activity detection keywords in priority order.
pub const ACTIVITY_KEYWORDS: &[(ActivityType, &[&str])] = &[
    (ActivityType::Hackathon, &["hackathon", "hack", "hacka"]),
    (
        ActivityType::PersonalProject,
        &["project", "built", "created", "developed", "launched"],
    ),
    (ActivityType::Internship, &["intern", "internship", "company"]),
    (
        ActivityType::Conference,
        &["conference", "event", "convention", "attended"],
    ),
    (ActivityType::Workshop, &["workshop", "session", "training"]),
    (
        ActivityType::CourseCompletion,
        &["course", "certification", "completed", "learned"],
    ),
    (
        ActivityType::Competition,
        &["competition", "contest", "challenge", "competed"],
    ),
];

/// Hashtags per activity, most specific first.
pub fn activity_tags(activity: ActivityType) -> &'static [&'static str] {
    match activity {
        ActivityType::Hackathon => &["hackathon", "coding", "hackerlife"],
        ActivityType::PersonalProject => &["sideproject", "coding", "buildingInPublic"],
        ActivityType::Internship => &["internship", "careerstart", "techcareer"],
        ActivityType::Conference => &["techconference", "learning", "networking"],
        ActivityType::Workshop => &["workshop", "skillbuilding", "learning"],
        ActivityType::CourseCompletion => &["learning", "upskilling", "education"],
        ActivityType::Competition => &["coding", "competition", "challenge"],
    }
}

/// Always-on CS student tag appended after activity and technology tags.
pub const GENERAL_TAG: &str = "computerscience";
