//! Skill progression assessment over a student's experiences and projects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::insights::{Improvement, ImprovementKind};
use crate::profile::ProfileData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Learning,
    Applying,
    Optimizing,
    Leading,
}

pub struct LevelProfile {
    pub indicators: &'static [&'static str],
    pub evidence: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Learning,
        SkillLevel::Applying,
        SkillLevel::Optimizing,
        SkillLevel::Leading,
    ];

    pub fn profile(&self) -> LevelProfile {
        match self {
            SkillLevel::Learning => LevelProfile {
                indicators: &["completing_tutorials", "basic_projects", "understanding_concepts"],
                evidence: &["course_completion", "simple_implementations", "documented_learning"],
                next_steps: &["apply_in_project", "solve_problems", "build_portfolio"],
            },
            SkillLevel::Applying => LevelProfile {
                indicators: &["project_completion", "bug_fixes", "feature_implementation"],
                evidence: &["github_repos", "deployed_projects", "code_reviews"],
                next_steps: &["optimize_code", "improve_architecture", "tackle_complexity"],
            },
            SkillLevel::Optimizing => LevelProfile {
                indicators: &[
                    "performance_improvements",
                    "architecture_decisions",
                    "system_design",
                ],
                evidence: &["benchmarks", "technical_docs", "architecture_diagrams"],
                next_steps: &["lead_projects", "mentor_others", "contribute_opensource"],
            },
            SkillLevel::Leading => LevelProfile {
                indicators: &["team_leadership", "architecture_ownership", "technical_direction"],
                evidence: &["team_achievements", "system_improvements", "technical_blogs"],
                next_steps: &["expand_impact", "drive_innovation", "build_community"],
            },
        }
    }
}

pub const SKILL_DOMAINS: &[(&str, &[&str])] = &[
    ("technical", &["coding", "architecture", "tools", "testing"]),
    ("collaboration", &["teamwork", "communication", "mentoring"]),
    ("problem_solving", &["analysis", "debugging", "optimization"]),
];

/// Domains scoring below this get an improvement suggestion.
const WEAK_DOMAIN_SCORE: usize = 2;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAssessment {
    pub overall_level: SkillLevel,
    pub level_scores: BTreeMap<SkillLevel, usize>,
    pub domain_levels: BTreeMap<&'static str, usize>,
    pub next_steps: Vec<&'static str>,
    pub suggested_evidence: Vec<&'static str>,
}

fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Scores each level by how many of its indicators have a keyword in some
/// description. Ties resolve to the earlier (less senior) level.
pub fn assess_skill_level(profile: &ProfileData) -> SkillAssessment {
    let descriptions: Vec<String> = profile
        .experiences
        .iter()
        .chain(profile.projects.iter())
        .filter_map(|r| r.text("description"))
        .map(|d| d.to_lowercase())
        .collect();

    let mut level_scores = BTreeMap::new();
    for level in SkillLevel::ALL {
        let indicators = level.profile().indicators;
        let score: usize = descriptions
            .iter()
            .map(|d| {
                indicators
                    .iter()
                    .filter(|ind| ind.split('_').any(|kw| d.contains(kw)))
                    .count()
            })
            .sum();
        level_scores.insert(level, score);
    }

    let mut overall_level = SkillLevel::Learning;
    for level in SkillLevel::ALL {
        if level_scores[&level] > level_scores[&overall_level] {
            overall_level = level;
        }
    }

    let domain_levels: BTreeMap<&'static str, usize> = SKILL_DOMAINS
        .iter()
        .map(|(domain, skills)| {
            let score: usize = descriptions
                .iter()
                .map(|d| skills.iter().filter(|s| d.contains(**s)).count())
                .sum();
            (*domain, score)
        })
        .collect();

    let current = overall_level.profile();
    let suggested_evidence = current
        .evidence
        .iter()
        .filter(|ev| {
            let spaced = humanize(ev);
            !descriptions
                .iter()
                .any(|d| d.contains(**ev) || d.contains(&spaced))
        })
        .copied()
        .collect();

    SkillAssessment {
        overall_level,
        level_scores,
        domain_levels,
        next_steps: current.next_steps.to_vec(),
        suggested_evidence,
    }
}

pub fn suggest_skill_improvements(assessment: &SkillAssessment) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if !assessment.suggested_evidence.is_empty() {
        improvements.push(Improvement {
            kind: ImprovementKind::AddEvidence,
            suggestions: assessment
                .suggested_evidence
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|ev| format!("Add evidence of {} to strengthen your profile", humanize(ev)))
                .collect(),
        });
    }

    improvements.push(Improvement {
        kind: ImprovementKind::Progression,
        suggestions: assessment
            .overall_level
            .profile()
            .next_steps
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|step| format!("Work on {} to progress to the next level", humanize(step)))
            .collect(),
    });

    let weak: Vec<String> = assessment
        .domain_levels
        .iter()
        .filter(|(_, score)| **score < WEAK_DOMAIN_SCORE)
        .map(|(domain, _)| {
            format!(
                "Strengthen your {} skills through projects or experiences",
                humanize(domain)
            )
        })
        .collect();
    if !weak.is_empty() {
        improvements.push(Improvement {
            kind: ImprovementKind::DomainImprovement,
            suggestions: weak,
        });
    }

    improvements
}
