// Achievement and skill insights: metric extraction, technical-depth scoring,
// skill-level assessment and the suggestions derived from them.

pub mod achievement;
pub mod skills;

use serde::{Deserialize, Serialize};

pub use achievement::{
    calculate_technical_depth, extract_metrics, suggest_relevant_metrics,
    suggest_technical_details, validate_achievement, AchievementReview, Metric,
};
pub use skills::{assess_skill_level, suggest_skill_improvements, SkillAssessment, SkillLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementKind {
    AddMetrics,
    IncreaseTechnicalDetail,
    AddEvidence,
    Progression,
    DomainImprovement,
}

/// A group of related suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub kind: ImprovementKind,
    pub suggestions: Vec<String>,
}
