//! Achievement review: pulls metrics out of an achievement description, scores
//! its technical depth, and suggests how to make it more concrete.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::insights::{Improvement, ImprovementKind};
use crate::post::vocabulary::core_tech_terms;

pub struct ProjectType {
    pub name: &'static str,
    pub key_metrics: &'static [&'static str],
    pub impact_phrases: &'static [&'static str],
}

pub const PROJECT_TYPES: &[ProjectType] = &[
    ProjectType {
        name: "optimization",
        key_metrics: &["latency", "memory", "cpu_usage"],
        impact_phrases: &[
            "Reduced latency by {X}%",
            "Improved memory usage by {X}MB",
            "Decreased CPU load from {X}% to {Y}%",
        ],
    },
    ProjectType {
        name: "scalability",
        key_metrics: &["requests_per_second", "concurrent_users", "data_volume"],
        impact_phrases: &[
            "Scaled from {X} to {Y} users",
            "Handled {X} concurrent requests",
            "Processed {X}GB of data daily",
        ],
    },
    ProjectType {
        name: "user_experience",
        key_metrics: &["load_time", "interaction_time", "error_rate"],
        impact_phrases: &[
            "Decreased page load time by {X}s",
            "Reduced user interaction time by {X}%",
            "Cut error rate from {X}% to {Y}%",
        ],
    },
    ProjectType {
        name: "security",
        key_metrics: &["vulnerability_count", "response_time", "coverage"],
        impact_phrases: &[
            "Identified and fixed {X} vulnerabilities",
            "Improved security response time by {X}%",
            "Increased security coverage to {X}%",
        ],
    },
];

const PROBLEM_WORDS: &[&str] = &["solved", "fixed", "improved", "optimized"];
const SOLUTION_WORDS: &[&str] = &["using", "implemented", "developed", "designed"];

/// Below this depth score an achievement gets technical-detail suggestions.
pub const DEPTH_THRESHOLD: f64 = 0.7;
const MAX_METRIC_SUGGESTIONS: usize = 3;

/// (project type, metric name, pattern capturing the first number after the metric name)
static METRIC_PATTERNS: LazyLock<Vec<(&'static str, &'static str, Regex)>> = LazyLock::new(|| {
    PROJECT_TYPES
        .iter()
        .flat_map(|pt| pt.key_metrics.iter().map(move |m| (pt.name, *m)))
        .filter_map(|(project_type, metric)| {
            let pattern = format!(r"(?i){}.*?([0-9]+(?:\.[0-9]+)?%?)", regex::escape(metric));
            Regex::new(&pattern)
                .ok()
                .map(|re| (project_type, metric, re))
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub metric: String,
    pub value: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementReview {
    pub original: String,
    pub metrics: Vec<Metric>,
    pub suggested_improvements: Vec<Improvement>,
    pub technical_depth: f64,
}

pub fn extract_metrics(description: &str) -> Vec<Metric> {
    METRIC_PATTERNS
        .iter()
        .filter_map(|(project_type, metric, re)| {
            let value = re.captures(description)?.get(1)?.as_str();
            Some(Metric {
                metric: metric.to_string(),
                value: value.to_string(),
                context: project_type.to_string(),
            })
        })
        .collect()
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn mentions_tech(description_lower: &str) -> bool {
    core_tech_terms().any(|t| description_lower.contains(&t.to_lowercase()))
}

/// 0.0–1.0: up to 0.4 for technology mentions, up to 0.3 for metrics,
/// 0.15 each for naming a problem and a solution approach.
pub fn calculate_technical_depth(description: &str) -> f64 {
    let lower = description.to_lowercase();

    let tech_terms = core_tech_terms()
        .filter(|t| lower.contains(&t.to_lowercase()))
        .count();
    let metrics = extract_metrics(description).len();

    let mut score = (tech_terms as f64 * 0.2).min(0.4);
    score += (metrics as f64 * 0.2).min(0.3);
    if contains_any(&lower, PROBLEM_WORDS) {
        score += 0.15;
    }
    if contains_any(&lower, SOLUTION_WORDS) {
        score += 0.15;
    }

    score.min(1.0)
}

/// Metric suggestions for project types whose name words appear in the description.
pub fn suggest_relevant_metrics(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();

    PROJECT_TYPES
        .iter()
        .filter(|pt| pt.name.split('_').any(|word| lower.contains(word)))
        .flat_map(|pt| {
            let example = pt.impact_phrases[0];
            pt.key_metrics
                .iter()
                .map(move |metric| format!("Add {metric} metrics using format: {example}"))
        })
        .take(MAX_METRIC_SUGGESTIONS)
        .collect()
}

pub fn suggest_technical_details(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    let mut suggestions = Vec::new();

    if !mentions_tech(&lower) {
        suggestions.push("Specify the technologies/frameworks used".to_string());
    }
    if extract_metrics(description).is_empty() {
        suggestions.push("Add quantifiable metrics showing impact".to_string());
    }
    if !contains_any(&lower, PROBLEM_WORDS) {
        suggestions.push("Describe the technical challenge addressed".to_string());
    }
    if !contains_any(&lower, SOLUTION_WORDS) {
        suggestions.push("Explain your technical approach/solution".to_string());
    }

    suggestions
}

pub fn validate_achievement(description: &str) -> AchievementReview {
    let metrics = extract_metrics(description);
    let technical_depth = calculate_technical_depth(description);
    let mut suggested_improvements = Vec::new();

    if metrics.is_empty() {
        suggested_improvements.push(Improvement {
            kind: ImprovementKind::AddMetrics,
            suggestions: suggest_relevant_metrics(description),
        });
    }

    if technical_depth < DEPTH_THRESHOLD {
        suggested_improvements.push(Improvement {
            kind: ImprovementKind::IncreaseTechnicalDetail,
            suggestions: suggest_technical_details(description),
        });
    }

    AchievementReview {
        original: description.to_string(),
        metrics,
        suggested_improvements,
        technical_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metric_value_after_name() {
        let metrics = extract_metrics("Cut API latency from 300ms to 120ms using Redis caching");
        assert_eq!(
            metrics,
            vec![Metric {
                metric: "latency".to_string(),
                value: "300".to_string(),
                context: "optimization".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_percentage_metric() {
        let metrics = extract_metrics("Raised test coverage to 85%");
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].metric, "coverage");
        assert_eq!(metrics[0].value, "85%");
        assert_eq!(metrics[0].context, "security");
    }

    #[test]
    fn test_no_metrics_in_vague_text() {
        assert!(extract_metrics("Worked on the backend").is_empty());
    }

    #[test]
    fn test_depth_score_components() {
        // two techs (0.4) + one metric (0.2) + problem (0.15) + solution (0.15)
        let depth = calculate_technical_depth(
            "Optimized latency to 40ms using Rust and React",
        );
        assert!((depth - 0.9).abs() < 1e-9, "depth was {depth}");
    }

    #[test]
    fn test_depth_is_zero_for_vague_text() {
        assert_eq!(calculate_technical_depth("Worked on the backend"), 0.0);
    }

    #[test]
    fn test_relevant_metrics_follow_project_type_words() {
        let suggestions = suggest_relevant_metrics("Security audit of the login flow");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].starts_with("Add vulnerability_count metrics"));
    }

    #[test]
    fn test_vague_achievement_gets_both_improvement_kinds() {
        let review = validate_achievement("Worked on the backend");
        let kinds: Vec<ImprovementKind> = review
            .suggested_improvements
            .iter()
            .map(|i| i.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ImprovementKind::AddMetrics, ImprovementKind::IncreaseTechnicalDetail]
        );
        assert_eq!(review.suggested_improvements[1].suggestions.len(), 4);
    }

    #[test]
    fn test_detailed_achievement_needs_no_improvements() {
        let review = validate_achievement("Optimized latency to 40ms using Rust and React");
        assert!(review.suggested_improvements.is_empty());
    }
}
