//! Typed shape of the generated career plan.
//!
//! The completion model is untrusted with respect to structure: its output is
//! deserialized into these types once, at the validation boundary, and the
//! typed value is what flows downstream. Unknown enum tags fail
//! deserialization rather than passing through as strings.

use serde::{Deserialize, Serialize};

/// Project difficulty tier. Each phase carries exactly one project per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Inclusive bounds on `requirements` length for this tier.
    pub fn requirement_bounds(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (5, 7),
            Difficulty::Medium => (7, 9),
            Difficulty::Hard => (9, 12),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Documentation,
    Video,
    Book,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub difficulty: Difficulty,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub github_tips: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: u32,
    pub title: String,
    pub duration_weeks: u32,
    pub description: String,
    pub learning_items: Vec<String>,
    pub projects: Vec<Project>,
    pub resources: Vec<Resource>,
}

/// A fully validated career plan.
///
/// `total_weeks` is advisory: phase durations are not required to sum to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPlan {
    pub plan_title: String,
    pub total_weeks: u32,
    pub phases: Vec<Phase>,
}
