use serde::{Deserialize, Serialize};

/// Self-reported experience level from the questionnaire.
///
/// The questionnaire UI sends this as a free string; deserialization rejects
/// anything outside the three known levels instead of passing it through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// Questionnaire answers driving plan generation.
///
/// Every field carries the same default the original questionnaire applies,
/// so a partially-filled submission deserializes into a usable profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireProfile {
    #[serde(default)]
    pub level: Level,
    #[serde(default = "default_interests")]
    pub interests: Vec<String>,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_timeline_weeks")]
    pub timeline_weeks: u32,
    #[serde(default)]
    pub previous_experience: Option<String>,
    #[serde(default = "default_learning_style")]
    pub learning_style: Option<String>,
}

fn default_interests() -> Vec<String> {
    vec!["Python".to_string(), "SQL".to_string()]
}

fn default_hours_per_day() -> u32 {
    2
}

fn default_goal() -> String {
    "Aprender programación".to_string()
}

fn default_timeline_weeks() -> u32 {
    24
}

fn default_learning_style() -> Option<String> {
    Some("mixto".to_string())
}
