use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a stored conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One stored turn of the conversation log. The log itself is owned by the
/// persistence collaborator; this core only reads a bounded window of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Read projection of the user's plan progress, assembled per request by the
/// caller from external state. Every field is optional; the chat system
/// prompt renders a fixed fallback for each missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub plan_title: Option<String>,
    pub current_phase: Option<String>,
    pub progress_percentage: Option<u8>,
    pub completed_projects: Option<u32>,
    pub recent_challenges: Option<String>,
}
