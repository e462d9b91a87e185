//! Bounded chat-context assembly for the conversational flow.

use crate::llm_client::ChatMessage;
use crate::models::chat::{ChatTurn, UserContext};

use super::prompts::build_mentor_system_prompt;

/// Most recent history turns included in a request.
pub const HISTORY_WINDOW: usize = 8;

/// Assembles the outbound message sequence: mentor system turn, the last
/// [`HISTORY_WINDOW`] stored turns oldest-first with roles mapped directly,
/// and the current user message as the final entry. Pure.
pub fn assemble(context: &UserContext, history: &[ChatTurn], message: &str) -> Vec<ChatMessage> {
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut messages = Vec::with_capacity(history.len() - window_start + 2);
    messages.push(ChatMessage::system(build_mentor_system_prompt(context)));
    for turn in &history[window_start..] {
        messages.push(ChatMessage::new(turn.role.as_str(), turn.content.clone()));
    }
    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::chat::ChatRole;

    fn turn(role: ChatRole, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn history(len: usize) -> Vec<ChatTurn> {
        (0..len)
            .map(|i| {
                let role = if i % 2 == 0 {
                    ChatRole::User
                } else {
                    ChatRole::Assistant
                };
                turn(role, &format!("turno {i}"))
            })
            .collect()
    }

    #[test]
    fn test_eleven_turns_window_to_last_eight() {
        let history = history(11);
        let messages = assemble(&UserContext::default(), &history, "¿y ahora?");

        // system + 8 windowed turns + current message
        assert_eq!(messages.len(), 10);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "turno 3");
        assert_eq!(messages[8].content, "turno 10");
        assert_eq!(messages[9].role, "user");
        assert_eq!(messages[9].content, "¿y ahora?");
    }

    #[test]
    fn test_short_history_is_kept_whole() {
        let history = history(3);
        let messages = assemble(&UserContext::default(), &history, "hola");
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[1].content, "turno 0");
    }

    #[test]
    fn test_roles_map_directly() {
        let history = vec![
            turn(ChatRole::User, "pregunta"),
            turn(ChatRole::Assistant, "respuesta"),
        ];
        let messages = assemble(&UserContext::default(), &history, "otra");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
    }

    #[test]
    fn test_empty_history_still_has_system_and_message() {
        let messages = assemble(&UserContext::default(), &[], "hola");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "hola");
    }
}
