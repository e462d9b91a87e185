//! Conversational reply flow.
//!
//! The one flow that degrades instead of failing: a conversational UI must
//! always show something, so every failure maps to user-facing text and the
//! function never returns an error.

use tracing::warn;

use crate::errors::GenerationError;
use crate::llm_client::{CompletionApi, CHAT_OPTIONS};
use crate::models::chat::{ChatTurn, UserContext};

use super::context::assemble;

/// Shown when no API credential is configured. Returned before any network
/// call is attempted.
pub const UNCONFIGURED_REPLY: &str = "⚠️ El backend no tiene configurada GROQ_API_KEY. \
    Añade GROQ_API_KEY en el archivo .env y reinicia el servicio.";

/// Shown when the service answered successfully but with empty content.
pub const EMPTY_REPLY: &str = "La IA no generó respuesta. Intenta de nuevo.";

/// Produces the mentor's reply to `message` given the user's progress
/// projection and conversation history. Always returns text.
pub async fn conversational_reply(
    client: &dyn CompletionApi,
    context: &UserContext,
    history: &[ChatTurn],
    message: &str,
) -> String {
    if !client.is_configured() {
        return UNCONFIGURED_REPLY.to_string();
    }

    let messages = assemble(context, history, message);

    match client.complete(&messages, CHAT_OPTIONS).await {
        Ok(text) => text,
        Err(GenerationError::EmptyResponse) => EMPTY_REPLY.to_string(),
        Err(e) => {
            warn!("conversational completion failed: {e}");
            format!(
                "Error del servicio de IA: {e}. \
                Revisa tu API key en .env y que el modelo esté disponible."
            )
        }
    }
}
