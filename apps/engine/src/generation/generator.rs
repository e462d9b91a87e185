//! Plan generation — the two plan flows composed end to end.
//!
//! Flow: build prompt → completion call → sanitize → strict validation.
//! Straight composition with no branching beyond error propagation; a single
//! failure at any step surfaces to the caller unretried.

use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::llm_client::sanitize::sanitize;
use crate::llm_client::{ChatMessage, CompletionApi, PLAN_OPTIONS};
use crate::models::plan::CareerPlan;
use crate::models::profile::QuestionnaireProfile;

use super::prompts::{
    build_plan_prompt, build_plan_prompt_from_message, PLAN_FROM_MESSAGE_SYSTEM, PLAN_SYSTEM,
};
use super::validator::{validate_plan, FROM_MESSAGE_WEEKS, QUESTIONNAIRE_WEEKS};

/// Generates a validated career plan from questionnaire answers.
pub async fn generate_plan(
    client: &dyn CompletionApi,
    profile: &QuestionnaireProfile,
) -> Result<CareerPlan, GenerationError> {
    let messages = vec![
        ChatMessage::system(PLAN_SYSTEM),
        ChatMessage::user(build_plan_prompt(profile)),
    ];
    debug!("requesting plan for level '{}'", profile.level.as_str());

    let raw = client.complete(&messages, PLAN_OPTIONS).await?;
    let plan = validate_plan(&sanitize(&raw), QUESTIONNAIRE_WEEKS)?;

    info!(
        "generated plan '{}' with {} phases over {} weeks",
        plan.plan_title,
        plan.phases.len(),
        plan.total_weeks
    );
    Ok(plan)
}

/// Generates a validated career plan from a single free-text message
/// ("Quiero aprender SQL y Python para ciencia de datos").
pub async fn generate_plan_from_message(
    client: &dyn CompletionApi,
    message: &str,
) -> Result<CareerPlan, GenerationError> {
    let messages = vec![
        ChatMessage::system(PLAN_FROM_MESSAGE_SYSTEM),
        ChatMessage::user(build_plan_prompt_from_message(message)),
    ];

    let raw = client.complete(&messages, PLAN_OPTIONS).await?;
    let plan = validate_plan(&sanitize(&raw), FROM_MESSAGE_WEEKS)?;

    info!(
        "generated plan '{}' from free message ({} phases)",
        plan.plan_title,
        plan.phases.len()
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::generation::fixtures::plan_value;
    use crate::llm_client::CompletionOptions;
    use crate::models::profile::Level;

    /// Scripted completion backend: returns a canned reply and counts calls.
    struct ScriptedApi {
        reply: Result<String, fn() -> GenerationError>,
        calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn replying(text: impl Into<String>) -> Self {
            Self {
                reply: Ok(text.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: fn() -> GenerationError) -> Self {
            Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionApi for ScriptedApi {
        fn is_configured(&self) -> bool {
            true
        }

        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: CompletionOptions,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn profile() -> QuestionnaireProfile {
        QuestionnaireProfile {
            level: Level::Beginner,
            interests: vec!["Python".to_string()],
            hours_per_day: 2,
            goal: "Backend".to_string(),
            timeline_weeks: 24,
            previous_experience: None,
            learning_style: None,
        }
    }

    #[tokio::test]
    async fn test_questionnaire_flow_returns_validated_plan() {
        let api = ScriptedApi::replying(plan_value(24).to_string());
        let plan = generate_plan(&api, &profile()).await.unwrap();
        assert_eq!(plan.phases.len(), 4);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fenced_completion_is_sanitized_before_validation() {
        let fenced = format!("```json\n{}\n```", plan_value(24));
        let api = ScriptedApi::replying(fenced);
        let plan = generate_plan(&api, &profile()).await.unwrap();
        assert_eq!(plan.plan_title, "Ruta Backend con Python");
    }

    #[tokio::test]
    async fn test_non_json_completion_is_classified() {
        let api = ScriptedApi::replying("Lo siento, no puedo generar eso.");
        let err = generate_plan(&api, &profile()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedJson { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_unretried() {
        let api = ScriptedApi::failing(|| GenerationError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        });
        let err = generate_plan(&api, &profile()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Api { status: 503, .. }));
        assert_eq!(api.calls.load(Ordering::SeqCst), 1, "plan flows never retry");
    }

    #[tokio::test]
    async fn test_message_flow_enforces_its_own_week_range() {
        // 8 weeks would pass the questionnaire flow but not this one.
        let api = ScriptedApi::replying(plan_value(8).to_string());
        let err = generate_plan_from_message(&api, "Quiero aprender SQL")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::SchemaViolation { ref path, .. } if path == "total_weeks"
        ));
    }

    #[tokio::test]
    async fn test_message_flow_accepts_in_range_plan() {
        let api = ScriptedApi::replying(plan_value(12).to_string());
        let plan = generate_plan_from_message(&api, "Quiero aprender SQL")
            .await
            .unwrap();
        assert_eq!(plan.total_weeks, 12);
    }
}
