//! Career-plan generation core.
//!
//! Builds deterministic Spanish prompts from questionnaire answers or free
//! text, calls a chat-completion service, defensively extracts and validates
//! the JSON plan the model returns, and assembles bounded context for the
//! conversational mentor flow. Routing, persistence and identity live in
//! external collaborators; this crate hands back a validated [`models::plan::CareerPlan`]
//! or a reply string and holds no state of its own.

pub mod chat;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
