//! Strict schema validation of sanitized completion output.
//!
//! The prompt already specifies the schema, but the model is untrusted with
//! respect to structure: a malformed plan persisted downstream is worse than
//! a failed request, so every violation is a rejection. Nothing is coerced
//! and nothing is retried here.

use std::ops::RangeInclusive;

use crate::errors::GenerationError;
use crate::models::plan::{CareerPlan, Difficulty, Phase};

/// Accepted `total_weeks` range for questionnaire-driven plans.
pub const QUESTIONNAIRE_WEEKS: RangeInclusive<u32> = 1..=104;

/// Accepted `total_weeks` range for plans generated from a free-text
/// message. The prompt for that flow instructs the model to stay in [12, 52],
/// so the validator holds it to that. Kept separate from
/// [`QUESTIONNAIRE_WEEKS`] on purpose; the two flows document different
/// ranges and neither is derived from the other.
pub const FROM_MESSAGE_WEEKS: RangeInclusive<u32> = 12..=52;

const MIN_PHASES: usize = 4;
const MAX_PHASES: usize = 5;
const MIN_LEARNING_ITEMS: usize = 10;
const PROJECTS_PER_PHASE: usize = 3;
const MIN_RESOURCES: usize = 3;
const MAX_RESOURCES: usize = 5;

/// Parses sanitized text as JSON and validates it into a [`CareerPlan`].
///
/// Text that does not parse at all yields `MalformedJson` with a bounded
/// excerpt; JSON that parses but breaks the plan shape or any structural
/// invariant yields `SchemaViolation` naming the offending path and rule.
pub fn validate_plan(
    sanitized: &str,
    total_weeks: RangeInclusive<u32>,
) -> Result<CareerPlan, GenerationError> {
    let value: serde_json::Value = serde_json::from_str(sanitized)
        .map_err(|e| GenerationError::malformed_json(sanitized, &e))?;

    let plan: CareerPlan = serde_json::from_value(value)
        .map_err(|e| GenerationError::violation("$", e.to_string()))?;

    check_plan(&plan, &total_weeks)?;
    Ok(plan)
}

fn check_plan(plan: &CareerPlan, total_weeks: &RangeInclusive<u32>) -> Result<(), GenerationError> {
    if plan.plan_title.trim().is_empty() {
        return Err(GenerationError::violation(
            "plan_title",
            "must be a non-empty string",
        ));
    }

    if !total_weeks.contains(&plan.total_weeks) {
        return Err(GenerationError::violation(
            "total_weeks",
            format!(
                "must lie in [{}, {}], got {}",
                total_weeks.start(),
                total_weeks.end(),
                plan.total_weeks
            ),
        ));
    }

    if plan.phases.len() < MIN_PHASES || plan.phases.len() > MAX_PHASES {
        return Err(GenerationError::violation(
            "phases",
            format!(
                "must contain {MIN_PHASES}-{MAX_PHASES} phases, got {}",
                plan.phases.len()
            ),
        ));
    }

    for (index, phase) in plan.phases.iter().enumerate() {
        check_phase(index, phase)?;
    }

    Ok(())
}

fn check_phase(index: usize, phase: &Phase) -> Result<(), GenerationError> {
    let at = |field: &str| format!("phases[{index}].{field}");

    if phase.id < 1 {
        return Err(GenerationError::violation(at("id"), "must be >= 1"));
    }
    if phase.title.trim().is_empty() {
        return Err(GenerationError::violation(
            at("title"),
            "must be a non-empty string",
        ));
    }
    if phase.duration_weeks < 1 {
        return Err(GenerationError::violation(
            at("duration_weeks"),
            "must be a positive number of weeks",
        ));
    }
    if phase.learning_items.len() < MIN_LEARNING_ITEMS {
        return Err(GenerationError::violation(
            at("learning_items"),
            format!(
                "must list at least {MIN_LEARNING_ITEMS} items, got {}",
                phase.learning_items.len()
            ),
        ));
    }

    if phase.projects.len() != PROJECTS_PER_PHASE {
        return Err(GenerationError::violation(
            at("projects"),
            format!(
                "must contain exactly {PROJECTS_PER_PHASE} projects, got {}",
                phase.projects.len()
            ),
        ));
    }

    // One project per tier, each tier exactly once.
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let count = phase
            .projects
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .count();
        if count != 1 {
            return Err(GenerationError::violation(
                at("projects"),
                format!(
                    "difficulty '{}' must appear exactly once, got {count}",
                    difficulty.as_str()
                ),
            ));
        }
    }

    for (j, project) in phase.projects.iter().enumerate() {
        let (min, max) = project.difficulty.requirement_bounds();
        let got = project.requirements.len();
        if got < min || got > max {
            return Err(GenerationError::violation(
                at(&format!("projects[{j}].requirements")),
                format!(
                    "'{}' project must list {min}-{max} requirements, got {got}",
                    project.difficulty.as_str()
                ),
            ));
        }
    }

    if phase.resources.len() < MIN_RESOURCES || phase.resources.len() > MAX_RESOURCES {
        return Err(GenerationError::violation(
            at("resources"),
            format!(
                "must contain {MIN_RESOURCES}-{MAX_RESOURCES} resources, got {}",
                phase.resources.len()
            ),
        ));
    }

    Ok(())
}
