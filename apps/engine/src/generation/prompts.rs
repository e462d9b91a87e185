//! Prompt constants and builders for plan generation.
//!
//! Templates use `{placeholder}` substitution instead of `format!` because
//! they embed a literal JSON exemplar full of braces. The rendered text fully
//! specifies the output contract the validator later enforces: 4-5 phases,
//! 10+ learning items, exactly 3 tiered projects, 3-5 resources, JSON only.

use crate::models::profile::QuestionnaireProfile;

/// System prompt for questionnaire-driven plan generation.
pub const PLAN_SYSTEM: &str = "Eres un experto mentor en programación. \
    Respondes SIEMPRE en español con JSON válido sin markdown.";

/// System prompt for free-message plan generation.
pub const PLAN_FROM_MESSAGE_SYSTEM: &str = "Eres un experto en planes de carrera. \
    Respondes SIEMPRE en español con JSON válido sin markdown.";

/// Fallback interests when the questionnaire arrives with an empty list.
pub const DEFAULT_INTERESTS: &[&str] = &["Python", "SQL"];

const PLAN_PROMPT_TEMPLATE: &str = r#"Eres un experto mentor en tecnología y desarrollo de carrera. Genera un plan de carrera personalizado DETALLADO en formato JSON válido.

**Perfil del Usuario:**
- Nivel actual: {level}
- Tecnologías de interés: {interests}
- Tiempo disponible diario: {hours_per_day} horas
- Objetivo principal: {goal}
- Plazo deseado: {timeline_weeks} semanas
- Experiencia previa: {previous_experience}
- Estilo de aprendizaje preferido: {learning_style}

**INSTRUCCIONES:**
Crea un plan estructurado con 4-5 fases progresivas. Cada fase DEBE incluir:

1. **Información general:**
   - id: número de fase (1, 2, 3, 4, 5)
   - title: Título descriptivo y motivador
   - duration_weeks: Duración realista en semanas
   - description: Párrafo explicando qué se logrará en esta fase

2. **learning_items:** Array con MÍNIMO 10 objetivos específicos de aprendizaje
   - Deben ser concretos y accionables
   - Progresión de básico a avanzado

3. **projects:** Array con EXACTAMENTE 3 proyectos
   - **Proyecto Fácil:**
     * difficulty: "easy"
     * title: Nombre del proyecto
     * description: Qué construirá el usuario
     * requirements: Array con 5-7 requisitos técnicos específicos
     * github_tips: Consejos para documentar en GitHub
     * technologies: Array de tecnologías a usar

   - **Proyecto Medio:**
     * difficulty: "medium"
     * (misma estructura que fácil, 7-9 requisitos)

   - **Proyecto Difícil:**
     * difficulty: "hard"
     * (misma estructura que fácil, 9-12 requisitos)

4. **resources:** Array con 3-5 recursos de aprendizaje
   - title: Nombre del recurso
   - url: URL real o placeholder realista
   - type: "course" | "documentation" | "video" | "book"

**IMPORTANTE:**
- Responde ÚNICAMENTE con JSON válido
- NO incluyas markdown (```json)
- NO agregues comentarios
- Asegura que sea parseable como JSON
- Todo en español
- URLs realistas (Coursera, Udemy, YouTube, docs oficiales)

**FORMATO DE RESPUESTA (JSON puro):**
{
  "plan_title": "Nombre motivador del plan completo",
  "total_weeks": 24,
  "phases": [
    {
      "id": 1,
      "title": "Fase 1: Fundamentos",
      "duration_weeks": 6,
      "description": "Descripción de la fase",
      "learning_items": [
        "Item de aprendizaje 1",
        "Item de aprendizaje 2",
        "... hasta 10+"
      ],
      "projects": [
        {
          "difficulty": "easy",
          "title": "Proyecto Inicial",
          "description": "Qué se construye",
          "requirements": ["req1", "req2", "req3", "req4", "req5"],
          "github_tips": "Consejos para el README",
          "technologies": ["tech1", "tech2"]
        },
        {
          "difficulty": "medium",
          "title": "Proyecto Intermedio",
          "description": "...",
          "requirements": ["..."],
          "github_tips": "...",
          "technologies": ["..."]
        },
        {
          "difficulty": "hard",
          "title": "Proyecto Avanzado",
          "description": "...",
          "requirements": ["..."],
          "github_tips": "...",
          "technologies": ["..."]
        }
      ],
      "resources": [
        {
          "title": "Nombre del curso",
          "url": "https://ejemplo.com",
          "type": "course"
        }
      ]
    }
  ]
}"#;

const PLAN_FROM_MESSAGE_TEMPLATE: &str = r#"El usuario ha dicho lo siguiente sobre lo que quiere estudiar:

"{message}"

A partir de este mensaje, genera un plan de carrera personalizado DETALLADO en formato JSON válido:

- plan_title: nombre motivador del plan
- total_weeks: número total de semanas (entre 12 y 52)
- phases: array de 4-5 fases. Cada fase debe tener:
  - id, title, duration_weeks, description
  - learning_items: array de mínimo 10 ítems de aprendizaje concretos
  - projects: exactamente 3 proyectos (difficulty: "easy", "medium", "hard") cada uno con title, description, requirements (array), github_tips, technologies (array)
  - resources: array de 3-5 recursos con title, url, type ("course"|"documentation"|"video"|"book")

Responde ÚNICAMENTE con JSON válido, sin markdown ni comentarios. Todo en español."#;

/// Renders the questionnaire-driven instruction prompt. Pure; optional
/// profile fields fall back to fixed defaults.
pub fn build_plan_prompt(profile: &QuestionnaireProfile) -> String {
    let interests = if profile.interests.is_empty() {
        DEFAULT_INTERESTS.join(", ")
    } else {
        profile.interests.join(", ")
    };

    PLAN_PROMPT_TEMPLATE
        .replace("{level}", profile.level.as_str())
        .replace("{interests}", &interests)
        .replace("{hours_per_day}", &profile.hours_per_day.to_string())
        .replace("{goal}", &profile.goal)
        .replace("{timeline_weeks}", &profile.timeline_weeks.to_string())
        .replace(
            "{previous_experience}",
            profile.previous_experience.as_deref().unwrap_or("Ninguna"),
        )
        .replace(
            "{learning_style}",
            profile.learning_style.as_deref().unwrap_or("mixto"),
        )
}

/// Renders the free-message instruction prompt.
pub fn build_plan_prompt_from_message(message: &str) -> String {
    PLAN_FROM_MESSAGE_TEMPLATE.replace("{message}", message)
}
