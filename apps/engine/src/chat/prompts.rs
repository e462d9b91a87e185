//! Mentor system prompt for the conversational flow.

use crate::models::chat::UserContext;

const MENTOR_SYSTEM_TEMPLATE: &str = r#"Eres un mentor experto en programación muy amigable, motivador y útil.

**Contexto del Usuario:**
- Plan de carrera: {plan_title}
- Fase actual: {current_phase}
- Progreso general: {progress_percentage}%
- Proyectos completados: {completed_projects}
- Últimos desafíos: {recent_challenges}

**Tu Rol y Estilo:**
- Ayudar con dudas técnicas de forma clara y práctica
- Motivar constantemente con energía positiva
- Explicar conceptos complejos de forma simple
- Sugerir recursos útiles cuando sea relevante
- Revisar código si lo comparten
- Dar feedback constructivo
- Usar emojis ocasionalmente (1-2 por mensaje) para ser amigable
- Ser conciso pero completo (máximo 4 párrafos cortos)

**Reglas:**
- Siempre en español
- Si no sabes algo, admítelo y sugiere dónde buscar
- Enfócate en soluciones prácticas
- Relaciona tus respuestas con su plan cuando sea relevante
- Celebra sus logros"#;

/// Renders the mentor system prompt, filling a fixed fallback for every
/// missing context field so the prompt reads the same for brand-new users.
pub fn build_mentor_system_prompt(context: &UserContext) -> String {
    MENTOR_SYSTEM_TEMPLATE
        .replace(
            "{plan_title}",
            context
                .plan_title
                .as_deref()
                .unwrap_or("Aún no tiene plan definido"),
        )
        .replace(
            "{current_phase}",
            context
                .current_phase
                .as_deref()
                .unwrap_or("Inicio del camino"),
        )
        .replace(
            "{progress_percentage}",
            &context.progress_percentage.unwrap_or(0).to_string(),
        )
        .replace(
            "{completed_projects}",
            &context.completed_projects.unwrap_or(0).to_string(),
        )
        .replace(
            "{recent_challenges}",
            context
                .recent_challenges
                .as_deref()
                .unwrap_or("No reportados aún"),
        )
}
