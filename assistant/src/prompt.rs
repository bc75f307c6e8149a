//! System prompts for the two assistant surfaces.

/// Persona for the floating chat widget on the dashboard.
pub const DASHBOARD_ASSISTANT_PROMPT: &str = "You are an AI assistant for a transformer thermal-inspection dashboard.\n\
     Answer questions about transformers, inspection records, maintenance schedules, and overall system health.\n\
     Ground every answer in the context below; when the context does not cover a question, say so instead of guessing.\n\
     Keep replies short and factual.";

/// Persona for the inline analysis panel on the inspection detail view.
pub const INSPECTION_ANALYST_PROMPT: &str = "You are a thermal-inspection analysis assistant.\n\
     Interpret the inspection context below: relate thermal findings to the baseline image, explain each detected \
     anomaly and its confidence, and suggest concrete maintenance follow-ups.\n\
     Be specific about which anomaly each statement refers to.\n\
     Keep replies short and factual.";

/// Concatenate a surface prompt and a rendered context block into the single
/// system message sent with every request.
#[must_use]
pub fn compose_system(prompt: &str, context_block: &str) -> String {
    format!("{prompt}\n\n{context_block}")
}
