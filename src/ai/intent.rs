use super::gemini::{GenerationOptions, LlmClient};
use super::prompt::{build_intent_prompt, INTENT_SYSTEM_PROMPT};
use crate::models::Mode;

const INTENT_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.0,
    max_output_tokens: 50,
};

/// Classify a free-text message into an intake mode.
///
/// Never fails: a transport error or an unclear answer both default to
/// `Mode::Tanya`. Empty messages still go through the classifier; the
/// orchestrator does not special-case them.
pub fn classify_intent(llm: &dyn LlmClient, message: &str) -> Mode {
    let prompt = build_intent_prompt(message);
    match llm.generate(&prompt, INTENT_SYSTEM_PROMPT, &INTENT_OPTIONS) {
        Ok(text) if text.to_lowercase().contains("ktp") => Mode::Ktp,
        Ok(_) => Mode::Tanya,
        Err(e) => {
            tracing::warn!(error = %e, "Intent classification failed, defaulting to tanya");
            Mode::Tanya
        }
    }
}
