use super::gemini::{GenerationOptions, LlmClient};
use super::prompt::{build_qa_prompt, QA_SYSTEM_PROMPT};

/// Fixed apology returned when no answer could be generated. The
/// orchestrator passes it through verbatim and invents no fallback of
/// its own.
pub const QA_FALLBACK: &str = "Maaf, saya belum menemukan jawabannya.";

const QA_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    max_output_tokens: 500,
};

/// Answer a public-administration question. Never fails; an error or an
/// empty generation yields `QA_FALLBACK`.
pub fn answer_question(llm: &dyn LlmClient, question: &str) -> String {
    let prompt = build_qa_prompt(question);
    match llm.generate(&prompt, QA_SYSTEM_PROMPT, &QA_OPTIONS) {
        Ok(text) => {
            let answer = text.trim();
            if answer.is_empty() {
                QA_FALLBACK.to_string()
            } else {
                answer.to_string()
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Answer generation failed, returning fallback");
            QA_FALLBACK.to_string()
        }
    }
}
