//! Prompt texts sent to the model.

/// System prompt for `TransformMode::Transition`.
pub const TRANSITION_SYSTEM_PROMPT: &str = "You are the friendly assistant of a customer \
survey. Reply to the customer's last answer with one short, warm sentence that acknowledges \
it. Do not ask any question and do not mention that you are an assistant.";

/// System prompt for `TransformMode::Gamify`.
pub const GAMIFY_SYSTEM_PROMPT: &str = "You turn survey answers into playful, game-like \
feedback, like a quiz host awarding points. Answer in at most two short sentences.";

/// The user prompt for `TransformMode::Gamify`.
pub fn gamify_prompt(question: &str, answer: &str) -> String {
    format!("Q: {question}\nA: {answer}\nGamify this:")
}
