//! Constrained social-media announcement drafting.

use llm_service::{DEFAULT_SOFTEN_RULES, GenerationConfig, GenerativeModel, generate_text_with_retry};
use regex::Regex;

use crate::error::ChatError;

/// Maximum announcement length in characters.
const MAX_POST_CHARS: usize = 200;

/// Phrase every announcement must carry, matched case-insensitively.
const REQUIRED_PHRASE: &str = "check for updates";

/// Generates one announcement post for `topic`.
///
/// The prompt states both hard constraints, but the contract is guaranteed
/// deterministically after the fact: collapse whitespace, append the
/// required phrase when the model ignored it, then truncate to
/// [`MAX_POST_CHARS`] characters.
///
/// # Errors
/// Returns [`ChatError::Llm`] on model-client failures.
pub async fn generate_announcement(
    model: &dyn GenerativeModel,
    topic: &str,
) -> Result<String, ChatError> {
    let prompt = format!(
        r#"Write ONE professional government social media post.

Rules:
- Max 200 characters
- MUST include the exact phrase: "Check for updates"
- Output ONLY the post text

Topic: {topic}
Post:"#
    );

    let raw = generate_text_with_retry(
        model,
        &prompt,
        &GenerationConfig::posts(),
        DEFAULT_SOFTEN_RULES,
    )
    .await?;

    let ws = Regex::new(r"\s+").unwrap();
    let mut post = ws.replace_all(raw.trim(), " ").into_owned();

    if !post.to_lowercase().contains(REQUIRED_PHRASE) {
        if post.is_empty() {
            post = "Check for updates.".to_string();
        } else {
            if !post.ends_with(['.', '!', '?']) {
                post.push('.');
            }
            post = format!("{post} Check for updates.");
        }
    }

    Ok(post.chars().take(MAX_POST_CHARS).collect())
}
