//! Model trait seams and the softened-prompt retry wrapper.
//!
//! [`GenerativeModel`] and [`TextEmbedder`] are the two async seams the rest
//! of the workspace depends on; [`VertexService`](crate::VertexService)
//! implements both. [`generate_text_with_retry`] wraps a model call with one
//! bounded retry for the case where a legitimate civic-service prompt comes
//! back empty because of alarming vocabulary.

use async_trait::async_trait;
use tracing::debug;

use crate::config::gen_config::GenerationConfig;
use crate::error_handler::Result;
use crate::response::{GenerateContentResponse, safe_text};

/// Text-generation seam.
///
/// Implementations must be cheap to share (`Arc`) and safe to call
/// concurrently.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Performs one generation call and returns the raw response shape.
    async fn generate_content(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerateContentResponse>;
}

/// Embedding seam used by the retrieval layer.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Produces an embedding vector for the given text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// One literal phrase replacement applied when softening a prompt.
#[derive(Debug, Clone, Copy)]
pub struct SoftenRule {
    /// Phrase to replace.
    pub from: &'static str,
    /// Milder stand-in.
    pub to: &'static str,
}

/// Stock substitution table: alarming vocabulary that shows up in
/// legitimate government-service prompts, mapped to milder synonyms.
///
/// Held as data rather than hard-coded branches so deployments can supply
/// their own table.
pub const DEFAULT_SOFTEN_RULES: &[SoftenRule] = &[
    SoftenRule {
        from: "Emergency alert",
        to: "Public notice",
    },
    SoftenRule {
        from: "boil-water",
        to: "water advisory",
    },
    SoftenRule {
        from: "gas",
        to: "odor",
    },
    SoftenRule {
        from: "fire",
        to: "urgent situation",
    },
];

/// Applies every rule in order to produce the softened prompt.
pub fn soften_prompt(prompt: &str, rules: &[SoftenRule]) -> String {
    let mut out = prompt.to_string();
    for rule in rules {
        out = out.replace(rule.from, rule.to);
    }
    out
}

/// Calls the model once and extracts safe text; on empty output, retries
/// exactly once with a softened prompt.
///
/// The softened retry is a single best-effort attempt, not a loop: at most
/// 2 model invocations. Residual emptiness is returned as `""`, never
/// escalated.
///
/// # Errors
/// Propagates transport/decoding errors from the model client. Extraction
/// itself never fails.
pub async fn generate_text_with_retry(
    model: &dyn GenerativeModel,
    prompt: &str,
    config: &GenerationConfig,
    rules: &[SoftenRule],
) -> Result<String> {
    let resp = model.generate_content(prompt, config).await?;
    let out = safe_text(&resp);
    if !out.is_empty() {
        return Ok(out);
    }

    // Retry once with slightly safer phrasing.
    debug!("empty generation, retrying with softened prompt");
    let softened = soften_prompt(prompt, rules);
    let resp2 = model.generate_content(&softened, config).await?;
    Ok(safe_text(&resp2))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted model: pops one canned text per call and records prompts.
    struct ScriptedModel {
        script: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn new<const N: usize>(script: [&str; N]) -> Self {
            Self {
                script: Mutex::new(script.iter().map(|s| s.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate_content(
            &self,
            prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<GenerateContentResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            let next = self.script.lock().unwrap().pop_front().unwrap_or_default();
            Ok(GenerateContentResponse::from_text(&next))
        }
    }

    #[tokio::test]
    async fn non_empty_first_answer_makes_one_call() {
        let model = ScriptedModel::new(["All clear."]);
        let out = generate_text_with_retry(
            &model,
            "Status of the roads?",
            &GenerationConfig::deterministic(),
            DEFAULT_SOFTEN_RULES,
        )
        .await
        .unwrap();
        assert_eq!(out, "All clear.");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn empty_first_answer_retries_with_softened_prompt() {
        let model = ScriptedModel::new(["", "Public notice issued."]);
        let out = generate_text_with_retry(
            &model,
            "Draft an Emergency alert about a gas leak near the fire hall.",
            &GenerationConfig::posts(),
            DEFAULT_SOFTEN_RULES,
        )
        .await
        .unwrap();
        assert_eq!(out, "Public notice issued.");
        assert_eq!(model.calls(), 2);

        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[1].contains("Public notice"));
        assert!(prompts[1].contains("odor leak"));
        assert!(prompts[1].contains("urgent situation hall"));
        assert!(!prompts[1].contains("fire"));
    }

    #[tokio::test]
    async fn residual_emptiness_is_returned_not_escalated() {
        let model = ScriptedModel::new(["", ""]);
        let out = generate_text_with_retry(
            &model,
            "anything",
            &GenerationConfig::posts(),
            DEFAULT_SOFTEN_RULES,
        )
        .await
        .unwrap();
        assert_eq!(out, "");
        assert_eq!(model.calls(), 2);
    }

    #[test]
    fn soften_prompt_applies_all_rules() {
        let softened = soften_prompt(
            "Emergency alert: boil-water order, gas smell, fire risk.",
            DEFAULT_SOFTEN_RULES,
        );
        assert_eq!(
            softened,
            "Public notice: water advisory order, odor smell, urgent situation risk."
        );
    }
}
