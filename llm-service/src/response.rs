//! Typed model-response shape and defensive text extraction.
//!
//! Upstream responses arrive in several degenerate shapes: no candidates at
//! all (prompt blocked), a candidate with only a `finishReason`, empty part
//! lists, or parts without text. Every level of
//! [`GenerateContentResponse`] is therefore optional, and [`safe_text`] is a
//! total function over all of them.

use serde::Deserialize;

/// Response body of a `:generateContent` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates; empty when the prompt itself was rejected.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Feedback on the prompt (block reason etc.), when present.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One generated candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content; absent for blocked/empty candidates.
    #[serde(default)]
    pub content: Option<Content>,

    /// Reason generation stopped (e.g., `STOP`, `SAFETY`, `MAX_TOKENS`).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate: an ordered list of parts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,

    #[serde(default)]
    pub role: Option<String>,
}

/// A single content fragment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// Prompt-level feedback attached to a response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Builds a minimal single-part response carrying `text`.
    ///
    /// Used by stub models in tests and by callers that need to feed
    /// synthetic responses through the extraction path.
    pub fn from_text(text: &str) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                    role: Some("model".to_string()),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
        }
    }
}

/// Extracts the response text, or `""` when none is present.
///
/// Never fails, whatever the response shape. Implemented as an ordered
/// chain of fallible extractors with first-success-wins semantics:
///
/// 1. [`direct_text`] — the single-part fast path.
/// 2. [`joined_parts`] — concatenation of the first candidate's fragments.
pub fn safe_text(resp: &GenerateContentResponse) -> String {
    const EXTRACTORS: [fn(&GenerateContentResponse) -> Option<String>; 2] =
        [direct_text, joined_parts];

    EXTRACTORS
        .iter()
        .find_map(|extract| extract(resp))
        .unwrap_or_default()
}

/// Fast path: exactly one part on the first candidate, with non-empty text.
fn direct_text(resp: &GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    match content.parts.as_slice() {
        [only] => {
            let t = only.text.as_deref()?.trim();
            if t.is_empty() { None } else { Some(t.to_string()) }
        }
        _ => None,
    }
}

/// Fallback: join every text fragment of the first candidate.
fn joined_parts(resp: &GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    let joined = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<String>();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_single_part() {
        let resp = GenerateContentResponse::from_text("  hello world  ");
        assert_eq!(safe_text(&resp), "hello world");
    }

    #[test]
    fn empty_response_yields_empty_string() {
        let resp = GenerateContentResponse::default();
        assert_eq!(safe_text(&resp), "");
    }

    #[test]
    fn blocked_candidate_yields_empty_string() {
        // SAFETY stop with no content at all.
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".to_string()),
            }],
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("SAFETY".to_string()),
            }),
        };
        assert_eq!(safe_text(&resp), "");
    }

    #[test]
    fn multi_part_candidate_is_joined() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part {
                            text: Some("Plows run ".to_string()),
                        },
                        Part { text: None },
                        Part {
                            text: Some("nightly.".to_string()),
                        },
                    ],
                    role: None,
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
        };
        assert_eq!(safe_text(&resp), "Plows run nightly.");
    }

    #[test]
    fn whitespace_only_parts_yield_empty_string() {
        let resp = GenerateContentResponse::from_text("   \n  ");
        assert_eq!(safe_text(&resp), "");
    }

    #[test]
    fn decodes_camel_case_payload() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "ok"}], "role": "model"},
                 "finishReason": "STOP"}
            ],
            "promptFeedback": {"blockReason": null}
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(safe_text(&resp), "ok");
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }
}
