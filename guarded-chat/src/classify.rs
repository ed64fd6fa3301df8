//! Question classification into a fixed label set.

use llm_service::{DEFAULT_SOFTEN_RULES, GenerationConfig, GenerativeModel, generate_text_with_retry};
use tracing::debug;

use crate::error::ChatError;

/// The fixed category set for resident questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Employment,
    GeneralInformation,
    EmergencyServices,
    TaxRelated,
}

impl Category {
    /// The exact label text downstream systems match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Employment => "Employment",
            Category::GeneralInformation => "General Information",
            Category::EmergencyServices => "Emergency Services",
            Category::TaxRelated => "Tax Related",
        }
    }

    /// Parses a normalized label, accepting the common shortenings the
    /// model tends to emit.
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Employment" => Some(Category::Employment),
            "General Information" => Some(Category::GeneralInformation),
            "Emergency Services" | "Emergency" => Some(Category::EmergencyServices),
            "Tax Related" | "Tax" | "Taxes" => Some(Category::TaxRelated),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a resident question into exactly one [`Category`].
///
/// One constrained generation call with the deterministic profile, then
/// punctuation stripping and synonym normalization. Output outside the
/// label set fails with [`ChatError::UnexpectedCategory`] carrying the raw
/// text — downstream label matching must never receive a silently coerced
/// default.
///
/// # Errors
/// - [`ChatError::Llm`] on model-client failures
/// - [`ChatError::UnexpectedCategory`] when the output is not a label
pub async fn classify_question(
    model: &dyn GenerativeModel,
    question: &str,
) -> Result<Category, ChatError> {
    let prompt = format!(
        r#"Classify the question into EXACTLY one of these labels:
Employment
General Information
Emergency Services
Tax Related

Rules:
- Output ONLY the exact label text above.
- No extra words, punctuation, or explanation.

Question: {question}
Output:"#
    );

    let out = generate_text_with_retry(
        model,
        &prompt,
        &GenerationConfig::deterministic(),
        DEFAULT_SOFTEN_RULES,
    )
    .await?;

    let normalized = out.replace('.', "").trim().to_string();
    debug!("classifier raw output: {normalized:?}");

    Category::from_label(&normalized).ok_or(ChatError::UnexpectedCategory { raw: normalized })
}
