//! Per-call generation knobs and the fixed profiles used by the service.

/// Sampling/budget knobs for a single generation call.
///
/// Mirrors the subset of the upstream `generationConfig` the service relies
/// on. Unset fields are omitted from the request and fall back to the
/// model's own defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,

    /// Maximum number of tokens to generate.
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Grounded-answer profile: moderate temperature, bounded output.
    pub fn answer() -> Self {
        Self {
            temperature: Some(0.2),
            top_p: Some(0.95),
            max_output_tokens: Some(768),
        }
    }

    /// Enlarged-budget profile for the single truncation retry of the
    /// answer pipeline.
    pub fn answer_retry() -> Self {
        Self {
            temperature: Some(0.2),
            top_p: None,
            max_output_tokens: Some(1024),
        }
    }

    /// Deterministic profile for label classification.
    pub fn deterministic() -> Self {
        Self {
            temperature: Some(0.0),
            top_p: Some(1.0),
            max_output_tokens: Some(256),
        }
    }

    /// Mildly creative profile for short social-media posts.
    pub fn posts() -> Self {
        Self {
            temperature: Some(0.2),
            top_p: Some(0.95),
            max_output_tokens: Some(256),
        }
    }
}
