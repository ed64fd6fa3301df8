//! The retrieval-and-answer cycle.

use llm_service::{GenerationConfig, GenerativeModel, safe_text};
use tracing::debug;

use chunk_store::RetrievedChunk;

use crate::error::ChatError;
use crate::prompt::{build_answer_prompt, build_context};
use crate::retrieve::ChunkRetriever;

/// Answer text plus the retrieval metadata kept for logging.
#[derive(Clone, Debug)]
pub struct RagOutcome {
    pub answer: String,
    pub retrieved: Vec<RetrievedChunk>,
}

/// Produces a grounded answer for `question`.
///
/// Retrieves `top_k` chunks, assembles the citation-tagged context block,
/// and generates with the answer profile. An empty result, or a non-empty
/// result without terminal punctuation (truncation), triggers exactly one
/// more call with a larger output budget; that second result is kept only
/// when non-empty. At most 2 model invocations per call.
///
/// # Errors
/// Propagates retrieval and model-client failures.
pub async fn rag_answer(
    model: &dyn GenerativeModel,
    retriever: &dyn ChunkRetriever,
    question: &str,
    top_k: u64,
) -> Result<RagOutcome, ChatError> {
    let hits = retriever.retrieve(question, top_k).await?;
    let context = build_context(&hits);
    let prompt = build_answer_prompt(question, &context);

    let resp = model
        .generate_content(&prompt, &GenerationConfig::answer())
        .await?;
    let mut answer = safe_text(&resp);

    // Retry once if empty/truncated.
    if answer.is_empty() || !ends_with_terminal(&answer) {
        debug!("answer empty or truncated, retrying with larger budget");
        let resp2 = model
            .generate_content(&prompt, &GenerationConfig::answer_retry())
            .await?;
        let answer2 = safe_text(&resp2);
        if !answer2.is_empty() {
            answer = answer2;
        }
    }

    Ok(RagOutcome {
        answer,
        retrieved: hits,
    })
}

fn ends_with_terminal(s: &str) -> bool {
    s.ends_with(['.', '!', '?'])
}
