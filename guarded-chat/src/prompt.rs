//! Prompt builders: context block assembly and the grounded-answer prompt.

use chunk_store::RetrievedChunk;

/// Canonical no-information answer. Exempt from the citation requirement.
pub const SENTINEL: &str = "I don't have enough information in the provided documents.";

/// Appended to the user question for the single citation-triggered re-ask.
pub const CITATION_HINT: &str = " (Include citations like [doc_path#chunk_id].)";

/// Delimiter between passages in the context block.
const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Builds the context block: each chunk's citation tag followed by its
/// text, in store-ranked order.
pub fn build_context(hits: &[RetrievedChunk]) -> String {
    hits.iter()
        .map(|chunk| format!("{}\n{}", chunk.citation(), chunk.chunk_text))
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// Builds the grounded-answer prompt.
///
/// The instructions pin down the three contracts the validator relies on:
/// the verbatim sentinel for insufficient context, inline citation markers,
/// and complete sentences.
pub fn build_answer_prompt(question: &str, context: &str) -> String {
    format!(
        r#"You are the Alaska Department of Snow online assistant.
Use ONLY the context below.

Requirements:
- If the answer is not in the context, say exactly:
  "{SENTINEL}"
- Add inline citations like [doc_path#chunk_id] after each key fact.
- Write 2–6 sentences. End with a complete sentence.

User question:
{question}

Context:
{context}

Answer:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(doc_path: &str, chunk_id: u32, text: &str) -> RetrievedChunk {
        RetrievedChunk {
            doc_path: doc_path.into(),
            chunk_id,
            chunk_text: text.into(),
            distance: 0.1,
        }
    }

    #[test]
    fn context_block_tags_and_separates_chunks() {
        let hits = vec![
            chunk("plowing/routes.txt", 0, "Priority roads first."),
            chunk("plowing/faq.txt", 4, "Residential streets follow."),
        ];
        let ctx = build_context(&hits);
        assert_eq!(
            ctx,
            "[plowing/routes.txt#0]\nPriority roads first.\n\n---\n\n[plowing/faq.txt#4]\nResidential streets follow."
        );
    }

    #[test]
    fn empty_retrieval_yields_empty_context() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn answer_prompt_carries_sentinel_question_and_context() {
        let prompt = build_answer_prompt("When is my street plowed?", "[a.txt#0]\nAt night.");
        assert!(prompt.contains(SENTINEL));
        assert!(prompt.contains("When is my street plowed?"));
        assert!(prompt.contains("[a.txt#0]\nAt night."));
        assert!(prompt.starts_with("You are the Alaska Department of Snow online assistant."));
        assert!(prompt.ends_with("Answer:"));
    }
}
