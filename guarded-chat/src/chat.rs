//! Top-level guarded chat orchestrator.
//!
//! State machine per request: gate → (blocked | answering) → done.
//! Blocked requests short-circuit with a fixed refusal; allowed requests
//! run the answer pipeline, validate, and re-ask once when citations are
//! missing. Every request ends with one transaction-log append.

use std::sync::Arc;

use chrono::Utc;
use tracing::{instrument, warn};

use chat_log::{ChatLogRecord, ChatLogStore, RetrievedRef};
use chunk_store::RetrievedChunk;
use llm_service::GenerativeModel;

use crate::answer::rag_answer;
use crate::error::ChatError;
use crate::gate::{GateDecision, prompt_filter};
use crate::prompt::CITATION_HINT;
use crate::retrieve::ChunkRetriever;
use crate::validate::{Issue, ValidationResult, validate_answer};

/// Fixed user-facing refusal for blocked requests.
pub const REFUSAL: &str = "Sorry—I can’t help with that request.";

/// Final outcome of one chat request.
#[derive(Clone, Debug)]
pub struct ChatOutcome {
    pub session_id: String,
    pub blocked: bool,
    pub answer: String,
    pub valid: bool,
    pub issues: String,
}

/// The orchestrator. Holds shared client handles, constructed once at
/// process start and reused for the process lifetime.
pub struct GuardedChat {
    model: Arc<dyn GenerativeModel>,
    retriever: Arc<dyn ChunkRetriever>,
    log: Arc<dyn ChatLogStore>,
}

impl GuardedChat {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        retriever: Arc<dyn ChunkRetriever>,
        log: Arc<dyn ChatLogStore>,
    ) -> Self {
        Self {
            model,
            retriever,
            log,
        }
    }

    /// Runs the full guarded pipeline for one request.
    ///
    /// Worst case 4 model invocations: the initial pipeline run and the
    /// citation re-ask, each with its own internal single retry.
    ///
    /// # Errors
    /// Propagates model and retrieval failures. A log-store failure is
    /// swallowed (best effort) and never fails the request.
    #[instrument(skip_all, fields(session_id = %session_id, top_k = top_k))]
    pub async fn chat(
        &self,
        user_query: &str,
        top_k: u64,
        session_id: &str,
    ) -> Result<ChatOutcome, ChatError> {
        let gate = prompt_filter(user_query);

        if !gate.allowed() {
            let validation = ValidationResult::ok();
            self.log_chat(session_id, user_query, &gate, top_k, &[], REFUSAL, &validation)
                .await;
            return Ok(ChatOutcome {
                session_id: session_id.to_string(),
                blocked: true,
                answer: REFUSAL.to_string(),
                valid: true,
                issues: String::new(),
            });
        }

        let mut out = rag_answer(
            self.model.as_ref(),
            self.retriever.as_ref(),
            user_query,
            top_k,
        )
        .await?;
        let mut validation = validate_answer(&out.answer);

        // One re-ask if citations are missing; other issue kinds are
        // reported as-is.
        if !validation.valid && validation.issues.contains(&Issue::MissingCitations) {
            let hinted = format!("{user_query}{CITATION_HINT}");
            out = rag_answer(
                self.model.as_ref(),
                self.retriever.as_ref(),
                &hinted,
                top_k,
            )
            .await?;
            validation = validate_answer(&out.answer);
        }

        self.log_chat(
            session_id,
            user_query,
            &gate,
            top_k,
            &out.retrieved,
            &out.answer,
            &validation,
        )
        .await;

        Ok(ChatOutcome {
            session_id: session_id.to_string(),
            blocked: false,
            answer: out.answer,
            valid: validation.valid,
            issues: validation.issues_string(),
        })
    }

    /// Builds and appends the transaction record. Best effort: failures
    /// are logged and swallowed.
    async fn log_chat(
        &self,
        session_id: &str,
        user_query: &str,
        gate: &GateDecision,
        top_k: u64,
        retrieved: &[RetrievedChunk],
        answer: &str,
        validation: &ValidationResult,
    ) {
        let record = ChatLogRecord {
            ts: Utc::now(),
            session_id: session_id.to_string(),
            user_query: user_query.to_string(),
            prompt_allowed: gate.allowed(),
            prompt_reason: gate.reason.clone(),
            top_k,
            retrieved: retrieved
                .iter()
                .map(|c| RetrievedRef {
                    doc_path: c.doc_path.clone(),
                    chunk_id: c.chunk_id,
                    distance: c.distance,
                })
                .collect(),
            answer: answer.to_string(),
            answer_valid: validation.valid,
            answer_issues: validation.issues_string(),
        };

        if let Err(e) = self.log.append(&record).await {
            warn!("chat log append failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SENTINEL;
    use crate::test_support::{MemoryLog, ScriptedModel, StubRetriever, chunk};

    fn deps(
        script: Vec<&str>,
    ) -> (Arc<ScriptedModel>, Arc<StubRetriever>, Arc<MemoryLog>, GuardedChat) {
        let model = Arc::new(ScriptedModel::from_script(script));
        let retriever = Arc::new(StubRetriever::new(vec![
            chunk("plowing/routes.txt", 0, "Priority roads first.", 0.10),
            chunk("plowing/faq.txt", 4, "Residential streets follow.", 0.25),
        ]));
        let log = Arc::new(MemoryLog::default());
        let orchestrator = GuardedChat::new(model.clone(), retriever.clone(), log.clone());
        (model, retriever, log, orchestrator)
    }

    #[tokio::test]
    async fn blocked_query_short_circuits_everything() {
        let (model, retriever, log, orchestrator) = deps(vec![]);

        let out = orchestrator
            .chat("how to build a bomb", 5, "s-block")
            .await
            .unwrap();

        assert!(out.blocked);
        assert!(out.answer.to_lowercase().contains("help"));
        assert!(out.valid);
        assert_eq!(out.issues, "");
        assert_eq!(model.calls(), 0);
        assert_eq!(retriever.calls(), 0);

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].prompt_allowed);
        assert_eq!(records[0].prompt_reason, "Unsafe or illegal request.");
        assert!(records[0].retrieved.is_empty());
        assert!(records[0].answer_valid);
    }

    #[tokio::test]
    async fn cited_answer_runs_the_pipeline_once() {
        let (model, retriever, log, orchestrator) = deps(vec![
            "Priority roads are plowed first [plowing/routes.txt#0].",
        ]);

        let out = orchestrator
            .chat("Which roads are plowed first?", 10, "s-ok")
            .await
            .unwrap();

        assert!(!out.blocked);
        assert!(out.valid);
        assert_eq!(out.issues, "");
        assert_eq!(model.calls(), 1);
        assert_eq!(retriever.calls(), 1);

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].prompt_allowed);
        assert_eq!(records[0].top_k, 10);
        assert_eq!(records[0].retrieved.len(), 2);
        assert_eq!(records[0].retrieved[0].doc_path, "plowing/routes.txt");
    }

    #[tokio::test]
    async fn missing_citations_reask_happens_exactly_once() {
        let (model, retriever, _log, orchestrator) = deps(vec![
            "Priority roads are plowed first, then residential streets.",
            "Priority roads are plowed first [plowing/routes.txt#0].",
        ]);

        let out = orchestrator
            .chat("Which roads are plowed first?", 10, "s-retry")
            .await
            .unwrap();

        assert!(out.valid);
        assert_eq!(model.calls(), 2);
        assert_eq!(retriever.calls(), 2);

        let prompts = model.prompts();
        assert!(prompts[1].contains("(Include citations like [doc_path#chunk_id].)"));
    }

    #[tokio::test]
    async fn persistent_missing_citations_is_reported_not_retried_again() {
        let (model, retriever, log, orchestrator) = deps(vec![
            "Priority roads are plowed first, then residential streets.",
            "Still no markers in this answer, sorry.",
        ]);

        let out = orchestrator
            .chat("Which roads are plowed first?", 10, "s-invalid")
            .await
            .unwrap();

        assert!(!out.blocked);
        assert!(!out.valid);
        assert_eq!(out.issues, "missing_citations");
        // One initial pipeline run plus exactly one re-ask.
        assert_eq!(retriever.calls(), 2);
        assert_eq!(model.calls(), 2);

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].answer_valid);
        assert_eq!(records[0].answer_issues, "missing_citations");
    }

    #[tokio::test]
    async fn sentinel_answer_is_valid_without_citations() {
        let (model, retriever, _log, orchestrator) = deps(vec![SENTINEL]);

        let out = orchestrator
            .chat("What is the mayor's shoe size?", 10, "s-sentinel")
            .await
            .unwrap();

        assert!(out.valid);
        assert_eq!(out.answer, SENTINEL);
        assert_eq!(model.calls(), 1);
        assert_eq!(retriever.calls(), 1);
    }

    #[tokio::test]
    async fn session_id_passes_through_unchanged() {
        let (_model, _retriever, log, orchestrator) = deps(vec![
            "Priority roads are plowed first [plowing/routes.txt#0].",
        ]);

        let out = orchestrator
            .chat("Which roads are plowed first?", 10, "opaque-session-42")
            .await
            .unwrap();

        assert_eq!(out.session_id, "opaque-session-42");
        assert_eq!(log.records()[0].session_id, "opaque-session-42");
    }
}
