//! Shared stubs for the crate's unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use chat_log::{ChatLogRecord, ChatLogStore, LogError};
use chunk_store::{RetrievedChunk, StoreError};
use llm_service::{GenerateContentResponse, GenerationConfig, GenerativeModel};

/// Deterministic model stub: pops one canned reply per call and keeps
/// repeating the last one once the script is exhausted. Records every
/// prompt and counts invocations.
pub(crate) struct ScriptedModel {
    script: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub(crate) fn new<const N: usize>(script: [&str; N]) -> Self {
        Self::from_script(script.to_vec())
    }

    pub(crate) fn from_script(script: Vec<&str>) -> Self {
        Self {
            script: Mutex::new(script.iter().map(|s| s.to_string()).collect()),
            last: Mutex::new(String::new()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_content(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
    ) -> llm_service::Result<GenerateContentResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }
        Ok(GenerateContentResponse::from_text(&last))
    }
}

/// Retriever stub: returns a fixed chunk list and counts invocations.
pub(crate) struct StubRetriever {
    chunks: Vec<RetrievedChunk>,
    calls: AtomicUsize,
}

impl StubRetriever {
    pub(crate) fn new(chunks: Vec<RetrievedChunk>) -> Self {
        Self {
            chunks,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl crate::retrieve::ChunkRetriever for StubRetriever {
    async fn retrieve(
        &self,
        _query: &str,
        _top_k: u64,
    ) -> Result<Vec<RetrievedChunk>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.chunks.clone())
    }
}

/// In-memory log store capturing appended records.
#[derive(Default)]
pub(crate) struct MemoryLog {
    records: Mutex<Vec<ChatLogRecord>>,
}

impl MemoryLog {
    pub(crate) fn records(&self) -> Vec<ChatLogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatLogStore for MemoryLog {
    async fn append(&self, record: &ChatLogRecord) -> Result<(), LogError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Convenience chunk constructor for tests.
pub(crate) fn chunk(doc_path: &str, chunk_id: u32, text: &str, distance: f32) -> RetrievedChunk {
    RetrievedChunk {
        doc_path: doc_path.into(),
        chunk_id,
        chunk_text: text.into(),
        distance,
    }
}
