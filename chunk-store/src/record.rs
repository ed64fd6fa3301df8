//! Retrieved-chunk data model.

use serde::{Deserialize, Serialize};

/// One passage returned by the similarity search, in store-ranked order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// Text identifier of the source document.
    pub doc_path: String,
    /// Chunk index, unique within a document.
    pub chunk_id: u32,
    /// The passage text itself.
    pub chunk_text: String,
    /// Score reported by the store for this hit, passed through verbatim.
    pub distance: f32,
}

impl RetrievedChunk {
    /// Citation marker for this chunk, e.g. `[plowing/faq-04.txt#2]`.
    pub fn citation(&self) -> String {
        format!("[{}#{}]", self.doc_path, self.chunk_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_marker_format() {
        let chunk = RetrievedChunk {
            doc_path: "alaska-dept-of-snow/faq-04.txt".into(),
            chunk_id: 0,
            chunk_text: "Plowing starts at 4am.".into(),
            distance: 0.12,
        };
        assert_eq!(chunk.citation(), "[alaska-dept-of-snow/faq-04.txt#0]");
    }
}
