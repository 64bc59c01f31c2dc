//! Load tickets for document lifecycle callbacks.
//!
//! The render surface parses documents asynchronously. If the user switches
//! documents before a parse finishes, the completion for the old document
//! must not touch the freshly reset state. Each `open_document` call stamps a
//! ticket with the engine's current generation; completions presenting a
//! ticket from an earlier generation are discarded.

/// Identity of one document-load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    document_id: String,
    generation: u64,
}

impl LoadTicket {
    pub(crate) fn new(document_id: impl Into<String>, generation: u64) -> Self {
        Self {
            document_id: document_id.into(),
            generation,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
