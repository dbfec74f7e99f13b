//! Reference documents and the instruction each grounding produces.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DocumentId;

/// Fixed reply when a grounded question falls outside the document.
pub const REFUSAL_PHRASE: &str = "I can only answer questions about the selected document.";

const GENERAL_INSTRUCTION: &str = "You are a friendly and helpful assistant for the Homa Bay \
County citizen portal. Help residents understand county projects, how to submit project ideas, \
how voting and commenting work, how to report on project progress, and how the budget \
simulator works. Keep answers short, clear and respectful.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyDocument {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub content: String,
}

/// What the assistant answers from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Grounding {
    /// General county assistant.
    #[default]
    Ungrounded,
    /// Answers only from this document.
    Grounded(CountyDocument),
}

impl Grounding {
    pub fn document_id(&self) -> Option<&DocumentId> {
        match self {
            Grounding::Ungrounded => None,
            Grounding::Grounded(doc) => Some(&doc.id),
        }
    }

    /// Same grounding target. Documents compare by id.
    pub fn is_same(&self, other: &Grounding) -> bool {
        self.document_id() == other.document_id()
    }

    pub fn system_instruction(&self) -> String {
        match self {
            Grounding::Ungrounded => GENERAL_INSTRUCTION.to_string(),
            Grounding::Grounded(doc) => format!(
                "You are an assistant that answers questions strictly using the document below, \
                 titled \"{title}\". Do not use any outside knowledge. If the answer is not \
                 contained in the document, reply exactly: \"{refusal}\"\n\n\
                 --- DOCUMENT START ---\n{content}\n--- DOCUMENT END ---",
                title = doc.title,
                refusal = REFUSAL_PHRASE,
                content = doc.content,
            ),
        }
    }
}
