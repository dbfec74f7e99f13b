//! Assistant conversation state.
//!
//! The session is either ungrounded or grounded on one document. Moving to
//! a different grounding clears the transcript and drops the underlying
//! conversation so the next message starts fresh under the new
//! instruction. Each grounding change bumps a generation counter; replies
//! issued under an older generation are discarded when they arrive.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{ChatMessage, Grounding};

/// Model message appended when the collaborator could not answer.
pub const CONNECTION_FAILURE_REPLY: &str =
    "Sorry, I'm having trouble connecting. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("a reply is already in progress")]
    Busy,

    #[error("message is empty")]
    EmptyMessage,
}

impl From<AssistantError> for DomainError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::Busy => DomainError::new(ErrorCode::AssistantBusy, err.to_string()),
            AssistantError::EmptyMessage => DomainError::validation("text", err.to_string()),
        }
    }
}

/// Established conversation with the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHandle {
    pub generation: u64,
    pub instruction: String,
}

/// Everything needed to ask the collaborator for one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub generation: u64,
    pub instruction: String,
    /// Transcript before the new message.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Applied(ChatMessage),
    /// Grounding changed while the reply was in flight.
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct AssistantSession {
    grounding: Grounding,
    generation: u64,
    history: Vec<ChatMessage>,
    handle: Option<ConversationHandle>,
    in_flight: bool,
}

impl AssistantSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ungrounded session resuming a stored transcript.
    pub fn with_history(history: Vec<ChatMessage>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn grounding(&self) -> &Grounding {
        &self.grounding
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn handle(&self) -> Option<&ConversationHandle> {
        self.handle.as_ref()
    }

    /// Switches grounding. Returns false when the target is already active.
    pub fn set_grounding(&mut self, grounding: Grounding) -> bool {
        if self.grounding.is_same(&grounding) {
            return false;
        }
        self.grounding = grounding;
        self.generation += 1;
        self.history.clear();
        self.handle = None;
        self.in_flight = false;
        true
    }

    /// Records the user message and marks a reply as in flight.
    pub fn begin_turn(&mut self, text: &str) -> Result<PendingTurn, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if self.in_flight {
            return Err(AssistantError::Busy);
        }

        let generation = self.generation;
        let instruction = match &self.handle {
            Some(handle) => handle.instruction.clone(),
            None => {
                let instruction = self.grounding.system_instruction();
                self.handle = Some(ConversationHandle {
                    generation,
                    instruction: instruction.clone(),
                });
                instruction
            }
        };

        let history = self.history.clone();
        self.history.push(ChatMessage::user(text));
        self.in_flight = true;

        Ok(PendingTurn {
            generation,
            instruction,
            history,
            message: text.to_string(),
        })
    }

    /// Applies a reply. `None` stands for a failed call.
    pub fn complete_turn(&mut self, turn: &PendingTurn, reply: Option<String>) -> TurnOutcome {
        if turn.generation != self.generation {
            return TurnOutcome::Discarded;
        }
        let message = ChatMessage::model(reply.unwrap_or_else(|| CONNECTION_FAILURE_REPLY.to_string()));
        self.history.push(message.clone());
        self.in_flight = false;
        TurnOutcome::Applied(message)
    }
}
