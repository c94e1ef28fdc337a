//! Chat session use case
//!
//! Owns the conversation for one interactive session and turns each raw
//! input line into an event: farewell, history reset, or an answered turn.

use crate::ports::llm_client::{EvaluatorClient, GeneratorClient};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::run_turn::RunTurnUseCase;
use duo_domain::{ChatCommand, Conversation, DomainError, Turn, TurnOutcome};
use tracing::info;

/// Lifecycle of a chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next line
    AwaitingInput,
    /// Exit requested; no more lines are accepted
    Terminated,
}

/// What handling one line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Exit command; the session is now terminated
    Farewell,
    /// Reset command; `removed` turns were dropped
    Cleared { removed: usize },
    /// A message went through the pipeline
    Answered(TurnOutcome),
}

/// One interactive conversation
pub struct ChatSession<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> {
    use_case: RunTurnUseCase<G, E>,
    conversation: Conversation,
    state: SessionState,
}

impl<G: GeneratorClient + 'static, E: EvaluatorClient + 'static> ChatSession<G, E> {
    pub fn new(use_case: RunTurnUseCase<G, E>) -> Self {
        Self {
            use_case,
            conversation: Conversation::new(),
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Current history, oldest first
    pub fn history(&self) -> &[Turn] {
        self.conversation.snapshot()
    }

    pub fn use_case(&self) -> &RunTurnUseCase<G, E> {
        &self.use_case
    }

    /// Handle one line with default (no-op) progress
    pub async fn handle_line(&mut self, line: &str) -> Result<SessionEvent, DomainError> {
        self.handle_line_with_progress(line, &NoProgress).await
    }

    /// Handle one line of user input
    ///
    /// Returns [`DomainError::SessionTerminated`] once an exit command has
    /// been seen.
    pub async fn handle_line_with_progress(
        &mut self,
        line: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<SessionEvent, DomainError> {
        if self.is_terminated() {
            return Err(DomainError::SessionTerminated);
        }

        let event = match ChatCommand::parse(line) {
            ChatCommand::Exit => {
                info!("Exit requested");
                self.state = SessionState::Terminated;
                SessionEvent::Farewell
            }
            ChatCommand::Clear => {
                let removed = self.conversation.len();
                self.conversation.clear();
                info!("Conversation cleared ({} turns removed)", removed);
                SessionEvent::Cleared { removed }
            }
            ChatCommand::Message(input) => {
                let outcome = self
                    .use_case
                    .execute_with_progress(&mut self.conversation, &input, progress)
                    .await;
                SessionEvent::Answered(outcome)
            }
        };

        Ok(event)
    }
}
